//! # Markdown Projection
//!
//! Pure projections from a document plus the content library into export
//! markdown. Each document kind has a `render_*` entry point that stamps
//! today's date into the footer, and a `render_*_with_date` variant taking
//! the date explicitly so output is fully deterministic under test.
//!
//! Dangling block references are dropped silently: a document may reference
//! ids deleted from the library, and those entries are simply absent from
//! the output.

mod case_study;
mod job_ad;
mod profile;

pub use case_study::{render_case_study, render_case_study_with_date};
pub use job_ad::{render_job_ad, render_job_ad_with_date};
pub use profile::{render_profile, render_profile_with_date};

use chrono::NaiveDate;

use crate::model::ContentBlock;

/// Resolve block ids against the library, keeping id-list order and
/// skipping ids that no longer resolve.
fn resolve<'a>(blocks: &'a [ContentBlock], ids: &[String]) -> Vec<&'a ContentBlock> {
    ids.iter()
        .filter_map(|id| blocks.iter().find(|b| b.id == *id))
        .collect()
}

fn footer(out: &mut String, date: NaiveDate) {
    out.push_str("---\n\n");
    out.push_str(&format!(
        "*Generated with Hirecraft on {}*\n",
        date.format("%Y-%m-%d")
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    #[test]
    fn resolve_keeps_id_order_and_drops_dangling() {
        let blocks = vec![
            ContentBlock::new(BlockKind::Skill, "A", "", "c"),
            ContentBlock::new(BlockKind::Skill, "B", "", "c"),
        ];
        let ids = vec![
            blocks[1].id.clone(),
            "block-deleted".to_string(),
            blocks[0].id.clone(),
        ];
        let resolved = resolve(&blocks, &ids);
        let titles: Vec<&str> = resolved.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
