use chrono::{NaiveDate, Utc};

use super::{footer, resolve};
use crate::model::{ContentBlock, JobAd};

/// Render a job ad, stamped with today's date.
pub fn render_job_ad(ad: &JobAd, blocks: &[ContentBlock]) -> String {
    render_job_ad_with_date(ad, blocks, Utc::now().date_naive())
}

/// Sections render in ascending position. Within a section: custom markdown
/// first (custom sections only), then referenced blocks, then static text.
/// Responsibilities and requirements render their blocks as a flat bullet
/// list; every other kind gives each block a subheading.
pub fn render_job_ad_with_date(ad: &JobAd, blocks: &[ContentBlock], date: NaiveDate) -> String {
    let display_title = if ad.role_title.is_empty() {
        &ad.title
    } else {
        &ad.role_title
    };

    let mut out = format!("# {display_title}\n\n");

    out.push_str(&format!(
        "**Department:** {}  \n",
        non_empty_or(&ad.department, "N/A")
    ));
    out.push_str(&format!(
        "**Location:** {}  \n",
        non_empty_or(&ad.location, "N/A")
    ));
    out.push_str(&format!(
        "**Employment Type:** {}  \n",
        ad.employment_type.as_str()
    ));
    out.push_str(&format!(
        "**Seniority Level:** {}\n\n",
        ad.seniority_level.as_str()
    ));

    if let Some(salary) = ad.metadata.as_ref().and_then(|m| m.salary_range.as_deref()) {
        out.push_str(&format!("**Salary Range:** {salary}\n\n"));
    }

    out.push_str("---\n\n");

    let mut sections: Vec<_> = ad.sections.iter().collect();
    sections.sort_by_key(|s| s.position);

    for section in sections {
        out.push_str(&format!("## {}\n\n", section.title));

        if section.kind == crate::model::SectionKind::Custom {
            if let Some(markdown) = &section.custom_markdown {
                out.push_str(&format!("{markdown}\n\n"));
            }
        }

        let section_blocks = resolve(blocks, &section.content_block_ids);
        if !section_blocks.is_empty() {
            for block in &section_blocks {
                if section.kind.renders_as_bullets() {
                    out.push_str(&format!("- **{}**: {}\n", block.title, block.content));
                } else {
                    out.push_str(&format!("### {}\n\n{}\n\n", block.title, block.content));
                }
            }
            out.push('\n');
        }

        if let Some(content) = &section.content {
            out.push_str(&format!("{content}\n\n"));
        }
    }

    footer(&mut out, date);
    out
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
