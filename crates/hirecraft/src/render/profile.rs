use chrono::{NaiveDate, Utc};

use super::{footer, resolve};
use crate::model::{CandidateProfile, ContentBlock};

/// Render a candidate profile, stamped with today's date.
pub fn render_profile(profile: &CandidateProfile, blocks: &[ContentBlock]) -> String {
    render_profile_with_date(profile, blocks, Utc::now().date_naive())
}

/// The required section concatenates skills, experience, and AI-tool
/// requirements, in that order. Each section falls back to a placeholder
/// line when nothing resolves; the notes section is omitted entirely when
/// empty.
pub fn render_profile_with_date(
    profile: &CandidateProfile,
    blocks: &[ContentBlock],
    date: NaiveDate,
) -> String {
    let mut required_ids = profile.required_skill_ids.clone();
    required_ids.extend(profile.required_experience_ids.iter().cloned());
    required_ids.extend(profile.ai_tool_requirement_ids.iter().cloned());

    let mut out = format!("# {}\n\n", profile.name);
    out.push_str(&format!(
        "**Seniority Level:** {}\n",
        profile.seniority_level.label()
    ));
    out.push_str(&format!("**Domain:** {}\n", profile.domain));
    if let Some(archetype_id) = &profile.archetype_id {
        out.push_str(&format!("**Based on Archetype:** {archetype_id}\n"));
    }
    out.push('\n');

    bullet_section(
        &mut out,
        "Required Skills & Requirements",
        &resolve(blocks, &required_ids),
        "*No required skills defined*",
    );
    bullet_section(
        &mut out,
        "Preferred Skills",
        &resolve(blocks, &profile.preferred_skill_ids),
        "*No preferred skills defined*",
    );
    bullet_section(
        &mut out,
        "Red Flags",
        &resolve(blocks, &profile.red_flag_ids),
        "*No red flags defined*",
    );

    if !profile.notes.is_empty() {
        out.push_str(&format!("## Additional Notes\n\n{}\n\n", profile.notes));
    }

    footer(&mut out, date);
    out
}

fn bullet_section(out: &mut String, title: &str, blocks: &[&ContentBlock], empty: &str) {
    out.push_str(&format!("## {title}\n\n"));
    if blocks.is_empty() {
        out.push_str(empty);
        out.push('\n');
    } else {
        let bullets: Vec<String> = blocks
            .iter()
            .map(|b| format!("- **{}**: {}", b.title, b.content))
            .collect();
        out.push_str(&bullets.join("\n\n"));
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, SeniorityLevel};

    fn fixture() -> (CandidateProfile, Vec<ContentBlock>) {
        let blocks = vec![
            ContentBlock::new(
                BlockKind::Skill,
                "Roadmapping",
                "Owns quarterly planning.",
                "technical",
            ),
            ContentBlock::new(
                BlockKind::Experience,
                "B2B SaaS",
                "Two years shipping B2B products.",
                "experience",
            ),
            ContentBlock::new(
                BlockKind::AiTool,
                "LLM Prototyping",
                "Builds throwaway prototypes with LLM APIs.",
                "ai-fluency",
            ),
            ContentBlock::new(
                BlockKind::RedFlag,
                "Feature Factory",
                "Ships output without outcome thinking.",
                "evaluation",
            ),
        ];
        let mut profile = CandidateProfile::new("Senior PM", SeniorityLevel::Senior, "platform");
        profile.required_skill_ids = vec![blocks[0].id.clone()];
        profile.required_experience_ids = vec![blocks[1].id.clone()];
        profile.ai_tool_requirement_ids = vec![blocks[2].id.clone()];
        profile.red_flag_ids = vec![blocks[3].id.clone()];
        (profile, blocks)
    }

    #[test]
    fn renders_required_section_in_concatenation_order() {
        let (profile, blocks) = fixture();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let md = render_profile_with_date(&profile, &blocks, date);

        assert!(md.starts_with("# Senior PM\n"));
        assert!(md.contains("**Seniority Level:** Senior\n"));

        let roadmap = md.find("- **Roadmapping**").unwrap();
        let saas = md.find("- **B2B SaaS**").unwrap();
        let llm = md.find("- **LLM Prototyping**").unwrap();
        assert!(roadmap < saas && saas < llm);

        assert!(md.contains("*No preferred skills defined*"));
        assert!(md.contains("- **Feature Factory**: Ships output"));
        assert!(md.ends_with("*Generated with Hirecraft on 2025-03-01*\n"));
    }

    #[test]
    fn dangling_reference_is_simply_absent() {
        let (mut profile, blocks) = fixture();
        profile.required_skill_ids.push("block-deleted".into());
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let md = render_profile_with_date(&profile, &blocks, date);
        assert!(!md.contains("block-deleted"));
        assert!(md.contains("- **Roadmapping**"));
    }

    #[test]
    fn notes_section_only_when_non_empty() {
        let (mut profile, blocks) = fixture();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let without = render_profile_with_date(&profile, &blocks, date);
        assert!(!without.contains("Additional Notes"));

        profile.notes = "Prefers async communication.".into();
        let with = render_profile_with_date(&profile, &blocks, date);
        assert!(with.contains("## Additional Notes\n\nPrefers async communication.\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (profile, blocks) = fixture();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            render_profile_with_date(&profile, &blocks, date),
            render_profile_with_date(&profile, &blocks, date)
        );
    }

    #[test]
    fn archetype_line_appears_when_set() {
        let (mut profile, blocks) = fixture();
        profile.archetype_id = Some("archetype-mid-pm".into());
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let md = render_profile_with_date(&profile, &blocks, date);
        assert!(md.contains("**Based on Archetype:** archetype-mid-pm\n"));
    }
}
