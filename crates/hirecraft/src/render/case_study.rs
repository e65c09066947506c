use chrono::{NaiveDate, Utc};

use super::{footer, resolve};
use crate::model::{CaseStudy, ContentBlock};

/// Render a case study, stamped with today's date.
pub fn render_case_study(case: &CaseStudy, blocks: &[ContentBlock]) -> String {
    render_case_study_with_date(case, blocks, Utc::now().date_naive())
}

/// Fixed section order: metadata, scenario, deliverables, questions,
/// evaluation criteria. Library questions number first in id-list order;
/// custom questions follow sorted by position and continue the numbering.
/// Blank entries (constraints, deliverables, custom question text, custom
/// criteria names and their sub-lists) are skipped in the output but stay
/// in the document. Blank custom questions are filtered before numbering,
/// so the sequence never has gaps.
pub fn render_case_study_with_date(
    case: &CaseStudy,
    blocks: &[ContentBlock],
    date: NaiveDate,
) -> String {
    let mut out = format!("# {}\n\n", case.title);
    out.push_str(&format!(
        "**Seniority Level:** {}  \n",
        case.seniority_level.as_str()
    ));
    out.push_str(&format!("**Domain:** {}  \n", case.domain));
    out.push_str(&format!("**Duration:** {} minutes\n\n", case.duration));
    out.push_str("---\n\n");

    out.push_str("## Scenario\n\n");
    if !case.scenario.context.is_empty() {
        out.push_str(&format!("### Context\n\n{}\n\n", case.scenario.context));
    }
    if !case.scenario.challenge.is_empty() {
        out.push_str(&format!("### Challenge\n\n{}\n\n", case.scenario.challenge));
    }
    if !case.scenario.constraints.is_empty() {
        out.push_str("### Constraints\n\n");
        bullets(&mut out, &case.scenario.constraints);
    }

    if !case.deliverables.is_empty() {
        out.push_str("## Expected Deliverables\n\n");
        bullets(&mut out, &case.deliverables);
    }

    let library_questions = resolve(blocks, &case.question_ids);
    let mut custom_questions: Vec<_> = case
        .custom_questions
        .iter()
        .filter(|q| !q.text.trim().is_empty())
        .collect();
    custom_questions.sort_by_key(|q| q.position);

    if !library_questions.is_empty() || !custom_questions.is_empty() {
        out.push_str("## Interview Questions\n\n");
        let mut number = 0;
        for block in &library_questions {
            number += 1;
            out.push_str(&format!(
                "{number}. **{}**\n\n   {}\n\n",
                block.title, block.content
            ));
        }
        for question in &custom_questions {
            number += 1;
            out.push_str(&format!(
                "{number}. {} *({})*\n\n",
                question.text,
                question.kind.as_str()
            ));
        }
    }

    let library_criteria = resolve(blocks, &case.evaluation_criteria_ids);
    let mut custom_criteria: Vec<_> = case
        .custom_criteria
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .collect();
    custom_criteria.sort_by_key(|c| c.position);

    if !library_criteria.is_empty() || !custom_criteria.is_empty() {
        out.push_str("## Evaluation Criteria\n\n");
        for block in &library_criteria {
            out.push_str(&format!("### {}\n\n{}\n\n", block.title, block.content));
        }
        for criteria in &custom_criteria {
            out.push_str(&format!("### {}\n\n", criteria.name));
            if !criteria.description.is_empty() {
                out.push_str(&format!("{}\n\n", criteria.description));
            }
            if !criteria.looking_for.is_empty() {
                out.push_str("**Looking For:**\n\n");
                bullets(&mut out, &criteria.looking_for);
            }
            if !criteria.red_flags.is_empty() {
                out.push_str("**Red Flags:**\n\n");
                bullets(&mut out, &criteria.red_flags);
            }
        }
    }

    footer(&mut out, date);
    out
}

fn bullets(out: &mut String, entries: &[String]) {
    for entry in entries {
        if !entry.trim().is_empty() {
            out.push_str(&format!("- {entry}\n"));
        }
    }
    out.push('\n');
}
