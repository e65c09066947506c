//! # State Transition Engine
//!
//! [`transition`] is the single authority over state change: it takes the
//! current snapshot and an [`Action`] and returns the next snapshot. The
//! input is never mutated, no variant can panic, and actions addressed at a
//! missing tab, document, or section are identity transitions.
//!
//! Document-scoped actions apply only when the addressed tab exists, its
//! declared `module_kind` matches the action's document family, and its
//! state variant agrees. The three conditions always hold together for
//! states built through this engine, but snapshots arrive from disk too, so
//! each handler checks rather than assumes.
//!
//! Every mutation of a document refreshes its `updated_at`. Actions that
//! turn out to change nothing (removing an id that isn't in a list, adding
//! a skill the profile already has) leave the timestamp alone as well.

use chrono::Utc;

use crate::action::Action;
use crate::model::{CandidateProfile, CaseStudy, JobAd};
use crate::state::{AppState, ModuleKind, ModuleState, Tab};

/// Compute the next snapshot. Total over [`Action`]; never fails.
pub fn transition(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::AddTab { module_kind, name } => {
            let tab = Tab::new(module_kind, name);
            next.active_tab_id = Some(tab.id.clone());
            next.tabs.push(tab);
        }
        Action::RemoveTab { tab_id } => {
            let was_active = next.active_tab_id.as_deref() == Some(tab_id.as_str());
            next.tabs.retain(|t| t.id != tab_id);
            if was_active {
                next.active_tab_id = next.tabs.first().map(|t| t.id.clone());
            }
        }
        Action::RenameTab { tab_id, name } => {
            if let Some(tab) = next.tabs.iter_mut().find(|t| t.id == tab_id) {
                tab.name = name;
            }
        }
        Action::CloneTab { tab_id } => {
            if let Some(mut copy) = next.tabs.iter().find(|t| t.id == tab_id).cloned() {
                copy.id = format!("tab-{}", uuid::Uuid::new_v4());
                copy.name = format!("{} (Copy)", copy.name);
                copy.created_at = Utc::now();
                next.active_tab_id = Some(copy.id.clone());
                next.tabs.push(copy);
            }
        }
        Action::SetActiveTab { tab_id } => {
            next.active_tab_id = tab_id;
        }
        Action::SetActiveModule { module } => {
            next.active_module = module;
        }

        Action::AddContentBlock { block } => {
            next.content_blocks.push(block);
        }
        Action::UpdateContentBlock { id, patch } => {
            if let Some(block) = next.content_blocks.iter_mut().find(|b| b.id == id) {
                patch.apply(block);
            }
        }
        Action::DeleteContentBlock { id } => {
            next.content_blocks.retain(|b| b.id != id);
        }

        Action::AddProfile { tab_id, profile } => {
            with_profiles(&mut next, &tab_id, |profiles, selected| {
                *selected = Some(profile.id.clone());
                profiles.push(profile);
            });
        }
        Action::UpdateProfile { tab_id, id, patch } => {
            with_profiles(&mut next, &tab_id, |profiles, _| {
                if let Some(profile) = profiles.iter_mut().find(|p| p.id == id) {
                    patch.apply(profile);
                    profile.updated_at = Utc::now();
                }
            });
        }
        Action::DeleteProfile { tab_id, id } => {
            with_profiles(&mut next, &tab_id, |profiles, selected| {
                profiles.retain(|p| p.id != id);
                if selected.as_deref() == Some(id.as_str()) {
                    *selected = None;
                }
            });
        }
        Action::SelectProfile { tab_id, id } => {
            with_profiles(&mut next, &tab_id, |_, selected| {
                *selected = id;
            });
        }
        Action::AddSkillToProfile {
            tab_id,
            profile_id,
            block_id,
            required,
        } => {
            with_profiles(&mut next, &tab_id, |profiles, _| {
                if let Some(profile) = profiles.iter_mut().find(|p| p.id == profile_id) {
                    let list = skill_list(profile, required);
                    if !list.iter().any(|id| *id == block_id) {
                        list.push(block_id);
                        profile.updated_at = Utc::now();
                    }
                }
            });
        }
        Action::RemoveSkillFromProfile {
            tab_id,
            profile_id,
            block_id,
            required,
        } => {
            with_profiles(&mut next, &tab_id, |profiles, _| {
                if let Some(profile) = profiles.iter_mut().find(|p| p.id == profile_id) {
                    let list = skill_list(profile, required);
                    let before = list.len();
                    list.retain(|id| *id != block_id);
                    if list.len() != before {
                        profile.updated_at = Utc::now();
                    }
                }
            });
        }

        Action::AddJobAd { tab_id, job_ad } => {
            with_job_ads(&mut next, &tab_id, |ads, selected| {
                *selected = Some(job_ad.id.clone());
                ads.push(job_ad);
            });
        }
        Action::UpdateJobAd { tab_id, id, patch } => {
            with_job_ads(&mut next, &tab_id, |ads, _| {
                if let Some(ad) = ads.iter_mut().find(|a| a.id == id) {
                    patch.apply(ad);
                    ad.updated_at = Utc::now();
                }
            });
        }
        Action::DeleteJobAd { tab_id, id } => {
            with_job_ads(&mut next, &tab_id, |ads, selected| {
                ads.retain(|a| a.id != id);
                if selected.as_deref() == Some(id.as_str()) {
                    *selected = None;
                }
            });
        }
        Action::SelectJobAd { tab_id, id } => {
            with_job_ads(&mut next, &tab_id, |_, selected| {
                *selected = id;
            });
        }
        Action::AddSection {
            tab_id,
            job_ad_id,
            mut section,
        } => {
            with_job_ads(&mut next, &tab_id, |ads, _| {
                if let Some(ad) = ads.iter_mut().find(|a| a.id == job_ad_id) {
                    section.position = ad.sections.len() as u32;
                    ad.sections.push(section);
                    ad.updated_at = Utc::now();
                }
            });
        }
        Action::UpdateSection {
            tab_id,
            job_ad_id,
            section_id,
            patch,
        } => {
            with_job_ads(&mut next, &tab_id, |ads, _| {
                if let Some(ad) = ads.iter_mut().find(|a| a.id == job_ad_id) {
                    if let Some(section) =
                        ad.sections.iter_mut().find(|s| s.id == section_id)
                    {
                        patch.apply(section);
                        ad.updated_at = Utc::now();
                    }
                }
            });
        }
        Action::RemoveSection {
            tab_id,
            job_ad_id,
            section_id,
        } => {
            with_job_ads(&mut next, &tab_id, |ads, _| {
                if let Some(ad) = ads.iter_mut().find(|a| a.id == job_ad_id) {
                    let before = ad.sections.len();
                    // Remaining positions keep their values; gaps are fine
                    // until the next reorder renumbers everything.
                    ad.sections.retain(|s| s.id != section_id);
                    if ad.sections.len() != before {
                        ad.updated_at = Utc::now();
                    }
                }
            });
        }
        Action::ReorderSection {
            tab_id,
            job_ad_id,
            section_id,
            new_position,
        } => {
            with_job_ads(&mut next, &tab_id, |ads, _| {
                if let Some(ad) = ads.iter_mut().find(|a| a.id == job_ad_id) {
                    reorder_section(ad, &section_id, new_position);
                }
            });
        }

        Action::AddCaseStudy { tab_id, case_study } => {
            with_case_studies(&mut next, &tab_id, |cases, selected| {
                *selected = Some(case_study.id.clone());
                cases.push(case_study);
            });
        }
        Action::UpdateCaseStudy { tab_id, id, patch } => {
            with_case_studies(&mut next, &tab_id, |cases, _| {
                if let Some(case) = cases.iter_mut().find(|c| c.id == id) {
                    patch.apply(case);
                    case.updated_at = Utc::now();
                }
            });
        }
        Action::DeleteCaseStudy { tab_id, id } => {
            with_case_studies(&mut next, &tab_id, |cases, selected| {
                cases.retain(|c| c.id != id);
                if selected.as_deref() == Some(id.as_str()) {
                    *selected = None;
                }
            });
        }
        Action::SelectCaseStudy { tab_id, id } => {
            with_case_studies(&mut next, &tab_id, |_, selected| {
                *selected = id;
            });
        }

        Action::ToggleDarkMode => {
            next.dark_mode = !next.dark_mode;
        }
        Action::TogglePreview => {
            next.preview_visible = !next.preview_visible;
        }
        Action::SetLibraryFilter { patch } => {
            patch.apply(&mut next.library_filter);
        }
        Action::ImportState { overlay } => {
            next = next.apply_overlay(overlay);
        }
        Action::Reset => {}
    }
    next
}

fn skill_list(profile: &mut CandidateProfile, required: bool) -> &mut Vec<String> {
    if required {
        &mut profile.required_skill_ids
    } else {
        &mut profile.preferred_skill_ids
    }
}

/// Sorts the sections by position (stable, so equal positions keep their
/// array order), moves the named section to `new_position` clamped into
/// bounds, and renumbers everything densely from 0.
fn reorder_section(ad: &mut JobAd, section_id: &str, new_position: usize) {
    if !ad.sections.iter().any(|s| s.id == section_id) {
        return;
    }
    let mut sections = std::mem::take(&mut ad.sections);
    sections.sort_by_key(|s| s.position);
    let from = sections
        .iter()
        .position(|s| s.id == section_id)
        .unwrap_or_default();
    let moved = sections.remove(from);
    let target = new_position.min(sections.len());
    sections.insert(target, moved);
    for (i, section) in sections.iter_mut().enumerate() {
        section.position = i as u32;
    }
    ad.sections = sections;
    ad.updated_at = Utc::now();
}

fn with_profiles<F>(state: &mut AppState, tab_id: &str, f: F)
where
    F: FnOnce(&mut Vec<CandidateProfile>, &mut Option<String>),
{
    if let Some(tab) = state.tabs.iter_mut().find(|t| t.id == tab_id) {
        if tab.module_kind != ModuleKind::Profiles {
            return;
        }
        if let ModuleState::Profiles {
            profiles,
            selected_profile_id,
        } = &mut tab.state
        {
            f(profiles, selected_profile_id);
        }
    }
}

fn with_job_ads<F>(state: &mut AppState, tab_id: &str, f: F)
where
    F: FnOnce(&mut Vec<JobAd>, &mut Option<String>),
{
    if let Some(tab) = state.tabs.iter_mut().find(|t| t.id == tab_id) {
        if tab.module_kind != ModuleKind::JobAds {
            return;
        }
        if let ModuleState::JobAds {
            job_ads,
            selected_job_ad_id,
        } = &mut tab.state
        {
            f(job_ads, selected_job_ad_id);
        }
    }
}

fn with_case_studies<F>(state: &mut AppState, tab_id: &str, f: F)
where
    F: FnOnce(&mut Vec<CaseStudy>, &mut Option<String>),
{
    if let Some(tab) = state.tabs.iter_mut().find(|t| t.id == tab_id) {
        if tab.module_kind != ModuleKind::CaseStudies {
            return;
        }
        if let ModuleState::CaseStudies {
            case_studies,
            selected_case_study_id,
        } = &mut tab.state
        {
            f(case_studies, selected_case_study_id);
        }
    }
}
