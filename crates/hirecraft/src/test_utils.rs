//! Shared helpers for tests (and downstream crates enabling the
//! `test_utils` feature): seeded workspaces with tabs and documents already
//! in place, so individual tests only dispatch the actions they care about.

use crate::action::Action;
use crate::engine::transition;
use crate::model::{CandidateProfile, CaseStudy, JobAd, SeniorityLevel};
use crate::seed;
use crate::state::{AppState, ModuleKind};

/// Seed state plus one empty, active tab of the given kind. Returns the
/// state and the tab id.
pub fn workspace_with_tab(kind: ModuleKind, name: &str) -> (AppState, String) {
    let state = transition(
        &seed::seed_state(),
        Action::AddTab {
            module_kind: kind,
            name: name.to_string(),
        },
    );
    let tab_id = state.tabs.last().map(|t| t.id.clone()).unwrap_or_default();
    (state, tab_id)
}

/// A profiles tab containing one selected profile. Returns state, tab id,
/// and profile id.
pub fn workspace_with_profile(name: &str) -> (AppState, String, String) {
    let (state, tab_id) = workspace_with_tab(ModuleKind::Profiles, "Profiles");
    let profile = CandidateProfile::new(name, SeniorityLevel::Mid, "platform");
    let profile_id = profile.id.clone();
    let state = transition(
        &state,
        Action::AddProfile {
            tab_id: tab_id.clone(),
            profile,
        },
    );
    (state, tab_id, profile_id)
}

/// A job-ads tab containing one selected job ad. Returns state, tab id, and
/// job-ad id.
pub fn workspace_with_job_ad(title: &str) -> (AppState, String, String) {
    let (state, tab_id) = workspace_with_tab(ModuleKind::JobAds, "Job Ads");
    let job_ad = JobAd::new(title);
    let ad_id = job_ad.id.clone();
    let state = transition(
        &state,
        Action::AddJobAd {
            tab_id: tab_id.clone(),
            job_ad,
        },
    );
    (state, tab_id, ad_id)
}

/// A case-studies tab containing one selected case study. Returns state,
/// tab id, and case-study id.
pub fn workspace_with_case_study(title: &str) -> (AppState, String, String) {
    let (state, tab_id) = workspace_with_tab(ModuleKind::CaseStudies, "Case Studies");
    let case_study = CaseStudy::new(title, SeniorityLevel::Senior, "platform");
    let case_id = case_study.id.clone();
    let state = transition(
        &state,
        Action::AddCaseStudy {
            tab_id: tab_id.clone(),
            case_study,
        },
    );
    (state, tab_id, case_id)
}
