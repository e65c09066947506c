//! End-to-end session: seed a workspace, author a job ad from library
//! blocks, render it, persist the snapshot, and pick the session back up
//! from disk.

use hirecraft::action::{Action, JobAdPatch, SectionPatch};
use hirecraft::engine::transition;
use hirecraft::model::{EmploymentType, JobAd, JobAdSection, SectionKind};
use hirecraft::render::render_job_ad_with_date;
use hirecraft::state::{ModuleKind, ModuleState};
use hirecraft::store::fs::FileStore;
use hirecraft::store::{load_or_seed, persist};

use chrono::NaiveDate;
use tempfile::tempdir;

#[test]
fn author_render_persist_resume() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("state.json"));

    // Fresh start from seed.
    let state = load_or_seed(&store);
    assert!(state.tabs.is_empty());

    let mut state = transition(
        &state,
        Action::AddTab {
            module_kind: ModuleKind::JobAds,
            name: "Q3 Openings".into(),
        },
    );
    let tab_id = state.tabs[0].id.clone();

    let job_ad = JobAd::new("Senior PM Opening");
    let ad_id = job_ad.id.clone();
    state = transition(
        &state,
        Action::AddJobAd {
            tab_id: tab_id.clone(),
            job_ad,
        },
    );

    state = transition(
        &state,
        Action::UpdateJobAd {
            tab_id: tab_id.clone(),
            id: ad_id.clone(),
            patch: JobAdPatch {
                role_title: Some("Senior Product Manager".into()),
                department: Some("Product".into()),
                location: Some("Oslo".into()),
                employment_type: Some(EmploymentType::FullTime),
                ..Default::default()
            },
        },
    );

    // Build a requirements section from seed library blocks.
    let section = JobAdSection::new(SectionKind::Requirements, "What We're Looking For");
    let section_id = section.id.clone();
    state = transition(
        &state,
        Action::AddSection {
            tab_id: tab_id.clone(),
            job_ad_id: ad_id.clone(),
            section,
        },
    );
    state = transition(
        &state,
        Action::UpdateSection {
            tab_id: tab_id.clone(),
            job_ad_id: ad_id.clone(),
            section_id,
            patch: SectionPatch {
                content_block_ids: Some(vec![
                    "req-6-8-years".into(),
                    "req-ai-tool-portfolio".into(),
                ]),
                ..Default::default()
            },
        },
    );

    persist(&mut store, &state);

    // Resume from disk: the stored snapshot must reproduce the session.
    let resumed = load_or_seed(&store);
    assert_eq!(resumed, state);

    let tab = resumed.tab(&tab_id).unwrap();
    assert_eq!(tab.module_kind, ModuleKind::JobAds);
    let ModuleState::JobAds { job_ads, .. } = &tab.state else {
        panic!("expected a job ads tab");
    };
    let ad = job_ads.iter().find(|a| a.id == ad_id).unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let md = render_job_ad_with_date(ad, &resumed.content_blocks, date);
    assert!(md.starts_with("# Senior Product Manager\n"));
    assert!(md.contains("**Location:** Oslo  \n"));
    assert!(md.contains("## What We're Looking For\n"));
    assert!(md.contains("- **6-8+ Years Experience**:"));
    assert!(md.contains("- **AI Tool Portfolio**:"));
    assert!(md.ends_with("*Generated with Hirecraft on 2025-06-01*\n"));
}
