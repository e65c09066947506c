//! # Workspace State
//!
//! The whole application is one value: [`AppState`]. It owns the content
//! library, the archetype catalog, and a tab-based workspace where each
//! [`Tab`] holds one collection of documents of a single module kind.
//!
//! A tab's [`ModuleState`] is a tagged variant over the three collection
//! shapes. The tab also records its `module_kind`; scoped mutations check
//! both the kind and the variant, so a tab can never be driven into holding
//! the wrong document shape.
//!
//! ## Selection pointers are unvalidated
//!
//! `active_tab_id` and the per-tab selection ids may reference tabs or
//! documents that no longer exist (or a tab whose module kind doesn't match
//! the active module). Views degrade to "no active document" via
//! [`AppState::active_tab`]; nothing validates pointers on write.
//!
//! ## Partial snapshots
//!
//! [`StateOverlay`] is the deserialization target for anything that might be
//! a partial snapshot: an imported file, or a stored state written by an
//! older build. [`AppState::apply_overlay`] merges it field-by-field over a
//! base state (normally the seed), so absent fields keep their base values
//! while present-but-empty collections are respected as stored.

use serde::{Deserialize, Serialize};

use crate::model::{
    BlockKind, CandidateArchetype, CandidateProfile, CaseStudy, ContentBlock, JobAd,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Which document shape a tab holds. Fixed at tab creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Profiles,
    JobAds,
    CaseStudies,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Profiles => "profiles",
            ModuleKind::JobAds => "jobads",
            ModuleKind::CaseStudies => "casestudies",
        }
    }
}

impl std::str::FromStr for ModuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profiles" => Ok(ModuleKind::Profiles),
            "jobads" => Ok(ModuleKind::JobAds),
            "casestudies" => Ok(ModuleKind::CaseStudies),
            other => Err(format!("unknown module kind: {other}")),
        }
    }
}

/// The module selector shown in the UI: the three document modules plus the
/// library browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveModule {
    Profiles,
    JobAds,
    CaseStudies,
    Library,
}

impl ActiveModule {
    /// The module kind this selector maps to, or `None` for the library.
    pub fn module_kind(&self) -> Option<ModuleKind> {
        match self {
            ActiveModule::Profiles => Some(ModuleKind::Profiles),
            ActiveModule::JobAds => Some(ModuleKind::JobAds),
            ActiveModule::CaseStudies => Some(ModuleKind::CaseStudies),
            ActiveModule::Library => None,
        }
    }
}

/// One collection of documents plus its selection pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleState {
    #[serde(rename_all = "camelCase")]
    Profiles {
        profiles: Vec<CandidateProfile>,
        selected_profile_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    JobAds {
        job_ads: Vec<JobAd>,
        selected_job_ad_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    CaseStudies {
        case_studies: Vec<CaseStudy>,
        selected_case_study_id: Option<String>,
    },
}

impl ModuleState {
    pub fn empty(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Profiles => ModuleState::Profiles {
                profiles: Vec::new(),
                selected_profile_id: None,
            },
            ModuleKind::JobAds => ModuleState::JobAds {
                job_ads: Vec::new(),
                selected_job_ad_id: None,
            },
            ModuleKind::CaseStudies => ModuleState::CaseStudies {
                case_studies: Vec::new(),
                selected_case_study_id: None,
            },
        }
    }

    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleState::Profiles { .. } => ModuleKind::Profiles,
            ModuleState::JobAds { .. } => ModuleKind::JobAds,
            ModuleState::CaseStudies { .. } => ModuleKind::CaseStudies,
        }
    }

    pub fn document_count(&self) -> usize {
        match self {
            ModuleState::Profiles { profiles, .. } => profiles.len(),
            ModuleState::JobAds { job_ads, .. } => job_ads.len(),
            ModuleState::CaseStudies { case_studies, .. } => case_studies.len(),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            ModuleState::Profiles {
                selected_profile_id,
                ..
            } => selected_profile_id.as_deref(),
            ModuleState::JobAds {
                selected_job_ad_id, ..
            } => selected_job_ad_id.as_deref(),
            ModuleState::CaseStudies {
                selected_case_study_id,
                ..
            } => selected_case_study_id.as_deref(),
        }
    }
}

/// A workspace slot. Tabs of the same module kind are independent copies of
/// their documents, not branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub name: String,
    #[serde(rename = "moduleType")]
    pub module_kind: ModuleKind,
    pub state: ModuleState,
    pub created_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(module_kind: ModuleKind, name: impl Into<String>) -> Self {
        Self {
            id: format!("tab-{}", Uuid::new_v4()),
            name: name.into(),
            module_kind,
            state: ModuleState::empty(module_kind),
            created_at: Utc::now(),
        }
    }
}

/// Criteria for browsing the content library. All fields optional; an empty
/// filter matches everything. Combination semantics live in [`crate::filter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryFilter {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BlockKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl LibraryFilter {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self
                .search_query
                .as_deref()
                .is_none_or(|q| q.trim().is_empty())
    }
}

/// The whole-application snapshot. Every transition produces a fresh value;
/// the previous snapshot is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub content_blocks: Vec<ContentBlock>,
    pub candidate_archetypes: Vec<CandidateArchetype>,
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<String>,
    pub active_module: ActiveModule,
    pub dark_mode: bool,
    #[serde(default)]
    pub library_filter: LibraryFilter,
    pub preview_visible: bool,
}

impl AppState {
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn content_block(&self, id: &str) -> Option<&ContentBlock> {
        self.content_blocks.iter().find(|b| b.id == id)
    }

    /// The tab the active pointer resolves to, if any. When a document module
    /// is active, the tab's kind must also match; a stale pointer left over
    /// from another module yields `None` rather than the wrong-shaped tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        let id = self.active_tab_id.as_deref()?;
        let tab = self.tab(id)?;
        match self.active_module.module_kind() {
            Some(kind) if tab.module_kind != kind => None,
            _ => Some(tab),
        }
    }

    /// Shallow field-by-field merge of a partial snapshot over `self`.
    /// Fields absent from the overlay keep their current values.
    pub fn apply_overlay(mut self, overlay: StateOverlay) -> AppState {
        if let Some(blocks) = overlay.content_blocks {
            self.content_blocks = blocks;
        }
        if let Some(archetypes) = overlay.candidate_archetypes {
            self.candidate_archetypes = archetypes;
        }
        if let Some(tabs) = overlay.tabs {
            self.tabs = tabs;
        }
        if let Some(active_tab_id) = overlay.active_tab_id {
            self.active_tab_id = active_tab_id;
        }
        if let Some(active_module) = overlay.active_module {
            self.active_module = active_module;
        }
        if let Some(dark_mode) = overlay.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(library_filter) = overlay.library_filter {
            self.library_filter = library_filter;
        }
        if let Some(preview_visible) = overlay.preview_visible {
            self.preview_visible = preview_visible;
        }
        self
    }
}

/// A partial [`AppState`]: every top-level field optional. Used for imports
/// and for loading snapshots written by older builds, where any field may be
/// missing. No validation is performed beyond shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateOverlay {
    #[serde(default)]
    pub content_blocks: Option<Vec<ContentBlock>>,
    #[serde(default)]
    pub candidate_archetypes: Option<Vec<CandidateArchetype>>,
    #[serde(default)]
    pub tabs: Option<Vec<Tab>>,
    // Doubly wrapped so an explicit `"activeTabId": null` clears the pointer
    // while an absent key leaves it alone.
    #[serde(default, with = "double_option")]
    pub active_tab_id: Option<Option<String>>,
    #[serde(default)]
    pub active_module: Option<ActiveModule>,
    #[serde(default)]
    pub dark_mode: Option<bool>,
    #[serde(default)]
    pub library_filter: Option<LibraryFilter>,
    #[serde(default)]
    pub preview_visible: Option<bool>,
}

mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn module_state_shapes_agree_with_kind() {
        for kind in [
            ModuleKind::Profiles,
            ModuleKind::JobAds,
            ModuleKind::CaseStudies,
        ] {
            let state = ModuleState::empty(kind);
            assert_eq!(state.kind(), kind);
            assert_eq!(state.document_count(), 0);
            assert_eq!(state.selected_id(), None);
        }
    }

    #[test]
    fn module_kind_wire_names_match_original() {
        assert_eq!(
            serde_json::to_value(ModuleKind::CaseStudies).unwrap(),
            "casestudies"
        );
        assert_eq!(serde_json::to_value(ModuleKind::JobAds).unwrap(), "jobads");
        assert_eq!(
            serde_json::to_value(ActiveModule::Library).unwrap(),
            "library"
        );
    }

    #[test]
    fn active_tab_requires_module_kind_match() {
        let mut state = seed::seed_state();
        let tab = Tab::new(ModuleKind::Profiles, "Profiles A");
        let tab_id = tab.id.clone();
        state.tabs.push(tab);
        state.active_tab_id = Some(tab_id.clone());

        // Library module: any tab resolves.
        state.active_module = ActiveModule::Library;
        assert!(state.active_tab().is_some());

        // Matching module resolves.
        state.active_module = ActiveModule::Profiles;
        assert_eq!(state.active_tab().unwrap().id, tab_id);

        // Stale pointer against a different module degrades to None.
        state.active_module = ActiveModule::JobAds;
        assert!(state.active_tab().is_none());

        // Dangling pointer degrades to None.
        state.active_module = ActiveModule::Profiles;
        state.active_tab_id = Some("tab-gone".into());
        assert!(state.active_tab().is_none());
    }

    #[test]
    fn overlay_absent_fields_keep_base_values() {
        let base = seed::seed_state();
        let seeded_blocks = base.content_blocks.len();
        assert!(seeded_blocks > 0);

        let overlay: StateOverlay = serde_json::from_str(r#"{ "darkMode": false }"#).unwrap();
        let merged = base.apply_overlay(overlay);

        assert!(!merged.dark_mode);
        assert_eq!(merged.content_blocks.len(), seeded_blocks);
        assert_eq!(merged.active_module, ActiveModule::Library);
    }

    #[test]
    fn overlay_present_but_empty_collections_are_respected() {
        let base = seed::seed_state();
        let overlay: StateOverlay = serde_json::from_str(r#"{ "tabs": [] }"#).unwrap();
        let merged = base.apply_overlay(overlay);
        assert!(merged.tabs.is_empty());
    }

    #[test]
    fn overlay_explicit_null_clears_active_tab() {
        let mut base = seed::seed_state();
        base.active_tab_id = Some("tab-1".into());

        let absent: StateOverlay = serde_json::from_str("{}").unwrap();
        let kept = base.clone().apply_overlay(absent);
        assert_eq!(kept.active_tab_id.as_deref(), Some("tab-1"));

        let null: StateOverlay = serde_json::from_str(r#"{ "activeTabId": null }"#).unwrap();
        let cleared = base.apply_overlay(null);
        assert_eq!(cleared.active_tab_id, None);
    }

    #[test]
    fn library_filter_empty_detection() {
        assert!(LibraryFilter::default().is_empty());
        assert!(LibraryFilter {
            search_query: Some("   ".into()),
            ..Default::default()
        }
        .is_empty());
        assert!(!LibraryFilter {
            kind: Some(BlockKind::Skill),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn full_state_roundtrips_through_json() {
        let mut state = seed::seed_state();
        state.tabs.push(Tab::new(ModuleKind::JobAds, "Ads"));
        state.active_tab_id = Some(state.tabs[0].id.clone());

        let json = serde_json::to_string(&state).unwrap();
        let overlay: StateOverlay = serde_json::from_str(&json).unwrap();
        let loaded = seed::seed_state().apply_overlay(overlay);
        assert_eq!(loaded, state);
    }
}
