//! # Actions and Patches
//!
//! Every mutation of [`AppState`](crate::state::AppState) is described by one
//! [`Action`] variant and applied by [`crate::engine::transition`]. The enum
//! is closed: adding an action kind is a compile-time change, and the engine
//! matches exhaustively.
//!
//! Partial updates travel as patch structs. A `Some` field replaces the
//! target's value; a `None` field leaves it alone. Patches cannot clear a
//! target's own optional fields back to `None` (callers that need that send a
//! full replacement via update-with-patch on the specific field). The one
//! exception is [`FilterPatch`], where clearing individual criteria is the
//! whole point, so its fields are doubly wrapped.

use crate::model::{
    BlockKind, BlockMetadata, CandidateProfile, CaseStudy, ContentBlock, CustomCriteria,
    CustomQuestion, CustomSection, DocStatus, EmploymentType, JobAd, JobAdMetadata,
    JobAdSection, Scenario, SectionKind, SeniorityLevel,
};
use crate::state::{ActiveModule, ModuleKind, StateOverlay};

/// The closed set of state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Tab lifecycle
    AddTab {
        module_kind: ModuleKind,
        name: String,
    },
    RemoveTab {
        tab_id: String,
    },
    RenameTab {
        tab_id: String,
        name: String,
    },
    CloneTab {
        tab_id: String,
    },
    /// Unvalidated: the id need not name an existing tab.
    SetActiveTab {
        tab_id: Option<String>,
    },
    SetActiveModule {
        module: ActiveModule,
    },

    // Content library
    AddContentBlock {
        block: ContentBlock,
    },
    UpdateContentBlock {
        id: String,
        patch: ContentBlockPatch,
    },
    /// Removes the block only. Documents keep their (now dangling)
    /// references; they drop out at render time.
    DeleteContentBlock {
        id: String,
    },

    // Candidate profiles
    AddProfile {
        tab_id: String,
        profile: CandidateProfile,
    },
    UpdateProfile {
        tab_id: String,
        id: String,
        patch: ProfilePatch,
    },
    DeleteProfile {
        tab_id: String,
        id: String,
    },
    SelectProfile {
        tab_id: String,
        id: Option<String>,
    },
    AddSkillToProfile {
        tab_id: String,
        profile_id: String,
        block_id: String,
        required: bool,
    },
    RemoveSkillFromProfile {
        tab_id: String,
        profile_id: String,
        block_id: String,
        required: bool,
    },

    // Job ads
    AddJobAd {
        tab_id: String,
        job_ad: JobAd,
    },
    UpdateJobAd {
        tab_id: String,
        id: String,
        patch: JobAdPatch,
    },
    DeleteJobAd {
        tab_id: String,
        id: String,
    },
    SelectJobAd {
        tab_id: String,
        id: Option<String>,
    },
    AddSection {
        tab_id: String,
        job_ad_id: String,
        section: JobAdSection,
    },
    UpdateSection {
        tab_id: String,
        job_ad_id: String,
        section_id: String,
        patch: SectionPatch,
    },
    RemoveSection {
        tab_id: String,
        job_ad_id: String,
        section_id: String,
    },
    ReorderSection {
        tab_id: String,
        job_ad_id: String,
        section_id: String,
        new_position: usize,
    },

    // Case studies
    AddCaseStudy {
        tab_id: String,
        case_study: CaseStudy,
    },
    UpdateCaseStudy {
        tab_id: String,
        id: String,
        patch: CaseStudyPatch,
    },
    DeleteCaseStudy {
        tab_id: String,
        id: String,
    },
    SelectCaseStudy {
        tab_id: String,
        id: Option<String>,
    },

    // UI state
    ToggleDarkMode,
    TogglePreview,
    SetLibraryFilter {
        patch: FilterPatch,
    },
    /// Shallow merge of a partial snapshot over the current state.
    ImportState {
        overlay: StateOverlay,
    },
    /// Identity at the engine level. Replacing the snapshot with the seed is
    /// the caller's job; the engine never conjures state out of thin air.
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBlockPatch {
    pub kind: Option<BlockKind>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<BlockMetadata>,
}

impl ContentBlockPatch {
    pub fn apply(&self, block: &mut ContentBlock) {
        if let Some(kind) = self.kind {
            block.kind = kind;
        }
        if let Some(title) = &self.title {
            block.title = title.clone();
        }
        if let Some(content) = &self.content {
            block.content = content.clone();
        }
        if let Some(category) = &self.category {
            block.category = category.clone();
        }
        if let Some(tags) = &self.tags {
            block.tags = tags.clone();
        }
        if let Some(metadata) = &self.metadata {
            block.metadata = Some(metadata.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub seniority_level: Option<SeniorityLevel>,
    pub domain: Option<String>,
    pub required_skill_ids: Option<Vec<String>>,
    pub preferred_skill_ids: Option<Vec<String>>,
    pub required_experience_ids: Option<Vec<String>>,
    pub ai_tool_requirement_ids: Option<Vec<String>>,
    pub responsibility_ids: Option<Vec<String>>,
    pub red_flag_ids: Option<Vec<String>>,
    pub custom_sections: Option<Vec<CustomSection>>,
    pub notes: Option<String>,
}

impl ProfilePatch {
    pub fn apply(&self, profile: &mut CandidateProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(level) = self.seniority_level {
            profile.seniority_level = level;
        }
        if let Some(domain) = &self.domain {
            profile.domain = domain.clone();
        }
        if let Some(ids) = &self.required_skill_ids {
            profile.required_skill_ids = ids.clone();
        }
        if let Some(ids) = &self.preferred_skill_ids {
            profile.preferred_skill_ids = ids.clone();
        }
        if let Some(ids) = &self.required_experience_ids {
            profile.required_experience_ids = ids.clone();
        }
        if let Some(ids) = &self.ai_tool_requirement_ids {
            profile.ai_tool_requirement_ids = ids.clone();
        }
        if let Some(ids) = &self.responsibility_ids {
            profile.responsibility_ids = ids.clone();
        }
        if let Some(ids) = &self.red_flag_ids {
            profile.red_flag_ids = ids.clone();
        }
        if let Some(sections) = &self.custom_sections {
            profile.custom_sections = sections.clone();
        }
        if let Some(notes) = &self.notes {
            profile.notes = notes.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobAdPatch {
    pub title: Option<String>,
    pub role_title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub seniority_level: Option<SeniorityLevel>,
    pub metadata: Option<JobAdMetadata>,
    pub candidate_profile_id: Option<Option<String>>,
    pub status: Option<DocStatus>,
}

impl JobAdPatch {
    pub fn apply(&self, ad: &mut JobAd) {
        if let Some(title) = &self.title {
            ad.title = title.clone();
        }
        if let Some(role_title) = &self.role_title {
            ad.role_title = role_title.clone();
        }
        if let Some(department) = &self.department {
            ad.department = department.clone();
        }
        if let Some(location) = &self.location {
            ad.location = location.clone();
        }
        if let Some(employment_type) = self.employment_type {
            ad.employment_type = employment_type;
        }
        if let Some(level) = self.seniority_level {
            ad.seniority_level = level;
        }
        if let Some(metadata) = &self.metadata {
            ad.metadata = Some(metadata.clone());
        }
        if let Some(profile_id) = &self.candidate_profile_id {
            ad.candidate_profile_id = profile_id.clone();
        }
        if let Some(status) = self.status {
            ad.status = Some(status);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPatch {
    pub kind: Option<SectionKind>,
    pub title: Option<String>,
    pub content_block_ids: Option<Vec<String>>,
    pub content: Option<String>,
    pub custom_markdown: Option<String>,
}

impl SectionPatch {
    pub fn apply(&self, section: &mut JobAdSection) {
        if let Some(kind) = self.kind {
            section.kind = kind;
        }
        if let Some(title) = &self.title {
            section.title = title.clone();
        }
        if let Some(ids) = &self.content_block_ids {
            section.content_block_ids = ids.clone();
        }
        if let Some(content) = &self.content {
            section.content = Some(content.clone());
        }
        if let Some(markdown) = &self.custom_markdown {
            section.custom_markdown = Some(markdown.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseStudyPatch {
    pub title: Option<String>,
    pub seniority_level: Option<SeniorityLevel>,
    pub domain: Option<String>,
    pub candidate_profile_id: Option<Option<String>>,
    pub scenario: Option<Scenario>,
    pub question_ids: Option<Vec<String>>,
    pub evaluation_criteria_ids: Option<Vec<String>>,
    pub custom_questions: Option<Vec<CustomQuestion>>,
    pub custom_criteria: Option<Vec<CustomCriteria>>,
    pub duration: Option<u32>,
    pub deliverables: Option<Vec<String>>,
    pub status: Option<DocStatus>,
}

impl CaseStudyPatch {
    pub fn apply(&self, case: &mut CaseStudy) {
        if let Some(title) = &self.title {
            case.title = title.clone();
        }
        if let Some(level) = self.seniority_level {
            case.seniority_level = level;
        }
        if let Some(domain) = &self.domain {
            case.domain = domain.clone();
        }
        if let Some(profile_id) = &self.candidate_profile_id {
            case.candidate_profile_id = profile_id.clone();
        }
        if let Some(scenario) = &self.scenario {
            case.scenario = scenario.clone();
        }
        if let Some(ids) = &self.question_ids {
            case.question_ids = ids.clone();
        }
        if let Some(ids) = &self.evaluation_criteria_ids {
            case.evaluation_criteria_ids = ids.clone();
        }
        if let Some(questions) = &self.custom_questions {
            case.custom_questions = questions.clone();
        }
        if let Some(criteria) = &self.custom_criteria {
            case.custom_criteria = criteria.clone();
        }
        if let Some(duration) = self.duration {
            case.duration = duration;
        }
        if let Some(deliverables) = &self.deliverables {
            case.deliverables = deliverables.clone();
        }
        if let Some(status) = self.status {
            case.status = status;
        }
    }
}

/// Partial update of the library filter. Outer `None` leaves a criterion
/// alone; `Some(None)` clears it; `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub kind: Option<Option<BlockKind>>,
    pub category: Option<Option<String>>,
    pub tags: Option<Option<Vec<String>>>,
    pub search_query: Option<Option<String>>,
}

impl FilterPatch {
    pub fn apply(&self, filter: &mut crate::state::LibraryFilter) {
        if let Some(kind) = &self.kind {
            filter.kind = *kind;
        }
        if let Some(category) = &self.category {
            filter.category = category.clone();
        }
        if let Some(tags) = &self.tags {
            filter.tags = tags.clone();
        }
        if let Some(query) = &self.search_query {
            filter.search_query = query.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LibraryFilter;

    #[test]
    fn patch_none_fields_leave_target_untouched() {
        let mut block = ContentBlock::new(BlockKind::Skill, "Roadmapping", "...", "technical");
        block.tags = vec!["planning".into()];
        let before = block.clone();

        ContentBlockPatch::default().apply(&mut block);
        assert_eq!(block, before);

        ContentBlockPatch {
            title: Some("Roadmap Ownership".into()),
            ..Default::default()
        }
        .apply(&mut block);
        assert_eq!(block.title, "Roadmap Ownership");
        assert_eq!(block.tags, before.tags);
        assert_eq!(block.category, before.category);
    }

    #[test]
    fn job_ad_patch_can_clear_profile_reference() {
        let mut ad = JobAd::new("PM Opening");
        ad.candidate_profile_id = Some("profile-1".into());

        JobAdPatch {
            candidate_profile_id: Some(None),
            ..Default::default()
        }
        .apply(&mut ad);
        assert_eq!(ad.candidate_profile_id, None);
    }

    #[test]
    fn filter_patch_distinguishes_clear_from_absent() {
        let mut filter = LibraryFilter {
            kind: Some(BlockKind::Skill),
            category: Some("technical".into()),
            ..Default::default()
        };

        FilterPatch {
            kind: Some(None),
            search_query: Some(Some("api".into())),
            ..Default::default()
        }
        .apply(&mut filter);

        assert_eq!(filter.kind, None);
        assert_eq!(filter.category.as_deref(), Some("technical"));
        assert_eq!(filter.search_query.as_deref(), Some("api"));
    }
}
