//! # Domain Model: Content Blocks and Documents
//!
//! The model is normalized around [`ContentBlock`]: an atomic, reusable unit
//! of text stored once in the library and referenced *by id* from documents.
//! Three document kinds consume block references:
//!
//! - [`CandidateProfile`] — an ideal-candidate specification, holding several
//!   role-specific id lists (required/preferred skills, experience, AI tools,
//!   responsibilities, red flags).
//! - [`JobAd`] — a posting assembled from positioned [`JobAdSection`]s, each
//!   referencing blocks and optionally carrying static text.
//! - [`CaseStudy`] — an interview exercise with a [`Scenario`], question and
//!   evaluation-criteria references, and free-form custom entries.
//!
//! ## Reference semantics
//!
//! Deleting a block from the library does NOT cascade into documents. A
//! dangling id is tolerated everywhere and simply fails to resolve when a
//! document is rendered. No operation in this module errors on a missing
//! reference.
//!
//! ## Wire format
//!
//! Everything serializes with camelCase field names so snapshots produced by
//! earlier builds of the tool load unchanged. Fields added over time default
//! when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The fixed vocabulary of reusable block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Skill,
    Requirement,
    Benefit,
    Value,
    Question,
    EvaluationCriteria,
    ProcessStep,
    RedFlag,
    Experience,
    AiTool,
    Responsibility,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Skill => "skill",
            BlockKind::Requirement => "requirement",
            BlockKind::Benefit => "benefit",
            BlockKind::Value => "value",
            BlockKind::Question => "question",
            BlockKind::EvaluationCriteria => "evaluation_criteria",
            BlockKind::ProcessStep => "process_step",
            BlockKind::RedFlag => "red_flag",
            BlockKind::Experience => "experience",
            BlockKind::AiTool => "ai_tool",
            BlockKind::Responsibility => "responsibility",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "skill" => Ok(BlockKind::Skill),
            "requirement" => Ok(BlockKind::Requirement),
            "benefit" => Ok(BlockKind::Benefit),
            "value" => Ok(BlockKind::Value),
            "question" => Ok(BlockKind::Question),
            "evaluation_criteria" => Ok(BlockKind::EvaluationCriteria),
            "process_step" => Ok(BlockKind::ProcessStep),
            "red_flag" => Ok(BlockKind::RedFlag),
            "experience" => Ok(BlockKind::Experience),
            "ai_tool" => Ok(BlockKind::AiTool),
            "responsibility" => Ok(BlockKind::Responsibility),
            other => Err(format!("unknown block type: {other}")),
        }
    }
}

/// Applicability hints attached to a block, used for browsing rather than
/// enforced anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockMetadata {
    #[serde(default, rename = "seniorityLevel", skip_serializing_if = "Vec::is_empty")]
    pub seniority_levels: Vec<String>,
    #[serde(default, rename = "domain", skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// An atomic reusable unit of text content. Identity is the `id` string,
/// unique across the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub content: String,
    /// Free-form category used for filtering ("technical", "ai-fluency", ...).
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BlockMetadata>,
}

impl ContentBlock {
    pub fn new(
        kind: BlockKind,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("block-{}", Uuid::new_v4()),
            kind,
            title: title.into(),
            content: content.into(),
            category: category.into(),
            tags: Vec::new(),
            metadata: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
    Principal,
    Staff,
}

impl SeniorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "junior",
            SeniorityLevel::Mid => "mid",
            SeniorityLevel::Senior => "senior",
            SeniorityLevel::Principal => "principal",
            SeniorityLevel::Staff => "staff",
        }
    }

    /// Capitalized form for document headers.
    pub fn label(&self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::Mid => "Mid",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Principal => "Principal",
            SeniorityLevel::Staff => "Staff",
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    Draft,
    Active,
    Archived,
}

// ---------------------------------------------------------------------------
// Candidate profiles
// ---------------------------------------------------------------------------

/// A read-only template that seeds new profiles with baseline block ids.
/// The catalog is populated at seed time and never mutated by any action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateArchetype {
    pub id: String,
    pub name: String,
    pub description: String,
    pub seniority_level: SeniorityLevel,
    #[serde(default)]
    pub baseline_skill_ids: Vec<String>,
    #[serde(default)]
    pub baseline_requirement_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
}

/// A free-form section authored directly on a profile, outside the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub content: String,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub archetype_id: Option<String>,
    pub seniority_level: SeniorityLevel,
    pub domain: String,
    #[serde(default)]
    pub required_skill_ids: Vec<String>,
    #[serde(default)]
    pub preferred_skill_ids: Vec<String>,
    #[serde(default)]
    pub required_experience_ids: Vec<String>,
    #[serde(default)]
    pub ai_tool_requirement_ids: Vec<String>,
    #[serde(default)]
    pub responsibility_ids: Vec<String>,
    #[serde(default)]
    pub red_flag_ids: Vec<String>,
    #[serde(default)]
    pub custom_sections: Vec<CustomSection>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CandidateProfile {
    pub fn new(
        name: impl Into<String>,
        seniority_level: SeniorityLevel,
        domain: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: format!("profile-{}", Uuid::new_v4()),
            name: name.into(),
            archetype_id: None,
            seniority_level,
            domain: domain.into(),
            required_skill_ids: Vec::new(),
            preferred_skill_ids: Vec::new(),
            required_experience_ids: Vec::new(),
            ai_tool_requirement_ids: Vec::new(),
            responsibility_ids: Vec::new(),
            red_flag_ids: Vec::new(),
            custom_sections: Vec::new(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Seed a profile from an archetype. This is a copy, not a live link:
    /// baseline skill ids land in `required_skill_ids`, baseline requirement
    /// ids in `required_experience_ids`, and later archetype edits (there are
    /// none today) would not propagate.
    pub fn from_archetype(archetype: &CandidateArchetype) -> Self {
        let mut profile = Self::new(
            format!("{} Profile", archetype.name),
            archetype.seniority_level,
            "",
        );
        profile.archetype_id = Some(archetype.id.clone());
        profile.required_skill_ids = archetype.baseline_skill_ids.clone();
        profile.required_experience_ids = archetype.baseline_requirement_ids.clone();
        profile
    }
}

// ---------------------------------------------------------------------------
// Job ads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Intro,
    Responsibilities,
    Requirements,
    Benefits,
    Process,
    Company,
    Custom,
}

impl SectionKind {
    /// Responsibilities and requirements render their referenced blocks as a
    /// flat bullet list; every other kind gives each block its own subheading.
    pub fn renders_as_bullets(&self) -> bool {
        matches!(self, SectionKind::Responsibilities | SectionKind::Requirements)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAdSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    /// Total order among this document's sections. Dense (0..n-1) after any
    /// reorder; removal leaves gaps.
    pub position: u32,
    #[serde(default)]
    pub content_block_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Raw markdown, honored only when `kind` is [`SectionKind::Custom`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_markdown: Option<String>,
}

impl JobAdSection {
    pub fn new(kind: SectionKind, title: impl Into<String>) -> Self {
        Self {
            id: format!("section-{}", Uuid::new_v4()),
            kind,
            title: title.into(),
            position: 0,
            content_block_ids: Vec::new(),
            content: None,
            custom_markdown: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringManager {
    pub name: String,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAdMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_visa_sponsorship: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_manager: Option<HiringManager>,
    /// Template-variable substitutions, e.g. `{{TEAM_PITCH}}` -> block id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variable_substitutions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAd {
    pub id: String,
    /// Internal working title.
    pub title: String,
    /// External display title ("Product Manager - API & Integrations").
    pub role_title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub seniority_level: SeniorityLevel,
    #[serde(default)]
    pub sections: Vec<JobAdSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JobAdMetadata>,
    #[serde(default)]
    pub candidate_profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobAd {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("jobad-{}", Uuid::new_v4()),
            title: title.into(),
            role_title: String::new(),
            department: String::new(),
            location: String::new(),
            employment_type: EmploymentType::FullTime,
            seniority_level: SeniorityLevel::Mid,
            sections: Vec::new(),
            metadata: None,
            candidate_profile_id: None,
            status: Some(DocStatus::Draft),
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Case studies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    OpenEnded,
    Framework,
    Technical,
    Strategic,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::OpenEnded => "open-ended",
            QuestionKind::Framework => "framework",
            QuestionKind::Technical => "technical",
            QuestionKind::Strategic => "strategic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCriteria {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub seniority_level: SeniorityLevel,
    pub domain: String,
    #[serde(default)]
    pub candidate_profile_id: Option<String>,
    #[serde(default)]
    pub scenario: Scenario,
    /// References to blocks of kind `question`.
    #[serde(default)]
    pub question_ids: Vec<String>,
    /// References to blocks of kind `evaluation_criteria`.
    #[serde(default)]
    pub evaluation_criteria_ids: Vec<String>,
    #[serde(default)]
    pub custom_questions: Vec<CustomQuestion>,
    #[serde(default)]
    pub custom_criteria: Vec<CustomCriteria>,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub deliverables: Vec<String>,
    pub status: DocStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CaseStudy {
    pub fn new(
        title: impl Into<String>,
        seniority_level: SeniorityLevel,
        domain: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: format!("case-{}", Uuid::new_v4()),
            title: title.into(),
            seniority_level,
            domain: domain.into(),
            candidate_profile_id: None,
            scenario: Scenario::default(),
            question_ids: Vec::new(),
            evaluation_criteria_ids: Vec::new(),
            custom_questions: Vec::new(),
            custom_criteria: Vec::new(),
            duration: 60,
            deliverables: Vec::new(),
            status: DocStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_serializes_with_original_wire_names() {
        let mut block = ContentBlock::new(
            BlockKind::EvaluationCriteria,
            "Technical Fluency",
            "AI/ML concept understanding.",
            "evaluation",
        );
        block.metadata = Some(BlockMetadata {
            seniority_levels: vec!["mid".into()],
            domains: vec![],
            weight: Some(4),
        });

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "evaluation_criteria");
        assert_eq!(json["metadata"]["seniorityLevel"][0], "mid");
        assert_eq!(json["metadata"]["weight"], 4);
    }

    #[test]
    fn block_kind_roundtrips_through_from_str() {
        for kind in [
            BlockKind::Skill,
            BlockKind::EvaluationCriteria,
            BlockKind::RedFlag,
            BlockKind::AiTool,
        ] {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
        assert!("nonsense".parse::<BlockKind>().is_err());
    }

    #[test]
    fn profile_from_archetype_copies_baselines() {
        let archetype = CandidateArchetype {
            id: "archetype-mid-pm".into(),
            name: "Mid-Level PM".into(),
            description: "Runs a squad".into(),
            seniority_level: SeniorityLevel::Mid,
            baseline_skill_ids: vec!["skill-a".into(), "skill-b".into()],
            baseline_requirement_ids: vec!["req-a".into()],
            source_document: None,
        };

        let profile = CandidateProfile::from_archetype(&archetype);

        assert_eq!(profile.name, "Mid-Level PM Profile");
        assert_eq!(profile.archetype_id.as_deref(), Some("archetype-mid-pm"));
        assert_eq!(profile.seniority_level, SeniorityLevel::Mid);
        assert_eq!(profile.required_skill_ids, vec!["skill-a", "skill-b"]);
        assert_eq!(profile.required_experience_ids, vec!["req-a"]);
        assert!(profile.preferred_skill_ids.is_empty());
        assert!(profile.red_flag_ids.is_empty());
    }

    #[test]
    fn profile_deserializes_legacy_json_without_optional_lists() {
        let json = r#"{
            "id": "profile-1",
            "name": "Senior PM",
            "seniorityLevel": "senior",
            "domain": "platform",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;

        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Senior PM");
        assert!(profile.required_skill_ids.is_empty());
        assert!(profile.custom_sections.is_empty());
        assert_eq!(profile.archetype_id, None);
        assert_eq!(profile.notes, "");
    }

    #[test]
    fn job_ad_roundtrips_with_metadata() {
        let mut ad = JobAd::new("Internal: Senior PM");
        ad.role_title = "Senior Product Manager".into();
        ad.employment_type = EmploymentType::Contract;
        ad.metadata = Some(JobAdMetadata {
            salary_range: Some("90-110k".into()),
            benefits: vec!["remote".into()],
            requires_visa_sponsorship: Some(false),
            hiring_manager: None,
            variable_substitutions: BTreeMap::new(),
        });
        let mut section = JobAdSection::new(SectionKind::Requirements, "Must-haves");
        section.content_block_ids.push("req-1".into());
        ad.sections.push(section);

        let json = serde_json::to_string(&ad).unwrap();
        let loaded: JobAd = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, ad);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["employmentType"], "contract");
        assert_eq!(value["sections"][0]["type"], "requirements");
        assert_eq!(value["metadata"]["salaryRange"], "90-110k");
    }

    #[test]
    fn section_kinds_render_mode() {
        assert!(SectionKind::Responsibilities.renders_as_bullets());
        assert!(SectionKind::Requirements.renders_as_bullets());
        assert!(!SectionKind::Intro.renders_as_bullets());
        assert!(!SectionKind::Custom.renders_as_bullets());
    }

    #[test]
    fn case_study_defaults() {
        let case = CaseStudy::new("API Design Case", SeniorityLevel::Senior, "platform");
        assert_eq!(case.duration, 60);
        assert_eq!(case.status, DocStatus::Draft);
        assert!(case.scenario.context.is_empty());
        assert!(case.question_ids.is_empty());
    }

    #[test]
    fn question_kind_serializes_kebab_case() {
        let q = CustomQuestion {
            id: "q-1".into(),
            text: "Walk me through it".into(),
            kind: QuestionKind::OpenEnded,
            position: 0,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "open-ended");
    }
}
