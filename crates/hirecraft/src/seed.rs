//! Seed data: the starter content library and archetype catalog a fresh
//! workspace begins with. Block ids here are stable strings (not UUIDs) so
//! archetype baselines and older snapshots keep resolving across versions.

use crate::model::{
    BlockKind, BlockMetadata, CandidateArchetype, ContentBlock, SeniorityLevel,
};
use crate::state::{ActiveModule, AppState, LibraryFilter};

/// A fresh workspace: seeded library and catalog, no tabs, library module
/// active, dark mode on.
pub fn seed_state() -> AppState {
    AppState {
        content_blocks: seed_blocks(),
        candidate_archetypes: seed_archetypes(),
        tabs: Vec::new(),
        active_tab_id: None,
        active_module: ActiveModule::Library,
        dark_mode: true,
        library_filter: LibraryFilter::default(),
        preview_visible: false,
    }
}

pub fn seed_archetypes() -> Vec<CandidateArchetype> {
    vec![
        CandidateArchetype {
            id: "archetype-mid-pm".into(),
            name: "Mid-Level PM (Team-Embedded)".into(),
            description: "Runs a high-performing squad, ships iteratively, role-models AI use"
                .into(),
            seniority_level: SeniorityLevel::Mid,
            baseline_skill_ids: vec![
                "skill-product-execution".into(),
                "skill-ai-daily-use".into(),
            ],
            baseline_requirement_ids: vec![
                "req-3-5-years".into(),
                "req-ai-tool-portfolio".into(),
            ],
            source_document: Some("/Research/pm-mid-embedded.md".into()),
        },
        CandidateArchetype {
            id: "archetype-senior-pm".into(),
            name: "Senior PM (Cross-Product)".into(),
            description: "Strategic PM with multi-quarter vision and cross-team influence".into(),
            seniority_level: SeniorityLevel::Senior,
            baseline_skill_ids: vec![
                "skill-strategic-leadership".into(),
                "skill-advanced-ai-fluency".into(),
            ],
            baseline_requirement_ids: vec![
                "req-6-8-years".into(),
                "req-cross-functional-influence".into(),
            ],
            source_document: Some("/Research/pm-senior-cross-team.md".into()),
        },
        CandidateArchetype {
            id: "archetype-principal-pm".into(),
            name: "Principal PM (Platform & AI Enablement)".into(),
            description: "Technical PM owning platform strategy and org-wide AI enablement"
                .into(),
            seniority_level: SeniorityLevel::Principal,
            baseline_skill_ids: vec![
                "skill-platform-thinking".into(),
                "skill-technical-fluency".into(),
            ],
            baseline_requirement_ids: vec![
                "req-8-12-years".into(),
                "req-ai-native-products".into(),
            ],
            source_document: Some("/Research/pm-principal-platform.md".into()),
        },
    ]
}

pub fn seed_blocks() -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    // Skills
    blocks.push(block(
        "skill-product-execution",
        BlockKind::Skill,
        "Product Execution",
        "Runs weekly discovery and delivery cadence. Ships improvements every sprint; measures outcomes, not just output.",
        "product",
        &["execution", "agile", "delivery"],
        Some(levels(&["mid", "senior"])),
    ));
    blocks.push(block(
        "skill-ai-daily-use",
        BlockKind::Skill,
        "AI Fluency in Daily Work",
        "Uses AI tools to draft PRDs, analyze user feedback at scale, and synthesize competitive research.",
        "ai-fluency",
        &["ai", "productivity", "tools"],
        Some(levels(&["mid", "senior", "principal"])),
    ));
    blocks.push(block(
        "skill-strategic-leadership",
        BlockKind::Skill,
        "Strategic Product Leadership",
        "Defines multi-quarter strategy, aligns stakeholders, and makes tough scope trade-offs.",
        "product",
        &["strategy", "leadership", "stakeholders"],
        Some(levels(&["senior", "principal"])),
    ));
    blocks.push(block(
        "skill-advanced-ai-fluency",
        BlockKind::Skill,
        "Advanced AI Fluency and Enablement",
        "Designs AI-augmented workflows for their domain. Runs internal workshops and mentors PMs on AI adoption.",
        "ai-fluency",
        &["ai", "mentoring", "workflows"],
        Some(levels(&["senior", "principal"])),
    ));
    blocks.push(block(
        "skill-platform-thinking",
        BlockKind::Skill,
        "Platform & Ecosystem Thinking",
        "Designs extensible platforms, APIs, and data models that multiple product lines consume.",
        "technical",
        &["platform", "architecture", "apis"],
        Some(levels(&["principal"])),
    ));
    blocks.push(block(
        "skill-technical-fluency",
        BlockKind::Skill,
        "Technical Fluency & ML Partnership",
        "Partners with ML engineers on model selection and evaluation. Defines guardrails and human-in-the-loop patterns.",
        "technical",
        &["ml", "technical", "ai"],
        Some(levels(&["principal"])),
    ));

    // Requirements
    blocks.push(block(
        "req-3-5-years",
        BlockKind::Requirement,
        "3-5 Years Experience",
        "3-5 years in product management, with at least 2 years in a tech/SaaS environment.",
        "experience",
        &["experience", "years"],
        Some(levels(&["mid"])),
    ));
    blocks.push(block(
        "req-6-8-years",
        BlockKind::Requirement,
        "6-8+ Years Experience",
        "6-8+ years in product management, with at least 3 years in B2B SaaS or platform products.",
        "experience",
        &["experience", "years"],
        Some(levels(&["senior"])),
    ));
    blocks.push(block(
        "req-8-12-years",
        BlockKind::Requirement,
        "8-12+ Years Experience",
        "8-12+ years in product management, with significant depth in platform or developer tools.",
        "experience",
        &["experience", "years"],
        Some(levels(&["principal"])),
    ));
    blocks.push(block(
        "req-ai-tool-portfolio",
        BlockKind::Requirement,
        "AI Tool Portfolio",
        "Demonstrable experience using AI productivity tools in the product process.",
        "ai-fluency",
        &["ai", "portfolio", "tools"],
        Some(levels(&["mid", "senior", "principal"])),
    ));
    blocks.push(block(
        "req-cross-functional-influence",
        BlockKind::Requirement,
        "Cross-Functional Influence",
        "Has led initiatives requiring engineering, design, data science, sales, and support alignment.",
        "leadership",
        &["influence", "cross-functional"],
        Some(levels(&["senior", "principal"])),
    ));
    blocks.push(block(
        "req-ai-native-products",
        BlockKind::Requirement,
        "AI-Native Product Experience",
        "Demonstrable experience shipping AI-native products or major AI-enabled platforms.",
        "product",
        &["ai", "platform", "shipping"],
        Some(levels(&["principal"])),
    ));

    // Benefits
    blocks.push(block(
        "benefit-ai-tools",
        BlockKind::Benefit,
        "AI-Powered Productivity",
        "Licenses for leading AI assistants and access to cutting-edge prototyping tools.",
        "compensation",
        &["ai", "tools", "productivity"],
        None,
    ));
    blocks.push(block(
        "benefit-learning",
        BlockKind::Benefit,
        "Learning & Experimentation",
        "Quarterly team experimentation budget, personal learning budget, and 10% time for AI side projects.",
        "growth",
        &["learning", "budget", "growth"],
        None,
    ));

    // Values
    blocks.push(block(
        "value-learn",
        BlockKind::Value,
        "Learn",
        "We are continuous learners who embrace curiosity and adapt swiftly to change.",
        "culture",
        &["values", "learning"],
        None,
    ));
    blocks.push(block(
        "value-lead",
        BlockKind::Value,
        "Lead",
        "We take ownership and lead by example. We champion AI adoption and role-model effective use.",
        "culture",
        &["values", "leadership"],
        None,
    ));
    blocks.push(block(
        "value-deliver",
        BlockKind::Value,
        "Deliver",
        "We ship outcomes, not just output. We measure impact and iterate based on data.",
        "culture",
        &["values", "execution"],
        None,
    ));

    // Red flags
    blocks.push(block(
        "redflag-vague-ai",
        BlockKind::RedFlag,
        "Vague AI Experience",
        "Claims AI experience but cannot name specific daily tools. No portfolio of prototypes.",
        "screening",
        &["red-flag", "ai"],
        None,
    ));
    blocks.push(block(
        "redflag-no-learning",
        BlockKind::RedFlag,
        "No Learning Evidence",
        "Hasn't tried new AI tools recently. Can't explain failures or learnings.",
        "screening",
        &["red-flag", "learning"],
        None,
    ));

    // Interview questions
    blocks.push(block(
        "question-prototyping",
        BlockKind::Question,
        "Prototyping Skills Assessment",
        "Walk me through a recent project where you built something with AI tools. What did you build and how long did it take?",
        "interview",
        &["ai", "prototyping", "technical"],
        Some(weight(5)),
    ));
    blocks.push(block(
        "question-technical-understanding",
        BlockKind::Question,
        "AI Feature Evaluation",
        "Explain how you would evaluate whether an AI feature is performing well in production.",
        "interview",
        &["ai", "metrics", "technical"],
        Some(weight(4)),
    ));
    blocks.push(block(
        "question-learning",
        BlockKind::Question,
        "Continuous Learning",
        "What AI tools or technologies have you experimented with in the last 3 months? What did you learn?",
        "interview",
        &["learning", "curiosity"],
        Some(weight(3)),
    ));

    // Evaluation criteria
    blocks.push(block(
        "criteria-technical-fluency",
        BlockKind::EvaluationCriteria,
        "Technical Fluency",
        "AI/ML concept understanding. Prototyping tool experience. Data literacy.",
        "evaluation",
        &["technical", "scoring"],
        None,
    ));
    blocks.push(block(
        "criteria-execution",
        BlockKind::EvaluationCriteria,
        "Execution Capability",
        "Portfolio of built projects. Speed of iteration. Evidence of shipping products.",
        "evaluation",
        &["execution", "scoring"],
        None,
    ));
    blocks.push(block(
        "criteria-learning",
        BlockKind::EvaluationCriteria,
        "Learning Mindset",
        "Recent experimentation. Adaptation to new tools. Intellectual humility.",
        "evaluation",
        &["learning", "scoring"],
        None,
    ));

    blocks
}

fn block(
    id: &str,
    kind: BlockKind,
    title: &str,
    content: &str,
    category: &str,
    tags: &[&str],
    metadata: Option<BlockMetadata>,
) -> ContentBlock {
    ContentBlock {
        id: id.into(),
        kind,
        title: title.into(),
        content: content.into(),
        category: category.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        metadata,
    }
}

fn levels(names: &[&str]) -> BlockMetadata {
    BlockMetadata {
        seniority_levels: names.iter().map(|n| n.to_string()).collect(),
        ..Default::default()
    }
}

fn weight(value: u32) -> BlockMetadata {
    BlockMetadata {
        weight: Some(value),
        ..Default::default()
    }
}
