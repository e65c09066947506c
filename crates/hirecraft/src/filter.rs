//! Library browsing: select the subset of content blocks matching a
//! [`LibraryFilter`].
//!
//! All active criteria combine with AND. Type and category are exact
//! matches; tags require the block to carry every filter tag; the search
//! query is a case-insensitive substring match over title, content, and
//! tags. An empty filter matches every block, and a whitespace-only search
//! query counts as no search at all.

use crate::model::ContentBlock;
use crate::state::LibraryFilter;

/// Blocks matching every active criterion, in library order.
pub fn filter_blocks<'a>(
    blocks: &'a [ContentBlock],
    filter: &LibraryFilter,
) -> Vec<&'a ContentBlock> {
    blocks.iter().filter(|b| matches(b, filter)).collect()
}

pub fn matches(block: &ContentBlock, filter: &LibraryFilter) -> bool {
    if let Some(kind) = filter.kind {
        if block.kind != kind {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if block.category != *category {
            return false;
        }
    }
    if let Some(tags) = &filter.tags {
        let has_all = tags.iter().all(|wanted| {
            block
                .tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(wanted))
        });
        if !has_all {
            return false;
        }
    }
    if let Some(query) = &filter.search_query {
        let query = query.trim().to_lowercase();
        if !query.is_empty() {
            let in_title = block.title.to_lowercase().contains(&query);
            let in_content = block.content.to_lowercase().contains(&query);
            let in_tags = block
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));
            if !(in_title || in_content || in_tags) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn library() -> Vec<ContentBlock> {
        vec![
            ContentBlock::new(
                BlockKind::Skill,
                "Roadmap Planning",
                "Owns quarterly roadmaps end to end.",
                "technical",
            )
            .with_tags(vec!["planning".into(), "strategy".into()]),
            ContentBlock::new(
                BlockKind::Question,
                "Prioritization Call",
                "How would you sequence these three bets?",
                "interview",
            )
            .with_tags(vec!["strategy".into()]),
            ContentBlock::new(
                BlockKind::Skill,
                "SQL Fluency",
                "Writes analytical queries unaided.",
                "technical",
            ),
        ]
    }

    #[test]
    fn empty_filter_returns_all_blocks() {
        let blocks = library();
        let result = filter_blocks(&blocks, &LibraryFilter::default());
        assert_eq!(result.len(), blocks.len());
    }

    #[test]
    fn type_filter_returns_only_matching_kind() {
        let blocks = vec![
            ContentBlock::new(BlockKind::Skill, "X", "", "c"),
            ContentBlock::new(BlockKind::Question, "Y", "", "c"),
        ];
        let filter = LibraryFilter {
            kind: Some(BlockKind::Skill),
            ..Default::default()
        };
        let result = filter_blocks(&blocks, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "X");
    }

    #[test]
    fn unmatched_type_yields_empty_set() {
        let blocks = library();
        let filter = LibraryFilter {
            kind: Some(BlockKind::RedFlag),
            ..Default::default()
        };
        assert!(filter_blocks(&blocks, &filter).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring_over_all_text() {
        let blocks = library();

        let by_title = LibraryFilter {
            search_query: Some("ROADMAP".into()),
            ..Default::default()
        };
        assert_eq!(filter_blocks(&blocks, &by_title).len(), 1);

        let by_content = LibraryFilter {
            search_query: Some("sequence these".into()),
            ..Default::default()
        };
        assert_eq!(filter_blocks(&blocks, &by_content).len(), 1);

        let by_tag = LibraryFilter {
            search_query: Some("strat".into()),
            ..Default::default()
        };
        assert_eq!(filter_blocks(&blocks, &by_tag).len(), 2);
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let blocks = library();
        let filter = LibraryFilter {
            search_query: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(filter_blocks(&blocks, &filter).len(), blocks.len());
    }

    #[test]
    fn criteria_combine_with_and() {
        let blocks = library();
        // "strategy" tag alone matches two blocks; adding the type narrows
        // to the skill.
        let filter = LibraryFilter {
            kind: Some(BlockKind::Skill),
            tags: Some(vec!["strategy".into()]),
            ..Default::default()
        };
        let result = filter_blocks(&blocks, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Roadmap Planning");

        // Search ANDs with type rather than short-circuiting around it.
        let filter = LibraryFilter {
            kind: Some(BlockKind::Question),
            search_query: Some("roadmap".into()),
            ..Default::default()
        };
        assert!(filter_blocks(&blocks, &filter).is_empty());
    }

    #[test]
    fn tag_filter_requires_every_tag() {
        let blocks = library();
        let filter = LibraryFilter {
            tags: Some(vec!["Planning".into(), "strategy".into()]),
            ..Default::default()
        };
        let result = filter_blocks(&blocks, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Roadmap Planning");
    }
}
