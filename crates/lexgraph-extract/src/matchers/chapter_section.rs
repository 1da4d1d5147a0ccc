use std::sync::LazyLock;

use regex::Regex;

use super::{collect, number, CitationMatcher};
use crate::citation::{Citation, CitationTier};

static RE_CHAPTER_SECTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*(?:luvun|luku)\s+([0-9]+)\s*§").ok());

/// `3 luvun 12 §`. The chapter is not recorded, section numbers are
/// unique within a statute.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterSectionMatcher;

impl CitationMatcher for ChapterSectionMatcher {
    fn tier(&self) -> CitationTier {
        CitationTier::ChapterSection
    }

    fn find(&self, text: &str) -> Vec<Citation> {
        collect(&RE_CHAPTER_SECTION, text, self.tier(), |caps| {
            Some((number(caps, 2)?, None))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_section_not_chapter() {
        let found = ChapterSectionMatcher.find("siten kuin 3 luvun 12 §:ssä säädetään");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].section, 12);
        assert_eq!(found[0].moment, None);
    }
}
