use std::sync::LazyLock;

use regex::Regex;

use super::{collect, number, CitationMatcher, CASE_SUFFIX};
use crate::citation::{Citation, CitationTier};

static RE_SECTION_CASE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)([0-9]+)\s*§:?{CASE_SUFFIX}")).ok());

/// `6 §:ssä`, `6 §:n`. Requires a case ending.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionCaseMatcher;

impl CitationMatcher for SectionCaseMatcher {
    fn tier(&self) -> CitationTier {
        CitationTier::SectionCase
    }

    fn find(&self, text: &str) -> Vec<Citation> {
        collect(&RE_SECTION_CASE, text, self.tier(), |caps| Some((number(caps, 1)?, None)))
    }
}
