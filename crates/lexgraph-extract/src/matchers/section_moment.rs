use std::sync::LazyLock;

use regex::Regex;

use super::{collect, number, CitationMatcher, CASE_SUFFIX};
use crate::citation::{Citation, CitationTier};

static RE_SECTION_MOMENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)([0-9]+)\s*§:?{CASE_SUFFIX}?\s+([0-9]+)\s*(?:momentissa|momentista|momentille|momenttiin|momenttia|momentin|momentti|mom\.?)"
    ))
    .ok()
});

/// `6 §:n 2 momentissa`, `6 § 2 mom.`
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionMomentMatcher;

impl CitationMatcher for SectionMomentMatcher {
    fn tier(&self) -> CitationTier {
        CitationTier::SectionMoment
    }

    fn find(&self, text: &str) -> Vec<Citation> {
        collect(&RE_SECTION_MOMENT, text, self.tier(), |caps| {
            Some((number(caps, 1)?, Some(number(caps, 2)?)))
        })
    }
}
