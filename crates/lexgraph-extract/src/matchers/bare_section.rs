use std::sync::LazyLock;

use regex::Regex;

use super::{collect, number, CitationMatcher};
use crate::citation::{Citation, CitationTier};

static RE_BARE_SECTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*§").ok());

/// `6 §`
#[derive(Debug, Clone, Copy, Default)]
pub struct BareSectionMatcher;

impl CitationMatcher for BareSectionMatcher {
    fn tier(&self) -> CitationTier {
        CitationTier::BareSection
    }

    fn find(&self, text: &str) -> Vec<Citation> {
        collect(&RE_BARE_SECTION, text, self.tier(), |caps| Some((number(caps, 1)?, None)))
    }
}
