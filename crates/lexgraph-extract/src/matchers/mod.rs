//! Citation matchers, one per pattern tier.
//!
//! Every matcher reports all candidates it sees. Overlap between tiers is
//! resolved afterwards by [`crate::suppression::suppress`].

mod bare_section;
mod chapter_section;
mod section_case;
mod section_moment;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::citation::{Citation, CitationTier};

pub use bare_section::BareSectionMatcher;
pub use chapter_section::ChapterSectionMatcher;
pub use section_case::SectionCaseMatcher;
pub use section_moment::SectionMomentMatcher;

/// Case endings that may follow `§`, with or without a colon.
pub(crate) const CASE_SUFFIX: &str = "(?:n|ssä|ssa|ään|stä|sta|ltä|lta|lle|llä|lla)";

/// A citation pattern tier.
pub trait CitationMatcher: Send + Sync {
    fn tier(&self) -> CitationTier;

    fn name(&self) -> &'static str {
        self.tier().name()
    }

    /// All candidates in `text`, in text order.
    fn find(&self, text: &str) -> Vec<Citation>;
}

/// The four built-in tiers, most specific first.
pub fn default_matchers() -> Vec<Box<dyn CitationMatcher>> {
    vec![
        Box::new(SectionMomentMatcher),
        Box::new(SectionCaseMatcher),
        Box::new(ChapterSectionMatcher),
        Box::new(BareSectionMatcher),
    ]
}

/// Run `regex` over `text` and turn each match into a citation via `parts`.
///
/// A match whose numbers do not parse is skipped. An uncompiled pattern
/// yields nothing.
pub(crate) fn collect(
    regex: &LazyLock<Option<Regex>>,
    text: &str,
    tier: CitationTier,
    parts: impl Fn(&Captures<'_>) -> Option<(u32, Option<u32>)>,
) -> Vec<Citation> {
    let Some(re) = regex.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let (section, moment) = parts(&caps)?;
            Some(Citation {
                section,
                moment,
                matched_text: whole.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
                tier,
            })
        })
        .collect()
}

/// Parse capture group `index` as a number.
pub(crate) fn number(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}
