//! Citation candidates produced by the matchers.

use std::fmt;

/// Pattern tiers, most specific first. Lower tiers win during suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CitationTier {
    /// `6 §:n 2 momentissa`
    SectionMoment,
    /// `6 §:ssä`
    SectionCase,
    /// `3 luvun 12 §`
    ChapterSection,
    /// `6 §`
    BareSection,
}

impl CitationTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SectionMoment => "section_moment",
            Self::SectionCase => "section_case",
            Self::ChapterSection => "chapter_section",
            Self::BareSection => "bare_section",
        }
    }
}

impl fmt::Display for CitationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An internal citation found in moment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub section: u32,
    pub moment: Option<u32>,
    pub matched_text: String,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    pub tier: CitationTier,
}

impl Citation {
    /// Whether this citation points back at the moment it was found in.
    ///
    /// A section-level citation of the own section counts as self-citation;
    /// a citation of another moment of the same section does not.
    pub fn is_self_citation(&self, section: u32, moment: &lexgraph_core::MomentLabel) -> bool {
        self.section == section && self.moment.map_or(true, |m| moment.is_number(m))
    }
}
