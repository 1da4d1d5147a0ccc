//! The reference extractor: citations, exception and definition context,
//! external statutes.

use lexgraph_core::config::ExtractorConfig;
use lexgraph_core::{ConfigError, EdgeType};

use crate::citation::Citation;
use crate::external::{ExternalLawMatcher, ExternalReference};
use crate::matchers::{default_matchers, CitationMatcher};
use crate::signals::{chars_after, chars_before, within_clause, SignalSet};
use crate::suppression::suppress;

/// Extracts legal references from the text of one moment.
///
/// Holds only immutable, compiled configuration; share it freely.
pub struct ReferenceExtractor {
    matchers: Vec<Box<dyn CitationMatcher>>,
    external: ExternalLawMatcher,
    exception_signals: SignalSet,
    trailing_exception_signals: SignalSet,
    definition_signals: SignalSet,
    exception_window: usize,
    exception_trailing_window: usize,
}

impl ReferenceExtractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        Self::with_matchers(config, default_matchers())
    }

    /// Build with a custom matcher list. Matchers are suppressed against each
    /// other by their tier.
    pub fn with_matchers(
        config: &ExtractorConfig,
        matchers: Vec<Box<dyn CitationMatcher>>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            matchers,
            external: ExternalLawMatcher::new(&config.known_laws)?,
            exception_signals: SignalSet::new(config.exception_signals.as_slice())?,
            trailing_exception_signals: SignalSet::new(
                config.postpositional_exception_signals.as_slice(),
            )?,
            definition_signals: SignalSet::new(config.definition_signals.as_slice())?,
            exception_window: config.exception_window,
            exception_trailing_window: config.exception_trailing_window,
        })
    }

    pub fn extract<'a>(&'a self, text: &'a str) -> Extraction<'a> {
        Extraction {
            extractor: self,
            text,
            citations: self.citations(text),
            external_refs: self.external.find(text),
            definition_signal: self.definition_signal(text),
        }
    }

    /// Internal citations after tier suppression.
    pub fn citations(&self, text: &str) -> Vec<Citation> {
        let candidates = self
            .matchers
            .iter()
            .flat_map(|matcher| matcher.find(text))
            .collect();
        suppress(candidates)
    }

    pub fn external_references(&self, text: &str) -> Vec<ExternalReference> {
        self.external.find(text)
    }

    /// The exception phrase governing `citation`, if any.
    ///
    /// Looks at `exception_window` characters before the citation and at
    /// `exception_trailing_window` characters after it. The trailing window is
    /// cut at the end of the clause and only honours postpositional signals.
    pub fn exception_signal<'a>(&'a self, text: &str, citation: &Citation) -> Option<&'a str> {
        if citation.start > text.len() || citation.end > text.len() {
            return None;
        }
        let before = chars_before(text, citation.start, self.exception_window);
        if let Some(signal) = self.exception_signals.find_in(before) {
            return Some(signal);
        }
        let after = chars_after(text, citation.end, self.exception_trailing_window);
        self.trailing_exception_signals.find_in(within_clause(after))
    }

    pub fn is_exception_context(&self, text: &str, citation: &Citation) -> bool {
        self.exception_signal(text, citation).is_some()
    }

    /// The first definition phrase anywhere in `text`.
    pub fn definition_signal(&self, text: &str) -> Option<&str> {
        self.definition_signals.find_in(text)
    }

    pub fn is_definition_context(&self, text: &str) -> bool {
        self.definition_signal(text).is_some()
    }

    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }
}

impl std::fmt::Debug for ReferenceExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceExtractor")
            .field("matchers", &self.matcher_names())
            .field("exception_signals", &self.exception_signals.phrases())
            .field(
                "trailing_exception_signals",
                &self.trailing_exception_signals.phrases(),
            )
            .field("definition_signals", &self.definition_signals.phrases())
            .field("known_laws", &self.external.known_law_count())
            .field("exception_window", &self.exception_window)
            .field("exception_trailing_window", &self.exception_trailing_window)
            .finish()
    }
}

/// Everything the extractor found in one moment.
#[derive(Debug)]
pub struct Extraction<'a> {
    extractor: &'a ReferenceExtractor,
    text: &'a str,
    pub citations: Vec<Citation>,
    pub external_refs: Vec<ExternalReference>,
    definition_signal: Option<&'a str>,
}

impl<'a> Extraction<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_exception_context(&self, citation: &Citation) -> bool {
        self.extractor.is_exception_context(self.text, citation)
    }

    pub fn exception_signal(&self, citation: &Citation) -> Option<&'a str> {
        self.extractor.exception_signal(self.text, citation)
    }

    /// EXCEPTS in exception context, REFERS_TO otherwise.
    pub fn relation_for(&self, citation: &Citation) -> EdgeType {
        if self.is_exception_context(citation) {
            EdgeType::Excepts
        } else {
            EdgeType::RefersTo
        }
    }

    pub fn is_definition_context(&self) -> bool {
        self.definition_signal.is_some()
    }

    pub fn definition_signal(&self) -> Option<&'a str> {
        self.definition_signal
    }

    /// No citations, no external references, no definition.
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty() && self.external_refs.is_empty() && !self.is_definition_context()
    }
}
