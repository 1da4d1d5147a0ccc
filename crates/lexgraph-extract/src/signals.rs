//! Case-insensitive phrase sets and char-safe text windows.

use aho_corasick::{AhoCorasick, MatchKind};
use lexgraph_core::ConfigError;

/// A set of signal phrases matched as case-insensitive substrings.
#[derive(Debug, Clone)]
pub struct SignalSet {
    phrases: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl SignalSet {
    /// Build from phrases. Blank phrases are dropped; an empty set never matches.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self, ConfigError> {
        let phrases: Vec<String> = phrases
            .iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return Ok(Self {
                phrases,
                automaton: None,
            });
        }
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&phrases)
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: phrases.join("|"),
                message: e.to_string(),
            })?;
        Ok(Self {
            phrases,
            automaton: Some(automaton),
        })
    }

    /// The first phrase found in `text`, in its configured (lowercased) form.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let automaton = self.automaton.as_ref()?;
        let lowered = text.to_lowercase();
        automaton
            .find(lowered.as_str())
            .map(|m| self.phrases[m.pattern().as_usize()].as_str())
    }

    pub fn matches(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Up to `n` characters of `text` ending at byte offset `end`.
pub(crate) fn chars_before(text: &str, end: usize, n: usize) -> &str {
    let head = &text[..end];
    if n == 0 {
        return "";
    }
    let start = head
        .char_indices()
        .rev()
        .nth(n - 1)
        .map_or(0, |(i, _)| i);
    &head[start..]
}

/// Up to `n` characters of `text` starting at byte offset `start`.
pub(crate) fn chars_after(text: &str, start: usize, n: usize) -> &str {
    let tail = &text[start..];
    let end = tail.char_indices().nth(n).map_or(tail.len(), |(i, _)| i);
    &tail[..end]
}

/// Cut `window` at the first sentence or clause terminator.
pub(crate) fn within_clause(window: &str) -> &str {
    match window.find(['.', ';', '\n']) {
        Some(i) => &window[..i],
        None => window,
    }
}
