use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Reference extractor configuration.
///
/// Signal phrases are matched case-insensitively as substrings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Characters before a citation scanned for exception signals.
    pub exception_window: usize,
    /// Characters after a citation scanned for postpositional exception signals.
    pub exception_trailing_window: usize,
    pub exception_signals: Vec<String>,
    /// Signals honoured in the trailing window only.
    pub postpositional_exception_signals: Vec<String>,
    pub definition_signals: Vec<String>,
    /// Law name (any inflection) → law id.
    pub known_laws: BTreeMap<String, String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            exception_window: defaults::DEFAULT_EXCEPTION_WINDOW,
            exception_trailing_window: defaults::DEFAULT_EXCEPTION_TRAILING_WINDOW,
            exception_signals: to_strings(defaults::DEFAULT_EXCEPTION_SIGNALS),
            postpositional_exception_signals: to_strings(
                defaults::DEFAULT_POSTPOSITIONAL_EXCEPTION_SIGNALS,
            ),
            definition_signals: to_strings(defaults::DEFAULT_DEFINITION_SIGNALS),
            known_laws: defaults::DEFAULT_KNOWN_LAWS
                .iter()
                .map(|(name, id)| (name.to_string(), id.to_string()))
                .collect(),
        }
    }
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
