//! References to other statutes.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use lexgraph_core::ConfigError;
use regex::Regex;

/// `kirjanpitolain (1336/1997)`, `asetuksen (1339/1997)`
static RE_EXPLICIT_LAW: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(\w+lain?|asetuksen?)\s*\(\s*([0-9]+/[0-9]+)\s*\)").ok()
});

/// A reference from moment text to another statute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    /// Law name as written, lowercased.
    pub law_name: String,
    /// Statute number, e.g. `1336/1997`.
    pub law_id: String,
    /// Text used as edge context.
    pub context: String,
    pub start: usize,
}

/// Finds external statute references: explicit `name (number)` patterns
/// first, then configured law names. Each law id is reported once.
#[derive(Debug, Clone)]
pub struct ExternalLawMatcher {
    named: Option<Regex>,
    ids_by_name: HashMap<String, String>,
}

impl ExternalLawMatcher {
    /// Build the named-law pass from a `name → law id` table.
    pub fn new<'a>(
        known_laws: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<Self, ConfigError> {
        let ids_by_name: HashMap<String, String> = known_laws
            .into_iter()
            .map(|(name, id)| (name.trim().to_lowercase(), id.trim().to_string()))
            .filter(|(name, id)| !name.is_empty() && !id.is_empty())
            .collect();

        let mut names: Vec<&String> = ids_by_name.keys().collect();
        // Longest first so inflected forms win over their stems.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let named = if names.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
            let pattern = format!(r"(?i)\b({})\b", alternatives.join("|"));
            let re = Regex::new(&pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            Some(re)
        };

        Ok(Self { named, ids_by_name })
    }

    pub fn find(&self, text: &str) -> Vec<ExternalReference> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut found = Vec::new();

        if let Some(re) = RE_EXPLICIT_LAW.as_ref() {
            for caps in re.captures_iter(text) {
                let (Some(name), Some(id)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let law_name = name.as_str().to_lowercase();
                let law_id = id.as_str().to_string();
                if seen.insert(law_id.clone()) {
                    found.push(ExternalReference {
                        context: format!("{law_name} ({law_id})"),
                        law_name,
                        law_id,
                        start: name.start(),
                    });
                }
            }
        }

        if let Some(re) = &self.named {
            for m in re.find_iter(text) {
                let law_name = m.as_str().to_lowercase();
                let Some(law_id) = self.ids_by_name.get(&law_name) else {
                    continue;
                };
                if seen.insert(law_id.clone()) {
                    found.push(ExternalReference {
                        context: law_name.clone(),
                        law_name,
                        law_id: law_id.clone(),
                        start: m.start(),
                    });
                }
            }
        }

        found
    }

    pub fn known_law_count(&self) -> usize {
        self.ids_by_name.len()
    }
}
