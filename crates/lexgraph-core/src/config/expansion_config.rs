use serde::{Deserialize, Serialize};

use super::defaults;
use super::extractor_config::to_strings;

/// Context expander configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Maximum traversal depth from the seed set.
    pub max_hops: usize,
    /// Maximum supporting nodes per bundle.
    pub max_nodes_added: usize,
    /// Score subtracted per hop.
    pub decay_per_hop: f64,
    /// Score added per point of edge-type priority.
    pub priority_weight: f64,
    /// Score used when a primary hit carries none.
    pub default_primary_score: f64,
    /// Hits expanded by `expand_hits`.
    pub top_k_hits: usize,
    /// Query terms that make a DEFINES neighbour mandatory.
    pub definition_triggers: Vec<String>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_hops: defaults::DEFAULT_MAX_HOPS,
            max_nodes_added: defaults::DEFAULT_MAX_NODES_ADDED,
            decay_per_hop: defaults::DEFAULT_DECAY_PER_HOP,
            priority_weight: defaults::DEFAULT_PRIORITY_WEIGHT,
            default_primary_score: defaults::DEFAULT_PRIMARY_SCORE,
            top_k_hits: defaults::DEFAULT_TOP_K_HITS,
            definition_triggers: to_strings(defaults::DEFAULT_DEFINITION_TRIGGERS),
        }
    }
}
