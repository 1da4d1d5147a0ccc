//! Neighbour scoring.

use lexgraph_core::config::ExpansionConfig;
use lexgraph_core::EdgeType;

/// `primary - decay_per_hop * hop + priority_weight * priority`, never below 0.
pub fn neighbor_score(
    primary_score: f64,
    relation: EdgeType,
    hop: usize,
    config: &ExpansionConfig,
) -> f64 {
    let score = primary_score - config.decay_per_hop * hop as f64
        + config.priority_weight * f64::from(relation.priority());
    score.max(0.0)
}
