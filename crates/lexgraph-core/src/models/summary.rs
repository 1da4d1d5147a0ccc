//! Per-type counts of a built graph, written next to the artifacts.
//!
//! Compared between corpus versions to catch extraction regressions.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::edge::{EdgeType, LegalEdge};
use super::node::{LegalNode, NodeType};

pub const REFERS_TO_INTERNAL: &str = "REFERS_TO_internal";
pub const REFERS_TO_EXTERNAL: &str = "REFERS_TO_external";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub node_types: BTreeMap<String, usize>,
    /// REFERS_TO is split into internal and external references.
    pub edge_types: BTreeMap<String, usize>,
    /// Distinct law keys, sorted.
    pub laws: Vec<String>,
}

impl GraphSummary {
    pub fn compute(nodes: &[LegalNode], edges: &[LegalEdge]) -> Self {
        let mut node_types: BTreeMap<String, usize> = NodeType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), 0))
            .collect();
        for node in nodes {
            *node_types.entry(node.node_type.as_str().to_string()).or_default() += 1;
        }

        let mut edge_types: BTreeMap<String, usize> = [
            REFERS_TO_INTERNAL,
            REFERS_TO_EXTERNAL,
            EdgeType::Excepts.as_str(),
            EdgeType::Defines.as_str(),
            EdgeType::HasSection.as_str(),
            EdgeType::HasMoment.as_str(),
        ]
        .iter()
        .map(|k| (k.to_string(), 0))
        .collect();
        for edge in edges {
            let key = match edge.edge_type {
                EdgeType::RefersTo if edge.target_kind().is_external() => REFERS_TO_EXTERNAL,
                EdgeType::RefersTo => REFERS_TO_INTERNAL,
                other => other.as_str(),
            };
            *edge_types.entry(key.to_string()).or_default() += 1;
        }

        let laws: BTreeSet<&str> = nodes.iter().map(|n| n.law_key.as_str()).collect();

        Self {
            total_nodes: nodes.len(),
            total_edges: edges.len(),
            node_types,
            edge_types,
            laws: laws.into_iter().map(String::from).collect(),
        }
    }

    /// Count for an edge-type key (`EXCEPTS`, `REFERS_TO_internal`, ...).
    pub fn edge_count(&self, key: &str) -> usize {
        self.edge_types.get(key).copied().unwrap_or(0)
    }
}
