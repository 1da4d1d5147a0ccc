//! Evidence bundles: the output of a context expansion.

use serde::{Deserialize, Serialize};

use super::edge::EdgeType;
use super::hit::PrimaryHit;
use super::moment::MomentLabel;
use super::node::NodeType;

/// A node surfaced by graph expansion, scored relative to the primary hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingNode {
    pub node_id: String,
    pub node_type: NodeType,
    pub law_key: String,
    pub section_num: Option<u32>,
    pub moment: Option<MomentLabel>,
    pub section_title: String,
    pub text: String,
    /// Type of the edge through which the node was reached.
    pub relation: EdgeType,
    pub hop_distance: usize,
    pub score: f64,
    /// Vertex ids from the primary hit to this node.
    pub path: Vec<String>,
}

/// One traversed edge of the norm path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormPathStep {
    pub from: String,
    pub to: String,
    pub edge_type: EdgeType,
    pub context: String,
    pub external: bool,
}

/// Primary hit plus its budgeted supporting context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvidenceBundle {
    /// `None` only for the empty bundle returned when retrieval found nothing.
    pub primary: Option<PrimaryHit>,
    pub supporting_nodes: Vec<SupportingNode>,
    #[serde(rename = "normipolku")]
    pub norm_path: Vec<NormPathStep>,
}

impl EvidenceBundle {
    /// Bundle for a failed retrieval: no primary, nothing supporting.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bundle holding only the primary hit.
    pub fn for_primary(primary: PrimaryHit) -> Self {
        Self {
            primary: Some(primary),
            supporting_nodes: Vec::new(),
            norm_path: Vec::new(),
        }
    }

    /// True when expansion added nothing.
    pub fn is_empty(&self) -> bool {
        self.supporting_nodes.is_empty() && self.norm_path.is_empty()
    }

    /// Number of supporting nodes reached through `relation`.
    pub fn count_relation(&self, relation: EdgeType) -> usize {
        self.supporting_nodes
            .iter()
            .filter(|n| n.relation == relation)
            .count()
    }
}
