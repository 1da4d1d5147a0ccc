//! The context expander: hit in, evidence bundle out.

use lexgraph_core::config::ExpansionConfig;
use lexgraph_core::{EvidenceBundle, LegalNode, PrimaryHit, SupportingNode};
use lexgraph_graph::{GraphIndex, VertexId};
use rayon::prelude::*;
use tracing::debug;

use crate::budget;
use crate::scoring::neighbor_score;
use crate::traversal::{self, Candidate};

/// Expands retrieval hits into evidence bundles against a [`GraphIndex`].
///
/// Holds only configuration; every call is a pure function of the hit, the
/// query, and the immutable index.
#[derive(Debug, Clone)]
pub struct ContextExpander {
    config: ExpansionConfig,
    triggers: Vec<String>,
}

impl ContextExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        let triggers = config
            .definition_triggers
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { config, triggers }
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Whether `query` asks for a definition.
    pub fn needs_definition(&self, query: Option<&str>) -> bool {
        let Some(query) = query else {
            return false;
        };
        let query = query.to_lowercase();
        self.triggers.iter().any(|t| query.contains(t.as_str()))
    }

    /// Expand one hit. An id missing from the index yields a bundle with the
    /// primary and nothing else.
    pub fn expand(&self, index: &GraphIndex, hit: &PrimaryHit, query: Option<&str>) -> EvidenceBundle {
        let mut bundle = EvidenceBundle::for_primary(hit.clone());
        let Some(primary) = index.vertex(&hit.node_id).filter(|&v| index.vertex_node(v).is_some())
        else {
            debug!(node_id = %hit.node_id, "primary hit not in graph");
            return bundle;
        };

        let seeds = seeds(index, &hit.node_id, primary);
        let traversal = traversal::collect(index, &hit.node_id, &seeds, self.config.max_hops);

        let primary_score = hit.score.unwrap_or(self.config.default_primary_score);
        let candidates: Vec<SupportingNode> = traversal
            .candidates
            .iter()
            .filter_map(|candidate| {
                let node = index.vertex_node(candidate.vertex)?;
                Some(self.supporting(node, candidate, primary_score))
            })
            .collect();
        let reached = candidates.len();

        bundle.supporting_nodes = budget::select(
            candidates,
            self.needs_definition(query),
            self.config.max_nodes_added,
        );
        bundle.norm_path = traversal.norm_path;

        debug!(
            node_id = %hit.node_id,
            seeds = seeds.len(),
            reached,
            selected = bundle.supporting_nodes.len(),
            path_edges = bundle.norm_path.len(),
            "context expanded"
        );
        bundle
    }

    /// Expand when retrieval found something; the empty bundle otherwise.
    pub fn expand_optional(
        &self,
        index: &GraphIndex,
        hit: Option<&PrimaryHit>,
        query: Option<&str>,
    ) -> EvidenceBundle {
        match hit {
            Some(hit) => self.expand(index, hit, query),
            None => EvidenceBundle::empty(),
        }
    }

    /// Expand the first `top_k_hits` hits in parallel, preserving hit order.
    pub fn expand_hits(
        &self,
        index: &GraphIndex,
        hits: &[PrimaryHit],
        query: Option<&str>,
    ) -> Vec<EvidenceBundle> {
        let top = &hits[..hits.len().min(self.config.top_k_hits)];
        top.par_iter()
            .map(|hit| self.expand(index, hit, query))
            .collect()
    }

    fn supporting(&self, node: &LegalNode, candidate: &Candidate<'_>, primary_score: f64) -> SupportingNode {
        let relation = candidate.edge.edge_type;
        SupportingNode {
            node_id: candidate.node_id.to_string(),
            node_type: node.node_type,
            law_key: node.law_key.clone(),
            section_num: node.section_num,
            moment: node.moment.clone(),
            section_title: node.section_title.clone(),
            text: node.text.clone(),
            relation,
            hop_distance: candidate.hop,
            score: neighbor_score(primary_score, relation, candidate.hop, &self.config),
            path: candidate.path.clone(),
        }
    }
}

impl Default for ContextExpander {
    fn default() -> Self {
        Self::new(ExpansionConfig::default())
    }
}

/// The primary's section siblings, or the primary alone.
fn seeds(index: &GraphIndex, node_id: &str, primary: VertexId) -> Vec<VertexId> {
    let siblings: Vec<VertexId> = index
        .section_siblings(node_id)
        .into_iter()
        .filter_map(|id| index.vertex(id))
        .collect();
    if siblings.is_empty() {
        vec![primary]
    } else {
        siblings
    }
}
