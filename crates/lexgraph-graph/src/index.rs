//! Read-only, index-addressed view of a built graph.
//!
//! One petgraph vertex per distinct endpoint id (moment nodes, sentinels and
//! hierarchy vertices alike). Edge weights are positions in the edge arena,
//! so neighbour lists can be returned in edge insertion order.

use std::collections::HashMap;
use std::path::Path;

use lexgraph_core::config::ArtifactConfig;
use lexgraph_core::models::node_id::{self, EdgeTarget};
use lexgraph_core::{GraphError, GraphResult, LegalEdge, LegalNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::info;

use crate::artifacts::load_artifacts;

/// Vertex handle into a [`GraphIndex`].
pub type VertexId = NodeIndex;

#[derive(Debug, Clone)]
struct Vertex {
    id: String,
    /// Position in the node arena, for moment vertices.
    node: Option<usize>,
}

/// The immutable citation graph served to the context expander.
#[derive(Debug)]
pub struct GraphIndex {
    graph: DiGraph<Vertex, usize>,
    vertex_by_id: HashMap<String, VertexId>,
    nodes: Vec<LegalNode>,
    edges: Vec<LegalEdge>,
    /// `(law_key, section_num)` → node positions, corpus order.
    siblings: HashMap<(String, u32), Vec<usize>>,
    /// Section prefix → first moment of that section.
    first_moment: HashMap<String, usize>,
}

impl GraphIndex {
    /// Index nodes and edges. Fails on duplicate node ids.
    pub fn load(nodes: Vec<LegalNode>, edges: Vec<LegalEdge>) -> GraphResult<Self> {
        let mut index = Self {
            graph: DiGraph::with_capacity(nodes.len(), edges.len()),
            vertex_by_id: HashMap::with_capacity(nodes.len()),
            nodes: Vec::new(),
            edges: Vec::new(),
            siblings: HashMap::new(),
            first_moment: HashMap::new(),
        };

        for (position, node) in nodes.iter().enumerate() {
            if index.vertex_by_id.contains_key(&node.node_id) {
                return Err(GraphError::DuplicateNodeId {
                    node_id: node.node_id.clone(),
                });
            }
            let vertex = index.graph.add_node(Vertex {
                id: node.node_id.clone(),
                node: Some(position),
            });
            index.vertex_by_id.insert(node.node_id.clone(), vertex);

            if let Some(section) = node.section_num {
                index
                    .siblings
                    .entry((node.law_key.clone(), section))
                    .or_default()
                    .push(position);
            }
            if let Some(prefix) = node_id::section_prefix(&node.node_id) {
                index.first_moment.entry(prefix.to_string()).or_insert(position);
            }
        }

        for (position, edge) in edges.iter().enumerate() {
            let source = index.ensure_vertex(&edge.source);
            let target = index.ensure_vertex(&edge.target);
            index.graph.add_edge(source, target, position);
        }

        index.nodes = nodes;
        index.edges = edges;

        info!(
            nodes = index.nodes.len(),
            edges = index.edges.len(),
            vertices = index.graph.node_count(),
            "graph index loaded"
        );
        Ok(index)
    }

    /// Load `nodes.jsonl` and `edges.jsonl` from `dir`.
    pub fn open(dir: &Path, config: &ArtifactConfig) -> GraphResult<Self> {
        let (nodes, edges) = load_artifacts(dir, config)?;
        Self::load(nodes, edges)
    }

    fn ensure_vertex(&mut self, id: &str) -> VertexId {
        if let Some(&vertex) = self.vertex_by_id.get(id) {
            return vertex;
        }
        let vertex = self.graph.add_node(Vertex {
            id: id.to_string(),
            node: None,
        });
        self.vertex_by_id.insert(id.to_string(), vertex);
        vertex
    }

    pub fn node(&self, node_id: &str) -> Option<&LegalNode> {
        self.vertex(node_id).and_then(|v| self.vertex_node(v))
    }

    pub fn nodes(&self) -> &[LegalNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LegalEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Moment nodes plus every sentinel and hierarchy endpoint.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Outgoing edges of `id`, insertion order.
    pub fn neighbors_out(&self, id: &str) -> Vec<&LegalEdge> {
        self.vertex(id)
            .map(|v| self.out_edges(v).into_iter().map(|(_, e)| e).collect())
            .unwrap_or_default()
    }

    /// Incoming edges of `id`, insertion order.
    pub fn neighbors_in(&self, id: &str) -> Vec<&LegalEdge> {
        self.vertex(id)
            .map(|v| self.in_edges(v).into_iter().map(|(_, e)| e).collect())
            .unwrap_or_default()
    }

    /// Node ids sharing `(law_key, section_num)` with `id`, the node itself
    /// included, corpus order. Empty for unknown ids.
    pub fn section_siblings(&self, id: &str) -> Vec<&str> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        let Some(section) = node.section_num else {
            return Vec::new();
        };
        self.siblings
            .get(&(node.law_key.clone(), section))
            .map(|positions| {
                positions
                    .iter()
                    .map(|&p| self.nodes[p].node_id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn vertex(&self, id: &str) -> Option<VertexId> {
        self.vertex_by_id.get(id).copied()
    }

    pub fn vertex_id(&self, vertex: VertexId) -> Option<&str> {
        self.graph.node_weight(vertex).map(|v| v.id.as_str())
    }

    /// The moment node behind a vertex; `None` for sentinels.
    pub fn vertex_node(&self, vertex: VertexId) -> Option<&LegalNode> {
        let position = self.graph.node_weight(vertex)?.node?;
        self.nodes.get(position)
    }

    /// `(target vertex, edge)` pairs leaving `vertex`, insertion order.
    pub fn out_edges(&self, vertex: VertexId) -> Vec<(VertexId, &LegalEdge)> {
        self.adjacent(vertex, Direction::Outgoing)
    }

    /// `(source vertex, edge)` pairs entering `vertex`, insertion order.
    pub fn in_edges(&self, vertex: VertexId) -> Vec<(VertexId, &LegalEdge)> {
        self.adjacent(vertex, Direction::Incoming)
    }

    /// The `<section prefix>:*` vertex of a moment vertex, if any edge
    /// targets it.
    pub fn section_wildcard(&self, vertex: VertexId) -> Option<VertexId> {
        let node = self.vertex_node(vertex)?;
        let prefix = node_id::section_prefix(&node.node_id)?;
        self.vertex(&format!("{prefix}:*"))
    }

    fn adjacent(&self, vertex: VertexId, direction: Direction) -> Vec<(VertexId, &LegalEdge)> {
        let mut found: Vec<(usize, VertexId)> = self
            .graph
            .edges_directed(vertex, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (*e.weight(), other)
            })
            .collect();
        // petgraph yields the most recent edge first.
        found.sort_unstable_by_key(|&(position, _)| position);
        found
            .into_iter()
            .filter_map(|(position, other)| self.edges.get(position).map(|e| (other, e)))
            .collect()
    }

    /// The moment vertex an edge endpoint stands for.
    ///
    /// Node ids resolve to themselves when the node exists; section
    /// wildcards resolve to the first moment of the section. Externals,
    /// definitions, version wildcards, hierarchy vertices and unknown ids
    /// resolve to nothing.
    pub fn resolve(&self, id: &str) -> Option<VertexId> {
        match EdgeTarget::classify(id) {
            EdgeTarget::Node(node_id) => self
                .vertex(node_id)
                .filter(|&v| self.vertex_node(v).is_some()),
            EdgeTarget::SectionWildcard(prefix) => {
                let position = *self.first_moment.get(prefix)?;
                self.vertex(&self.nodes[position].node_id)
            }
            EdgeTarget::External(_)
            | EdgeTarget::Definition(_)
            | EdgeTarget::VersionWildcard(_)
            | EdgeTarget::Hierarchy(_) => None,
        }
    }
}
