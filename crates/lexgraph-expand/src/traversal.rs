//! Breadth-first neighbourhood collection from a set of seed moments.

use std::collections::{HashSet, VecDeque};

use lexgraph_core::{EdgeType, LegalEdge, NormPathStep};
use lexgraph_graph::{GraphIndex, VertexId};

/// A moment reached during traversal.
#[derive(Debug, Clone)]
pub struct Candidate<'g> {
    pub vertex: VertexId,
    pub node_id: &'g str,
    /// The edge the moment was first reached through.
    pub edge: &'g LegalEdge,
    pub hop: usize,
    /// Vertex ids from the primary hit to this moment.
    pub path: Vec<String>,
}

/// Everything reached within the hop limit.
#[derive(Debug, Clone, Default)]
pub struct Traversal<'g> {
    /// Moments in discovery order.
    pub candidates: Vec<Candidate<'g>>,
    /// Every traversed edge in discovery order, sentinels included.
    pub norm_path: Vec<NormPathStep>,
}

/// Walk from `seeds` up to `max_hops`.
///
/// Follows outgoing semantic edges and incoming EXCEPTS edges (including
/// those addressed to the whole section), never hierarchy edges. Seeds count as visited and are not reported. Endpoints
/// that resolve to no moment (externals, definitions, unresolved wildcards)
/// are recorded in the norm path once and not expanded further.
pub fn collect<'g>(
    index: &'g GraphIndex,
    primary_id: &str,
    seeds: &[VertexId],
    max_hops: usize,
) -> Traversal<'g> {
    let mut traversal = Traversal::default();

    let mut visited: HashSet<VertexId> = seeds.iter().copied().collect();
    let mut queue: VecDeque<(VertexId, usize, Vec<String>)> = seeds
        .iter()
        .map(|&seed| (seed, 0, vec![primary_id.to_string()]))
        .collect();

    while let Some((current, hop, path)) = queue.pop_front() {
        if hop >= max_hops {
            continue;
        }

        let outgoing = index
            .out_edges(current)
            .into_iter()
            .filter(|(_, edge)| !edge.edge_type.is_hierarchical())
            .map(|(other, edge)| (other, edge, false));
        let section_level = index
            .section_wildcard(current)
            .map(|wildcard| index.in_edges(wildcard))
            .unwrap_or_default();
        let incoming = index
            .in_edges(current)
            .into_iter()
            .chain(section_level)
            .filter(|(_, edge)| edge.edge_type == EdgeType::Excepts)
            .map(|(other, edge)| (other, edge, true));

        for (raw, edge, reversed) in outgoing.chain(incoming) {
            let Some(raw_id) = index.vertex_id(raw) else {
                continue;
            };

            let Some(neighbor) = index.resolve(raw_id) else {
                if visited.insert(raw) {
                    traversal
                        .norm_path
                        .push(step(edge, raw_id, edge.target_kind().is_external()));
                }
                continue;
            };
            if !visited.insert(neighbor) {
                continue;
            }
            let Some(node_id) = index.vertex_id(neighbor) else {
                continue;
            };

            // An incoming EXCEPTS edge is recorded as written: exception → current.
            let to = if reversed {
                edge.target.as_str()
            } else {
                node_id
            };
            traversal.norm_path.push(step(edge, to, false));

            let mut next_path = path.clone();
            next_path.push(node_id.to_string());
            traversal.candidates.push(Candidate {
                vertex: neighbor,
                node_id,
                edge,
                hop: hop + 1,
                path: next_path.clone(),
            });
            queue.push_back((neighbor, hop + 1, next_path));
        }
    }

    traversal
}

fn step(edge: &LegalEdge, to: &str, external: bool) -> NormPathStep {
    NormPathStep {
        from: edge.source.clone(),
        to: to.to_string(),
        edge_type: edge.edge_type,
        context: edge.context.clone(),
        external,
    }
}
