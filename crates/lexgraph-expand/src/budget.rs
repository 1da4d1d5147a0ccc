//! Two-phase selection of supporting nodes under a fixed budget.

use lexgraph_core::{EdgeType, SupportingNode};

/// Pick at most `max_nodes` supporting nodes.
///
/// Phase one reserves the best-scored EXCEPTS node and, when
/// `needs_definition` is set, the best-scored DEFINES node. Other nodes of a
/// reserved relation are dropped. Phase two fills the remaining slots with
/// everything else by edge-type priority, then score. Ties keep discovery
/// order.
pub fn select(
    candidates: Vec<SupportingNode>,
    needs_definition: bool,
    max_nodes: usize,
) -> Vec<SupportingNode> {
    let reserved = |relation: EdgeType| {
        relation == EdgeType::Excepts || (needs_definition && relation == EdgeType::Defines)
    };

    let mut mandatory: Vec<SupportingNode> = Vec::new();
    let mut optional: Vec<SupportingNode> = Vec::new();
    for node in candidates {
        if !reserved(node.relation) {
            optional.push(node);
            continue;
        }
        match mandatory.iter_mut().find(|m| m.relation == node.relation) {
            Some(current) if node.score > current.score => *current = node,
            Some(_) => {}
            None => mandatory.push(node),
        }
    }
    // EXCEPTS before DEFINES.
    mandatory.sort_by_key(|n| std::cmp::Reverse(n.relation.priority()));

    optional.sort_by(|a, b| {
        b.relation
            .priority()
            .cmp(&a.relation.priority())
            .then_with(|| b.score.total_cmp(&a.score))
    });

    mandatory.extend(optional);
    mandatory.truncate(max_nodes);
    mandatory
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexgraph_core::NodeType;

    fn node(id: &str, relation: EdgeType, score: f64) -> SupportingNode {
        SupportingNode {
            node_id: id.to_string(),
            node_type: NodeType::Moment,
            law_key: "laki".to_string(),
            section_num: None,
            moment: None,
            section_title: String::new(),
            text: String::new(),
            relation,
            hop_distance: 1,
            score,
            path: Vec::new(),
        }
    }

    fn ids(nodes: &[SupportingNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.node_id.as_str()).collect()
    }

    #[test]
    fn exception_reserved_even_when_outscored() {
        let mut candidates: Vec<_> = (0..6)
            .map(|i| node(&format!("r{i}"), EdgeType::RefersTo, 0.9))
            .collect();
        candidates.push(node("x", EdgeType::Excepts, 0.1));
        let selected = select(candidates, false, 5);
        assert_eq!(selected.len(), 5);
        assert_eq!(selected[0].node_id, "x");
    }

    #[test]
    fn only_best_exception_kept() {
        let selected = select(
            vec![
                node("x1", EdgeType::Excepts, 0.5),
                node("x2", EdgeType::Excepts, 0.7),
                node("r", EdgeType::RefersTo, 0.6),
            ],
            false,
            5,
        );
        assert_eq!(ids(&selected), vec!["x2", "r"]);
    }

    #[test]
    fn definitions_compete_normally_unless_triggered() {
        let candidates = vec![
            node("d1", EdgeType::Defines, 0.9),
            node("d2", EdgeType::Defines, 0.8),
            node("r", EdgeType::RefersTo, 0.1),
        ];
        assert_eq!(ids(&select(candidates.clone(), false, 5)), vec!["r", "d1", "d2"]);
        assert_eq!(ids(&select(candidates, true, 5)), vec!["d1", "r"]);
    }

    #[test]
    fn zero_budget_selects_nothing() {
        assert!(select(vec![node("x", EdgeType::Excepts, 1.0)], false, 0).is_empty());
    }
}
