//! Graph index queries over the fixture act.

use lexgraph_core::config::ExtractorConfig;
use lexgraph_core::{EdgeType, GraphError, LegalEdge, LegalNode, MomentLabel, NodeType};
use lexgraph_graph::{GraphBuilder, GraphIndex};
use test_fixtures::{node_id, LAW_ID, OLD_VERSION, VERSION};

fn fixture_index() -> GraphIndex {
    let graph = GraphBuilder::from_config(&ExtractorConfig::default())
        .unwrap()
        .build(&test_fixtures::load_corpus())
        .unwrap();
    GraphIndex::load(graph.nodes, graph.edges).unwrap()
}

fn plain_node(id: &str, section: u32, moment: u32) -> LegalNode {
    LegalNode {
        node_id: id.to_string(),
        node_type: NodeType::Moment,
        law_key: "laki".to_string(),
        section_num: Some(section),
        moment: Some(MomentLabel::Number(moment)),
        section_title: String::new(),
        text: String::new(),
    }
}

#[test]
fn counts() {
    let index = fixture_index();
    assert_eq!(index.node_count(), test_fixtures::NODE_COUNT);
    assert_eq!(
        index.edge_count(),
        test_fixtures::SEMANTIC_EDGE_COUNT + test_fixtures::HIERARCHY_EDGE_COUNT
    );
    // 12 moments, 6 sentinels, 1 law vertex, 6 section vertices.
    assert_eq!(index.vertex_count(), 12 + 6 + 1 + 6);
}

#[test]
fn node_lookup() {
    let index = fixture_index();
    let node = index.node(&node_id(14, 2)).unwrap();
    assert_eq!(node.section_num, Some(14));
    assert!(index.node("external:1336/1997").is_none());
    assert!(index.node("no-such-node").is_none());
}

#[test]
fn outgoing_and_incoming_neighbours() {
    let index = fixture_index();
    let out: Vec<_> = index
        .neighbors_out(&node_id(110, 2))
        .iter()
        .map(|e| (e.edge_type, e.target.clone()))
        .collect();
    assert_eq!(
        out,
        vec![
            (EdgeType::RefersTo, node_id(110, 1)),
            (EdgeType::RefersTo, format!("{LAW_ID}:{VERSION}:14:*")),
        ]
    );

    let incoming: Vec<_> = index
        .neighbors_in(&node_id(110, 1))
        .iter()
        .map(|e| (e.edge_type, e.source.clone()))
        .collect();
    assert_eq!(
        incoming,
        vec![
            (EdgeType::RefersTo, node_id(14, 1)),
            (EdgeType::RefersTo, node_id(110, 2)),
            (EdgeType::HasMoment, "section:kuntalaki_410_2015:110".to_string()),
        ]
    );
}

#[test]
fn unknown_id_has_no_neighbours() {
    let index = fixture_index();
    assert!(index.neighbors_out("nope").is_empty());
    assert!(index.neighbors_in("nope").is_empty());
    assert!(index.section_siblings("nope").is_empty());
}

#[test]
fn section_siblings_in_corpus_order() {
    let index = fixture_index();
    assert_eq!(
        index.section_siblings(&node_id(6, 3)),
        vec![
            node_id(6, 1).as_str(),
            node_id(6, 2).as_str(),
            node_id(6, 3).as_str()
        ]
    );
}

#[test]
fn resolution_of_edge_targets() {
    let index = fixture_index();
    let wildcard = index.resolve(&format!("{LAW_ID}:{VERSION}:30:*")).unwrap();
    assert_eq!(index.vertex_id(wildcard), Some(node_id(30, 1).as_str()));

    let old = format!("{LAW_ID}:{OLD_VERSION}:40:1");
    assert_eq!(index.resolve(&old), index.vertex(&old));

    assert!(index.resolve(&format!("{LAW_ID}:{VERSION}:31:*")).is_none());
    assert!(index.resolve(&format!("{LAW_ID}:*:90:2")).is_none());
    assert!(index.resolve("external:1336/1997").is_none());
    assert!(index.resolve("section:kuntalaki_410_2015:6").is_none());
}

#[test]
fn sentinel_vertices_carry_no_node() {
    let index = fixture_index();
    let external = index.vertex("external:1336/1997").unwrap();
    assert!(index.vertex_node(external).is_none());
    let moment = index.vertex(&node_id(2, 1)).unwrap();
    assert_eq!(index.vertex_node(moment).unwrap().node_id, node_id(2, 1));
}

#[test]
fn duplicate_node_rejected_on_load() {
    let nodes = vec![plain_node("a:v:1:1", 1, 1), plain_node("a:v:1:1", 1, 1)];
    assert!(matches!(
        GraphIndex::load(nodes, Vec::new()),
        Err(GraphError::DuplicateNodeId { .. })
    ));
}

#[test]
fn edges_to_unknown_ids_still_load() {
    let nodes = vec![plain_node("a:v:1:1", 1, 1)];
    let edges = vec![LegalEdge::new("a:v:1:1", "a:v:9:9", EdgeType::RefersTo, "9 §")];
    let index = GraphIndex::load(nodes, edges).unwrap();
    assert_eq!(index.vertex_count(), 2);
    assert!(index.resolve("a:v:9:9").is_none());
}

#[test]
fn index_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphIndex>();
}
