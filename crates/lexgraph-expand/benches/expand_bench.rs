use criterion::{criterion_group, criterion_main, Criterion};

use lexgraph_core::config::{ExpansionConfig, ExtractorConfig};
use lexgraph_core::PrimaryHit;
use lexgraph_expand::ContextExpander;
use lexgraph_graph::{GraphBuilder, GraphIndex};

/// Synthetic act: 400 sections, 3 moments each, chained references and exceptions.
fn build_index() -> GraphIndex {
    let corpus = test_fixtures::synthetic_corpus(400, 3);
    let graph = GraphBuilder::from_config(&ExtractorConfig::default())
        .unwrap()
        .build(&corpus)
        .unwrap();
    assert!(graph.edge_count() > 2000, "got {} edges", graph.edge_count());
    GraphIndex::load(graph.nodes, graph.edges).unwrap()
}

fn bench_expand_single(c: &mut Criterion) {
    let index = build_index();
    let expander = ContextExpander::new(ExpansionConfig::default());
    let hit = PrimaryHit::new(test_fixtures::node_id(200, 2), 0.8);

    c.bench_function("expand_2_hops_1200_moments", |b| {
        b.iter(|| {
            expander.expand(&index, &hit, Some("tarkoitetaan"));
        });
    });
}

fn bench_expand_hits(c: &mut Criterion) {
    let index = build_index();
    let expander = ContextExpander::new(ExpansionConfig {
        max_hops: 3,
        top_k_hits: 8,
        ..ExpansionConfig::default()
    });
    let hits: Vec<_> = (1..=8)
        .map(|s| PrimaryHit::new(test_fixtures::node_id(s * 40, 1), 0.7))
        .collect();

    c.bench_function("expand_hits_8_parallel_3_hops", |b| {
        b.iter(|| {
            expander.expand_hits(&index, &hits, None);
        });
    });
}

criterion_group!(benches, bench_expand_single, bench_expand_hits);
criterion_main!(benches);
