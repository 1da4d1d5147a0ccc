//! # lexgraph-graph
//!
//! Batch construction of the statute citation graph, its JSONL artifacts, and
//! the immutable in-memory index the context expander traverses.

pub mod artifacts;
pub mod builder;
pub mod index;

pub use artifacts::{load_artifacts, read_corpus_dir, read_corpus_file, write_artifacts};
pub use builder::{BuiltGraph, GraphBuilder};
pub use index::{GraphIndex, VertexId};
