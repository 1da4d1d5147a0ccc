//! # lexgraph-expand
//!
//! Context expansion: given a retrieval hit, walk the citation graph from the
//! hit's section and return a small, scored, explainable set of related
//! moments. Exceptions are always surfaced first.

pub mod budget;
pub mod engine;
pub mod explain;
pub mod scoring;
pub mod traversal;

pub use engine::ContextExpander;
pub use explain::format_norm_path;
