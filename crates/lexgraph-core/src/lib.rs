//! # lexgraph-core
//!
//! Foundation crate for the lexgraph citation graph.
//! Defines the graph data model, errors, config, defaults and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::LexGraphConfig;
pub use errors::{ConfigError, GraphError, GraphResult};
pub use models::{
    EdgeTarget, EdgeType, EvidenceBundle, GraphSummary, LegalEdge, LegalNode, MomentLabel,
    MomentRecord, NodeType, NormPathStep, PrimaryHit, SupportingNode,
};
