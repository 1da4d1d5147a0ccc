//! Graph data model: moment records in, nodes and edges stored, evidence bundles out.

pub mod bundle;
pub mod edge;
pub mod hit;
pub mod moment;
pub mod node;
pub mod node_id;
pub mod summary;

pub use bundle::{EvidenceBundle, NormPathStep, SupportingNode};
pub use edge::{EdgeType, LegalEdge};
pub use hit::PrimaryHit;
pub use moment::{MomentLabel, MomentRecord};
pub use node::{LegalNode, NodeType};
pub use node_id::EdgeTarget;
pub use summary::GraphSummary;
