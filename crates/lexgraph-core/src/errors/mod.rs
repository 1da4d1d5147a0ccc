//! Error handling for lexgraph.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod graph_error;

pub use config_error::ConfigError;
pub use graph_error::{GraphError, GraphResult};
