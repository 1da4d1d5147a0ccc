//! Configuration system for lexgraph.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod artifact_config;
pub mod defaults;
pub mod expansion_config;
pub mod extractor_config;
pub mod lexgraph_config;

pub use artifact_config::ArtifactConfig;
pub use expansion_config::ExpansionConfig;
pub use extractor_config::ExtractorConfig;
pub use lexgraph_config::LexGraphConfig;
