//! Build- and load-fatal graph errors.
//!
//! Extraction and expansion never produce these: unparseable text and unknown
//! nodes degrade to empty results instead.

/// Errors that abort a graph build or an index load.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node_id in corpus: {node_id}")]
    DuplicateNodeId { node_id: String },

    #[error("moment record {node_id:?} is missing required field `{field}`")]
    MissingField { node_id: String, field: &'static str },

    #[error("corpus parse error in {path} line {line}: {message}")]
    CorpusParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("graph artifact not found: {path}")]
    ArtifactMissing { path: String },

    #[error("graph artifact parse error in {path} line {line}: {message}")]
    ArtifactParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error(
        "graph artifacts disagree with {path}: expected {expected_nodes} nodes and \
         {expected_edges} edges, read {nodes} and {edges}"
    )]
    ArtifactMismatch {
        path: String,
        expected_nodes: usize,
        expected_edges: usize,
        nodes: usize,
        edges: usize,
    },

    #[error("graph artifact contains no nodes: {path}")]
    EmptyGraph { path: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
