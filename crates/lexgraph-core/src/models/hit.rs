//! The primary retrieval hit that seeds a context expansion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::moment::MomentLabel;

/// Top retrieval result, produced by an external retrieval component.
///
/// Fields the graph does not use are kept in `extra` so the hit is echoed
/// back to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryHit {
    pub node_id: String,
    /// Query-dependent similarity. Absent scores fall back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub law_key: String,
    #[serde(default)]
    pub section_num: Option<u32>,
    #[serde(default)]
    pub moment: Option<MomentLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PrimaryHit {
    /// A hit carrying only an id and a score.
    pub fn new(node_id: impl Into<String>, score: f64) -> Self {
        Self {
            node_id: node_id.into(),
            score: Some(score),
            law_key: String::new(),
            section_num: None,
            moment: None,
            section_title: None,
            text: String::new(),
            extra: Map::new(),
        }
    }
}
