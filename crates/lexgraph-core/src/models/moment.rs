//! Normalized statute-moment records, the input of a graph build.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A moment number as it appears in the corpus.
///
/// Most corpora store plain integers, some store labels such as `"3a"`.
/// Both serialize back in their original shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MomentLabel {
    Number(u32),
    Label(String),
}

impl MomentLabel {
    /// Numeric value, if the label is (or parses as) a plain number.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Label(s) => s.trim().parse().ok(),
        }
    }

    /// Whether this label denotes moment `n`. Compares textual forms.
    pub fn is_number(&self, n: u32) -> bool {
        match self {
            Self::Number(m) => *m == n,
            Self::Label(s) => s.trim() == n.to_string(),
        }
    }
}

impl fmt::Display for MomentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl From<u32> for MomentLabel {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for MomentLabel {
    fn from(s: &str) -> Self {
        Self::Label(s.to_string())
    }
}

/// One moment (numbered subsection) of a statute, as produced by the
/// normalization pipeline. Unknown fields in the source JSON are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentRecord {
    /// Globally unique id, e.g. `410/2015:fin@20230780:6:1`.
    pub node_id: String,
    /// Statute number, e.g. `410/2015`.
    pub law_id: String,
    /// Internal law key, e.g. `kuntalaki_410_2015`.
    pub law_key: String,
    /// Consolidated version of the statute, e.g. `fin@20230780`.
    pub finlex_version: String,
    pub section_num: u32,
    pub moment: MomentLabel,
    pub text: String,
    #[serde(default)]
    pub section_title: String,
    /// Human-readable law name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// Section id with suffix, e.g. `110a`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_force: Option<bool>,
}

impl MomentRecord {
    /// Name of the first required string field that is blank, if any.
    ///
    /// `text` may legitimately be empty (repealed moments); ids may not.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("node_id", &self.node_id),
            ("law_id", &self.law_id),
            ("law_key", &self.law_key),
            ("finlex_version", &self.finlex_version),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}
