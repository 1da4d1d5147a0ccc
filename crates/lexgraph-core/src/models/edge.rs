//! Directed relations between node ids (or sentinel ids).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node_id::EdgeTarget;

/// The five edge types of the citation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    /// Source cites target.
    RefersTo,
    /// Source carves out an exception to target.
    Excepts,
    /// Source defines a term.
    Defines,
    /// Law contains section.
    HasSection,
    /// Section contains moment.
    HasMoment,
}

impl EdgeType {
    pub const ALL: [EdgeType; 5] = [
        Self::RefersTo,
        Self::Excepts,
        Self::Defines,
        Self::HasSection,
        Self::HasMoment,
    ];

    /// Expansion priority. Higher wins when the budget is tight.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Excepts => 3,
            Self::RefersTo => 2,
            Self::Defines => 1,
            Self::HasSection | Self::HasMoment => 0,
        }
    }

    /// Hierarchy edges exist only for structural lookups and are never traversed.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::HasSection | Self::HasMoment)
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RefersTo => "REFERS_TO",
            Self::Excepts => "EXCEPTS",
            Self::Defines => "DEFINES",
            Self::HasSection => "HAS_SECTION",
            Self::HasMoment => "HAS_MOMENT",
        }
    }

    /// Parse from the wire name.
    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge of the citation graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalEdge {
    pub source: String,
    pub target: String,
    pub edge_type: EdgeType,
    /// The literal text span that triggered the edge.
    #[serde(default)]
    pub context: String,
}

impl LegalEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        edge_type: EdgeType,
        context: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
            context: context.into(),
        }
    }

    /// Classification of the target id.
    pub fn target_kind(&self) -> EdgeTarget<'_> {
        EdgeTarget::classify(&self.target)
    }
}
