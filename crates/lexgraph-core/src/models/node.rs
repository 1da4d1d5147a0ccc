//! Graph vertices. The builder emits one MOMENT node per moment record.

use serde::{Deserialize, Serialize};

use super::moment::{MomentLabel, MomentRecord};

/// Level of the statute hierarchy a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Law,
    Section,
    Moment,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [Self::Law, Self::Section, Self::Moment];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Law => "LAW",
            Self::Section => "SECTION",
            Self::Moment => "MOMENT",
        }
    }
}

/// A node of the citation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalNode {
    pub node_id: String,
    pub node_type: NodeType,
    pub law_key: String,
    pub section_num: Option<u32>,
    pub moment: Option<MomentLabel>,
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub text: String,
}

impl LegalNode {
    /// The MOMENT node for a corpus record.
    pub fn from_moment(record: &MomentRecord) -> Self {
        Self {
            node_id: record.node_id.clone(),
            node_type: NodeType::Moment,
            law_key: record.law_key.clone(),
            section_num: Some(record.section_num),
            moment: Some(record.moment.clone()),
            section_title: record.section_title.clone(),
            text: record.text.clone(),
        }
    }
}
