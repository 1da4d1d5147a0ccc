//! Node-id scheme and sentinel ids.
//!
//! Moment ids have the shape `<law_id>:<version>:<section>:<moment>`.
//! Edges may also point at sentinels that are not moment nodes:
//!
//! | Sentinel | Meaning |
//! |---|---|
//! | `external:<law_id>` | reference to another statute |
//! | `definition:<node_id>` | the node defines a term |
//! | `<law_id>:<version>:<section>:*` | section-level citation, no moment |
//! | `<law_id>:*:<section>:<moment>` | citation whose version is unknown |
//! | `law:<law_key>`, `section:<law_key>:<n>` | hierarchy vertices |

use std::fmt::Display;

pub const EXTERNAL_PREFIX: &str = "external:";
pub const DEFINITION_PREFIX: &str = "definition:";
pub const LAW_PREFIX: &str = "law:";
pub const SECTION_PREFIX: &str = "section:";

const SECTION_WILDCARD_SUFFIX: &str = ":*";
const VERSION_WILDCARD_INFIX: &str = ":*:";

pub fn moment_id(law_id: &str, version: &str, section: u32, moment: impl Display) -> String {
    format!("{law_id}:{version}:{section}:{moment}")
}

pub fn section_wildcard_id(law_id: &str, version: &str, section: u32) -> String {
    format!("{law_id}:{version}:{section}{SECTION_WILDCARD_SUFFIX}")
}

pub fn version_wildcard_id(law_id: &str, section: u32, moment: impl Display) -> String {
    format!("{law_id}:*:{section}:{moment}")
}

pub fn external_id(law_id: &str) -> String {
    format!("{EXTERNAL_PREFIX}{law_id}")
}

pub fn definition_id(node_id: &str) -> String {
    format!("{DEFINITION_PREFIX}{node_id}")
}

pub fn law_vertex_id(law_key: &str) -> String {
    format!("{LAW_PREFIX}{law_key}")
}

pub fn section_vertex_id(law_key: &str, section: u32) -> String {
    format!("{SECTION_PREFIX}{law_key}:{section}")
}

/// The id with its trailing `:<moment>` segment removed.
///
/// `410/2015:fin@20230780:6:1` → `410/2015:fin@20230780:6`.
pub fn section_prefix(node_id: &str) -> Option<&str> {
    node_id.rsplit_once(':').map(|(prefix, _)| prefix)
}

/// What an edge endpoint id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTarget<'a> {
    /// A concrete moment node id (which may or may not exist).
    Node(&'a str),
    /// Another statute, by law id.
    External(&'a str),
    /// The defining node.
    Definition(&'a str),
    /// A whole section; carries the section prefix without the `:*`.
    SectionWildcard(&'a str),
    /// A moment whose version could not be resolved.
    VersionWildcard(&'a str),
    /// A `law:` or `section:` hierarchy vertex.
    Hierarchy(&'a str),
}

impl<'a> EdgeTarget<'a> {
    pub fn classify(id: &'a str) -> Self {
        if let Some(law_id) = id.strip_prefix(EXTERNAL_PREFIX) {
            Self::External(law_id)
        } else if let Some(node_id) = id.strip_prefix(DEFINITION_PREFIX) {
            Self::Definition(node_id)
        } else if id.starts_with(LAW_PREFIX) || id.starts_with(SECTION_PREFIX) {
            Self::Hierarchy(id)
        } else if let Some(prefix) = id.strip_suffix(SECTION_WILDCARD_SUFFIX) {
            Self::SectionWildcard(prefix)
        } else if id.contains(VERSION_WILDCARD_INFIX) {
            Self::VersionWildcard(id)
        } else {
            Self::Node(id)
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}
