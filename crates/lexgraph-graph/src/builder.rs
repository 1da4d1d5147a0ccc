//! Graph builder: moment records in, nodes and typed edges out.

use std::collections::{BTreeMap, HashMap, HashSet};

use lexgraph_core::config::ExtractorConfig;
use lexgraph_core::models::node_id::{self, EdgeTarget};
use lexgraph_core::{
    ConfigError, EdgeType, GraphError, GraphResult, GraphSummary, LegalEdge, LegalNode,
    MomentRecord,
};
use lexgraph_extract::{Citation, ReferenceExtractor};
use tracing::{debug, error, info};

/// The output of one build: MOMENT nodes in corpus order, edges in
/// emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltGraph {
    pub nodes: Vec<LegalNode>,
    pub edges: Vec<LegalEdge>,
}

impl BuiltGraph {
    pub fn summary(&self) -> GraphSummary {
        GraphSummary::compute(&self.nodes, &self.edges)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Builds the citation graph from a normalized corpus.
#[derive(Debug)]
pub struct GraphBuilder {
    extractor: ReferenceExtractor,
}

impl GraphBuilder {
    pub fn new(extractor: ReferenceExtractor) -> Self {
        Self { extractor }
    }

    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(ReferenceExtractor::new(config)?))
    }

    pub fn extractor(&self) -> &ReferenceExtractor {
        &self.extractor
    }

    /// Build the graph. Fails on the first duplicate `node_id` or record with
    /// a blank required field; nothing is returned for a failed build.
    pub fn build(&self, moments: &[MomentRecord]) -> GraphResult<BuiltGraph> {
        validate_corpus(moments)?;
        let versions = VersionTable::new(moments);

        let mut graph = BuiltGraph {
            nodes: Vec::with_capacity(moments.len()),
            edges: Vec::new(),
        };
        let mut unresolved = 0usize;

        for record in moments {
            graph.nodes.push(LegalNode::from_moment(record));

            let extraction = self.extractor.extract(&record.text);

            for citation in &extraction.citations {
                if citation.is_self_citation(record.section_num, &record.moment) {
                    continue;
                }
                let target = versions.target_for(record, citation);
                if matches!(EdgeTarget::classify(&target), EdgeTarget::VersionWildcard(_)) {
                    unresolved += 1;
                    debug!(
                        source = %record.node_id,
                        target = %target,
                        "citation target not found under any version"
                    );
                }
                graph.edges.push(LegalEdge::new(
                    &record.node_id,
                    target,
                    extraction.relation_for(citation),
                    &citation.matched_text,
                ));
            }

            for reference in &extraction.external_refs {
                graph.edges.push(LegalEdge::new(
                    &record.node_id,
                    node_id::external_id(&reference.law_id),
                    EdgeType::RefersTo,
                    &reference.context,
                ));
            }

            if let Some(signal) = extraction.definition_signal() {
                graph.edges.push(LegalEdge::new(
                    &record.node_id,
                    node_id::definition_id(&record.node_id),
                    EdgeType::Defines,
                    signal,
                ));
            }

            debug!(
                node_id = %record.node_id,
                citations = extraction.citations.len(),
                external = extraction.external_refs.len(),
                defines = extraction.is_definition_context(),
                "extracted moment"
            );
        }

        let semantic_edges = graph.edges.len();
        graph.edges.extend(hierarchy_edges(moments));

        info!(
            nodes = graph.nodes.len(),
            semantic_edges,
            hierarchy_edges = graph.edges.len() - semantic_edges,
            unresolved,
            "citation graph built"
        );
        Ok(graph)
    }
}

fn validate_corpus(moments: &[MomentRecord]) -> GraphResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(moments.len());
    for record in moments {
        if let Some(field) = record.missing_field() {
            error!(node_id = %record.node_id, field, "moment record missing required field");
            return Err(GraphError::MissingField {
                node_id: record.node_id.clone(),
                field,
            });
        }
        if !seen.insert(record.node_id.as_str()) {
            error!(node_id = %record.node_id, "duplicate node_id, aborting build");
            return Err(GraphError::DuplicateNodeId {
                node_id: record.node_id.clone(),
            });
        }
    }
    Ok(())
}

/// Known moment ids plus the latest version of every
/// `(law_id, section, moment)` in the corpus.
struct VersionTable<'a> {
    ids: HashSet<&'a str>,
    latest: HashMap<(&'a str, u32, String), &'a str>,
}

impl<'a> VersionTable<'a> {
    fn new(moments: &'a [MomentRecord]) -> Self {
        let mut latest: HashMap<(&str, u32, String), &str> = HashMap::new();
        for record in moments {
            let key = (
                record.law_id.as_str(),
                record.section_num,
                record.moment.to_string(),
            );
            let version = record.finlex_version.as_str();
            latest
                .entry(key)
                .and_modify(|current| {
                    if version > *current {
                        *current = version;
                    }
                })
                .or_insert(version);
        }
        Self {
            ids: moments.iter().map(|m| m.node_id.as_str()).collect(),
            latest,
        }
    }

    /// Target id for a citation found in `source`.
    ///
    /// Moment citations resolve to the same version when it exists, else to
    /// the latest version carrying that moment, else to a version wildcard.
    /// Section citations always use the section wildcard.
    fn target_for(&self, source: &MomentRecord, citation: &Citation) -> String {
        let Some(moment) = citation.moment else {
            return node_id::section_wildcard_id(
                &source.law_id,
                &source.finlex_version,
                citation.section,
            );
        };
        let same_version =
            node_id::moment_id(&source.law_id, &source.finlex_version, citation.section, moment);
        if self.ids.contains(same_version.as_str()) {
            return same_version;
        }
        let key = (source.law_id.as_str(), citation.section, moment.to_string());
        match self.latest.get(&key) {
            Some(version) => {
                let resolved = node_id::moment_id(&source.law_id, version, citation.section, moment);
                if self.ids.contains(resolved.as_str()) {
                    resolved
                } else {
                    node_id::version_wildcard_id(&source.law_id, citation.section, moment)
                }
            }
            None => node_id::version_wildcard_id(&source.law_id, citation.section, moment),
        }
    }
}

/// HAS_SECTION and HAS_MOMENT edges: laws and sections in sorted order,
/// moments in corpus order.
fn hierarchy_edges(moments: &[MomentRecord]) -> Vec<LegalEdge> {
    let mut tree: BTreeMap<&str, BTreeMap<u32, Vec<&str>>> = BTreeMap::new();
    for record in moments {
        tree.entry(record.law_key.as_str())
            .or_default()
            .entry(record.section_num)
            .or_default()
            .push(record.node_id.as_str());
    }

    let mut edges = Vec::new();
    for (law_key, sections) in &tree {
        let law_vertex = node_id::law_vertex_id(law_key);
        for (section, node_ids) in sections {
            let section_vertex = node_id::section_vertex_id(law_key, *section);
            edges.push(LegalEdge::new(
                &law_vertex,
                &section_vertex,
                EdgeType::HasSection,
                "",
            ));
            for id in node_ids {
                edges.push(LegalEdge::new(&section_vertex, *id, EdgeType::HasMoment, ""));
            }
        }
    }
    edges
}
