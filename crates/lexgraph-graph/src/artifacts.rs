//! JSONL corpus input and graph artifact output.
//!
//! Artifacts are `nodes.jsonl`, `edges.jsonl` (one JSON object per line) and
//! a pretty-printed `graph_summary.json`. All three files are first written
//! to temporary siblings; only when every write has succeeded are they
//! renamed into place, summary last. The loader checks the node and edge
//! files against the summary, so a set mixed from two builds fails to load.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use lexgraph_core::config::ArtifactConfig;
use lexgraph_core::{GraphError, GraphResult, GraphSummary, LegalEdge, LegalNode, MomentRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::builder::BuiltGraph;

const CORPUS_EXTENSION: &str = "jsonl";

/// Read moment records from one JSONL file. Blank lines are skipped.
pub fn read_corpus_file(path: &Path) -> GraphResult<Vec<MomentRecord>> {
    let file = File::open(path).map_err(|e| GraphError::io(path, e))?;
    read_jsonl(path, file, |line, message| GraphError::CorpusParse {
        path: path.display().to_string(),
        line,
        message,
    })
}

/// Read every `*.jsonl` file in `dir`, in sorted path order.
pub fn read_corpus_dir(dir: &Path) -> GraphResult<Vec<MomentRecord>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| GraphError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == CORPUS_EXTENSION))
        .collect();
    files.sort();

    let mut records = Vec::new();
    for file in &files {
        let mut batch = read_corpus_file(file)?;
        debug!(path = %file.display(), records = batch.len(), "read corpus file");
        records.append(&mut batch);
    }
    info!(dir = %dir.display(), files = files.len(), records = records.len(), "corpus loaded");
    Ok(records)
}

/// Write nodes, edges and summary into `dir`, creating it if needed.
pub fn write_artifacts(
    dir: &Path,
    graph: &BuiltGraph,
    config: &ArtifactConfig,
) -> GraphResult<GraphSummary> {
    fs::create_dir_all(dir).map_err(|e| GraphError::io(dir, e))?;

    let summary = graph.summary();
    let mut staged = StagedWrite::default();
    staged.stage(&config.nodes_path(dir), |out| write_lines(out, &graph.nodes))?;
    staged.stage(&config.edges_path(dir), |out| write_lines(out, &graph.edges))?;
    staged.stage(&config.summary_path(dir), |out| {
        serde_json::to_writer_pretty(&mut *out, &summary).map_err(std::io::Error::from)?;
        out.write_all(b"\n")
    })?;
    staged.commit()?;

    info!(
        dir = %dir.display(),
        nodes = summary.total_nodes,
        edges = summary.total_edges,
        "graph artifacts written"
    );
    Ok(summary)
}

/// Read `nodes.jsonl` and `edges.jsonl` back. An empty node file is an error.
///
/// When the summary file is present its totals must match what was read.
pub fn load_artifacts(
    dir: &Path,
    config: &ArtifactConfig,
) -> GraphResult<(Vec<LegalNode>, Vec<LegalEdge>)> {
    let nodes_path = config.nodes_path(dir);
    let edges_path = config.edges_path(dir);
    let nodes: Vec<LegalNode> = read_artifact(&nodes_path)?;
    if nodes.is_empty() {
        return Err(GraphError::EmptyGraph {
            path: nodes_path.display().to_string(),
        });
    }
    let edges: Vec<LegalEdge> = read_artifact(&edges_path)?;
    check_summary(&config.summary_path(dir), nodes.len(), edges.len())?;
    Ok((nodes, edges))
}

fn check_summary(path: &Path, nodes: usize, edges: usize) -> GraphResult<()> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(GraphError::io(path, e)),
    };
    let summary: GraphSummary =
        serde_json::from_str(&text).map_err(|e| GraphError::ArtifactParse {
            path: path.display().to_string(),
            line: e.line(),
            message: e.to_string(),
        })?;
    if summary.total_nodes != nodes || summary.total_edges != edges {
        return Err(GraphError::ArtifactMismatch {
            path: path.display().to_string(),
            expected_nodes: summary.total_nodes,
            expected_edges: summary.total_edges,
            nodes,
            edges,
        });
    }
    Ok(())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> GraphResult<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GraphError::ArtifactMissing {
            path: path.display().to_string(),
        },
        _ => GraphError::io(path, e),
    })?;
    read_jsonl(path, file, |line, message| GraphError::ArtifactParse {
        path: path.display().to_string(),
        line,
        message,
    })
}

fn read_jsonl<T: DeserializeOwned>(
    path: &Path,
    file: File,
    parse_error: impl Fn(usize, String) -> GraphError,
) -> GraphResult<Vec<T>> {
    let mut items = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| GraphError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|e| parse_error(index + 1, e.to_string()))?;
        items.push(item);
    }
    Ok(items)
}

fn write_lines<T: Serialize>(out: &mut BufWriter<File>, items: &[T]) -> std::io::Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item).map_err(std::io::Error::from)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Temporary siblings written so far, renamed into place by `commit`.
///
/// Dropping an uncommitted set removes its temporary files.
#[derive(Default)]
struct StagedWrite {
    files: Vec<(PathBuf, PathBuf)>,
}

impl StagedWrite {
    /// Write through a temporary sibling of `path` and fsync it.
    fn stage(
        &mut self,
        path: &Path,
        write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    ) -> GraphResult<()> {
        let tmp_path = tmp_sibling(path);
        let result = (|| {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            let mut out = BufWriter::new(file);
            write(&mut out)?;
            let file = out.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()
        })();

        match result {
            Ok(()) => {
                self.files.push((tmp_path, path.to_path_buf()));
                Ok(())
            }
            Err(e) => {
                if tmp_path.is_file() {
                    let _ = fs::remove_file(&tmp_path);
                }
                Err(GraphError::io(path, e))
            }
        }
    }

    fn commit(mut self) -> GraphResult<()> {
        let files = std::mem::take(&mut self.files);
        let mut pending = files.iter();
        while let Some((tmp_path, path)) = pending.next() {
            if let Err(e) = fs::rename(tmp_path, path) {
                let _ = fs::remove_file(tmp_path);
                for (tmp_path, _) in pending {
                    let _ = fs::remove_file(tmp_path);
                }
                return Err(GraphError::io(path, e));
            }
        }
        Ok(())
    }
}

impl Drop for StagedWrite {
    fn drop(&mut self) {
        for (tmp_path, _) in &self.files {
            let _ = fs::remove_file(tmp_path);
        }
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
