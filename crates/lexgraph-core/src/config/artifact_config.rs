use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;

/// File names of the graph artifacts inside a graph directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub nodes_file: String,
    pub edges_file: String,
    pub summary_file: String,
}

impl ArtifactConfig {
    pub fn nodes_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.nodes_file)
    }

    pub fn edges_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.edges_file)
    }

    pub fn summary_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.summary_file)
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            nodes_file: defaults::DEFAULT_NODES_FILE.to_string(),
            edges_file: defaults::DEFAULT_EDGES_FILE.to_string(),
            summary_file: defaults::DEFAULT_SUMMARY_FILE.to_string(),
        }
    }
}
