//! Shared fixtures for lexgraph tests and benchmarks.
//!
//! The `corpus/` directory holds a small consolidated municipal act: one
//! current version plus a single moment that only exists in an older
//! version. Expected graph shape:
//!
//! - 12 moment nodes;
//! - 10 semantic edges (6 internal REFERS_TO, 1 external REFERS_TO,
//!   2 EXCEPTS, 1 DEFINES);
//! - 6 HAS_SECTION and 12 HAS_MOMENT edges.

use std::path::PathBuf;

use lexgraph_core::{MomentLabel, MomentRecord};

pub const LAW_ID: &str = "410/2015";
pub const LAW_KEY: &str = "kuntalaki_410_2015";
pub const VERSION: &str = "fin@20230780";
pub const OLD_VERSION: &str = "fin@20150410";

pub const NODE_COUNT: usize = 12;
pub const SEMANTIC_EDGE_COUNT: usize = 10;
pub const HIERARCHY_EDGE_COUNT: usize = 18;

/// Root directory of the fixture crate.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Works from any crate in the workspace: walk up until the fixture crate is a child.
    while !path.join("test-fixtures").join("corpus").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/corpus from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Directory holding the fixture corpus JSONL files.
pub fn corpus_dir() -> PathBuf {
    fixtures_root().join("corpus")
}

/// Absolute path of a corpus file.
pub fn corpus_file(name: &str) -> PathBuf {
    corpus_dir().join(name)
}

/// Load every corpus record, files in sorted order.
///
/// # Panics
/// Panics if a file can't be read or a line can't be parsed.
pub fn load_corpus() -> Vec<MomentRecord> {
    let dir = corpus_dir();
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "jsonl").then_some(path)
        })
        .collect();
    files.sort();

    files
        .iter()
        .flat_map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    serde_json::from_str(line).unwrap_or_else(|e| {
                        panic!("Failed to parse fixture {}: {}", path.display(), e)
                    })
                })
                .collect::<Vec<MomentRecord>>()
        })
        .collect()
}

/// Current-version node id of the fixture act.
pub fn node_id(section: u32, moment: u32) -> String {
    format!("{LAW_ID}:{VERSION}:{section}:{moment}")
}

/// A record of the fixture act in its current version.
pub fn moment(section: u32, moment: u32, text: &str) -> MomentRecord {
    versioned_moment(VERSION, section, moment, text)
}

/// A record of the fixture act in `version`.
pub fn versioned_moment(version: &str, section: u32, moment: u32, text: &str) -> MomentRecord {
    MomentRecord {
        node_id: format!("{LAW_ID}:{version}:{section}:{moment}"),
        law_id: LAW_ID.to_string(),
        law_key: LAW_KEY.to_string(),
        finlex_version: version.to_string(),
        section_num: section,
        moment: MomentLabel::Number(moment),
        text: text.to_string(),
        section_title: format!("{section} §"),
        law: Some("Kuntalaki".to_string()),
        chapter: None,
        section_id: None,
        in_force: None,
    }
}

/// A synthetic act of `sections` sections with `moments` moments each.
///
/// Moment 1 of every section cites the next section, moment 2 carries an
/// exception against the previous one. Used by benchmarks and properties.
pub fn synthetic_corpus(sections: u32, moments: u32) -> Vec<MomentRecord> {
    let mut records = Vec::with_capacity((sections * moments) as usize);
    for section in 1..=sections {
        for m in 1..=moments {
            let text = match m {
                1 if section < sections => {
                    format!("Asiasta säädetään tarkemmin {} §:ssä.", section + 1)
                }
                2 if section > 1 => format!(
                    "Sen estämättä, mitä {} §:n 1 momentissa säädetään, voidaan poiketa.",
                    section - 1
                ),
                _ => format!("Pykälän {section} momentti {m} ilman viittauksia."),
            };
            records.push(moment(section, m, &text));
        }
    }
    records
}
