// Single source of truth for all default values.

// --- Extraction ---
pub const DEFAULT_EXCEPTION_WINDOW: usize = 100;
pub const DEFAULT_EXCEPTION_TRAILING_WINDOW: usize = 40;

/// "notwithstanding", "unless", "except as provided" and their relatives.
pub const DEFAULT_EXCEPTION_SIGNALS: &[&str] = &[
    "poiketen",
    "poikkeuksena",
    "jollei",
    "ellei",
    "jos ei",
    "estämättä",
    "siitä huolimatta",
    "ilman rajoitusta",
    "lukuun ottamatta",
];

/// Markers that follow the citation they govern ("6 §:n estämättä").
/// Clause openers such as "jollei" are left out; after a citation they begin
/// a new clause.
pub const DEFAULT_POSTPOSITIONAL_EXCEPTION_SIGNALS: &[&str] = &[
    "poiketen",
    "estämättä",
    "lukuun ottamatta",
    "huolimatta",
];

/// "is defined as", "in this Act", "means" and their relatives.
pub const DEFAULT_DEFINITION_SIGNALS: &[&str] = &[
    "tarkoitetaan",
    "tässä laissa",
    "tässä luvussa",
    "käsitteellä",
    "määritelmä",
];

/// Inflected law names that are cited without a statute number.
pub const DEFAULT_KNOWN_LAWS: &[(&str, &str)] = &[
    ("kirjanpitolaki", "1336/1997"),
    ("kirjanpitolakia", "1336/1997"),
    ("kirjanpitolain", "1336/1997"),
    ("tilintarkastuslaki", "1141/2015"),
    ("tilintarkastuslakia", "1141/2015"),
    ("tilintarkastuslain", "1141/2015"),
    ("osakeyhtiölaki", "624/2006"),
    ("osakeyhtiölakia", "624/2006"),
    ("osakeyhtiölain", "624/2006"),
    ("hankintalaki", "1397/2016"),
    ("hankintalakia", "1397/2016"),
    ("hankintalain", "1397/2016"),
];

// --- Expansion ---
pub const DEFAULT_MAX_HOPS: usize = 2;
pub const DEFAULT_MAX_NODES_ADDED: usize = 5;
pub const DEFAULT_DECAY_PER_HOP: f64 = 0.05;
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.01;
pub const DEFAULT_PRIMARY_SCORE: f64 = 0.5;
pub const DEFAULT_TOP_K_HITS: usize = 3;

/// Query terms that make a definition mandatory context.
pub const DEFAULT_DEFINITION_TRIGGERS: &[&str] =
    &["määritelmä", "tarkoitetaan", "tässä laissa", "käsitteellä"];

// --- Artifacts ---
pub const DEFAULT_CONFIG_FILENAME: &str = "lexgraph.toml";
pub const DEFAULT_NODES_FILE: &str = "nodes.jsonl";
pub const DEFAULT_EDGES_FILE: &str = "edges.jsonl";
pub const DEFAULT_SUMMARY_FILE: &str = "graph_summary.json";

// --- Observability ---
pub const LOG_ENV_VAR: &str = "LEXGRAPH_LOG";
pub const DEFAULT_LOG_FILTER: &str = "lexgraph=info";
