//! # lexgraph-extract
//!
//! Reference extractor. Scans the text of one statute moment and reports:
//!
//! - internal citations (`6 §:n 2 momentissa`, `3 luvun 12 §`, `6 §`),
//!   recognized by an ordered list of [`CitationMatcher`]s and deduplicated by
//!   an explicit tier-suppression pass;
//! - whether a citation sits in an exception context ("notwithstanding",
//!   "unless" and the like);
//! - whether the moment defines a term;
//! - references to other statutes, by explicit number or by known name.
//!
//! Extraction is best-effort. Text that cannot be parsed yields fewer
//! citations, never an error.

pub mod citation;
pub mod external;
pub mod extractor;
pub mod matchers;
pub mod signals;
pub mod suppression;

pub use citation::{Citation, CitationTier};
pub use external::{ExternalLawMatcher, ExternalReference};
pub use extractor::{Extraction, ReferenceExtractor};
pub use matchers::CitationMatcher;
pub use signals::SignalSet;
