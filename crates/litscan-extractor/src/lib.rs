//! Litscan Extractor - Taxonomic named-entity recognition
//!
//! Defines the recognizer seam the pipeline is built against and a
//! rule-based implementation (Latin-binomial patterns plus a curated
//! taxon lexicon). The pipeline only depends on the `TaxonRecognizer`
//! trait, so tests and future model bindings can substitute their own
//! implementation.

use litscan_core::Result;

/// Label attached to taxonomic entities
pub const TAXON_LABEL: &str = "TAXON";

/// An entity found in a scanned text
///
/// Offsets are byte positions into the scanned text; they exist for
/// overlap resolution, downstream consumers read `text` and `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Trait for taxon recognizers
///
/// Implementations must accept any input, including the empty string,
/// and be stateless per call.
pub trait TaxonRecognizer: Send + Sync {
    /// Extract entities from a text
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>>;

    /// Recognizer name for logging
    fn name(&self) -> &str;
}

pub mod lexicon;
pub mod ner;

pub use lexicon::Lexicon;
pub use ner::RuleBasedRecognizer;
