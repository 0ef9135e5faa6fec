//! Row Extractor
//!
//! Turns one record's text into a deduplicated, ordered set of species
//! names. Recoverable failures stop here: a recognizer error for one
//! record is logged and yields an empty result, never an error.

use std::collections::HashSet;

use tracing::warn;

use litscan_extractor::{TaxonRecognizer, TAXON_LABEL};

/// The species found in one record's text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesExtraction {
    /// Unique names in order of first occurrence
    pub names: Vec<String>,
    /// Whether the recognizer failed on this record
    pub failed: bool,
}

impl SpeciesExtraction {
    /// Names joined by comma+space, empty string when none were found
    pub fn joined(&self) -> String {
        self.names.join(", ")
    }

    /// Number of unique names
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Whether no names were found
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Extract the unique species names mentioned in a text
///
/// Blank or whitespace-only text is a normal empty result. A
/// recognizer failure is logged and reported through `failed`; it does
/// not propagate.
pub fn extract_species_from_text(
    recognizer: &dyn TaxonRecognizer,
    text: &str,
) -> SpeciesExtraction {
    if text.trim().is_empty() {
        return SpeciesExtraction::default();
    }

    let entities = match recognizer.extract(text) {
        Ok(entities) => entities,
        Err(e) => {
            warn!(
                recognizer = recognizer.name(),
                error = %e,
                "extraction failed, treating record as empty"
            );
            return SpeciesExtraction {
                names: Vec::new(),
                failed: true,
            };
        }
    };

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for entity in entities {
        if entity.label != TAXON_LABEL {
            continue;
        }
        let name = entity.text.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    SpeciesExtraction {
        names,
        failed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::testing::{FailingRecognizer, StubRecognizer};
    use litscan_extractor::RuleBasedRecognizer;

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let extraction = extract_species_from_text(
            &StubRecognizer,
            "Apis mellifera; Bombus terrestris; Apis mellifera",
        );

        assert_eq!(
            extraction.names,
            vec!["Apis mellifera", "Bombus terrestris"]
        );
        assert_eq!(extraction.joined(), "Apis mellifera, Bombus terrestris");
        assert_eq!(extraction.count(), 2);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let extraction =
            extract_species_from_text(&StubRecognizer, "Apis mellifera; apis mellifera");
        assert_eq!(extraction.count(), 2);
    }

    #[test]
    fn test_empty_text_is_empty_result() {
        let extraction = extract_species_from_text(&StubRecognizer, "");
        assert_eq!(extraction, SpeciesExtraction::default());
        assert!(!extraction.failed);
    }

    #[test]
    fn test_whitespace_only_text_is_empty_result() {
        let extraction = extract_species_from_text(&StubRecognizer, "   \t\n ");
        assert!(extraction.is_empty());
        assert!(!extraction.failed);
    }

    #[test]
    fn test_recognizer_failure_is_contained() {
        let extraction = extract_species_from_text(&FailingRecognizer, "some abstract");
        assert!(extraction.is_empty());
        assert_eq!(extraction.joined(), "");
        assert!(extraction.failed);
    }

    #[test]
    fn test_non_taxon_labels_filtered() {
        let extraction =
            extract_species_from_text(&StubRecognizer, "@Svalbard; Ursus maritimus");
        assert_eq!(extraction.names, vec!["Ursus maritimus"]);
    }

    proptest! {
        // Count and joined string always agree, and extraction never
        // panics on arbitrary text.
        #[test]
        fn prop_count_matches_joined_segments(text in ".{0,200}") {
            let recognizer = RuleBasedRecognizer::new().unwrap();
            let extraction = extract_species_from_text(&recognizer, &text);

            if extraction.count() == 0 {
                prop_assert_eq!(extraction.joined(), "");
            } else {
                prop_assert_eq!(
                    extraction.joined().split(", ").count(),
                    extraction.count()
                );
            }
        }
    }
}
