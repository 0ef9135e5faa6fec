//! Rule-based taxon recognizer
//!
//! Combines two strategies:
//! - Regex patterns: Latin binomials ("Ursus maritimus") and
//!   abbreviated-genus forms ("E. coli")
//! - Lexicon matching: case-insensitive lookup of curated taxon names
//!
//! Overlapping matches are resolved in favor of the longer span, so a
//! full binomial wins over a bare genus hit inside it.

use regex::Regex;

use litscan_core::{LitScanError, Result};

use crate::{ExtractedEntity, Lexicon, TaxonRecognizer, TAXON_LABEL};

/// Latin binomial: capitalized genus followed by a lowercase epithet
/// with a common Latin ending
const BINOMIAL_PATTERN: &str = r"\b[A-Z][a-z]+\s[a-z]{3,}(?:us|a|um|is|es|ii|ae|ens|ensis|alis|aris|icus|atus|oides|ella|ula)\b";

/// Abbreviated genus: single capital, period, lowercase epithet
const ABBREVIATED_PATTERN: &str = r"\b[A-Z]\.\s?[a-z]{4,}\b";

/// Capitalized English words the binomial pattern would otherwise
/// mistake for a genus
const GENUS_STOPWORDS: &[&str] = &[
    "The", "This", "These", "Those", "Their", "There", "Then", "Thus", "They",
    "Some", "Many", "Most", "More", "Other", "Others", "Several", "Both",
    "Each", "Our", "All", "New", "Here", "Its", "His", "Her", "Was", "Were",
    "What", "When", "Where", "Which", "While", "With", "Without",
];

/// Rule-based taxon recognizer
pub struct RuleBasedRecognizer {
    patterns: Vec<Regex>,
    lexicon: Lexicon,
}

impl RuleBasedRecognizer {
    /// Create a recognizer with the built-in lexicon
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::builtin())
    }

    /// Create a recognizer with a custom lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        let patterns = [BINOMIAL_PATTERN, ABBREVIATED_PATTERN]
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    LitScanError::RecognizerInit(format!("invalid pattern {p}: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns, lexicon })
    }

    /// Number of names in the active lexicon
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Extract entities using the regex patterns
    fn extract_by_patterns(&self, text: &str) -> Vec<ExtractedEntity> {
        let mut entities = Vec::new();

        for regex in &self.patterns {
            for mat in regex.find_iter(text) {
                let first_word = mat.as_str().split_whitespace().next().unwrap_or("");
                if GENUS_STOPWORDS.contains(&first_word) {
                    continue;
                }
                entities.push(ExtractedEntity {
                    text: mat.as_str().to_string(),
                    label: TAXON_LABEL.to_string(),
                    start: mat.start(),
                    end: mat.end(),
                });
            }
        }

        entities
    }

    /// Extract entities by lexicon lookup
    fn extract_by_lexicon(&self, text: &str) -> Vec<ExtractedEntity> {
        let mut entities = Vec::new();
        let text_lower = text.to_lowercase();
        // Offsets into the lowercased copy only line up with the
        // original when lowercasing preserves byte lengths; fall back
        // to exact-case scanning otherwise.
        let case_insensitive = text_lower.len() == text.len();
        let haystack: &str = if case_insensitive { &text_lower } else { text };

        for term in self.lexicon.iter() {
            let needle = if case_insensitive {
                term.to_lowercase()
            } else {
                term.to_string()
            };

            for (start, _) in haystack.match_indices(&needle) {
                let end = start + needle.len();
                if !is_word_boundary(text, start, end) {
                    continue;
                }
                let Some(span) = text.get(start..end) else {
                    continue;
                };
                entities.push(ExtractedEntity {
                    text: span.to_string(),
                    label: TAXON_LABEL.to_string(),
                    start,
                    end,
                });
            }
        }

        entities
    }
}

impl TaxonRecognizer for RuleBasedRecognizer {
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut entities = self.extract_by_patterns(text);
        entities.extend(self.extract_by_lexicon(text));

        Ok(deduplicate(entities))
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

/// Check that the span edges fall on non-alphanumeric neighbors
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = match text.get(..start) {
        Some(prefix) => prefix
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    };
    let after_ok = match text.get(end..) {
        Some(suffix) => suffix.chars().next().map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    };
    before_ok && after_ok
}

/// Resolve overlapping matches, keeping the earliest span and, at the
/// same start, the longest one
fn deduplicate(mut entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
    entities.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut result: Vec<ExtractedEntity> = Vec::new();
    for entity in entities {
        match result.last() {
            Some(prev) if entity.start < prev.end => {}
            _ => result.push(entity),
        }
    }
    result
}
