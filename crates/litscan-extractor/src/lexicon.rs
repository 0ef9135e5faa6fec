//! Taxon lexicon
//!
//! A curated list of taxon names used by the rule-based recognizer for
//! dictionary matching. A default list ships embedded in the binary;
//! callers can substitute their own file at invocation time.

use std::io::BufRead;
use std::path::Path;

use litscan_core::{LitScanError, Result};

/// Default lexicon packaged with the crate
const BUILTIN_TAXA: &str = include_str!("data/taxa.txt");

/// A set of known taxon names
#[derive(Debug, Clone)]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Lexicon {
    /// Load the built-in lexicon
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TAXA)
    }

    /// Load a lexicon from a file, one name per line
    ///
    /// A missing or unreadable file is a startup failure, not a
    /// per-record one.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LitScanError::RecognizerInit(format!(
                "cannot read lexicon file {}: {e}",
                path.display()
            ))
        })?;
        let lexicon = Self::parse(&content);
        if lexicon.is_empty() {
            return Err(LitScanError::RecognizerInit(format!(
                "lexicon file {} contains no taxon names",
                path.display()
            )));
        }
        Ok(lexicon)
    }

    /// Load a lexicon from any reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut terms = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| {
                LitScanError::RecognizerInit(format!("cannot read lexicon: {e}"))
            })?;
            if let Some(term) = parse_line(&line) {
                terms.push(term);
            }
        }
        Ok(Self { terms })
    }

    fn parse(content: &str) -> Self {
        let terms = content.lines().filter_map(parse_line).collect();
        Self { terms }
    }

    /// Number of names in the lexicon
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the lexicon holds no names
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Parse one lexicon line; blank lines and '#' comments yield nothing
fn parse_line(line: &str) -> Option<String> {
    let term = line.trim();
    if term.is_empty() || term.starts_with('#') {
        return None;
    }
    Some(term.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_is_populated() {
        let lexicon = Lexicon::builtin();
        assert!(!lexicon.is_empty());
        assert!(lexicon.iter().any(|t| t == "Apis mellifera"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let input = "# a comment\n\nUrsus maritimus\n  Vulpes vulpes  \n# trailing\n";
        let lexicon = Lexicon::from_reader(input.as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 2);
        let terms: Vec<&str> = lexicon.iter().collect();
        assert_eq!(terms, vec!["Ursus maritimus", "Vulpes vulpes"]);
    }

    #[test]
    fn test_missing_file_is_init_error() {
        let err = Lexicon::from_file("no/such/lexicon.txt").unwrap_err();
        assert!(matches!(err, LitScanError::RecognizerInit(_)));
    }
}
