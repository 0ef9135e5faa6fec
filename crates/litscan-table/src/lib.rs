//! Litscan Table - the extraction pipeline
//!
//! Drives one forward pass over a CSV of literature records:
//! - `row`: per-record extraction and deduplication
//! - `process`: the full-table pass, appending the derived columns and
//!   folding results into the corpus frequency table
//! - `summary`: corpus-level species ranking
//!
//! The `Table` type here is deliberately loose: rows are string cells
//! indexed by header position, with no schema beyond the one text
//! column the pipeline reads.

use std::path::Path;

use litscan_core::{LitScanError, Result};

pub mod process;
pub mod row;
pub mod summary;

pub use process::{process_table, ProcessOutcome, ProcessStats, COUNT_COLUMN, SPECIES_COLUMN};
pub use row::{extract_species_from_text, SpeciesExtraction};
pub use summary::{build_summary, summary_table, CorpusFrequency, SpeciesStats, SummaryRow};

// ============================================================================
// Table
// ============================================================================

/// A loosely typed table: named columns over string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Read a table from a CSV file, first row as header
    ///
    /// Rows shorter or longer than the header are accepted; missing
    /// cells read as empty strings downstream.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| csv_error(path, e))?
            .iter()
            .enumerate()
            // a UTF-8 BOM otherwise sticks to the first header name
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Write the table to a CSV file
    ///
    /// Short rows are padded with empty cells so the written table is
    /// rectangular.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        writer
            .write_record(&self.headers)
            .map_err(|e| csv_error(path, e))?;

        for row in &self.rows {
            if row.len() < self.headers.len() {
                let mut padded = row.clone();
                padded.resize(self.headers.len(), String::new());
                writer.write_record(&padded).map_err(|e| csv_error(path, e))?;
            } else {
                writer.write_record(row).map_err(|e| csv_error(path, e))?;
            }
        }

        writer.flush().map_err(|e| LitScanError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn csv_error(path: &Path, error: csv::Error) -> LitScanError {
    LitScanError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

// ============================================================================
// Test recognizers
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use litscan_core::Result;
    use litscan_extractor::{ExtractedEntity, TaxonRecognizer, TAXON_LABEL};

    /// Recognizer that reads its entities straight from the text:
    /// ';'-separated names, '@'-prefixed names get a non-taxon label
    pub struct StubRecognizer;

    impl TaxonRecognizer for StubRecognizer {
        fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>> {
            let mut entities = Vec::new();
            for token in text.split(';') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                let (label, name) = match token.strip_prefix('@') {
                    Some(rest) => ("LOCATION", rest),
                    None => (TAXON_LABEL, token),
                };
                entities.push(ExtractedEntity {
                    text: name.to_string(),
                    label: label.to_string(),
                    start: 0,
                    end: name.len(),
                });
            }
            Ok(entities)
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Recognizer that fails on every call
    pub struct FailingRecognizer;

    impl TaxonRecognizer for FailingRecognizer {
        fn extract(&self, _text: &str) -> Result<Vec<ExtractedEntity>> {
            Err(anyhow::anyhow!("model exploded").into())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_column_index() {
        let table = Table::new(vec!["title".into(), "abstract".into()]);
        assert_eq!(table.column_index("abstract"), Some(1));
        assert_eq!(table.column_index("doi"), None);
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,abstract").unwrap();
        writeln!(file, "1,\"a text, with a comma\"").unwrap();
        writeln!(file, "2,plain").unwrap();
        drop(file);

        let table = Table::from_csv_path(&path).unwrap();
        assert_eq!(table.headers, vec!["id", "abstract"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], "a text, with a comma");

        let out = dir.path().join("out.csv");
        table.write_csv(&out).unwrap();
        let reread = Table::from_csv_path(&out).unwrap();
        assert_eq!(reread, table);
    }

    #[test]
    fn test_short_rows_are_accepted_and_padded_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,title,abstract").unwrap();
        writeln!(file, "1,only-two").unwrap();
        drop(file);

        let table = Table::from_csv_path(&path).unwrap();
        assert_eq!(table.rows[0].len(), 2);

        let out = dir.path().join("out.csv");
        table.write_csv(&out).unwrap();
        let reread = Table::from_csv_path(&out).unwrap();
        assert_eq!(reread.rows[0].len(), 3);
        assert_eq!(reread.rows[0][2], "");
    }

    #[test]
    fn test_missing_file_is_csv_error() {
        let err = Table::from_csv_path("no/such/table.csv").unwrap_err();
        assert!(matches!(err, LitScanError::Csv { .. }));
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "\u{feff}id,abstract\n1,text\n").unwrap();
        drop(file);

        let table = Table::from_csv_path(&path).unwrap();
        assert_eq!(table.headers[0], "id");
    }
}
