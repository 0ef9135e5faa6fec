//! Table Processor
//!
//! One forward pass over the input table: every record goes through
//! the Row Extractor, the two derived columns are appended, and each
//! result is folded into the corpus frequency table. A failing record
//! never stops the pass.

use tracing::info;

use litscan_core::{LitScanError, Result};
use litscan_extractor::TaxonRecognizer;

use crate::row::extract_species_from_text;
use crate::summary::CorpusFrequency;
use crate::Table;

/// Name of the appended joined-names column
pub const SPECIES_COLUMN: &str = "extracted_species";

/// Name of the appended count column
pub const COUNT_COLUMN: &str = "species_count";

/// Counters reported after a full pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Records processed
    pub records_total: usize,
    /// Records with at least one species
    pub records_with_species: usize,
    /// Records where the recognizer failed (still emitted, empty)
    pub records_failed: usize,
}

/// Everything a full pass produces
#[derive(Debug)]
pub struct ProcessOutcome {
    /// The input table with the two derived columns appended
    pub table: Table,
    /// Per-species corpus counters
    pub frequency: CorpusFrequency,
    /// Run statistics
    pub stats: ProcessStats,
}

/// Process every record of `input`, scanning `text_column`
///
/// Fails before touching any row when the column is absent. Rows
/// shorter than the text column index are treated as empty text.
/// `progress_interval` rows between progress messages, 0 to disable.
pub fn process_table(
    recognizer: &dyn TaxonRecognizer,
    input: &Table,
    text_column: &str,
    progress_interval: usize,
) -> Result<ProcessOutcome> {
    let text_index = input.column_index(text_column).ok_or_else(|| {
        LitScanError::ColumnNotFound {
            column: text_column.to_string(),
            available: input.headers.join(", "),
        }
    })?;

    let mut headers = input.headers.clone();
    headers.push(SPECIES_COLUMN.to_string());
    headers.push(COUNT_COLUMN.to_string());

    let total = input.rows.len();
    let mut table = Table::new(headers);
    let mut frequency = CorpusFrequency::default();
    let mut stats = ProcessStats::default();

    for (i, row) in input.rows.iter().enumerate() {
        let text = row.get(text_index).map(String::as_str).unwrap_or("");
        let extraction = extract_species_from_text(recognizer, text);

        frequency.add_record(&extraction.names);

        stats.records_total += 1;
        if !extraction.is_empty() {
            stats.records_with_species += 1;
        }
        if extraction.failed {
            stats.records_failed += 1;
        }

        let mut out_row = row.clone();
        out_row.resize(input.headers.len(), String::new());
        out_row.push(extraction.joined());
        out_row.push(extraction.count().to_string());
        table.rows.push(out_row);

        if progress_interval > 0 && (i + 1) % progress_interval == 0 {
            info!("processed {}/{} records", i + 1, total);
        }
    }

    Ok(ProcessOutcome {
        table,
        frequency,
        stats,
    })
}
