//! Summary Builder
//!
//! Accumulates per-species counters across the corpus and ranks them
//! once the full pass is done.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::Table;

/// Corpus counters for one species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpeciesStats {
    /// Total mentions across all records (one per record occurrence in
    /// the deduplicated per-record lists)
    pub mentions: u64,
    /// Number of distinct records the species appeared in
    pub records: u64,
}

/// Running species frequency table, built record by record
#[derive(Debug, Clone, Default)]
pub struct CorpusFrequency {
    counts: HashMap<String, SpeciesStats>,
}

impl CorpusFrequency {
    /// Fold one record's deduplicated name list into the counters
    ///
    /// The record counter moves at most once per species per call,
    /// even if the caller passes a list with repeats.
    pub fn add_record(&mut self, names: &[String]) {
        let mut counted: HashSet<&str> = HashSet::new();
        for name in names {
            let stats = self.counts.entry(name.clone()).or_default();
            stats.mentions += 1;
            if counted.insert(name.as_str()) {
                stats.records += 1;
            }
        }
    }

    /// Counters for one species
    pub fn get(&self, name: &str) -> Option<SpeciesStats> {
        self.counts.get(name).copied()
    }

    /// Number of distinct species seen
    pub fn species_count(&self) -> usize {
        self.counts.len()
    }

    /// Whether no species were seen
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One row of the ranked summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub species: String,
    pub mentions: u64,
    pub records: u64,
}

/// Rank the corpus counters: mentions descending, name ascending on
/// ties. An empty frequency table yields an empty summary.
pub fn build_summary(frequency: &CorpusFrequency) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = frequency
        .counts
        .iter()
        .map(|(species, stats)| SummaryRow {
            species: species.clone(),
            mentions: stats.mentions,
            records: stats.records,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.mentions
            .cmp(&a.mentions)
            .then_with(|| a.species.cmp(&b.species))
    });
    rows
}

/// Render the summary rows as a writable table
pub fn summary_table(rows: &[SummaryRow]) -> Table {
    let mut table = Table::new(vec![
        "species".to_string(),
        "mention_count".to_string(),
        "record_count".to_string(),
    ]);
    table.rows = rows
        .iter()
        .map(|row| {
            vec![
                row.species.clone(),
                row.mentions.to_string(),
                row.records.to_string(),
            ]
        })
        .collect();
    table
}
