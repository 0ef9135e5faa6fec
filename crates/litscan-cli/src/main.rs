//! litscan - extract species mentions from literature tables
//!
//! Usage:
//!   litscan papers.csv
//!   litscan papers.csv --text-column fulltext --output results.csv
//!   litscan papers.csv --lexicon my_taxa.txt

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use litscan_core::config::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TEXT_COLUMN};
use litscan_core::RunConfig;
use litscan_extractor::{Lexicon, RuleBasedRecognizer, TaxonRecognizer};
use litscan_table::{build_summary, process_table, summary_table, Table};

#[derive(Parser)]
#[command(name = "litscan")]
#[command(about = "Extract species mentions from literature CSV tables")]
#[command(version)]
struct Cli {
    /// Path to the input CSV file
    input: PathBuf,

    /// Column containing the text to scan
    #[arg(short = 't', long, default_value = DEFAULT_TEXT_COLUMN)]
    text_column: String,

    /// Output path for the augmented table (default: <input>_with_species.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Custom taxon lexicon, one name per line
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Rows between progress messages (0 disables them)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: usize,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.input)
            .with_text_column(self.text_column)
            .with_progress_interval(self.progress_every);
        if let Some(output) = self.output {
            config = config.with_output_path(output);
        }
        if let Some(lexicon) = self.lexicon {
            config = config.with_lexicon_path(lexicon);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(cli.into_config())
}

fn run(config: RunConfig) -> anyhow::Result<()> {
    config.validate()?;

    // Fatal setup errors (missing lexicon file, bad pattern) must
    // surface before any record is touched.
    let lexicon = match &config.lexicon_path {
        Some(path) => Lexicon::from_file(path)?,
        None => Lexicon::builtin(),
    };
    let recognizer = RuleBasedRecognizer::with_lexicon(lexicon)?;
    info!(
        recognizer = recognizer.name(),
        lexicon_names = recognizer.lexicon_len(),
        "recognizer ready"
    );

    let input = Table::from_csv_path(&config.input_path)?;
    info!(
        records = input.len(),
        path = %config.input_path.display(),
        "loaded input table"
    );

    let outcome = process_table(
        &recognizer,
        &input,
        &config.text_column,
        config.progress_interval,
    )?;

    let summary = build_summary(&outcome.frequency);
    info!(
        records = outcome.stats.records_total,
        with_species = outcome.stats.records_with_species,
        failed = outcome.stats.records_failed,
        unique_species = summary.len(),
        "processing complete"
    );
    for row in summary.iter().take(5) {
        info!(
            species = %row.species,
            mentions = row.mentions,
            records = row.records,
            "top species"
        );
    }

    let output_path = config.resolved_output_path();
    let summary_path = config.summary_path();
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create output directory {}", parent.display()))?;
        }
    }

    outcome.table.write_csv(&output_path)?;
    info!(path = %output_path.display(), "augmented table written");

    // written even when empty so both outputs always exist
    summary_table(&summary).write_csv(&summary_path)?;
    info!(path = %summary_path.display(), "species summary written");

    Ok(())
}
