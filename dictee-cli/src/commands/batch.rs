//! Batch command implementation

use super::{open_writer, ComparisonArgs};
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use dictee_api::{BatchSummary, Comparator, Output};
use rayon::prelude::*;
use std::path::PathBuf;

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// User transcription files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub user: Vec<String>,

    /// Reference transcript every file is compared against
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    #[command(flatten)]
    pub comparison: ComparisonArgs,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let config = self.comparison.load_config()?;
        let comparator = Comparator::with_config(config.comparison_config(&self.comparison.overrides())?)?;

        let files = resolve_patterns(&self.user)?;
        let reference_text = FileReader::read_text(&self.reference)?;
        log::info!("Comparing {} files against {}", files.len(), self.reference.display());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);
        let outputs = self.compare_all(&comparator, &files, &reference_text, &progress)?;
        progress.finish();

        let summary = BatchSummary::from_outputs(&outputs);
        log::info!(
            "Batch accuracy {:.3} over {} comparisons",
            summary.accuracy,
            summary.comparisons
        );

        let writer = open_writer(self.comparison.output.as_deref())?;
        let mut formatter = create_formatter(self.comparison.format(&config), writer, &config.output);
        for (path, output) in files.iter().zip(&outputs) {
            formatter.format_comparison(Some(&path.display().to_string()), output)?;
        }
        formatter.format_summary(&summary)?;
        formatter.finish()?;

        Ok(())
    }

    fn compare_all(
        &self,
        comparator: &Comparator,
        files: &[PathBuf],
        reference_text: &str,
        progress: &ProgressReporter,
    ) -> Result<Vec<Output>> {
        let threads = self.jobs.unwrap_or_else(num_cpus::get).max(1);
        log::debug!("Using {threads} worker threads");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<Output> {
                    let user_text = FileReader::read_text(path)?;
                    let output = comparator.compare_text(&user_text, reference_text);
                    progress.file_completed(&FileReader::display_name(path));
                    Ok(output)
                })
                .collect()
        })
    }
}
