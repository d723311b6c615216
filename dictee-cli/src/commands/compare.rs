//! Compare command implementation

use super::{open_writer, ComparisonArgs};
use crate::input::{read_timestamps, timestamps, FileReader};
use crate::output::create_formatter;
use anyhow::Result;
use clap::Args;
use dictee_api::{Comparator, Input};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// User transcription file
    #[arg(short, long, value_name = "FILE")]
    pub user: PathBuf,

    /// Reference transcript file
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Start times of the user words, in seconds
    #[arg(long, value_name = "FILE")]
    pub user_timestamps: Option<PathBuf>,

    /// Start times of the reference words, in seconds
    #[arg(long, value_name = "FILE")]
    pub reference_timestamps: Option<PathBuf>,

    #[command(flatten)]
    pub comparison: ComparisonArgs,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        log::info!("Comparing {} against {}", self.user.display(), self.reference.display());
        log::debug!("Arguments: {:?}", self);

        let config = self.comparison.load_config()?;
        let comparator = Comparator::with_config(config.comparison_config(&self.comparison.overrides())?)?;

        let user_text = FileReader::read_text(&self.user)?;
        let reference_text = FileReader::read_text(&self.reference)?;

        let user_timestamps = match &self.user_timestamps {
            Some(path) => {
                let times = read_timestamps(path)?;
                timestamps::check_alignment(&times, &user_text, "user");
                Some(times)
            }
            None => None,
        };
        let reference_timestamps = match &self.reference_timestamps {
            Some(path) => {
                let times = read_timestamps(path)?;
                timestamps::check_alignment(&times, &reference_text, "reference");
                Some(times)
            }
            None => None,
        };

        let output = comparator.compare_with_timestamps(
            Input::from_text(user_text),
            Input::from_text(reference_text),
            user_timestamps.as_deref(),
            reference_timestamps.as_deref(),
        )?;
        log::info!("Accuracy: {:.3}", output.accuracy);

        let writer = open_writer(self.comparison.output.as_deref())?;
        let mut formatter = create_formatter(self.comparison.format(&config), writer, &config.output);
        formatter.format_comparison(None, &output)?;
        formatter.finish()?;

        Ok(())
    }
}
