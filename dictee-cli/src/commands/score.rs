//! Score command implementation

use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the score command
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// User transcription file
    #[arg(short, long, value_name = "FILE")]
    pub user: PathBuf,

    /// Reference transcript file
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> Result<()> {
        let score = self.score()?;
        let mut stdout = io::stdout();
        writeln!(stdout, "{score:.4}")?;
        Ok(())
    }

    fn score(&self) -> Result<f64> {
        let user_text = FileReader::read_text(&self.user)?;
        let reference_text = FileReader::read_text(&self.reference)?;

        let score = dictee_api::quick_score(&user_text, &reference_text);
        log::info!("Quick score: {score}");
        Ok(score)
    }
}
