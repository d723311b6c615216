//! CLI command implementations

use crate::config::{CliConfig, Overrides, Preset};
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod batch;
pub mod compare;
pub mod generate_config;
pub mod list;
pub mod score;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare a transcription against a reference, word by word
    Compare(compare::CompareArgs),

    /// Print the whole-text similarity score of two files
    Score(score::ScoreArgs),

    /// Compare many transcriptions against one reference
    Batch(batch::BatchArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List comparison presets
    Presets,
}

impl Commands {
    /// Execute the selected command
    ///
    /// `quiet` suppresses progress output.
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Compare(args) => args.execute(),
            Commands::Score(args) => args.execute(),
            Commands::Batch(args) => args.execute(quiet),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand, &mut io::stdout()),
        }
    }
}

/// Comparison settings shared by `compare` and `batch`
#[derive(Debug, Clone, Default, Args)]
pub struct ComparisonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DICTEE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start from a named preset
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Similarity at or above which a misspelled word is a mistake
    #[arg(short = 't', long, value_name = "RATIO")]
    pub threshold: Option<f64>,

    /// Reference words per realignment window
    #[arg(long, value_name = "WORDS")]
    pub window: Option<usize>,

    /// Reference words searched ahead when realigning
    #[arg(long, value_name = "WORDS")]
    pub max_search: Option<usize>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ComparisonArgs {
    /// Load the config file, if any
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load_or_default(self.config.as_deref())
    }

    /// Flag values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            preset: self.preset,
            mistake_threshold: self.threshold,
            window_size: self.window,
            max_search: self.max_search,
        }
    }

    /// Chosen format, falling back to the configured default
    pub fn format(&self, config: &CliConfig) -> OutputFormat {
        self.format.unwrap_or(config.output.default_format)
    }
}

/// Open the output destination: a file when given, stdout otherwise
pub fn open_writer(output: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
