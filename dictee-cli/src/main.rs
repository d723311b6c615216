//! dictee - compare typed transcriptions against a reference transcript

use clap::Parser;
use dictee_cli::commands::Commands;

/// Dictee transcription comparison
#[derive(Debug, Parser)]
#[command(name = "dictee")]
#[command(version)]
#[command(about = "Word-level comparison of dictation transcriptions against a reference")]
struct Cli {
    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dictee_cli::init_logging(cli.verbose, cli.quiet);

    log::debug!("Running {:?}", cli.command);
    cli.command.execute(cli.quiet)
}
