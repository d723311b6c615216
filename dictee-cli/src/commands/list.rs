//! List command implementation

use super::ListCommands;
use crate::config::Preset;
use crate::output::OutputFormat;
use anyhow::Result;
use dictee_api::Config;
use std::io::Write;

/// Print the requested listing
pub fn execute(subcommand: &ListCommands, out: &mut impl Write) -> Result<()> {
    match subcommand {
        ListCommands::Formats => {
            writeln!(out, "Available output formats:")?;
            for format in OutputFormat::ALL {
                writeln!(out, "  {:<10} {}", format.as_str(), format.description())?;
            }
        }
        ListCommands::Presets => {
            writeln!(out, "Available presets:")?;
            for preset in Preset::ALL {
                let config = match preset {
                    Preset::Balanced => Config::balanced(),
                    Preset::Strict => Config::strict(),
                    Preset::Lenient => Config::lenient(),
                };
                writeln!(
                    out,
                    "  {:<10} threshold {:.2}, window {}, max search {}",
                    preset.as_str(),
                    config.mistake_threshold(),
                    config.window_size(),
                    config.max_search()
                )?;
            }
        }
    }
    Ok(())
}
