//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Template written by `generate-config`; parses to the default configuration
pub const TEMPLATE: &str = r#"# Dictee configuration
#
# Flags given on the command line take precedence over these values.
# A --preset flag replaces this whole [comparison] section.

[comparison]
# Starting point for the values below: "balanced", "strict" or "lenient"
preset = "balanced"

# Similarity (0.0 to 1.0) at or above which a misspelled word counts as a
# mistake (half credit) instead of wrong
# mistake_threshold = 0.75

# Reference words per realignment window; at least 2
# window_size = 20

# How far ahead in the reference to look when the typist skipped words
# max_search = 200

[output]
# "text", "json" or "markdown"
default_format = "text"

# Add word counts and timing to each report
include_metadata = false

# Indent JSON output
pretty_json = true
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        match &self.output {
            Some(path) => {
                fs::write(path, TEMPLATE)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                println!("✓ Configuration template written to {}", path.display());
                println!();
                println!("Use it with:");
                println!(
                    "   dictee compare -u attempt.txt -r reference.txt -c {}",
                    path.display()
                );
            }
            None => {
                let mut stdout = io::stdout();
                stdout.write_all(TEMPLATE.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: Some(PathBuf::from("dictee.toml")),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("dictee.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml(TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("dictee.toml");

        let args = GenerateConfigArgs {
            output: Some(output_path.clone()),
        };

        assert!(args.execute().is_ok());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[comparison]"));
        assert!(content.contains("--preset flag replaces"));
        assert!(CliConfig::load(&output_path).is_ok());
    }
}
