//! Output formatting module

use crate::config::OutputConfig;
use anyhow::Result;
use dictee_api::{BatchSummary, Output};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one comparison, labelled with its source when there are several
    fn format_comparison(&mut self, source: Option<&str>, output: &Output) -> Result<()>;

    /// Format the totals of a batch
    fn format_summary(&mut self, summary: &BatchSummary) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Inline diff with markers and a score line
    Text,
    /// JSON document with the full diff and statistics
    Json,
    /// Markdown table per comparison
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Lowercase name as accepted by `--format`
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "inline diff: ~mistake [-missing] [+wrong]",
            OutputFormat::Json => "diff entries, accuracy and stats as JSON",
            OutputFormat::Markdown => "one table row per word",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_metadata)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            options.include_metadata,
            options.pretty_json,
        )),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.include_metadata))
        }
    }
}

/// Format a `[0, 1]` ratio as a percentage
pub(crate) fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Shared in-memory writer for inspecting formatter output
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
