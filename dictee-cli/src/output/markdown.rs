//! Markdown output formatter

use super::{percent, OutputFormatter};
use anyhow::Result;
use dictee_api::{BatchSummary, Output};
use std::io::Write;

/// Markdown formatter - outputs one table per comparison
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    comparison_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            comparison_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_comparison(&mut self, source: Option<&str>, output: &Output) -> Result<()> {
        self.comparison_count += 1;
        if self.comparison_count > 1 {
            writeln!(self.writer)?;
        }

        let title = source.unwrap_or("Comparison");
        writeln!(self.writer, "## {}", escape_cell(title))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Word | Result | Time (s) |")?;
        writeln!(self.writer, "|---|------|--------|----------|")?;
        for (i, entry) in output.diff.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} |",
                i + 1,
                escape_cell(&entry.text),
                entry.kind,
                entry.timestamp
            )?;
        }
        writeln!(self.writer)?;

        let stats = &output.stats;
        writeln!(
            self.writer,
            "**Accuracy:** {} ({} correct, {} mistake, {} missing, {} wrong)",
            percent(output.accuracy),
            stats.correct,
            stats.mistake,
            stats.missing,
            stats.wrong
        )?;

        if self.include_metadata {
            writeln!(
                self.writer,
                "*{} user words, {} reference words, {:.2} ms*",
                output.metadata.user_words,
                output.metadata.reference_words,
                output.metadata.processing_time_ms
            )?;
        }
        Ok(())
    }

    fn format_summary(&mut self, summary: &BatchSummary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total comparisons: {}, accuracy {}, mean accuracy {}*",
            summary.comparisons,
            percent(summary.accuracy),
            percent(summary.mean_accuracy)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
