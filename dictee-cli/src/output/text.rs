//! Plain text output formatter

use super::{percent, OutputFormatter};
use anyhow::Result;
use dictee_api::{BatchSummary, DiffKind, Output, Stats};
use std::io::Write;

/// Plain text formatter - outputs the diff inline with markers
///
/// Correct words appear bare, mistakes as `~word`, missing reference words
/// as `[-word]` and extra user words as `[+word]`.
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }

    fn write_counts(&mut self, stats: &Stats) -> Result<()> {
        writeln!(
            self.writer,
            "correct {}  mistake {}  missing {}  wrong {}",
            stats.correct, stats.mistake, stats.missing, stats.wrong
        )?;
        Ok(())
    }
}

fn render_word(kind: DiffKind, text: &str) -> String {
    match kind {
        DiffKind::Correct => text.to_string(),
        DiffKind::Mistake => format!("~{text}"),
        DiffKind::Missing => format!("[-{text}]"),
        DiffKind::Wrong => format!("[+{text}]"),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_comparison(&mut self, source: Option<&str>, output: &Output) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "== {source} ==")?;
        }

        let line: Vec<String> = output
            .diff
            .iter()
            .map(|entry| render_word(entry.kind, &entry.text))
            .collect();
        writeln!(self.writer, "{}", line.join(" "))?;

        write!(self.writer, "accuracy {}  ", percent(output.accuracy))?;
        self.write_counts(&output.stats)?;

        if self.include_metadata {
            let metadata = &output.metadata;
            writeln!(
                self.writer,
                "{} user words, {} reference words, {:.2} ms",
                metadata.user_words, metadata.reference_words, metadata.processing_time_ms
            )?;
        }
        Ok(())
    }

    fn format_summary(&mut self, summary: &BatchSummary) -> Result<()> {
        writeln!(self.writer, "== summary ==")?;
        writeln!(
            self.writer,
            "comparisons {}  accuracy {}  mean accuracy {}",
            summary.comparisons,
            percent(summary.accuracy),
            percent(summary.mean_accuracy)
        )?;
        self.write_counts(&summary.stats)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
