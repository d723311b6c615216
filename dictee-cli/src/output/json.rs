//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use dictee_api::{BatchSummary, DiffEntry, Metadata, Output, Stats};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects comparisons and writes one document at the end
///
/// A single unlabelled comparison is written as a bare [`ComparisonData`];
/// anything else becomes a [`Report`].
pub struct JsonFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    pretty: bool,
    results: Vec<ComparisonData>,
    summary: Option<BatchSummary>,
}

/// Data structure for one comparison in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonData {
    /// File the user transcription came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Classified words
    pub diff: Vec<DiffEntry>,
    /// Half-credit accuracy
    pub accuracy: f64,
    /// Per-kind counts
    pub stats: Stats,
    /// Sizes and timing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Document written for batches
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    /// One entry per comparison, in input order
    pub results: Vec<ComparisonData>,
    /// Totals over all comparisons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<BatchSummary>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, include_metadata: bool, pretty: bool) -> Self {
        Self {
            writer,
            include_metadata,
            pretty,
            results: Vec::new(),
            summary: None,
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_comparison(&mut self, source: Option<&str>, output: &Output) -> Result<()> {
        self.results.push(ComparisonData {
            source: source.map(str::to_string),
            diff: output.diff.clone(),
            accuracy: output.accuracy,
            stats: output.stats,
            metadata: self.include_metadata.then(|| output.metadata.clone()),
        });
        Ok(())
    }

    fn format_summary(&mut self, summary: &BatchSummary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let results = std::mem::take(&mut self.results);
        let summary = self.summary.take();

        match (results.len(), summary) {
            (1, None) if results[0].source.is_none() => self.write_value(&results[0])?,
            (_, summary) => self.write_value(&Report { results, summary })?,
        }

        self.writer.flush()?;
        Ok(())
    }
}
