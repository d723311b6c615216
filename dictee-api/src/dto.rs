//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use dictee_core::{ComparisonResult, DiffEntry, Stats};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for a transcription
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

/// Comparison metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Words in the user transcription
    pub user_words: usize,
    /// Words in the reference transcript
    pub reference_words: usize,
    /// Comparison time in milliseconds
    pub processing_time_ms: f64,
}

/// Complete output of one comparison
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Classified words in output order
    pub diff: Vec<DiffEntry>,
    /// Half-credit accuracy in `[0, 1]`
    pub accuracy: f64,
    /// Per-kind counts
    pub stats: Stats,
    /// Comparison metadata
    pub metadata: Metadata,
}

impl Output {
    pub(crate) fn new(result: ComparisonResult, metadata: Metadata) -> Self {
        Self {
            diff: result.diff,
            accuracy: result.accuracy,
            stats: result.stats,
            metadata,
        }
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Aggregate over several comparisons
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Number of comparisons
    pub comparisons: usize,
    /// Summed per-kind counts
    pub stats: Stats,
    /// Accuracy over the summed counts
    pub accuracy: f64,
    /// Mean of the per-comparison accuracies
    pub mean_accuracy: f64,
}

impl BatchSummary {
    /// Summarize a set of outputs
    pub fn from_outputs<'a>(outputs: impl IntoIterator<Item = &'a Output>) -> Self {
        let mut summary = Self::default();
        let mut accuracy_sum = 0.0;

        for output in outputs {
            summary.comparisons += 1;
            summary.stats += output.stats;
            accuracy_sum += output.accuracy;
        }

        summary.accuracy = summary.stats.accuracy();
        if summary.comparisons > 0 {
            summary.mean_accuracy = accuracy_sum / summary.comparisons as f64;
        }
        summary
    }
}
