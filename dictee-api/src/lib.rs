//! Public API for Dictee transcription comparison
//!
//! This crate provides a stable interface over the comparison engine: a
//! configurable [`Comparator`], input adapters, and serializable results.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dictee_core::{tokenize, Aligner};
use error::Result;
use std::time::Instant;
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dictee_core::{DiffEntry, DiffKind, Stats};
pub use dto::{BatchSummary, Input, Metadata, Output};
pub use error::ApiError;

/// Main entry point for transcription comparison
///
/// A comparator holds no per-call state; share one across threads.
#[derive(Debug, Clone)]
pub struct Comparator {
    aligner: Aligner,
    config: Config,
}

impl Comparator {
    /// Create a comparator with the default configuration
    pub fn new() -> Self {
        Self {
            aligner: Aligner::default(),
            config: Config::default(),
        }
    }

    /// Create a comparator with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let aligner = Aligner::new(config.align_options())?;
        Ok(Self { aligner, config })
    }

    /// Compare a user transcription against a reference
    pub fn compare(&self, user: Input, reference: Input) -> Result<Output> {
        self.compare_with_timestamps(user, reference, None, None)
    }

    /// Compare with per-word timestamps on either side
    pub fn compare_with_timestamps(
        &self,
        user: Input,
        reference: Input,
        user_timestamps: Option<&[f64]>,
        reference_timestamps: Option<&[f64]>,
    ) -> Result<Output> {
        let user_text = user.read_text()?;
        let reference_text = reference.read_text()?;
        Ok(self.run(
            &user_text,
            &reference_text,
            user_timestamps,
            reference_timestamps,
        ))
    }

    /// Compare two strings directly (convenience method)
    pub fn compare_text(&self, user_text: &str, reference_text: &str) -> Output {
        self.run(user_text, reference_text, None, None)
    }

    /// Whole-text quick score, without a word diff
    pub fn score(&self, user_text: &str, reference_text: &str) -> f64 {
        dictee_core::compare_transcriptions(user_text, reference_text)
    }

    /// Compare many (user, reference) pairs
    ///
    /// Pairs are processed in parallel when the `parallel` feature is enabled;
    /// outputs keep the input order either way.
    pub fn compare_batch<U, R>(&self, pairs: &[(U, R)]) -> Vec<Output>
    where
        U: AsRef<str> + Sync,
        R: AsRef<str> + Sync,
    {
        debug!(pairs = pairs.len(), "comparing batch");

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(user, reference)| self.compare_text(user.as_ref(), reference.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(user, reference)| self.compare_text(user.as_ref(), reference.as_ref()))
                .collect()
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn run(
        &self,
        user_text: &str,
        reference_text: &str,
        user_timestamps: Option<&[f64]>,
        reference_timestamps: Option<&[f64]>,
    ) -> Output {
        let start = Instant::now();

        let user = tokenize(user_text, user_timestamps);
        let reference = tokenize(reference_text, reference_timestamps);
        let result = dictee_core::ComparisonResult::from_diff(self.aligner.align(&user, &reference));

        let metadata = Metadata {
            user_words: user.len(),
            reference_words: reference.len(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        debug!(
            accuracy = result.accuracy,
            elapsed_ms = metadata.processing_time_ms,
            "comparison finished"
        );

        Output::new(result, metadata)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Compare two texts with the default configuration
pub fn compare_text(user_text: &str, reference_text: &str) -> Output {
    Comparator::new().compare_text(user_text, reference_text)
}

/// Compare two files with the default configuration
pub fn compare_files<P: AsRef<std::path::Path>, Q: AsRef<std::path::Path>>(
    user_path: P,
    reference_path: Q,
) -> Result<Output> {
    Comparator::new().compare(
        Input::from_file(user_path.as_ref()),
        Input::from_file(reference_path.as_ref()),
    )
}

/// Whole-text quick score between two texts
pub fn quick_score(user_text: &str, reference_text: &str) -> f64 {
    dictee_core::compare_transcriptions(user_text, reference_text)
}
