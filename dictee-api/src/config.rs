//! High-level configuration API

use crate::error::Result;
use dictee_core::AlignOptions;

/// Default configuration constants
pub mod defaults {
    pub use dictee_core::aligner::{DEFAULT_MAX_SEARCH as MAX_SEARCH, DEFAULT_WINDOW_SIZE as WINDOW_SIZE};
    pub use dictee_core::similarity::DEFAULT_MISTAKE_THRESHOLD as MISTAKE_THRESHOLD;

    /// Near-miss threshold of the strict preset
    pub const STRICT_THRESHOLD: f64 = 0.9;

    /// Near-miss threshold of the lenient preset
    pub const LENIENT_THRESHOLD: f64 = 0.6;
}

/// High-level configuration for transcription comparison
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    inner: AlignOptions,
}

impl Config {
    /// Only near-identical spellings count as mistakes
    pub fn strict() -> Self {
        Self {
            inner: AlignOptions {
                mistake_threshold: defaults::STRICT_THRESHOLD,
                ..AlignOptions::default()
            },
        }
    }

    /// Looser spelling and a wider lookahead, for beginners and long videos
    pub fn lenient() -> Self {
        Self {
            inner: AlignOptions {
                mistake_threshold: defaults::LENIENT_THRESHOLD,
                window_size: defaults::WINDOW_SIZE * 2,
                max_search: defaults::MAX_SEARCH * 2,
            },
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Similarity threshold for near misses
    pub fn mistake_threshold(&self) -> f64 {
        self.inner.mistake_threshold
    }

    /// Reference tokens per realignment window
    pub fn window_size(&self) -> usize {
        self.inner.window_size
    }

    /// Reference tokens searched ahead of the cursor
    pub fn max_search(&self) -> usize {
        self.inner.max_search
    }

    pub(crate) fn align_options(&self) -> AlignOptions {
        self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the near-miss similarity threshold
    pub fn mistake_threshold(mut self, threshold: f64) -> Self {
        self.config.inner.mistake_threshold = threshold;
        self
    }

    /// Set the realignment window size
    pub fn window_size(mut self, size: usize) -> Self {
        self.config.inner.window_size = size;
        self
    }

    /// Set the lookahead bound
    pub fn max_search(mut self, tokens: usize) -> Self {
        self.config.inner.max_search = tokens;
        self
    }

    /// Start from the strict preset
    pub fn strict(mut self) -> Self {
        self.config = Config::strict();
        self
    }

    /// Start from the lenient preset
    pub fn lenient(mut self) -> Self {
        self.config = Config::lenient();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.inner.validate()?;
        Ok(self.config)
    }
}
