//! Word tokens

use crate::normalize::normalize_word;

/// A single whitespace-delimited word of a transcription
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    text: String,
    normalized: String,
    timestamp: f64,
}

impl Token {
    /// Create a token, normalizing its text
    pub fn new(text: impl Into<String>, timestamp: f64) -> Self {
        let text = text.into();
        let normalized = normalize_word(&text);
        Self {
            text,
            normalized,
            timestamp,
        }
    }

    /// Original surface form
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase, punctuation-free form used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Source time offset in seconds (`0.0` when unknown)
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// Split text into tokens on runs of whitespace
///
/// Every non-whitespace run becomes a token, pure punctuation included.
/// Token `i` takes `timestamps[i]` when the slice is long enough.
pub fn tokenize(text: &str, timestamps: Option<&[f64]>) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let timestamp = timestamps
                .and_then(|ts| ts.get(i))
                .copied()
                .unwrap_or(0.0);
            Token::new(word, timestamp)
        })
        .collect()
}
