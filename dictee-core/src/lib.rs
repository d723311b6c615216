//! Word-level transcription comparison for dictation practice
//!
//! This crate compares a user-typed transcription against a reference
//! transcript and classifies every word as correct, a near miss ("mistake"),
//! missing, or wrong. Unlike a conventional diff it tolerates a typist who
//! skips ahead, falls behind, or garbles a short run of words and then
//! resynchronizes.
//!
//! # Architecture
//!
//! The pipeline runs leaf to root:
//! - **Normalizer**: lowercasing, contraction expansion, punctuation stripping
//! - **Similarity**: Ratcliff/Obershelp ratio between normalized words
//! - **Tokenizer**: whitespace splitting into [`Token`]s with timestamps
//! - **Aligner**: direct matching plus windowed duble realignment
//! - **Aggregator**: [`Stats`] and the half-credit accuracy score
//!
//! # Example
//!
//! ```rust
//! use dictee_core::{compare_and_score, DiffKind};
//!
//! let result = compare_and_score("the cat sat", "the big cat sat");
//!
//! let kinds: Vec<DiffKind> = result.diff.iter().map(|e| e.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [DiffKind::Correct, DiffKind::Missing, DiffKind::Correct, DiffKind::Correct]
//! );
//! assert_eq!(result.stats.missing, 1);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod aligner;
pub mod diff;
pub mod error;
pub mod normalize;
pub mod similarity;
pub mod token;

pub use aggregate::{aggregate, ComparisonResult, Stats};
pub use aligner::{AlignOptions, Aligner};
pub use diff::{DiffEntry, DiffKind};
pub use error::{CoreError, Result};
pub use normalize::{normalize_text, normalize_word};
pub use similarity::{are_equivalent, calculate_similarity, compare_transcriptions, is_mistake};
pub use token::{tokenize, Token};

/// Compare two texts with the default options and return the word diff
pub fn compare(user_text: &str, reference_text: &str) -> Vec<DiffEntry> {
    Aligner::default().compare(user_text, reference_text, None, None)
}

/// Compare two texts with the default options and score the diff
pub fn compare_and_score(user_text: &str, reference_text: &str) -> ComparisonResult {
    Aligner::default().compare_and_score(user_text, reference_text, None, None)
}
