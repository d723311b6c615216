//! Transcription aligner
//!
//! Walks the user and reference token sequences with two cursors. Matching
//! words (exact or near miss) advance both cursors; on a mismatch the aligner
//! searches ahead for a place where the two texts agree again and classifies
//! everything it skipped on the way.
//!
//! The search is bounded by [`AlignOptions::max_search`] and
//! [`AlignOptions::window_size`]; those bounds keep the cost of long runs of
//! non-matching text close to linear.

mod realign;

use crate::aggregate::ComparisonResult;
use crate::diff::{DiffEntry, DiffKind};
use crate::error::{CoreError, Result};
use crate::similarity::{are_equivalent, is_mistake, DEFAULT_MISTAKE_THRESHOLD};
use crate::token::{tokenize, Token};
use tracing::{debug, trace};

/// Default number of reference tokens per search window
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Default number of reference tokens searched ahead of the cursor
pub const DEFAULT_MAX_SEARCH: usize = 200;

/// Tuning knobs for the aligner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignOptions {
    /// Minimum similarity for a near miss
    pub mistake_threshold: f64,
    /// Reference tokens per realignment window (at least 2)
    pub window_size: usize,
    /// Reference tokens searched ahead of the cursor
    pub max_search: usize,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            mistake_threshold: DEFAULT_MISTAKE_THRESHOLD,
            window_size: DEFAULT_WINDOW_SIZE,
            max_search: DEFAULT_MAX_SEARCH,
        }
    }
}

impl AlignOptions {
    /// Check the options against the search invariants
    pub fn validate(&self) -> Result<()> {
        if !self.mistake_threshold.is_finite() || !(0.0..=1.0).contains(&self.mistake_threshold)
        {
            return Err(CoreError::InvalidThreshold(self.mistake_threshold));
        }
        if self.window_size < 2 {
            return Err(CoreError::WindowTooSmall(self.window_size));
        }
        if self.max_search == 0 {
            return Err(CoreError::ZeroMaxSearch);
        }
        Ok(())
    }
}

/// Word-level transcription comparer
///
/// Holds only validated options, so one aligner can be shared freely between
/// threads; every call works on its own buffers.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    options: AlignOptions,
}

impl Aligner {
    /// Create an aligner, rejecting invalid options
    pub fn new(options: AlignOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this aligner runs with
    pub fn options(&self) -> &AlignOptions {
        &self.options
    }

    /// Align two token sequences
    pub fn align(&self, user: &[Token], reference: &[Token]) -> Vec<DiffEntry> {
        let diff = Alignment::new(self.options, user, reference).run();

        debug!(
            user_words = user.len(),
            reference_words = reference.len(),
            entries = diff.len(),
            "aligned transcription"
        );

        diff
    }

    /// Tokenize and align two texts
    pub fn compare(
        &self,
        user_text: &str,
        reference_text: &str,
        user_timestamps: Option<&[f64]>,
        reference_timestamps: Option<&[f64]>,
    ) -> Vec<DiffEntry> {
        let user = tokenize(user_text, user_timestamps);
        let reference = tokenize(reference_text, reference_timestamps);
        self.align(&user, &reference)
    }

    /// Tokenize, align and score two texts
    pub fn compare_and_score(
        &self,
        user_text: &str,
        reference_text: &str,
        user_timestamps: Option<&[f64]>,
        reference_timestamps: Option<&[f64]>,
    ) -> ComparisonResult {
        ComparisonResult::from_diff(self.compare(
            user_text,
            reference_text,
            user_timestamps,
            reference_timestamps,
        ))
    }
}

/// State of one alignment run
struct Alignment<'a> {
    options: AlignOptions,
    user: &'a [Token],
    reference: &'a [Token],
    user_idx: usize,
    reference_idx: usize,
    /// Set by the first successful match of any kind
    matched_once: bool,
    out: Vec<DiffEntry>,
}

impl<'a> Alignment<'a> {
    fn new(options: AlignOptions, user: &'a [Token], reference: &'a [Token]) -> Self {
        Self {
            options,
            user,
            reference,
            user_idx: 0,
            reference_idx: 0,
            matched_once: false,
            out: Vec::with_capacity(user.len().max(reference.len())),
        }
    }

    fn run(mut self) -> Vec<DiffEntry> {
        let user = self.user;
        let reference = self.reference;

        while self.user_idx < user.len() && self.reference_idx < reference.len() {
            let current = &user[self.user_idx];
            let target = &reference[self.reference_idx];

            if let Some(kind) = self.classify(current, target) {
                if !self.matched_once {
                    self.flush_missing(0, self.reference_idx);
                }
                self.emit(current, kind);
                self.matched_once = true;
                self.user_idx += 1;
                self.reference_idx += 1;
                continue;
            }

            if self.realign() {
                self.matched_once = true;
                continue;
            }

            // No anchor anywhere ahead: give up on this user word. Before the
            // first match the reference cursor stays put, so a rambling start
            // does not eat reference words.
            trace!(user_idx = self.user_idx, "no alignment point, stepping");
            self.emit(current, DiffKind::Wrong);
            self.user_idx += 1;
            if self.matched_once {
                self.emit(target, DiffKind::Missing);
                self.reference_idx += 1;
            }
        }

        for token in &user[self.user_idx..] {
            self.emit(token, DiffKind::Wrong);
        }
        for token in &reference[self.reference_idx..] {
            self.emit(token, DiffKind::Missing);
        }

        debug_assert_eq!(
            self.out.iter().filter(|e| e.kind.is_user_side()).count(),
            user.len(),
            "every user token must appear exactly once"
        );
        debug_assert_eq!(
            self.out
                .iter()
                .filter(|e| e.kind != DiffKind::Wrong)
                .count(),
            reference.len(),
            "every reference token must be consumed exactly once"
        );

        self.out
    }

    /// Correct or Mistake when the user token can stand for the reference token
    fn classify(&self, user: &Token, reference: &Token) -> Option<DiffKind> {
        if are_equivalent(user.normalized(), reference.normalized()) {
            Some(DiffKind::Correct)
        } else if is_mistake(
            user.normalized(),
            reference.normalized(),
            self.options.mistake_threshold,
        ) {
            Some(DiffKind::Mistake)
        } else {
            None
        }
    }

    fn emit(&mut self, token: &Token, kind: DiffKind) {
        self.out.push(DiffEntry::from_token(token, kind));
    }

    /// Emit reference tokens `from..to` as missing
    fn flush_missing(&mut self, from: usize, to: usize) {
        debug_assert!(to <= self.reference.len());
        let reference = self.reference;
        for token in &reference[from..to] {
            self.emit(token, DiffKind::Missing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DiffKind::*;

    fn run(user: &str, reference: &str) -> Vec<(String, DiffKind)> {
        run_with(AlignOptions::default(), user, reference)
    }

    fn run_with(options: AlignOptions, user: &str, reference: &str) -> Vec<(String, DiffKind)> {
        Aligner::new(options)
            .unwrap()
            .compare(user, reference, None, None)
            .into_iter()
            .map(|e| (e.text, e.kind))
            .collect()
    }

    fn expected(entries: &[(&str, DiffKind)]) -> Vec<(String, DiffKind)> {
        entries.iter().map(|&(t, k)| (t.to_string(), k)).collect()
    }

    #[test]
    fn test_options_validation() {
        assert!(AlignOptions::default().validate().is_ok());

        let bad_threshold = AlignOptions {
            mistake_threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(
            Aligner::new(bad_threshold).unwrap_err(),
            CoreError::InvalidThreshold(1.5)
        );

        let nan = AlignOptions {
            mistake_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let small_window = AlignOptions {
            window_size: 1,
            ..Default::default()
        };
        assert_eq!(small_window.validate(), Err(CoreError::WindowTooSmall(1)));

        let no_search = AlignOptions {
            max_search: 0,
            ..Default::default()
        };
        assert_eq!(no_search.validate(), Err(CoreError::ZeroMaxSearch));
    }

    #[test]
    fn test_identical_text() {
        let diff = run("Wait - what?", "wait - what");
        assert_eq!(
            diff,
            expected(&[("Wait", Correct), ("-", Correct), ("what?", Correct)])
        );
    }

    #[test]
    fn test_missing_word_in_middle() {
        let diff = run("the cat sat", "the big cat sat");
        assert_eq!(
            diff,
            expected(&[
                ("the", Correct),
                ("big", Missing),
                ("cat", Correct),
                ("sat", Correct),
            ])
        );
    }

    #[test]
    fn test_skipped_preamble() {
        let diff = run("cat sat on the mat", "the big cat sat on the mat");
        assert_eq!(
            diff,
            expected(&[
                ("the", Missing),
                ("big", Missing),
                ("cat", Correct),
                ("sat", Correct),
                ("on", Correct),
                ("the", Correct),
                ("mat", Correct),
            ])
        );
    }

    #[test]
    fn test_skipped_clause() {
        let diff = run(
            "one two three seven eight nine",
            "one two three four five six seven eight nine",
        );
        assert_eq!(
            diff,
            expected(&[
                ("one", Correct),
                ("two", Correct),
                ("three", Correct),
                ("four", Missing),
                ("five", Missing),
                ("six", Missing),
                ("seven", Correct),
                ("eight", Correct),
                ("nine", Correct),
            ])
        );
    }

    #[test]
    fn test_inserted_words() {
        let diff = run(
            "the quick brown fox foo bar jumps over",
            "the quick brown fox jumps over",
        );
        assert_eq!(
            diff,
            expected(&[
                ("the", Correct),
                ("quick", Correct),
                ("brown", Correct),
                ("fox", Correct),
                ("foo", Wrong),
                ("bar", Wrong),
                ("jumps", Correct),
                ("over", Correct),
            ])
        );
    }

    #[test]
    fn test_near_miss() {
        let diff = run("I recieve the mail", "I receive the mail");
        assert_eq!(
            diff,
            expected(&[
                ("I", Correct),
                ("recieve", Mistake),
                ("the", Correct),
                ("mail", Correct),
            ])
        );
    }

    #[test]
    fn test_rambling_start() {
        let diff = run("um so yeah hello world", "hello world");
        assert_eq!(
            diff,
            expected(&[
                ("um", Wrong),
                ("so", Wrong),
                ("yeah", Wrong),
                ("hello", Correct),
                ("world", Correct),
            ])
        );
    }

    #[test]
    fn test_single_token_fallback() {
        let diff = run("hello", "well hello there");
        assert_eq!(
            diff,
            expected(&[("well", Missing), ("hello", Correct), ("there", Missing)])
        );
    }

    #[test]
    fn test_step_recovery_after_match() {
        let diff = run("the dog ran", "the cat sat");
        assert_eq!(
            diff,
            expected(&[
                ("the", Correct),
                ("dog", Wrong),
                ("cat", Missing),
                ("ran", Wrong),
                ("sat", Missing),
            ])
        );
    }

    #[test]
    fn test_no_overlap_keeps_reference_for_the_end() {
        let diff = run("xyz abc", "hello world");
        assert_eq!(
            diff,
            expected(&[
                ("xyz", Wrong),
                ("abc", Wrong),
                ("hello", Missing),
                ("world", Missing),
            ])
        );
    }

    #[test]
    fn test_gap_fill_reorders_claims() {
        let diff = run(
            "the fox brown quick jumps over",
            "the quick brown fox jumps over",
        );
        assert!(diff.iter().all(|(_, kind)| *kind == Correct));
        let texts: Vec<&str> = diff.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, ["the", "quick", "brown", "fox", "jumps", "over"]);
    }

    #[test]
    fn test_gap_fill_mistake_missing_and_wrong() {
        let diff = run("one xx thre four five", "one two three four five");
        assert_eq!(
            diff,
            expected(&[
                ("one", Correct),
                ("two", Missing),
                ("thre", Mistake),
                ("xx", Wrong),
                ("four", Correct),
                ("five", Correct),
            ])
        );
    }

    #[test]
    fn test_search_bound_limits_lookahead() {
        let narrow = AlignOptions {
            window_size: 2,
            max_search: 2,
            ..Default::default()
        };
        let diff = run_with(narrow, "a b", "x y z a b");
        assert_eq!(
            diff,
            expected(&[
                ("a", Wrong),
                ("b", Wrong),
                ("x", Missing),
                ("y", Missing),
                ("z", Missing),
                ("a", Missing),
                ("b", Missing),
            ])
        );

        let diff = run("a b", "x y z a b");
        assert_eq!(
            diff,
            expected(&[
                ("x", Missing),
                ("y", Missing),
                ("z", Missing),
                ("a", Correct),
                ("b", Correct),
            ])
        );
    }

    #[test]
    fn test_threshold_controls_mistakes() {
        let strict = AlignOptions {
            mistake_threshold: 0.9,
            ..Default::default()
        };
        let diff = run_with(strict, "abce", "abcd");
        assert_eq!(diff, expected(&[("abce", Wrong), ("abcd", Missing)]));

        let diff = run("abce", "abcd");
        assert_eq!(diff, expected(&[("abce", Mistake)]));
    }

    #[test]
    fn test_empty_sides() {
        assert!(run("", "").is_empty());
        assert_eq!(run("a b", ""), expected(&[("a", Wrong), ("b", Wrong)]));
        assert_eq!(run("", "a b"), expected(&[("a", Missing), ("b", Missing)]));
    }

    #[test]
    fn test_timestamps_follow_source_tokens() {
        let diff = Aligner::default().compare(
            "the cat",
            "the big cat",
            Some(&[10.0, 11.0]),
            Some(&[1.0, 2.0, 3.0]),
        );
        let stamps: Vec<(DiffKind, f64)> = diff.iter().map(|e| (e.kind, e.timestamp)).collect();
        assert_eq!(stamps, [(Correct, 10.0), (Missing, 2.0), (Correct, 11.0)]);
    }
}
