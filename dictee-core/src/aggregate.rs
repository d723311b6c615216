//! Diff statistics and accuracy scoring

use crate::diff::{DiffEntry, DiffKind};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Per-kind counts of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Exact matches
    pub correct: usize,
    /// Near misses
    pub mistake: usize,
    /// Reference words the user left out
    pub missing: usize,
    /// User words with no reference counterpart
    pub wrong: usize,
    /// Sum of the four counts
    pub total: usize,
}

impl Stats {
    /// Count the entries of a diff
    pub fn from_diff(diff: &[DiffEntry]) -> Self {
        diff.iter().fold(Self::default(), |mut stats, entry| {
            stats.record(entry.kind);
            stats
        })
    }

    /// Count one entry of the given kind
    pub fn record(&mut self, kind: DiffKind) {
        match kind {
            DiffKind::Correct => self.correct += 1,
            DiffKind::Mistake => self.mistake += 1,
            DiffKind::Missing => self.missing += 1,
            DiffKind::Wrong => self.wrong += 1,
        }
        self.total += 1;
    }

    /// Count for a single kind
    pub fn count(&self, kind: DiffKind) -> usize {
        match kind {
            DiffKind::Correct => self.correct,
            DiffKind::Mistake => self.mistake,
            DiffKind::Missing => self.missing,
            DiffKind::Wrong => self.wrong,
        }
    }

    /// Accuracy with mistakes as half credit; `0.0` for an empty diff
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.correct as f64 + 0.5 * self.mistake as f64) / self.total as f64
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(mut self, rhs: Stats) -> Stats {
        self += rhs;
        self
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        self.correct += rhs.correct;
        self.mistake += rhs.mistake;
        self.missing += rhs.missing;
        self.wrong += rhs.wrong;
        self.total += rhs.total;
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::default(), Add::add)
    }
}

/// Full outcome of one comparison
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    /// Classified words in output order
    pub diff: Vec<DiffEntry>,
    /// Half-credit accuracy in `[0, 1]`
    pub accuracy: f64,
    /// Per-kind counts
    pub stats: Stats,
}

impl ComparisonResult {
    /// Score a diff
    pub fn from_diff(diff: Vec<DiffEntry>) -> Self {
        let (accuracy, stats) = aggregate(&diff);
        Self {
            diff,
            accuracy,
            stats,
        }
    }
}

/// Reduce a diff to its accuracy and statistics
pub fn aggregate(diff: &[DiffEntry]) -> (f64, Stats) {
    let stats = Stats::from_diff(diff);
    (stats.accuracy(), stats)
}
