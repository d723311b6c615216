//! Realignment search after a mismatch
//!
//! Two tiers, tried in order:
//! 1. **Anchor search**: find the first adjacent word pair ("duble") of the
//!    remaining user text that also occurs in the reference lookahead. The
//!    words skipped on both sides are reconciled by gap filling.
//! 2. **Single-token fallback**: find the first reference word in the
//!    lookahead that matches the current user word on its own.
//!
//! Both tiers take the first hit, not the best one.

use super::Alignment;
use crate::diff::DiffKind;
use crate::similarity::{are_equivalent, is_mistake};
use crate::token::Token;
use tracing::trace;

/// Two adjacent tokens of one sequence
#[derive(Debug, Clone, Copy)]
struct Duble<'t> {
    first: &'t Token,
    second: &'t Token,
}

impl Duble<'_> {
    fn is_equivalent(&self, other: &Duble<'_>) -> bool {
        are_equivalent(self.first.normalized(), other.first.normalized())
            && are_equivalent(self.second.normalized(), other.second.normalized())
    }
}

fn dubles(tokens: &[Token]) -> impl Iterator<Item = Duble<'_>> {
    tokens.windows(2).map(|pair| Duble {
        first: &pair[0],
        second: &pair[1],
    })
}

/// Absolute positions of the first token of a matched duble on each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Anchor {
    user: usize,
    reference: usize,
}

impl Alignment<'_> {
    /// Try to resynchronize from the current cursors.
    ///
    /// Returns `true` when output was produced and the cursors moved; both
    /// tiers always emit at least one match on success. Returns `false` with
    /// cursors and output untouched otherwise.
    pub(super) fn realign(&mut self) -> bool {
        if let Some(anchor) = self.find_anchor() {
            self.apply_anchor(anchor);
            return true;
        }
        self.single_token_fallback()
    }

    /// First duble match between the remaining user text and the reference
    /// lookahead.
    ///
    /// The lookahead is cut into windows of `window_size` tokens starting at
    /// multiples of `window_size` below `max_search`; dubles never straddle two
    /// windows.
    fn find_anchor(&self) -> Option<Anchor> {
        let user_rest = &self.user[self.user_idx..];
        let reference_rest = &self.reference[self.reference_idx..];
        let window_size = self.options.window_size;
        let search_end = reference_rest.len().min(self.options.max_search);

        for (user_offset, user_duble) in dubles(user_rest).enumerate() {
            for window_start in (0..search_end).step_by(window_size) {
                let window_end = (window_start + window_size).min(reference_rest.len());
                let window = &reference_rest[window_start..window_end];

                if let Some(offset) = dubles(window).position(|d| d.is_equivalent(&user_duble)) {
                    return Some(Anchor {
                        user: self.user_idx + user_offset,
                        reference: self.reference_idx + window_start + offset,
                    });
                }
            }
        }

        None
    }

    /// Reconcile the gap before an anchor, emit the anchor, move past it
    fn apply_anchor(&mut self, anchor: Anchor) {
        debug_assert!(anchor.user + 2 <= self.user.len());
        debug_assert!(anchor.reference + 2 <= self.reference.len());
        trace!(
            user = anchor.user,
            reference = anchor.reference,
            "realigned on duble"
        );

        let user = self.user;
        let reference = self.reference;

        // Before the first match, skipped reference words are a preamble the
        // user never typed; they are all missing and take no part in gap filling.
        let mut gap_start = self.reference_idx;
        if !self.matched_once && anchor.reference > gap_start {
            self.flush_missing(gap_start, anchor.reference);
            gap_start = anchor.reference;
        }

        self.fill_gaps(
            &user[self.user_idx..anchor.user],
            &reference[gap_start..anchor.reference],
        );

        for token in &user[anchor.user..anchor.user + 2] {
            self.emit(token, DiffKind::Correct);
        }

        self.user_idx = anchor.user + 2;
        self.reference_idx = anchor.reference + 2;
    }

    /// Pair skipped reference words with skipped user words.
    ///
    /// Each reference word, in order, claims the first unclaimed user word that
    /// is equivalent, else the first that is a near miss, else it is missing.
    /// Unclaimed user words follow as wrong, in their original order.
    fn fill_gaps(&mut self, user_gap: &[Token], reference_gap: &[Token]) {
        let threshold = self.options.mistake_threshold;
        let mut claimed = vec![false; user_gap.len()];

        for target in reference_gap {
            let wanted = target.normalized();
            let free = |i: &usize| !claimed[*i];

            let hit = (0..user_gap.len())
                .filter(free)
                .find(|&i| are_equivalent(user_gap[i].normalized(), wanted))
                .map(|i| (i, DiffKind::Correct))
                .or_else(|| {
                    (0..user_gap.len())
                        .filter(free)
                        .find(|&i| is_mistake(user_gap[i].normalized(), wanted, threshold))
                        .map(|i| (i, DiffKind::Mistake))
                });

            match hit {
                Some((i, kind)) => {
                    claimed[i] = true;
                    self.emit(&user_gap[i], kind);
                }
                None => self.emit(target, DiffKind::Missing),
            }
        }

        for (token, was_claimed) in user_gap.iter().zip(&claimed) {
            if !*was_claimed {
                self.emit(token, DiffKind::Wrong);
            }
        }
    }

    /// Look ahead for the current user word alone.
    ///
    /// Reference words skipped to reach the hit are emitted as missing.
    fn single_token_fallback(&mut self) -> bool {
        let user = self.user;
        let reference = self.reference;
        let current = &user[self.user_idx];
        let search_end = reference
            .len()
            .min(self.reference_idx + self.options.max_search);

        let Some((hit, kind)) = (self.reference_idx..search_end)
            .find_map(|r| self.classify(current, &reference[r]).map(|kind| (r, kind)))
        else {
            return false;
        };

        trace!(
            user = self.user_idx,
            reference = hit,
            "realigned on single word"
        );

        self.flush_missing(self.reference_idx, hit);
        self.emit(current, kind);
        self.user_idx += 1;
        self.reference_idx = hit + 1;
        true
    }
}
