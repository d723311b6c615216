//! Word similarity and equivalence
//!
//! The similarity ratio is Ratcliff/Obershelp pattern matching: find the
//! longest common block, recurse on the pieces to its left and right, and
//! report `2 * M / T` where `M` is the total size of all matching blocks and
//! `T` the combined length of both strings.

use crate::normalize::normalize_text;
use std::collections::HashMap;

/// Default similarity threshold for classifying a near miss
pub const DEFAULT_MISTAKE_THRESHOLD: f64 = 0.75;

/// Check whether two normalized words are equivalent
///
/// Two empty strings are equivalent: a pure punctuation token normalizes to
/// the empty string on both sides.
pub fn are_equivalent(a: &str, b: &str) -> bool {
    a == b
}

/// Character-level similarity ratio between two strings, in `[0, 1]`
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let matches = count_matching_chars(&a, &b);
    2.0 * matches as f64 / (a.len() + b.len()) as f64
}

/// Check whether two normalized words are similar enough to count as a near miss
///
/// Callers test [`are_equivalent`] first; this does not exclude equal words.
pub fn is_mistake(a: &str, b: &str, threshold: f64) -> bool {
    calculate_similarity(a, b) >= threshold
}

/// Cheap whole-text score between a user transcription and a reference
///
/// Both texts go through [`normalize_text`] and are compared as one
/// character sequence. This is the quick score; the word diff lives in the
/// aligner.
pub fn compare_transcriptions(user_text: &str, reference_text: &str) -> f64 {
    let user = normalize_text(user_text);
    let reference = normalize_text(reference_text);

    if user == reference {
        return 1.0;
    }
    if user.is_empty() || reference.is_empty() {
        return 0.0;
    }

    calculate_similarity(&user, &reference)
}

/// Sequences at least this long have their popular characters junked
const AUTOJUNK_MIN_LEN: usize = 200;

/// Positions of each character of `b`, with popular characters left out
///
/// In a sequence of [`AUTOJUNK_MIN_LEN`] or more characters, a character that
/// makes up more than 1% of it (plus one) is not used to seed matches. Blocks
/// are still extended across such characters.
fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        positions.entry(c).or_default().push(j);
    }

    if b.len() >= AUTOJUNK_MIN_LEN {
        let limit = b.len() / 100 + 1;
        positions.retain(|_, js| js.len() <= limit);
    }
    positions
}

/// Match lengths for the previous and current row of `a`, indexed by `j + 1`
///
/// Only the touched slots are reset between rows, so a row costs as much as
/// the positions it visits rather than the length of `b`.
struct RunLengths {
    prev: Vec<usize>,
    next: Vec<usize>,
    prev_touched: Vec<usize>,
    next_touched: Vec<usize>,
}

impl RunLengths {
    fn new(b_len: usize) -> Self {
        Self {
            prev: vec![0; b_len + 1],
            next: vec![0; b_len + 1],
            prev_touched: Vec::new(),
            next_touched: Vec::new(),
        }
    }

    fn set_next(&mut self, j: usize, len: usize) {
        self.next[j + 1] = len;
        self.next_touched.push(j + 1);
    }

    /// Length of the run ending at `b[j - 1]` in the previous row
    fn prev_ending_before(&self, j: usize) -> usize {
        self.prev[j]
    }

    fn advance_row(&mut self) {
        for slot in self.prev_touched.drain(..) {
            self.prev[slot] = 0;
        }
        std::mem::swap(&mut self.prev, &mut self.next);
        std::mem::swap(&mut self.prev_touched, &mut self.next_touched);
    }

    /// Reset after the last row; `next` is already clean at that point
    fn clear(&mut self) {
        for slot in self.prev_touched.drain(..) {
            self.prev[slot] = 0;
        }
    }
}

/// Total size of the matching blocks between `a` and `b`
fn count_matching_chars(a: &[char], b: &[char]) -> usize {
    let b_positions = index_positions(b);
    let mut runs = RunLengths::new(b.len());

    // Explicit stack instead of recursion; block order does not matter for the sum
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let Some((i, j, size)) =
            find_longest_match(a, b, (a_lo, a_hi), (b_lo, b_hi), &b_positions, &mut runs)
        else {
            continue;
        };

        total += size;

        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }

    total
}

/// Longest block `a[i..i+size] == b[j..j+size]` inside the given ranges
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`. The
/// block found through `b_positions` is then grown over equal neighbours,
/// which picks up junked characters.
fn find_longest_match(
    a: &[char],
    b: &[char],
    (a_lo, a_hi): (usize, usize),
    (b_lo, b_hi): (usize, usize),
    b_positions: &HashMap<char, Vec<usize>>,
    runs: &mut RunLengths,
) -> Option<(usize, usize, usize)> {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

    for (i, c) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        if let Some(positions) = b_positions.get(c) {
            let first = positions.partition_point(|&j| j < b_lo);
            for &j in positions[first..].iter().take_while(|&&j| j < b_hi) {
                let k = runs.prev_ending_before(j) + 1;
                runs.set_next(j, k);

                if k > best_size {
                    (best_i, best_j, best_size) = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        runs.advance_row();
    }
    runs.clear();

    while best_i > a_lo && best_j > b_lo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_size += 1;
    }
    while best_i + best_size < a_hi
        && best_j + best_size < b_hi
        && a[best_i + best_size] == b[best_j + best_size]
    {
        best_size += 1;
    }

    (best_size > 0).then_some((best_i, best_j, best_size))
}
