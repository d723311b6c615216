//! Word and text normalization
//!
//! Both functions are total: any input, including the empty string, maps to a
//! (possibly empty) normalized string.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// English contractions expanded by [`normalize_text`].
///
/// Applied in table order by substring replacement.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("mightn't", "might not"),
    ("mustn't", "must not"),
    ("i'm", "i am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'd", "i would"),
    ("you'd", "you would"),
    ("he'd", "he would"),
    ("she'd", "she would"),
    ("we'd", "we would"),
    ("they'd", "they would"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
];

/// Normalize a single word: lowercase, strip punctuation, trim
pub fn normalize_word(text: &str) -> String {
    let lowered = text.to_lowercase();
    PUNCTUATION.replace_all(&lowered, "").trim().to_string()
}

/// Normalize a full text for whole-text scoring
///
/// Expands contractions before punctuation is stripped, then collapses
/// whitespace runs to single spaces.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = text.to_lowercase();

    for (contraction, expansion) in CONTRACTIONS {
        if normalized.contains(contraction) {
            normalized = normalized.replace(contraction, expansion);
        }
    }

    let stripped = PUNCTUATION.replace_all(&normalized, "");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
