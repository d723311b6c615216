//! Diff entries produced by the aligner

use crate::token::Token;
use std::fmt;

/// Classification of a word in the comparison output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffKind {
    /// User word matches the reference word exactly (after normalization)
    Correct,
    /// User word is a near miss of the reference word
    Mistake,
    /// Reference word with no counterpart in the user text
    Missing,
    /// User word with no counterpart in the reference
    Wrong,
}

impl DiffKind {
    /// All kinds, in display order
    pub const ALL: [DiffKind; 4] = [
        DiffKind::Correct,
        DiffKind::Mistake,
        DiffKind::Missing,
        DiffKind::Wrong,
    ];

    /// Lowercase name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Correct => "correct",
            DiffKind::Mistake => "mistake",
            DiffKind::Missing => "missing",
            DiffKind::Wrong => "wrong",
        }
    }

    /// Whether entries of this kind carry a user token
    ///
    /// `Missing` entries carry a reference token; the other three carry user tokens.
    pub fn is_user_side(&self) -> bool {
        !matches!(self, DiffKind::Missing)
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified word of the comparison output
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffEntry {
    /// Word text as typed (user side) or as transcribed (reference side)
    pub text: String,
    /// Classification
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: DiffKind,
    /// Timestamp of the token the entry came from
    #[cfg_attr(feature = "serde", serde(default))]
    pub timestamp: f64,
}

impl DiffEntry {
    /// Create an entry with no timestamp
    pub fn new(text: impl Into<String>, kind: DiffKind) -> Self {
        Self {
            text: text.into(),
            kind,
            timestamp: 0.0,
        }
    }

    /// Create an entry from a token, keeping its timestamp
    pub fn from_token(token: &Token, kind: DiffKind) -> Self {
        Self {
            text: token.text().to_string(),
            kind,
            timestamp: token.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        let names: Vec<String> = DiffKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["correct", "mistake", "missing", "wrong"]);
    }

    #[test]
    fn test_user_side() {
        assert!(DiffKind::Correct.is_user_side());
        assert!(DiffKind::Mistake.is_user_side());
        assert!(DiffKind::Wrong.is_user_side());
        assert!(!DiffKind::Missing.is_user_side());
    }

    #[test]
    fn test_from_token_keeps_timestamp() {
        let token = Token::new("Hello,", 3.5);
        let entry = DiffEntry::from_token(&token, DiffKind::Missing);
        assert_eq!(entry.text, "Hello,");
        assert_eq!(entry.timestamp, 3.5);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_entry_serialization() {
        let entry = DiffEntry::new("cat", DiffKind::Mistake);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"text":"cat","type":"mistake","timestamp":0.0}"#);

        let back: DiffEntry = serde_json::from_str(r#"{"text":"cat","type":"wrong"}"#).unwrap();
        assert_eq!(back, DiffEntry::new("cat", DiffKind::Wrong));
    }
}
