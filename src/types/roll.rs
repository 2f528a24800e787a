//! Roll number type with validation and parsing.
//!
//! The `Roll` newtype ensures values are always well-formed roll numbers,
//! so dataset keys and user input go through the same checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated examination roll number.
///
/// Roll numbers are numeric strings. Using a newtype prevents accidental
/// misuse of raw strings and keeps malformed input out of the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Roll(String);

impl Roll {
    /// Maximum accepted length in characters.
    pub const MAX_LEN: usize = 16;

    /// Create a new Roll, validating the input.
    ///
    /// Leading and trailing whitespace is trimmed. The remainder must be
    /// non-empty, at most [`MAX_LEN`](Self::MAX_LEN) characters, and consist
    /// of ASCII digits only.
    pub fn new(roll: impl AsRef<str>) -> Result<Self, RollError> {
        let roll = roll.as_ref().trim();

        if roll.is_empty() {
            return Err(RollError::Empty);
        }
        if roll.len() > Self::MAX_LEN {
            return Err(RollError::TooLong(roll.len()));
        }
        if !roll.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RollError::InvalidFormat(roll.to_string()));
        }

        Ok(Self(roll.to_string()))
    }

    /// Get the roll number as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Roll {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Roll {
    type Error = RollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roll> for String {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

/// Error type for roll number validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RollError {
    #[error("empty roll number")]
    Empty,
    #[error("roll number too long: {0} characters (max: 16)")]
    TooLong(usize),
    #[error("invalid roll number '{0}': must be digits only")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roll() {
        let roll = Roll::new("123456").unwrap();
        assert_eq!(roll.as_str(), "123456");
    }

    #[test]
    fn test_trims_whitespace() {
        let roll = Roll::new("  123456 ").unwrap();
        assert_eq!(roll.as_str(), "123456");
    }

    #[test]
    fn test_empty_roll() {
        assert!(matches!(Roll::new(""), Err(RollError::Empty)));
        assert!(matches!(Roll::new("   "), Err(RollError::Empty)));
    }

    #[test]
    fn test_non_digit_roll() {
        assert!(matches!(
            Roll::new("12a456"),
            Err(RollError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_too_long_roll() {
        let long = "1".repeat(Roll::MAX_LEN + 1);
        assert!(matches!(Roll::new(long), Err(RollError::TooLong(_))));
    }

    #[test]
    fn test_roll_parse_roundtrip() {
        let roll: Roll = "654321".parse().unwrap();
        assert_eq!(roll.to_string(), "654321");
    }

    #[test]
    fn test_roll_deserialization_validates() {
        let ok: Result<Roll, _> = serde_json::from_str("\"123456\"");
        assert!(ok.is_ok());

        let bad: Result<Roll, _> = serde_json::from_str("\"not-a-roll\"");
        assert!(bad.is_err());
    }
}
