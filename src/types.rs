//! Core type definitions for compile-time safety.
//!
//! Artist names and song titles are both plain strings on the way in. These
//! newtypes carry the normalized (trimmed, lowercased) form so the two cannot
//! be mixed up, and so every lookup uses the same key normalization.

use serde::Serialize;
use std::fmt;

/// Trim and lowercase a user-supplied name.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized artist name, used as the key of an artist record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArtistKey(String);

impl ArtistKey {
    /// Normalize a raw artist name into a key.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the normalized name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ArtistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArtistKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Normalized song title, stored in an artist's list of requested songs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SongKey(String);

impl SongKey {
    /// Normalize a raw song title into a key.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the normalized title is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SongKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SongKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_trimmed_and_lowercased() {
        assert_eq!(ArtistKey::new("  The Beatles ").as_str(), "the beatles");
        assert_eq!(SongKey::new("Let It Be\n").as_str(), "let it be");
        assert_eq!(ArtistKey::new("ABBA"), ArtistKey::from("abba"));
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(ArtistKey::new("   ").is_empty());
        assert!(SongKey::new("\t").is_empty());
        assert!(!SongKey::new("x").is_empty());
    }
}
