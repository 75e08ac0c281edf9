//! lyrics.ovh response bodies.
//!
//! A hit is `{"lyrics": "..."}`; a miss is `{"error": "No lyrics found"}`.

use serde::Deserialize;

use crate::constants::provider::INSTRUMENTAL_MARKER;
use crate::provider::Lyrics;

/// Body of a lyric lookup response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LyricsResponse {
    /// Lyric text, present on success.
    #[serde(default)]
    pub lyrics: Option<String>,
    /// Provider error message, present on a miss.
    #[serde(default)]
    pub error: Option<String>,
}

/// Whether a lyric body is the provider's stand-in for "no lyrics".
///
/// Matches an empty body and the bare word `instrumental` with optional
/// surrounding brackets or punctuation, in any case.
pub fn is_instrumental_marker(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    trimmed
        .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .eq_ignore_ascii_case(INSTRUMENTAL_MARKER)
}

impl LyricsResponse {
    /// Interpret a successful body. `None` means the provider reported a miss.
    pub fn into_lyrics(self) -> Option<Lyrics> {
        match self.lyrics {
            Some(text) if is_instrumental_marker(&text) => Some(Lyrics::Instrumental),
            Some(text) => Some(Lyrics::Text(text)),
            None => None,
        }
    }
}
