//! Lyric provider integration.
//!
//! The core never talks HTTP itself. It asks a [`LyricsProvider`] for the text
//! of a song and gets back either lyrics, an instrumental marker, or one of the
//! upstream errors (`UpstreamNotFound`, `UpstreamTransport`).

/// HTTP client for the lyrics.ovh API
pub mod api;
/// Wire types of the lyrics.ovh API
pub mod types;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::{ArtistKey, SongKey};

pub use api::LyricsOvhClient;

/// What the provider found for a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lyrics {
    /// Lyric text, possibly empty after tokenizing.
    Text(String),
    /// The provider says the track has no lyrics.
    Instrumental,
}

/// Source of lyric text for (artist, song) pairs.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Look up the lyrics of one song.
    async fn fetch(&self, artist: &str, song: &str) -> Result<Lyrics>;

    /// Get the name of this provider (for logging).
    fn name(&self) -> &'static str;
}

/// In-memory provider keyed by normalized (artist, song).
///
/// Unknown pairs answer `UpstreamNotFound`.
#[derive(Debug, Default, Clone)]
pub struct StaticProvider {
    songs: HashMap<(ArtistKey, SongKey), Lyrics>,
}

impl StaticProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register lyric text for a song.
    #[must_use]
    pub fn with_lyrics(mut self, artist: &str, song: &str, text: impl Into<String>) -> Self {
        self.insert(artist, song, Lyrics::Text(text.into()));
        self
    }

    /// Register a song as instrumental.
    #[must_use]
    pub fn with_instrumental(mut self, artist: &str, song: &str) -> Self {
        self.insert(artist, song, Lyrics::Instrumental);
        self
    }

    /// Register any answer for a song.
    pub fn insert(&mut self, artist: &str, song: &str, lyrics: Lyrics) {
        self.songs.insert((ArtistKey::new(artist), SongKey::new(song)), lyrics);
    }
}

#[async_trait]
impl LyricsProvider for StaticProvider {
    async fn fetch(&self, artist: &str, song: &str) -> Result<Lyrics> {
        self.songs
            .get(&(ArtistKey::new(artist), SongKey::new(song)))
            .cloned()
            .ok_or_else(|| Error::UpstreamNotFound {
                artist: artist.to_string(),
                song: song.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "StaticProvider"
    }
}
