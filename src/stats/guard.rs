//! Duplicate submission detection.

use crate::stats::store::ArtistStatsStore;
use crate::types::{ArtistKey, SongKey};

/// Read-only check run before any lyric is fetched, tokenized or merged.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateGuard<'a> {
    store: &'a ArtistStatsStore,
}

impl<'a> DuplicateGuard<'a> {
    /// Create a guard over a store.
    pub const fn new(store: &'a ArtistStatsStore) -> Self {
        Self { store }
    }

    /// Whether `song` was already ingested for `artist`.
    ///
    /// Both names are trimmed and lowercased first. An unknown artist is
    /// simply not a duplicate.
    pub fn is_duplicate(&self, artist: &str, song: &str) -> bool {
        self.is_duplicate_key(&ArtistKey::new(artist), &SongKey::new(song))
    }

    /// Same as [`Self::is_duplicate`] for already-normalized keys.
    pub fn is_duplicate_key(&self, artist: &ArtistKey, song: &SongKey) -> bool {
        self.store.has_song(artist, song)
    }
}
