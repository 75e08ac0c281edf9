//! Artist record store.
//!
//! Single owner of every [`ArtistRecord`], keyed by normalized artist name.
//! Records are created on an artist's first song, grown by merging later
//! songs, and only ever removed all together by [`ArtistStatsStore::reset`].

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::lyrics::SongInfo;
use crate::stats::record::ArtistRecord;
use crate::types::{ArtistKey, SongKey};

/// Cumulative per-artist statistics.
#[derive(Debug, Default)]
pub struct ArtistStatsStore {
    records: HashMap<ArtistKey, ArtistRecord>,
}

impl ArtistStatsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert a fresh record for an artist's first song.
    pub fn create(&mut self, artist: &ArtistKey, info: SongInfo) -> Result<&ArtistRecord> {
        if self.records.contains_key(artist) {
            return Err(Error::AlreadyExists(artist.to_string()));
        }
        tracing::debug!(%artist, song = %info.song, words = info.total_words(), "creating artist record");
        let record = self
            .records
            .entry(artist.clone())
            .or_insert_with(|| ArtistRecord::new(artist.clone(), info));
        Ok(&*record)
    }

    /// Fold another song into an existing record.
    ///
    /// Fails with `NotFound` if the artist has no record, and with
    /// `DuplicateSubmission` if the song was already merged. Neither failure
    /// mutates the record.
    pub fn merge(&mut self, artist: &ArtistKey, info: SongInfo) -> Result<&ArtistRecord> {
        let record = self
            .records
            .get_mut(artist)
            .ok_or_else(|| Error::NotFound(artist.to_string()))?;

        if record.has_song(&info.song) {
            return Err(Error::DuplicateSubmission {
                artist: artist.to_string(),
                song: info.song.to_string(),
            });
        }

        tracing::debug!(%artist, song = %info.song, words = info.total_words(), "merging song into artist record");
        record.absorb(info);
        record.recompute_percent();
        Ok(&*record)
    }

    /// Create the artist's record or merge into it, whichever applies.
    pub fn create_or_merge(&mut self, artist: &ArtistKey, info: SongInfo) -> Result<&ArtistRecord> {
        if self.contains(artist) {
            self.merge(artist, info)
        } else {
            self.create(artist, info)
        }
    }

    /// Reapply the percentage formula for an artist and return the new value.
    pub fn recompute_percent(&mut self, artist: &ArtistKey) -> Result<u8> {
        self.records
            .get_mut(artist)
            .map(ArtistRecord::recompute_percent)
            .ok_or_else(|| Error::NotFound(artist.to_string()))
    }

    /// Read a record.
    pub fn get(&self, artist: &ArtistKey) -> Result<&ArtistRecord> {
        self.records
            .get(artist)
            .ok_or_else(|| Error::NotFound(artist.to_string()))
    }

    /// Check whether an artist has a record.
    pub fn contains(&self, artist: &ArtistKey) -> bool {
        self.records.contains_key(artist)
    }

    /// Check whether a song was already ingested for an artist.
    pub fn has_song(&self, artist: &ArtistKey, song: &SongKey) -> bool {
        self.records.get(artist).is_some_and(|r| r.has_song(song))
    }

    /// Get the number of artists with a record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn reset(&mut self) {
        self.records.clear();
    }
}
