//! Uniqueness ranking.
//!
//! One entry per artist, kept sorted from most to least unique vocabulary.
//! Artists with equal percentages keep their previous relative order.

use serde::Serialize;

use crate::types::ArtistKey;

/// One row of the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// Normalized artist name.
    pub artist: ArtistKey,
    /// Rounded uniqueness percentage.
    pub percent_unique: u8,
}

/// Sorted per-artist uniqueness percentages driving display order.
#[derive(Debug, Default, Clone)]
pub struct RankingDataset {
    entries: Vec<RankingEntry>,
}

impl RankingDataset {
    /// Create an empty ranking.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Replace an artist's percentage in place, or append a new entry.
    pub fn upsert(&mut self, artist: &ArtistKey, percent_unique: u8) {
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.artist == artist) {
            entry.percent_unique = percent_unique;
        } else {
            self.entries.push(RankingEntry {
                artist: artist.clone(),
                percent_unique,
            });
        }
    }

    /// Stable sort, highest percentage first.
    pub fn sort(&mut self) {
        // `sort_by` is stable, so ties keep their current order.
        self.entries.sort_by(|a, b| b.percent_unique.cmp(&a.percent_unique));
    }

    /// Upsert followed by sort.
    pub fn update(&mut self, artist: &ArtistKey, percent_unique: u8) {
        self.upsert(artist, percent_unique);
        self.sort();
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Zero-based rank of an artist, if present.
    pub fn position(&self, artist: &ArtistKey) -> Option<usize> {
        self.entries.iter().position(|e| &e.artist == artist)
    }

    /// Number of ranked artists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no artist is ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
