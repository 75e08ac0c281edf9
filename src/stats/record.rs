//! Artist record.

use std::collections::HashMap;

use serde::Serialize;

use crate::lyrics::SongInfo;
use crate::types::{ArtistKey, SongKey};

/// Uniqueness percentage, rounded half up. Zero when there are no words.
pub fn percent_unique(unique: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let unique = unique.min(total) as u128;
    let total = total as u128;
    // round(100 * u / t) == floor((200u + t) / 2t)
    let pct = (200 * unique + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

/// Cumulative word statistics for one artist across every ingested song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecord {
    artist: ArtistKey,
    requested_songs: Vec<SongKey>,
    word_counts: HashMap<String, usize>,
    total_words: usize,
    total_unique_words: usize,
    percent_unique: u8,
}

impl ArtistRecord {
    /// Build a record from an artist's first song.
    pub(crate) fn new(artist: ArtistKey, info: SongInfo) -> Self {
        let SongInfo { song, words } = info;
        let (word_counts, total_words) = words.into_parts();
        let mut record = Self {
            artist,
            requested_songs: vec![song],
            total_unique_words: word_counts.len(),
            word_counts,
            total_words,
            percent_unique: 0,
        };
        record.recompute_percent();
        record
    }

    /// Fold another song's counts into this record.
    ///
    /// The caller guarantees the song is not already in `requested_songs`.
    pub(crate) fn absorb(&mut self, info: SongInfo) {
        let SongInfo { song, words } = info;
        let (counts, total) = words.into_parts();

        self.total_words += total;
        for (word, count) in counts {
            *self.word_counts.entry(word).or_insert(0) += count;
        }
        self.total_unique_words = self.word_counts.len();
        self.requested_songs.push(song);
    }

    /// Reapply the percentage formula and return the new value.
    pub(crate) fn recompute_percent(&mut self) -> u8 {
        self.percent_unique = percent_unique(self.total_unique_words, self.total_words);
        self.percent_unique
    }

    /// Normalized artist name.
    pub const fn artist(&self) -> &ArtistKey {
        &self.artist
    }

    /// Songs ingested for this artist, in submission order.
    pub fn requested_songs(&self) -> &[SongKey] {
        &self.requested_songs
    }

    /// Whether a song has already been ingested for this artist.
    pub fn has_song(&self, song: &SongKey) -> bool {
        self.requested_songs.contains(song)
    }

    /// Word → cumulative occurrence count.
    pub const fn word_counts(&self) -> &HashMap<String, usize> {
        &self.word_counts
    }

    /// Sum of every token occurrence merged so far.
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of distinct words across all songs.
    pub const fn total_unique_words(&self) -> usize {
        self.total_unique_words
    }

    /// Distinct words as a rounded percentage of all words.
    pub const fn percent_unique(&self) -> u8 {
        self.percent_unique
    }

    /// Most frequent words, highest count first, ties broken alphabetically.
    pub fn top_words(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> = self
            .word_counts
            .iter()
            .map(|(w, &c)| (w.as_str(), c))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(limit);
        words
    }

    /// Owned copy of the display fields.
    pub fn snapshot(&self) -> ArtistSnapshot {
        ArtistSnapshot {
            artist: self.artist.to_string(),
            requested_songs: self.requested_songs.iter().map(ToString::to_string).collect(),
            total_words: self.total_words,
            total_unique_words: self.total_unique_words,
            percent_unique: self.percent_unique,
        }
    }
}

/// Immutable view of an artist record handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSnapshot {
    /// Normalized artist name.
    pub artist: String,
    /// Songs ingested so far, in submission order.
    pub requested_songs: Vec<String>,
    /// Total words across all songs.
    pub total_words: usize,
    /// Distinct words across all songs.
    pub total_unique_words: usize,
    /// Rounded uniqueness percentage.
    pub percent_unique: u8,
}
