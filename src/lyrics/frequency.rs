//! Word frequency counting.

use std::collections::HashMap;

use crate::types::SongKey;

/// Word occurrence counts for a token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordCounts {
    /// Count occurrences of each token. `total` equals the number of tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0;
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Word → occurrence count.
    pub const fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Total number of tokens counted.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of a single word.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub(crate) fn into_parts(self) -> (HashMap<String, usize>, usize) {
        (self.counts, self.total)
    }
}

/// Word statistics for one song, ready to be merged into an artist record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    /// Normalized song title.
    pub song: SongKey,
    /// Word counts of the song's lyrics.
    pub words: WordCounts,
}

impl SongInfo {
    /// Tokenize lyric text and count its words.
    pub fn from_lyrics(song: SongKey, lyrics: &str) -> Self {
        Self {
            song,
            words: WordCounts::from_tokens(super::tokenize(lyrics)),
        }
    }

    /// Total words in the song.
    pub const fn total_words(&self) -> usize {
        self.words.total()
    }
}
