//! Lyric text processing.
//!
//! Turns raw lyric text into word tokens and reduces those tokens to
//! per-song word frequencies.

/// Word frequency counting for a single song
pub mod frequency;
/// Lyric text normalization and splitting
pub mod tokenizer;

pub use frequency::{SongInfo, WordCounts};
pub use tokenizer::tokenize;
