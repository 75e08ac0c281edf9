//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Tokenizer constants.
pub mod tokenizer {
    /// Characters replaced by whitespace before splitting lyric text into words.
    ///
    /// Apostrophes are deliberately absent so contractions stay one word.
    pub const PUNCTUATION: &[char] = &[
        '.', ',', '!', '?', ';', ':', '"', '(', ')', '{', '}', '[', ']', '-', '_', '*', '/',
        '\\', '&', '#', '~', '+', '=', '<', '>', '|', '`', '\u{2013}', '\u{2014}', '\u{2026}',
        '\u{201C}', '\u{201D}',
    ];
}

/// Lyric provider constants.
pub mod provider {
    /// Default lyric provider base URL.
    pub const DEFAULT_API_URL: &str = "https://api.lyrics.ovh/v1";

    /// Default HTTP timeout for one lyric lookup, in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Body text the provider uses in place of lyrics for instrumental tracks.
    pub const INSTRUMENTAL_MARKER: &str = "instrumental";
}

/// Text report constants.
pub mod report {
    /// Default number of ranking rows printed by the chart.
    pub const DEFAULT_CHART_LIMIT: usize = 10;

    /// Width of the bar drawn for a 100% uniqueness score.
    pub const BAR_WIDTH: usize = 40;
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 16;
}
