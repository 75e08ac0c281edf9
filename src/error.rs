//! Application error types.
//!
//! Every rejected submission resolves to one of these variants, so callers can
//! branch on the failure kind instead of matching on message text.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// A required submission field was missing or blank
    #[error("Validation error: {field} must not be empty")]
    Validation {
        /// Name of the offending field (`artist` or `song`).
        field: &'static str,
    },

    /// The (artist, song) pair has already been ingested
    #[error("Already counted \"{song}\" for {artist}")]
    DuplicateSubmission {
        /// Normalized artist name.
        artist: String,
        /// Normalized song title.
        song: String,
    },

    /// The lyric provider has no entry for the requested song
    #[error("No lyrics found for \"{song}\" by {artist}")]
    UpstreamNotFound {
        /// Artist as submitted.
        artist: String,
        /// Song as submitted.
        song: String,
    },

    /// The lyric provider could not be reached or answered with a failure status
    #[error("Lyric provider error: {message}")]
    UpstreamTransport {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// The provider reports the track has no lyrics
    #[error("\"{song}\" by {artist} is an instrumental track")]
    InstrumentalTrack {
        /// Artist as submitted.
        artist: String,
        /// Song as submitted.
        song: String,
    },

    /// `create` was called for an artist that already has a record
    #[error("Artist record already exists: {0}")]
    AlreadyExists(String),

    /// No record exists for the requested artist
    #[error("No record for artist: {0}")]
    NotFound(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Malformed input that could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a validation error for a blank field
    pub const fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    /// Create a transport error that did not produce an HTTP status
    pub fn transport(message: impl Into<String>) -> Self {
        Self::UpstreamTransport {
            message: message.into(),
            status: None,
            hint: None,
        }
    }

    /// Create a transport error with HTTP status
    pub fn transport_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            400 => Some("The provider rejected the request; check the artist and song spelling"),
            403 => Some("The provider refused the request; check LYRICS_API_URL"),
            429 => Some("Rate limited - wait a moment and resubmit"),
            500..=599 => Some("Lyric provider server error - try again later"),
            _ => None,
        };
        Self::UpstreamTransport {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether resubmitting the same request could plausibly succeed.
    ///
    /// Only transport conditions qualify. Not-found and instrumental are
    /// permanent answers from the provider.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::UpstreamTransport { status, .. } => match status {
                None | Some(408 | 429) => true,
                Some(code) => *code >= 500,
            },
            _ => false,
        }
    }
}
