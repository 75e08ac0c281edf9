//! Lyric ingestion pipeline.
//!
//! A submission moves through
//! `Received → Validated → Tokenized → Merged → Ranked → Published`.
//! Validation (blank fields, duplicate guard) and the provider lookup are the
//! only steps that can fail, and both happen before the store is touched.
//! Everything after a successful lookup runs to completion in one `&mut self`
//! call, so no caller ever sees a half-applied merge.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::lyrics::SongInfo;
use crate::provider::{Lyrics, LyricsProvider};
use crate::stats::{
    ArtistRecord, ArtistSnapshot, ArtistStatsStore, DuplicateGuard, RankingDataset, RankingEntry,
};
use crate::types::{ArtistKey, SongKey};

/// Where a submission ended up, or currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestState {
    /// Accepted from the caller, nothing checked yet.
    Received,
    /// Both fields present and not a duplicate.
    Validated,
    /// Lyrics split into tokens.
    Tokenized,
    /// Counts folded into the artist record.
    Merged,
    /// Ranking updated and re-sorted.
    Ranked,
    /// Snapshot handed to the renderer.
    Published,
    /// Already ingested for this artist.
    RejectedDuplicate,
    /// Artist or song missing.
    RejectedValidation,
    /// Provider failed or had no entry.
    RejectedUpstreamFailure,
    /// Provider says the track has no lyrics.
    RejectedInstrumental,
}

impl IngestState {
    /// Whether no further transition is possible.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Published
                | Self::RejectedDuplicate
                | Self::RejectedValidation
                | Self::RejectedUpstreamFailure
                | Self::RejectedInstrumental
        )
    }

    /// Terminal state a pipeline error resolves to.
    ///
    /// `None` for failures that are not a verdict on the submission itself:
    /// store lookups, bad configuration, I/O and serialization.
    pub const fn from_error(error: &Error) -> Option<Self> {
        match error {
            Error::Validation { .. } => Some(Self::RejectedValidation),
            Error::DuplicateSubmission { .. } => Some(Self::RejectedDuplicate),
            Error::InstrumentalTrack { .. } => Some(Self::RejectedInstrumental),
            Error::UpstreamNotFound { .. } | Error::UpstreamTransport { .. } => {
                Some(Self::RejectedUpstreamFailure)
            }
            Error::Io { .. }
            | Error::AlreadyExists(_)
            | Error::NotFound(_)
            | Error::Config { .. }
            | Error::Parse(_)
            | Error::Msg(_) => None,
        }
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Artist exactly as the caller typed it, trimmed.
    pub artist: String,
    /// Song exactly as the caller typed it, trimmed.
    pub song: String,
    /// Normalized artist key.
    pub artist_key: ArtistKey,
    /// Normalized song key.
    pub song_key: SongKey,
}

/// Everything the renderer needs after a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Published {
    /// The affected artist's card data.
    pub record: ArtistSnapshot,
    /// The full ranking in display order.
    pub ranking: Vec<RankingEntry>,
}

impl Published {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Msg(format!("Failed to serialize snapshot: {e}")))
    }
}

/// Owner of the artist store and the ranking built from it.
#[derive(Debug, Default)]
pub struct LyricAggregator {
    store: ArtistStatsStore,
    ranking: RankingDataset,
}

impl LyricAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a submission without fetching or mutating anything.
    pub fn validate(&self, artist: &str, song: &str) -> Result<Submission> {
        tracing::trace!(%artist, %song, state = ?IngestState::Received, "submission received");
        let artist = artist.trim();
        let song = song.trim();
        if artist.is_empty() {
            return Err(Error::validation("artist"));
        }
        if song.is_empty() {
            return Err(Error::validation("song"));
        }

        let submission = Submission {
            artist: artist.to_string(),
            song: song.to_string(),
            artist_key: ArtistKey::new(artist),
            song_key: SongKey::new(song),
        };
        self.check_duplicate(&submission)?;

        tracing::debug!(artist = %submission.artist_key, song = %submission.song_key, state = ?IngestState::Validated, "submission validated");
        Ok(submission)
    }

    /// Apply fetched lyrics to a validated submission.
    ///
    /// The duplicate guard runs again first: another submission for the same
    /// song may have been applied while this one was waiting on the provider.
    pub fn apply(&mut self, submission: Submission, lyrics: Lyrics) -> Result<Published> {
        self.check_duplicate(&submission)?;

        let text = match lyrics {
            Lyrics::Text(text) => text,
            Lyrics::Instrumental => {
                return Err(Error::InstrumentalTrack {
                    artist: submission.artist,
                    song: submission.song,
                })
            }
        };

        let Submission { artist_key, song_key, .. } = submission;

        let info = SongInfo::from_lyrics(song_key, &text);
        tracing::debug!(artist = %artist_key, song = %info.song, tokens = info.total_words(), state = ?IngestState::Tokenized, "lyrics tokenized");

        let percent = self.store.create_or_merge(&artist_key, info)?.percent_unique();
        tracing::debug!(artist = %artist_key, percent, state = ?IngestState::Merged, "artist record updated");

        self.ranking.update(&artist_key, percent);
        tracing::debug!(artist = %artist_key, rank = ?self.ranking.position(&artist_key), state = ?IngestState::Ranked, "ranking updated");

        let published = self.publish(&artist_key)?;
        tracing::info!(
            artist = %artist_key,
            songs = published.record.requested_songs.len(),
            total_words = published.record.total_words,
            percent_unique = published.record.percent_unique,
            "published"
        );
        Ok(published)
    }

    /// Run the whole pipeline against a provider.
    ///
    /// The provider call is the only suspension point. Failures at any step
    /// leave the store and ranking untouched.
    pub async fn ingest<P>(&mut self, provider: &P, artist: &str, song: &str) -> Result<Published>
    where
        P: LyricsProvider + ?Sized,
    {
        let result = self.ingest_inner(provider, artist, song).await;
        if let Err(e) = &result {
            match IngestState::from_error(e) {
                Some(state) => tracing::warn!(%artist, %song, ?state, "submission rejected: {e}"),
                None => tracing::error!(%artist, %song, "submission failed: {e}"),
            }
        }
        result
    }

    async fn ingest_inner<P>(&mut self, provider: &P, artist: &str, song: &str) -> Result<Published>
    where
        P: LyricsProvider + ?Sized,
    {
        let submission = self.validate(artist, song)?;
        let lyrics = provider.fetch(&submission.artist, &submission.song).await?;
        self.apply(submission, lyrics)
    }

    /// Clear every record and the ranking together.
    pub fn reset(&mut self) {
        let artists = self.store.len();
        self.store.reset();
        self.ranking.clear();
        tracing::info!(artists, "statistics reset");
    }

    /// Read one artist's record.
    pub fn get(&self, artist: &str) -> Result<&ArtistRecord> {
        self.store.get(&ArtistKey::new(artist))
    }

    /// Owned snapshot of one artist's card data.
    pub fn snapshot(&self, artist: &str) -> Result<ArtistSnapshot> {
        self.get(artist).map(ArtistRecord::snapshot)
    }

    /// Read-only view of the store.
    pub const fn store(&self) -> &ArtistStatsStore {
        &self.store
    }

    /// Read-only view of the ranking.
    pub const fn ranking(&self) -> &RankingDataset {
        &self.ranking
    }

    /// Guard over the current store.
    pub const fn guard(&self) -> DuplicateGuard<'_> {
        DuplicateGuard::new(&self.store)
    }

    fn check_duplicate(&self, submission: &Submission) -> Result<()> {
        if self.guard().is_duplicate_key(&submission.artist_key, &submission.song_key) {
            return Err(Error::DuplicateSubmission {
                artist: submission.artist_key.to_string(),
                song: submission.song_key.to_string(),
            });
        }
        Ok(())
    }

    fn publish(&self, artist: &ArtistKey) -> Result<Published> {
        Ok(Published {
            record: self.store.get(artist)?.snapshot(),
            ranking: self.ranking.entries().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::provider::StaticProvider;

    // Ten words, six distinct.
    const TEN_SIX: &str = "one two three four five six one two three four";

    #[test]
    fn test_validate_rejects_blank_fields() {
        let aggregator = LyricAggregator::new();
        assert!(matches!(
            aggregator.validate("  ", "song"),
            Err(Error::Validation { field: "artist" })
        ));
        assert!(matches!(
            aggregator.validate("artist", ""),
            Err(Error::Validation { field: "song" })
        ));
    }

    #[test]
    fn test_apply_scenario_hello_world() {
        let mut aggregator = LyricAggregator::new();
        let submission = aggregator.validate("Greeter", "Hi").unwrap();
        let published = aggregator
            .apply(submission, Lyrics::Text("Hello, hello! World.".to_string()))
            .unwrap();

        assert_eq!(published.record.total_words, 3);
        assert_eq!(published.record.total_unique_words, 2);
        assert_eq!(published.record.percent_unique, 67);
        assert_eq!(published.ranking.len(), 1);
    }

    #[test]
    fn test_instrumental_is_rejected_without_mutation() {
        let mut aggregator = LyricAggregator::new();
        let submission = aggregator.validate("Vangelis", "Chariots").unwrap();
        let err = aggregator.apply(submission, Lyrics::Instrumental).unwrap_err();

        assert!(matches!(err, Error::InstrumentalTrack { .. }));
        assert_eq!(IngestState::from_error(&err), Some(IngestState::RejectedInstrumental));
        assert!(aggregator.store().is_empty());
        assert!(aggregator.ranking().is_empty());
    }

    #[test]
    fn test_empty_lyrics_are_a_valid_zero_word_song() {
        let mut aggregator = LyricAggregator::new();
        let submission = aggregator.validate("Mime", "Silence").unwrap();
        let published = aggregator.apply(submission, Lyrics::Text("...".to_string())).unwrap();

        assert_eq!(published.record.total_words, 0);
        assert_eq!(published.record.percent_unique, 0);
        assert_eq!(published.ranking[0].percent_unique, 0);
    }

    #[test]
    fn test_stale_submission_is_caught_at_apply() {
        let mut aggregator = LyricAggregator::new();
        let first = aggregator.validate("A", "s1").unwrap();
        let second = aggregator.validate("a", "S1").unwrap();

        aggregator.apply(first, Lyrics::Text(TEN_SIX.to_string())).unwrap();
        let err = aggregator.apply(second, Lyrics::Text("other words".to_string())).unwrap_err();

        assert!(matches!(err, Error::DuplicateSubmission { .. }));
        assert_eq!(aggregator.get("A").unwrap().total_words(), 10);
    }

    #[tokio::test]
    async fn test_ingest_duplicate_leaves_state_unchanged() {
        let provider = StaticProvider::new().with_lyrics("A", "s1", TEN_SIX);
        let mut aggregator = LyricAggregator::new();

        let published = aggregator.ingest(&provider, "A", "s1").await.unwrap();
        assert_eq!(published.record.percent_unique, 60);

        let err = aggregator.ingest(&provider, "A", "s1").await.unwrap_err();
        assert!(matches!(err, Error::DuplicateSubmission { .. }));
        assert_eq!(IngestState::from_error(&err), Some(IngestState::RejectedDuplicate));

        let record = aggregator.get("a").unwrap();
        assert_eq!(record.percent_unique(), 60);
        assert_eq!(record.total_words(), 10);
        assert_eq!(record.requested_songs().len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_miss_maps_to_upstream_failure() {
        let provider = StaticProvider::new();
        let mut aggregator = LyricAggregator::new();

        let err = aggregator.ingest(&provider, "Ghost", "Boo").await.unwrap_err();
        assert!(matches!(err, Error::UpstreamNotFound { .. }));
        assert_eq!(IngestState::from_error(&err), Some(IngestState::RejectedUpstreamFailure));
        assert!(aggregator.store().is_empty());
    }

    #[test]
    fn test_reset_clears_store_and_ranking() {
        let mut aggregator = LyricAggregator::new();
        let submission = aggregator.validate("A", "s1").unwrap();
        aggregator.apply(submission, Lyrics::Text(TEN_SIX.to_string())).unwrap();

        aggregator.reset();
        assert!(matches!(aggregator.get("A"), Err(Error::NotFound(_))));
        assert!(aggregator.ranking().is_empty());
        assert!(aggregator.validate("A", "s1").is_ok());
    }

    #[test]
    fn test_published_json_shape() {
        let mut aggregator = LyricAggregator::new();
        let submission = aggregator.validate("Band", "Song").unwrap();
        let published = aggregator.apply(submission, Lyrics::Text("la la la".to_string())).unwrap();

        let json: serde_json::Value = serde_json::from_str(&published.to_json().unwrap()).unwrap();
        assert_eq!(json["record"]["percentUnique"], 33);
        assert_eq!(json["ranking"][0]["artist"], "band");
        assert_eq!(json["ranking"][0]["percentUnique"], 33);
    }

    #[test]
    fn test_from_error_only_maps_pipeline_failures() {
        let cases = [
            (Error::validation("artist"), Some(IngestState::RejectedValidation)),
            (
                Error::DuplicateSubmission { artist: "a".into(), song: "s".into() },
                Some(IngestState::RejectedDuplicate),
            ),
            (
                Error::InstrumentalTrack { artist: "a".into(), song: "s".into() },
                Some(IngestState::RejectedInstrumental),
            ),
            (
                Error::UpstreamNotFound { artist: "a".into(), song: "s".into() },
                Some(IngestState::RejectedUpstreamFailure),
            ),
            (Error::transport("connection reset"), Some(IngestState::RejectedUpstreamFailure)),
            (Error::transport_status("bad gateway", 502), Some(IngestState::RejectedUpstreamFailure)),
            (Error::AlreadyExists("a".into()), None),
            (Error::NotFound("a".into()), None),
            (Error::config("LYRICS_API_URL is empty", "set it"), None),
            (Error::Parse("line 1".into()), None),
            (Error::io(std::io::Error::other("disk"), Option::<std::path::PathBuf>::None), None),
            (Error::Msg("serialize".into()), None),
        ];

        for (err, expected) in cases {
            assert_eq!(IngestState::from_error(&err), expected, "{err}");
            if let Some(state) = expected {
                assert!(state.is_terminal());
            }
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(IngestState::Published.is_terminal());
        assert!(IngestState::RejectedValidation.is_terminal());
        assert!(!IngestState::Received.is_terminal());
        assert!(!IngestState::Validated.is_terminal());
        assert!(!IngestState::Merged.is_terminal());
    }
}
