//! Interactive session state.
//!
//! Submissions are validated on the caller's task, the provider lookup runs on
//! a spawned tokio task, and the result comes back over a channel to be
//! applied by `handle_updates`/`next_update`. Every lookup is applied in the
//! order its response arrives; nothing in flight is ever dropped.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::async_tasks::CHANNEL_BUFFER_SIZE;
use crate::error::{Error, Result};
use crate::provider::{Lyrics, LyricsOvhClient, LyricsProvider};
use crate::services::ingest::{IngestState, LyricAggregator, Published, Submission};

/// Result of a spawned lyric lookup.
#[derive(Debug)]
pub enum AppUpdate {
    /// The provider answered (or failed) for a submission.
    LyricsFetched {
        /// Ticket issued by `submit`.
        ticket: u64,
        /// The validated submission the lookup was for.
        submission: Submission,
        /// Provider outcome.
        result: Result<Lyrics>,
    },
}

/// A lyric statistics session.
pub struct App {
    /// Loaded configuration.
    pub config: Config,
    aggregator: LyricAggregator,
    provider: Arc<dyn LyricsProvider>,
    async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
    next_ticket: u64,
    in_flight: usize,
    /// Most recent successful snapshot.
    pub last_published: Option<Published>,
    /// Most recent rejection, as a user-facing message.
    pub error_message: Option<String>,
}

impl App {
    /// Create a session backed by the lyrics.ovh client.
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(LyricsOvhClient::new(&config));
        Self::with_provider(config, provider)
    }

    /// Create a session backed by any provider.
    pub fn with_provider(config: Config, provider: Arc<dyn LyricsProvider>) -> Self {
        let (async_task_tx, async_task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        tracing::debug!(provider = provider.name(), "session created");
        Self {
            config,
            aggregator: LyricAggregator::new(),
            provider,
            async_task_tx,
            async_task_rx,
            next_ticket: 0,
            in_flight: 0,
            last_published: None,
            error_message: None,
        }
    }

    /// Validate a submission and start its lyric lookup.
    ///
    /// Validation failures are returned immediately and nothing is spawned.
    /// Lookups already in flight keep running and are applied when they land.
    pub fn submit(&mut self, artist: &str, song: &str) -> Result<u64> {
        let submission = match self.aggregator.validate(artist, song) {
            Ok(s) => s,
            Err(e) => return Err(self.reject(e)),
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight += 1;
        tracing::debug!(ticket, in_flight = self.in_flight, "lookup started");

        let provider = Arc::clone(&self.provider);
        let tx = self.async_task_tx.clone();

        tokio::spawn(async move {
            let result = provider.fetch(&submission.artist, &submission.song).await;
            let update = AppUpdate::LyricsFetched { ticket, submission, result };
            if tx.send(update).await.is_err() {
                tracing::debug!(ticket, "session closed before lookup finished");
            }
        });

        Ok(ticket)
    }

    /// Whether any lookup is in flight.
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Number of lookups still waiting on the provider.
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply any finished lookups without waiting.
    ///
    /// Returns the outcome of the last applied lookup, if any.
    pub fn handle_updates(&mut self) -> Option<Result<Published>> {
        let mut outcome = None;
        loop {
            match self.async_task_rx.try_recv() {
                Ok(update) => outcome = Some(self.apply_update(update)),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    tracing::warn!("update channel disconnected");
                    break;
                }
            }
        }
        outcome
    }

    /// Wait for the next lookup to finish and apply it.
    ///
    /// Returns `None` if nothing is in flight.
    pub async fn next_update(&mut self) -> Option<Result<Published>> {
        if self.in_flight == 0 {
            return None;
        }
        let update = self.async_task_rx.recv().await?;
        Some(self.apply_update(update))
    }

    /// Clear all statistics. An in-flight lookup still lands afterwards.
    pub fn reset(&mut self) {
        self.aggregator.reset();
        self.last_published = None;
        self.error_message = None;
    }

    /// Read-only view of the aggregator.
    pub const fn aggregator(&self) -> &LyricAggregator {
        &self.aggregator
    }

    fn apply_update(&mut self, update: AppUpdate) -> Result<Published> {
        let AppUpdate::LyricsFetched { ticket, submission, result } = update;
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::debug!(
            ticket,
            artist = %submission.artist_key,
            song = %submission.song_key,
            in_flight = self.in_flight,
            "lookup finished"
        );

        match result.and_then(|lyrics| self.aggregator.apply(submission, lyrics)) {
            Ok(published) => {
                self.last_published = Some(published.clone());
                self.error_message = None;
                Ok(published)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    fn reject(&mut self, error: Error) -> Error {
        match IngestState::from_error(&error) {
            Some(state) => tracing::warn!(?state, "submission rejected: {error}"),
            None => tracing::error!("submission failed: {error}"),
        }
        self.error_message = Some(error.to_string());
        error
    }
}
