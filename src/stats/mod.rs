//! Per-artist cumulative statistics.
//!
//! The store owns one [`ArtistRecord`] per artist. The ranking dataset is a
//! derived view of every record's uniqueness percentage, kept sorted for
//! display. Both are owned by [`crate::services::ingest::LyricAggregator`].

/// Duplicate submission detection
pub mod guard;
/// Sorted uniqueness ranking
pub mod ranking;
/// Artist record and its read-only snapshot
pub mod record;
/// Artist record store
pub mod store;

pub use guard::DuplicateGuard;
pub use ranking::{RankingDataset, RankingEntry};
pub use record::{percent_unique, ArtistRecord, ArtistSnapshot};
pub use store::ArtistStatsStore;
