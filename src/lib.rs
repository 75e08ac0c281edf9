//! `lyricboard` - lyric vocabulary statistics per artist.
//!
//! Songs are submitted as (artist, song) pairs. Their lyrics are fetched from
//! a provider, split into words and folded into a running per-artist record
//! (total words, distinct words, uniqueness percentage). A ranking of all
//! artists by uniqueness is kept sorted for display.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lyrics;
pub mod provider;
pub mod services;
pub mod stats;
pub mod types;
