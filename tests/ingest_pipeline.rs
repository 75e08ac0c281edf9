//! End-to-end tests of the ingestion pipeline against an in-memory provider.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashSet;

use lyricboard::error::Error;
use lyricboard::lyrics::tokenize;
use lyricboard::provider::StaticProvider;
use lyricboard::services::ingest::{IngestState, LyricAggregator};

const LET_IT_BE: &str = "[Verse 1]\nWhen I find myself in times of trouble\nMother Mary comes to me\n\
[Chorus]\nLet it be, let it be, let it be, let it be";
const HEY_JUDE: &str = "Hey Jude, don't make it bad\nTake a sad song and make it better";
const PURPLE_RAIN: &str = "Purple rain, purple rain\nPurple rain, purple rain";

fn provider() -> StaticProvider {
    StaticProvider::new()
        .with_lyrics("The Beatles", "Let It Be", LET_IT_BE)
        .with_lyrics("The Beatles", "Hey Jude", HEY_JUDE)
        .with_lyrics("Prince", "Purple Rain", PURPLE_RAIN)
        .with_instrumental("Booker T. & the M.G.'s", "Green Onions")
}

fn distinct(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

#[tokio::test]
async fn merging_two_songs_sums_words_and_unions_vocabulary() {
    let provider = provider();
    let mut aggregator = LyricAggregator::new();

    aggregator.ingest(&provider, "The Beatles", "Let It Be").await.unwrap();
    let published = aggregator.ingest(&provider, "the beatles", "hey jude").await.unwrap();

    let union: HashSet<String> = distinct(LET_IT_BE).union(&distinct(HEY_JUDE)).cloned().collect();
    let total = tokenize(LET_IT_BE).len() + tokenize(HEY_JUDE).len();

    assert_eq!(published.record.total_words, total);
    assert_eq!(published.record.total_unique_words, union.len());
    assert_eq!(
        published.record.requested_songs,
        vec!["let it be".to_string(), "hey jude".to_string()]
    );

    let record = aggregator.get("The Beatles").unwrap();
    assert_eq!(record.word_counts().values().sum::<usize>(), total);
    assert_eq!(record.word_counts().len(), record.total_unique_words());
}

#[tokio::test]
async fn merge_order_does_not_change_the_result() {
    let provider = provider();
    let mut forward = LyricAggregator::new();
    let mut backward = LyricAggregator::new();

    forward.ingest(&provider, "The Beatles", "Let It Be").await.unwrap();
    forward.ingest(&provider, "The Beatles", "Hey Jude").await.unwrap();
    backward.ingest(&provider, "The Beatles", "Hey Jude").await.unwrap();
    backward.ingest(&provider, "The Beatles", "Let It Be").await.unwrap();

    let f = forward.get("the beatles").unwrap();
    let b = backward.get("the beatles").unwrap();
    assert_eq!(f.word_counts(), b.word_counts());
    assert_eq!(f.total_words(), b.total_words());
    assert_eq!(f.total_unique_words(), b.total_unique_words());
    assert_eq!(f.percent_unique(), b.percent_unique());
}

#[tokio::test]
async fn ranking_tracks_every_artist_in_descending_order() {
    let provider = provider();
    let mut aggregator = LyricAggregator::new();

    aggregator.ingest(&provider, "Prince", "Purple Rain").await.unwrap();
    aggregator.ingest(&provider, "The Beatles", "Hey Jude").await.unwrap();
    let published = aggregator.ingest(&provider, "The Beatles", "Let It Be").await.unwrap();

    assert_eq!(published.ranking.len(), 2);
    assert!(published
        .ranking
        .windows(2)
        .all(|w| w[0].percent_unique >= w[1].percent_unique));
    // "purple rain" x4: 2 distinct of 8 words.
    let prince = published.ranking.iter().find(|e| e.artist.as_str() == "prince").unwrap();
    assert_eq!(prince.percent_unique, 25);
    assert_eq!(published.ranking.last().unwrap().artist.as_str(), "prince");
}

#[tokio::test]
async fn every_rejection_leaves_state_untouched() {
    let provider = provider();
    let mut aggregator = LyricAggregator::new();
    let before = aggregator.ingest(&provider, "Prince", "Purple Rain").await.unwrap();

    let cases = [
        ("", "Purple Rain", IngestState::RejectedValidation),
        ("Prince", "   ", IngestState::RejectedValidation),
        ("PRINCE", " purple rain ", IngestState::RejectedDuplicate),
        ("Prince", "When Doves Cry", IngestState::RejectedUpstreamFailure),
        ("Booker T. & the M.G.'s", "Green Onions", IngestState::RejectedInstrumental),
    ];

    for (artist, song, expected) in cases {
        let err = aggregator.ingest(&provider, artist, song).await.unwrap_err();
        assert_eq!(IngestState::from_error(&err), Some(expected), "{artist:?} / {song:?}");
    }

    assert_eq!(aggregator.store().len(), 1);
    assert_eq!(aggregator.snapshot("prince").unwrap(), before.record);
    assert_eq!(aggregator.ranking().entries(), before.ranking.as_slice());
}

#[tokio::test]
async fn reset_forgets_everything() {
    let provider = provider();
    let mut aggregator = LyricAggregator::new();
    aggregator.ingest(&provider, "Prince", "Purple Rain").await.unwrap();

    aggregator.reset();

    assert!(matches!(aggregator.get("Prince"), Err(Error::NotFound(_))));
    assert!(aggregator.ranking().is_empty());
    assert!(!aggregator.guard().is_duplicate("Prince", "Purple Rain"));

    // The same song is accepted again after a reset.
    let published = aggregator.ingest(&provider, "Prince", "Purple Rain").await.unwrap();
    assert_eq!(published.record.total_words, 8);
}
