//! Plain-text rendering of published snapshots.
//!
//! The card shows one artist's totals; the chart draws the ranking as
//! horizontal bars. Both re-render from scratch on every call.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::constants::report::BAR_WIDTH;
use crate::stats::{ArtistSnapshot, RankingEntry};

/// Format an artist card.
pub fn format_card(record: &ArtistSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", record.artist);
    let _ = writeln!(out, "Songs:        {}", record.requested_songs.join(", "));
    let _ = writeln!(out, "Total words:  {}", record.total_words);
    let _ = writeln!(out, "Unique words: {}", record.total_unique_words);
    let _ = writeln!(out, "Unique:       {}%", record.percent_unique);
    out
}

/// Format an artist's most frequent words on one line.
pub fn format_top_words(words: &[(&str, usize)]) -> String {
    if words.is_empty() {
        return "Top words:    (none)\n".to_string();
    }
    let listed: Vec<String> = words.iter().map(|(w, c)| format!("{w} ({c})")).collect();
    format!("Top words:    {}\n", listed.join(", "))
}

/// Format the first `limit` ranking rows as a bar chart.
pub fn format_chart(ranking: &[RankingEntry], limit: usize) -> String {
    if ranking.is_empty() {
        return "(no artists yet)\n".to_string();
    }

    let shown = &ranking[..limit.min(ranking.len())];
    let name_width = shown
        .iter()
        .map(|e| e.artist.as_str().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, entry) in shown.iter().enumerate() {
        let name = entry.artist.as_str();
        let pad = name_width.saturating_sub(name.width());
        let bar = "#".repeat(usize::from(entry.percent_unique) * BAR_WIDTH / 100);
        let _ = writeln!(
            out,
            "{:>2}. {name}{} | {bar} {}%",
            idx + 1,
            " ".repeat(pad),
            entry.percent_unique
        );
    }
    if ranking.len() > shown.len() {
        let _ = writeln!(out, "    ... {} more", ranking.len() - shown.len());
    }
    out
}
