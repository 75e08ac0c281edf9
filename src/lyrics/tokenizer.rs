//! Lyric tokenizer.
//!
//! Lowercases the text, drops bracketed annotations such as `[Chorus]` or
//! `[Verse 2: Artist]`, turns punctuation into whitespace and splits on
//! whitespace. Token order and repeats are preserved.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::tokenizer::PUNCTUATION;

/// Regex matching a bracketed annotation like `[Chorus]`.
#[allow(clippy::expect_used)]
static RE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\[\]]*\]").expect("valid regex: RE_ANNOTATION")
});

/// Split raw lyric text into lowercase word tokens.
///
/// Never fails. Empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = RE_ANNOTATION.replace_all(&lowered, " ");

    let cleaned: String = stripped
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    cleaned.split_whitespace().map(String::from).collect()
}
