//! lyrics.ovh HTTP client.
//!
//! Maps HTTP outcomes onto the crate error taxonomy: 404 and `{"error": ...}`
//! bodies are misses, everything else that fails is a transport error.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::provider::types::LyricsResponse;
use crate::provider::{Lyrics, LyricsProvider};

/// Client for the lyrics.ovh API
///
/// One lookup is one `GET {base}/{artist}/{song}`. The client never retries;
/// a failed lookup is reported and the caller decides whether to resubmit.
#[derive(Clone)]
pub struct LyricsOvhClient {
    base_url: String,
    client: Client,
}

impl LyricsOvhClient {
    /// Create a new lyrics.ovh client from config
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.lyrics_api_url.clone(),
            client: Client::builder()
                .timeout(config.request_timeout)
                .user_agent(format!("{}/{}", config.app_name(), config.app_version()))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Build the lookup URL with artist and song as escaped path segments
    fn lookup_url(&self, artist: &str, song: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            Error::config(
                format!("Invalid LYRICS_API_URL {:?}: {e}", self.base_url),
                "Use a full URL such as https://api.lyrics.ovh/v1",
            )
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                Error::config(
                    format!("LYRICS_API_URL cannot take a path: {}", self.base_url),
                    "Use an http(s) URL",
                )
            })?
            .pop_if_empty()
            .push(artist.trim())
            .push(song.trim());
        Ok(url)
    }
}

#[async_trait]
impl LyricsProvider for LyricsOvhClient {
    async fn fetch(&self, artist: &str, song: &str) -> Result<Lyrics> {
        let url = self.lookup_url(artist, song)?;
        tracing::debug!(%url, "requesting lyrics");

        let resp = self.client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::transport(format!("Lyrics request for {song:?} by {artist:?} failed: {e}")))?;

        let status = resp.status();
        let not_found = || Error::UpstreamNotFound {
            artist: artist.to_string(),
            song: song.to_string(),
        };

        if status == StatusCode::NOT_FOUND {
            return Err(not_found());
        }
        if !status.is_success() {
            return Err(Error::transport_status(
                format!("Lyrics request for {song:?} by {artist:?} returned {status}"),
                status.as_u16(),
            ));
        }

        let body: LyricsResponse = resp.json().await
            .map_err(|e| Error::transport(format!("Invalid JSON from lyric provider: {e}")))?;

        if let Some(message) = &body.error {
            tracing::debug!(%artist, %song, %message, "provider reported a miss");
        }

        body.into_lyrics().ok_or_else(not_found)
    }

    fn name(&self) -> &'static str {
        "lyrics.ovh"
    }
}
