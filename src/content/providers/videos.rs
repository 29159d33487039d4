//! Channel videos from the YouTube Data API v3 `search` endpoint.
//!
//! The API key comes from `videoProvider.apiKey` (or `FTERM_VIDEO_API_KEY`).
//! It is looked up on every fetch, so a missing key only fails this panel.

use chrono::{DateTime, FixedOffset};
use log::{debug, info};
use serde::Deserialize;

use super::html::clean_text;

use crate::content::provider::{get_text, http_client};
use crate::content::{ContentProvider, FetchError, Item};
use crate::core::config::ResolvedConfig;

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=";
const DATE_FORMAT: &str = "%d.%m.%Y";

// ============================================================================
// YouTube search API types
// ============================================================================

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Deserialize, Debug)]
struct SearchResult {
    id: ResultId,
    snippet: Snippet,
}

/// Search results mix videos, playlists and channels; only videos carry `videoId`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ResultId {
    video_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    published_at: Option<DateTime<FixedOffset>>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct VideosProvider {
    client: reqwest::blocking::Client,
}

impl VideosProvider {
    pub fn new() -> Self {
        Self {
            client: http_client(),
        }
    }
}

impl Default for VideosProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for VideosProvider {
    fn name(&self) -> &str {
        "videos"
    }

    fn title(&self) -> &str {
        "VIDEOS:"
    }

    fn title_url(&self, config: &ResolvedConfig) -> String {
        format!(
            "https://www.youtube.com/channel/{}/videos",
            config.video_channel_id
        )
    }

    fn fetch(&self, config: &ResolvedConfig) -> Result<Vec<Item>, FetchError> {
        let api_key = config
            .video_api_key
            .as_deref()
            .ok_or_else(|| FetchError::Config("videoProvider.apiKey is not set".to_string()))?;

        let url = format!("{}/search", config.video_api_url);
        info!(
            "Videos request: {} channel={} max_results={}",
            url, config.video_channel_id, config.video_max_results
        );

        let max_results = config.video_max_results.to_string();
        let request = self.client.get(&url).query(&[
            ("key", api_key),
            ("channelId", config.video_channel_id.as_str()),
            ("order", "date"),
            ("maxResults", max_results.as_str()),
            ("part", "snippet"),
        ]);
        let body = get_text(self.name(), request)?;
        parse_videos(&body)
    }
}

fn parse_videos(body: &str) -> Result<Vec<Item>, FetchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let items: Vec<Item> = response
        .items
        .into_iter()
        .filter_map(|result| {
            let Some(video_id) = result.id.video_id else {
                debug!("Skipping non-video search result: {}", result.snippet.title);
                return None;
            };
            let mut item = Item::new(clean_text(&result.snippet.title))
                .with_link(format!("{VIDEO_URL}{video_id}"));
            if let Some(published) = result.snippet.published_at {
                item = item.with_date(published.format(DATE_FORMAT).to_string());
            }
            Some(item)
        })
        .collect();

    debug!("Parsed {} videos", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_videos() {
        let body = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "abc123"},
                 "snippet": {"title": "Talk one", "publishedAt": "2023-11-05T18:30:00Z"}},
                {"id": {"kind": "youtube#playlist", "playlistId": "PL1"},
                 "snippet": {"title": "A playlist", "publishedAt": "2023-10-01T00:00:00Z"}},
                {"id": {"kind": "youtube#video", "videoId": "def456"},
                 "snippet": {"title": "Talk two"}}
            ]
        }"#;
        let items = parse_videos(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Talk one");
        assert_eq!(items[0].date.as_deref(), Some("05.11.2023"));
        assert_eq!(
            items[0].link.as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(items[1].name, "Talk two");
        assert!(items[1].date.is_none());
    }

    #[test]
    fn test_parse_keeps_offset_date() {
        let body = r#"{"items": [{"id": {"videoId": "x"},
            "snippet": {"title": "t", "publishedAt": "2024-01-01T23:30:00+02:00"}}]}"#;
        let items = parse_videos(body).unwrap();
        assert_eq!(items[0].date.as_deref(), Some("01.01.2024"));
    }

    #[test]
    fn test_parse_flattens_title_whitespace() {
        let body = r#"{"items": [{"id": {"videoId": "x"},
            "snippet": {"title": "Live\n\tcoding \u001b[2J session"}}]}"#;
        let items = parse_videos(body).unwrap();
        assert_eq!(items[0].name, "Live coding [2J session");
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(parse_videos("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(parse_videos("<html>"), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_missing_api_key_fails_fetch() {
        let provider = VideosProvider::new();
        let err = provider.fetch(&ResolvedConfig::default()).unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }
}
