use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, YtallyError};
use crate::service::PlaylistService;
use crate::types::{PlaylistPage, PlaylistVideo, VideoDetails};

/// The base part of the YouTube Data API v3.
pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Environment variable consulted by [`YouTubeClient::from_env`].
pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";

/// YouTube Data API v3 client.
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Build a client from the `YOUTUBE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        std::env::var(API_KEY_ENV_VAR)
            .map(Self::new)
            .map_err(|_| YtallyError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_owned(),
            })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let body = self.client.get(url).send().await?.json::<Value>().await?;

        if let Some(error) = body.get("error") {
            return Err(YtallyError::Api {
                message: error["message"].as_str().unwrap_or("unknown error").to_owned(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl PlaylistService for YouTubeClient {
    async fn playlist_page(
        &self,
        playlist_id: &str,
        max_results: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        let mut url = format!(
            "{}/playlistItems?part=contentDetails&playlistId={}&maxResults={}&key={}",
            YOUTUBE_API_BASE, playlist_id, max_results, self.api_key
        );
        if let Some(token) = page_token {
            url.push_str("&pageToken=");
            url.push_str(token);
        }

        Ok(playlist_page_from_json(&self.get_json(&url).await?))
    }

    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/videos?part=contentDetails&id={}&key={}",
            YOUTUBE_API_BASE,
            video_ids.join(","),
            self.api_key
        );

        Ok(video_details_from_json(&self.get_json(&url).await?))
    }
}

fn playlist_page_from_json(body: &Value) -> PlaylistPage {
    PlaylistPage {
        videos: body["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| PlaylistVideo {
                        id: item["contentDetails"]["videoId"]
                            .as_str()
                            .unwrap_or_default()
                            .to_owned(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        next_page_token: body["nextPageToken"].as_str().map(str::to_owned),
    }
}

fn video_details_from_json(body: &Value) -> Vec<VideoDetails> {
    body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| VideoDetails {
                    id: item["id"].as_str().unwrap_or_default().to_owned(),
                    duration: item["contentDetails"]["duration"]
                        .as_str()
                        .unwrap_or_default()
                        .to_owned(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn playlist_page_carries_ids_and_token() {
        let body = json!({
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "CAUQAA",
            "items": [
                { "contentDetails": { "videoId": "abc" } },
                { "contentDetails": { "videoId": "def" } },
            ],
        });

        let page = playlist_page_from_json(&body);
        assert_eq!(
            page.videos,
            vec![
                PlaylistVideo { id: "abc".to_owned() },
                PlaylistVideo { id: "def".to_owned() },
            ]
        );
        assert_eq!(page.next_page_token, Some("CAUQAA".to_owned()));
    }

    #[test]
    fn last_page_has_no_token() {
        let body = json!({ "items": [] });

        let page = playlist_page_from_json(&body);
        assert!(page.videos.is_empty());
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn video_details_tolerate_missing_duration() {
        let body = json!({
            "items": [
                { "id": "abc", "contentDetails": { "duration": "PT4M13S" } },
                { "id": "def", "contentDetails": {} },
            ],
        });

        let details = video_details_from_json(&body);
        assert_eq!(details[0].duration, "PT4M13S");
        assert_eq!(details[1].duration, "");
    }
}
