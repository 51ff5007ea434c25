use tracing::{debug, warn};

use crate::{
    config::{YOUTUBE_API_KEY_VAR, validate_api_key},
    error::{EdugenError, Result},
    types::{SearchListResponse, VideoHit},
};

pub const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Upper bound on suggestions per query, requested and enforced.
pub const MAX_RESULTS: usize = 5;

const SERVICE: &str = "youtube";

/// Client for the YouTube Data API v3 `search` endpoint.
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        validate_api_key(&api_key, YOUTUBE_API_KEY_VAR)?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: YOUTUBE_SEARCH_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Search videos for `query`, keeping upstream ranking. Returns at most
    /// [`MAX_RESULTS`] hits from the first page.
    pub async fn search(&self, query: &str) -> Result<Vec<VideoHit>> {
        debug!(endpoint = %self.endpoint, query, "YouTube search request");

        let max_results = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("part", "snippet"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("type", "video"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            warn!(status = status.as_u16(), "YouTube returned non-success status");
            return Err(EdugenError::Api {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let decoded: SearchListResponse =
            serde_json::from_str(&body).map_err(|e| EdugenError::UnexpectedResponse {
                service: SERVICE,
                reason: format!("{e}: {body}"),
            })?;

        let hits = decoded
            .items
            .into_iter()
            .take(MAX_RESULTS)
            .map(|item| {
                let video_id = item.id.video_id.ok_or_else(|| EdugenError::UnexpectedResponse {
                    service: SERVICE,
                    reason: format!("result '{}' has no videoId", item.snippet.title),
                })?;
                Ok(VideoHit::new(item.snippet.title, &video_id))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(hits = hits.len(), "YouTube search response");
        Ok(hits)
    }

    /// Legacy contract: on any failure, a single `("Error", <body>)` hit.
    pub async fn search_or_sentinel(&self, query: &str) -> Vec<VideoHit> {
        match self.search(query).await {
            Ok(hits) => hits,
            Err(EdugenError::Api { body, .. }) => vec![VideoHit::error_sentinel(body)],
            Err(e) => vec![VideoHit::error_sentinel(e.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected() {
        let err = YouTubeClient::new(" ").err().unwrap();
        assert!(matches!(err, EdugenError::MissingApiKey { env_var } if env_var == YOUTUBE_API_KEY_VAR));
    }

    #[test]
    fn error_sentinel_carries_body_as_url() {
        let hit = VideoHit::error_sentinel("quota exceeded");
        assert_eq!(hit.title, "Error");
        assert_eq!(hit.url, "quota exceeded");
    }
}
