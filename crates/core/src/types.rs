use serde::{Deserialize, Serialize};

pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// One suggested video, in the order the search service ranked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoHit {
    pub title: String,
    pub url: String,
}

impl VideoHit {
    pub fn new(title: impl Into<String>, video_id: &str) -> Self {
        Self {
            title: title.into(),
            url: Self::watch_url(video_id),
        }
    }

    pub fn watch_url(video_id: &str) -> String {
        format!("{}{}", YOUTUBE_WATCH_URL, video_id)
    }

    /// Legacy failure marker: title `Error`, raw response body in place of the URL.
    pub fn error_sentinel(body: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            url: body.into(),
        }
    }
}

// generateContent request: {"contents":[{"parts":[{"text": ...}]}]}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_nested_contents_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn first_text_reads_first_candidate_only() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second part"}], "role": "model"}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(response.first_text(), Some("first"));
    }

    #[test]
    fn first_text_is_none_for_blocked_prompt() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn watch_url_appends_video_id() {
        let hit = VideoHit::new("Intro to Rust", "abc123");
        assert_eq!(hit.url, "https://www.youtube.com/watch?v=abc123");
    }
}
