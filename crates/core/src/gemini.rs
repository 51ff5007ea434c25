use tracing::{debug, warn};

use crate::{
    config::{GEMINI_API_KEY_VAR, validate_api_key},
    error::{EdugenError, Result},
    types::{GenerateContentRequest, GenerateContentResponse},
};

pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

const SERVICE: &str = "gemini";

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        validate_api_key(&api_key, GEMINI_API_KEY_VAR)?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send one prompt and return the first candidate's text.
    ///
    /// The key travels as the `key` query parameter, not a header. A non-200
    /// status becomes [`EdugenError::Api`] carrying the status and raw body.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, prompt_chars = prompt.chars().count(), "Gemini generate request");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            warn!(status = status.as_u16(), "Gemini returned non-success status");
            return Err(EdugenError::Api {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| EdugenError::UnexpectedResponse {
                service: SERVICE,
                reason: format!("{e}: {body}"),
            })?;

        let text = decoded
            .first_text()
            .ok_or_else(|| EdugenError::UnexpectedResponse {
                service: SERVICE,
                reason: format!("no candidate text in response: {body}"),
            })?;

        debug!(text_chars = text.chars().count(), "Gemini generate response");
        Ok(text.to_string())
    }

    /// Legacy string contract: the text on success, otherwise the error message
    /// (`Error: <status> - <body>` for upstream failures).
    pub async fn generate_or_sentinel(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        let err = GeminiClient::new("").err().unwrap();
        assert!(matches!(err, EdugenError::MissingApiKey { env_var } if env_var == GEMINI_API_KEY_VAR));
    }

    #[test]
    fn defaults_to_flash_endpoint() {
        let client = GeminiClient::new("key").unwrap();
        assert_eq!(client.endpoint, GEMINI_ENDPOINT);

        let client = client.with_endpoint("http://127.0.0.1:9/generate");
        assert_eq!(client.endpoint, "http://127.0.0.1:9/generate");
    }
}
