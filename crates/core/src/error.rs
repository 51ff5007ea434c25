use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdugenError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    /// Non-success status from an upstream service. Renders as the legacy
    /// `Error: <status> - <body>` text shown in place of a result.
    #[error("Error: {status} - {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Unexpected {service} response: {reason}")]
    UnexpectedResponse {
        service: &'static str,
        reason: String,
    },

    #[error("Unsupported input {path}: only .txt files are accepted")]
    UnsupportedInput { path: PathBuf },

    #[error("Input {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl EdugenError {
    /// Status code and raw body of an upstream failure, if this is one.
    pub fn api_failure(&self) -> Option<(u16, &str)> {
        match self {
            EdugenError::Api { status, body, .. } => Some((*status, body.as_str())),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EdugenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_renders_status_and_body() {
        let err = EdugenError::Api {
            service: "gemini",
            status: 403,
            body: "{\"error\":\"API key not valid\"}".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Error: 403 - {\"error\":\"API key not valid\"}"
        );
        assert_eq!(
            err.api_failure(),
            Some((403, "{\"error\":\"API key not valid\"}"))
        );
    }

    #[test]
    fn non_api_errors_have_no_failure_payload() {
        let err = EdugenError::MissingApiKey {
            env_var: "GEMINI_API_KEY".to_string(),
        };
        assert!(err.api_failure().is_none());
    }
}
