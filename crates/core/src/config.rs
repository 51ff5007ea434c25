use tracing::info;

use crate::error::{EdugenError, Result};

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Credentials for the two upstream services.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub youtube_api_key: String,
}

impl Config {
    /// Load credentials from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            gemini_api_key: require(&lookup, GEMINI_API_KEY_VAR)?,
            youtube_api_key: require(&lookup, YOUTUBE_API_KEY_VAR)?,
        })
    }

    pub fn log_redacted(&self) {
        info!(
            gemini_key_len = self.gemini_api_key.len(),
            youtube_key_len = self.youtube_api_key.len(),
            "Credentials loaded"
        );
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("youtube_api_key", &"<redacted>")
            .finish()
    }
}

fn require<F>(lookup: &F, env_var: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(env_var).unwrap_or_default();
    validate_api_key(&value, env_var)?;
    Ok(value)
}

/// Reject blank keys up front instead of waiting for an upstream 400/403.
pub(crate) fn validate_api_key(value: &str, env_var: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EdugenError::MissingApiKey {
            env_var: env_var.to_string(),
        });
    }
    Ok(())
}
