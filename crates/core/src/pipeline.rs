use tracing::info;

use crate::{
    config::Config,
    error::{EdugenError, Result},
    gemini::GeminiClient,
    task::{Task, video_query},
    types::VideoHit,
    youtube::YouTubeClient,
};

/// The two upstream clients a task may call.
pub struct Clients {
    pub gemini: GeminiClient,
    pub youtube: YouTubeClient,
}

impl Clients {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            gemini: GeminiClient::new(config.gemini_api_key.clone())?,
            youtube: YouTubeClient::new(config.youtube_api_key.clone())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutput {
    Text(String),
    Videos(Vec<VideoHit>),
}

/// Run one task over `content` with exactly one upstream call.
pub async fn run_task(task: Task, content: &str, clients: &Clients) -> Result<TaskOutput> {
    info!(task = task.name(), content_chars = content.chars().count(), "Running task");

    match task.prompt(content) {
        Some(prompt) => Ok(TaskOutput::Text(clients.gemini.generate(&prompt).await?)),
        None => {
            let query = video_query(content);
            Ok(TaskOutput::Videos(clients.youtube.search(&query).await?))
        }
    }
}

/// Fold a task failure back into the output the UI would have shown:
/// the error text for generation tasks, a single `Error` hit for videos.
pub fn output_or_sentinel(task: Task, result: Result<TaskOutput>) -> TaskOutput {
    match result {
        Ok(output) => output,
        Err(e) if task == Task::Videos => {
            let body = match e {
                EdugenError::Api { body, .. } => body,
                other => other.to_string(),
            };
            TaskOutput::Videos(vec![VideoHit::error_sentinel(body)])
        }
        Err(e) => TaskOutput::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error() -> EdugenError {
        EdugenError::Api {
            service: "youtube",
            status: 403,
            body: "quotaExceeded".to_string(),
        }
    }

    #[test]
    fn video_failure_becomes_single_error_hit() {
        let output = output_or_sentinel(Task::Videos, Err(api_error()));
        assert_eq!(
            output,
            TaskOutput::Videos(vec![VideoHit::error_sentinel("quotaExceeded")])
        );
    }

    #[test]
    fn text_failure_becomes_status_and_body() {
        let output = output_or_sentinel(Task::Quiz, Err(api_error()));
        assert_eq!(output, TaskOutput::Text("Error: 403 - quotaExceeded".to_string()));
    }

    #[test]
    fn success_passes_through() {
        let output = output_or_sentinel(Task::Summarize, Ok(TaskOutput::Text("ok".into())));
        assert_eq!(output, TaskOutput::Text("ok".into()));
    }
}
