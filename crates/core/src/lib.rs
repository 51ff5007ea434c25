//! Edugen Core Library
//!
//! Turns learning material into summaries, quizzes, flashcards and spoken-style
//! summaries via Gemini, and suggests related videos via YouTube search.

pub mod config;
pub mod error;
pub mod format;
pub mod gemini;
pub mod pipeline;
pub mod source;
pub mod task;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{EdugenError, Result};
pub use format::{format_output, format_video_list};
pub use gemini::GeminiClient;
pub use pipeline::{Clients, TaskOutput, output_or_sentinel, run_task};
pub use source::load_content;
pub use task::{Task, video_query};
pub use types::VideoHit;
pub use youtube::YouTubeClient;
