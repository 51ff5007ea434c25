/// Characters of the learning material used to seed a video search.
pub const VIDEO_QUERY_CHARS: usize = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Task {
    #[default]
    Summarize,
    Quiz,
    Flashcards,
    AudioSummary,
    Videos,
}

impl Task {
    pub const ALL: [Task; 5] = [
        Task::Summarize,
        Task::Quiz,
        Task::Flashcards,
        Task::AudioSummary,
        Task::Videos,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Task::Summarize => "Summarize Content",
            Task::Quiz => "Generate Quiz",
            Task::Flashcards => "Create Flashcards",
            Task::AudioSummary => "Generate Audio Summary",
            Task::Videos => "Suggest YouTube Videos",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Task::Summarize => "Summary",
            Task::Quiz => "Quiz",
            Task::Flashcards => "Flashcards",
            Task::AudioSummary => "Audio Summary",
            Task::Videos => "YouTube Videos",
        }
    }

    fn instruction(&self) -> Option<&'static str> {
        match self {
            Task::Summarize => Some("Summarize this educational content:"),
            Task::Quiz => Some(
                "Generate 5 multiple-choice questions with 4 options each and the correct answer labeled based on:",
            ),
            Task::Flashcards => Some(
                "Create 10 flashcards from the following content in the format: Term - Definition:",
            ),
            Task::AudioSummary => Some(
                "Give a short spoken summary (approx. 1 minute) of this educational content:",
            ),
            Task::Videos => None,
        }
    }

    /// Generation prompt for `content`; `None` for the video search task.
    pub fn prompt(&self, content: &str) -> Option<String> {
        self.instruction()
            .map(|instruction| format!("{}\n{}", instruction, content))
    }
}

/// Search query built from the head of the material, cut on char boundaries.
pub fn video_query(content: &str) -> String {
    let head: String = content.chars().take(VIDEO_QUERY_CHARS).collect();
    format!("educational videos about {}", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_prompt_puts_content_after_newline() {
        assert_eq!(
            Task::Summarize.prompt("Photosynthesis converts light."),
            Some("Summarize this educational content:\nPhotosynthesis converts light.".to_string())
        );
    }

    #[test]
    fn every_generation_task_has_a_prompt() {
        for task in Task::ALL {
            assert_eq!(task.prompt("x").is_some(), task != Task::Videos, "{}", task.name());
        }
    }

    #[test]
    fn quiz_prompt_matches_template() {
        let prompt = Task::Quiz.prompt("cells").unwrap();
        assert!(prompt.starts_with("Generate 5 multiple-choice questions"));
        assert!(prompt.ends_with("based on:\ncells"));
    }

    #[test]
    fn video_query_keeps_short_content() {
        assert_eq!(video_query("Rust ownership"), "educational videos about Rust ownership");
    }

    #[test]
    fn video_query_truncates_to_eighty_chars() {
        let content = "é".repeat(120);
        let query = video_query(&content);
        let head = query.strip_prefix("educational videos about ").unwrap();
        assert_eq!(head.chars().count(), VIDEO_QUERY_CHARS);
    }
}
