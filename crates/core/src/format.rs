use crate::{pipeline::TaskOutput, task::Task, types::VideoHit};

/// Markdown bullet list, one `- [title](url)` line per video.
pub fn format_video_list(hits: &[VideoHit]) -> String {
    hits.iter()
        .map(|hit| format!("- [{}]({})", hit.title, hit.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a task result as human-readable markdown.
pub fn format_output(task: Task, output: &TaskOutput) -> String {
    let mut rendered = String::new();
    rendered.push_str(&format!("## {}\n\n", task.heading()));

    match output {
        TaskOutput::Text(text) => {
            if task == Task::AudioSummary {
                rendered.push_str("Text Summary:\n\n");
            }
            rendered.push_str(text.trim_end());
        }
        TaskOutput::Videos(hits) => {
            rendered.push_str("Based on topic keywords from your content\n\n");
            rendered.push_str(&format_video_list(hits));
        }
    }
    rendered.push('\n');

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_render_as_markdown_links() {
        let hits = vec![
            VideoHit::new("Cells 101", "a1"),
            VideoHit::new("Mitosis", "b2"),
        ];
        assert_eq!(
            format_video_list(&hits),
            "- [Cells 101](https://www.youtube.com/watch?v=a1)\n- [Mitosis](https://www.youtube.com/watch?v=b2)"
        );
    }

    #[test]
    fn text_output_gets_heading() {
        let rendered = format_output(Task::Summarize, &TaskOutput::Text("Short summary.\n".into()));
        assert_eq!(rendered, "## Summary\n\nShort summary.\n");
    }

    #[test]
    fn empty_video_list_renders_heading_only() {
        let rendered = format_output(Task::Videos, &TaskOutput::Videos(Vec::new()));
        assert!(rendered.starts_with("## YouTube Videos\n\n"));
        assert!(!rendered.contains("- ["));
    }
}
