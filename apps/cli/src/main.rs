use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use edugen_core::{
    Clients, Config, Task, format_output, load_content, output_or_sentinel, run_task,
};

/// CLI wrapper for Task enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliTask {
    #[default]
    Summarize,
    Quiz,
    Flashcards,
    AudioSummary,
    Videos,
}

impl From<CliTask> for Task {
    fn from(cli: CliTask) -> Self {
        match cli {
            CliTask::Summarize => Task::Summarize,
            CliTask::Quiz => Task::Quiz,
            CliTask::Flashcards => Task::Flashcards,
            CliTask::AudioSummary => Task::AudioSummary,
            CliTask::Videos => Task::Videos,
        }
    }
}

#[derive(Parser)]
#[command(name = "edugen")]
#[command(
    about = "Summarize learning material, build quizzes and flashcards, and suggest YouTube videos"
)]
struct Cli {
    /// Learning material to process. Use "-" to read from stdin.
    text: Option<String>,

    /// Read the material from a .txt file instead (takes precedence over TEXT)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// What to generate from the material
    #[arg(short, long, default_value = "summarize")]
    task: CliTask,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn read_text_arg(text: Option<String>) -> Result<Option<String>> {
    match text.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(Some(buf))
        }
        _ => Ok(text),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("edugen=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let task: Task = cli.task.into();

    // Validate API keys early
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    config.log_redacted();
    let clients = Clients::from_config(&config)?;

    println!(
        "\n{}  {}\n",
        style("edugen").cyan().bold(),
        style("Educational Content Generator").dim()
    );

    let text = read_text_arg(cli.text).await?;
    let Some(content) = load_content(cli.file.as_deref(), text.as_deref()).await? else {
        println!(
            "{} Please upload or paste educational content to continue.",
            style("ℹ").blue().bold()
        );
        return Ok(());
    };

    let spinner = create_spinner(&format!("{}...", task.name()));
    let result = run_task(task, &content, &clients).await;
    if result.is_ok() {
        spinner.finish_with_message(format!("{} {}", style("✓").green().bold(), task.name()));
    } else {
        spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), task.name()));
    }

    println!("{}", style("─".repeat(60)).dim());

    // Failures are shown in place of the result
    let output = output_or_sentinel(task, result);
    println!("{}", format_output(task, &output));

    Ok(())
}
