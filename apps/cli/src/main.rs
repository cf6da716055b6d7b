use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use tubebrief_core::{
    FocusArea, Language, NoopSink, Provider, Stage, StageSink, SummarizationRequest,
    SummaryLength, extract_video_id, fetch_video_content, format_summary_readable, summarize,
};

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Clone, Default, ValueEnum)]
enum CliLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl From<CliLength> for SummaryLength {
    fn from(cli: CliLength) -> Self {
        match cli {
            CliLength::Short => SummaryLength::Short,
            CliLength::Medium => SummaryLength::Medium,
            CliLength::Detailed => SummaryLength::Detailed,
        }
    }
}

#[derive(Clone, Default, ValueEnum)]
enum CliFocus {
    #[default]
    General,
    Technical,
    Educational,
    Business,
}

impl From<CliFocus> for FocusArea {
    fn from(cli: CliFocus) -> Self {
        match cli {
            CliFocus::General => FocusArea::General,
            CliFocus::Technical => FocusArea::Technical,
            CliFocus::Educational => FocusArea::Educational,
            CliFocus::Business => FocusArea::Business,
        }
    }
}

#[derive(Clone, Default, ValueEnum)]
enum CliLanguage {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl From<CliLanguage> for Language {
    fn from(cli: CliLanguage) -> Self {
        match cli {
            CliLanguage::English => Language::English,
            CliLanguage::Spanish => Language::Spanish,
            CliLanguage::French => Language::French,
            CliLanguage::German => Language::German,
        }
    }
}

#[derive(Parser)]
#[command(name = "tubebrief")]
#[command(about = "Summarize YouTube videos with an AI provider")]
struct Cli {
    /// Video URL
    url: String,

    /// Summary length
    #[arg(short, long, default_value = "medium")]
    length: CliLength,

    /// Focus area for the summary
    #[arg(short, long, default_value = "general")]
    focus: CliFocus,

    /// Output language
    #[arg(long, default_value = "english")]
    lang: CliLanguage,

    /// AI provider for summary generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// Skip chapter generation
    #[arg(long)]
    no_chapters: bool,

    /// Extract key quotes from the content
    #[arg(short, long)]
    quotes: bool,

    /// Print pipeline stage events
    #[arg(short, long)]
    verbose: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

struct ConsoleSink;

impl StageSink for ConsoleSink {
    fn on_stage(&self, stage: Stage, detail: &str) {
        println!("{} {:?}: {}", style("·").dim(), stage, style(detail).dim());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate API keys early
    if let Err(e) = provider.validate_api_key() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
    let Ok(youtube_key) = std::env::var("YOUTUBE_API_KEY") else {
        eprintln!(
            "{} YOUTUBE_API_KEY environment variable is not set",
            style("Error:").red().bold()
        );
        std::process::exit(1);
    };

    let Some(video_id) = extract_video_id(&cli.url) else {
        eprintln!(
            "{} No video id found in {}",
            style("Error:").red().bold(),
            cli.url
        );
        std::process::exit(1);
    };

    println!(
        "\n{}  {}\n",
        style("tubebrief").cyan().bold(),
        style("Video Summarizer").dim()
    );

    // Step 1: Fetch metadata and content
    let spinner = create_spinner("Fetching video info...");
    let (video, content) = fetch_video_content(&video_id, &youtube_key).await?;
    spinner.finish_with_message(format!(
        "{} {} ({}, {} views)",
        style("✓").green().bold(),
        style(&video.title).bold(),
        video.duration,
        video.view_count
    ));

    let request = SummarizationRequest {
        content,
        length: cli.length.into(),
        focus: cli.focus.into(),
        language: cli.lang.into(),
        include_chapters: !cli.no_chapters,
        extract_quotes: cli.quotes,
        generate_tags: true,
        video_duration: Some(video.duration.clone()),
    };

    // Step 2: Generate and normalize the summary
    let sink: &dyn StageSink = if cli.verbose { &ConsoleSink } else { &NoopSink };
    let spinner = create_spinner(&format!("Summarizing with {}...", provider.name()));
    let summary = summarize(&provider, &request, sink).await?;
    spinner.finish_with_message(format!(
        "{} Summary ready ({} words, {} min read)",
        style("✓").green().bold(),
        summary.word_count,
        summary.reading_time
    ));

    println!("\n{}", style("─".repeat(60)).dim());
    println!("{}", format_summary_readable(&summary, Some(&video)));

    Ok(())
}
