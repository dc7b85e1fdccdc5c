//! Social-Media Sentiment Pipeline CLI
//!
//! Analyze captions/comments from sample hashtags, post URLs, pasted
//! comment lines, or a JSON file of items; print scored items plus a
//! summary, or a word-frequency table.

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde_json::json;
use social_sentiment::{
    aggregate::{build_summary, top_words},
    config::Config,
    error::PipelineError,
    pipeline::Pipeline,
    source::SampleCollector,
    types::Item,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "social-sentiment")]
#[command(about = "Sentiment scoring and aggregation for social media text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to config.toml if present)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a batch of items and print results plus a summary
    #[command(group(ArgGroup::new("source").required(true)))]
    Analyze {
        /// JSON file containing an array of items ({text, timestamp, ...})
        #[arg(long, group = "source")]
        file: Option<PathBuf>,

        /// Sample hashtag to expand (see `hashtags`)
        #[arg(long, group = "source")]
        hashtag: Option<String>,

        /// File of post URLs, one per line
        #[arg(long, group = "source")]
        urls: Option<PathBuf>,

        /// File of pasted comments, one per line
        #[arg(long, group = "source")]
        paste: Option<PathBuf>,

        /// Which items to analyze for hashtag/URL sources
        #[arg(long, value_enum, default_value_t = Mode::Both)]
        mode: Mode,

        /// Number of posts to expand for hashtag sources
        #[arg(long, default_value = "50")]
        limit: usize,

        /// Skip synthetic comments for hashtag/URL sources
        #[arg(long)]
        no_comments: bool,

        /// Label for the summary (defaults per source)
        #[arg(long)]
        label: Option<String>,

        /// Write JSON output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available sample hashtags
    Hashtags,
    /// Word-frequency table for a file of texts (one per line)
    TopWords {
        file: PathBuf,

        #[arg(short, long, default_value = "80")]
        limit: usize,

        /// Keep emoji as standalone tokens
        #[arg(long)]
        keep_emojis: bool,

        /// Extra stopwords to drop
        #[arg(long)]
        stop: Vec<String>,
    },
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Mode {
    Captions,
    Comments,
    Both,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    match cli.command {
        Commands::Analyze {
            file,
            hashtag,
            urls,
            paste,
            mode,
            limit,
            no_comments,
            label,
            output,
        } => {
            run_analyze(
                config,
                AnalyzeArgs {
                    file,
                    hashtag,
                    urls,
                    paste,
                    mode,
                    limit,
                    include_comments: !no_comments,
                    label,
                    output,
                },
            )
            .await
        }
        Commands::Hashtags => {
            for tag in SampleCollector::new().available_hashtags() {
                println!("{tag}");
            }
            Ok(())
        }
        Commands::TopWords {
            file,
            limit,
            keep_emojis,
            stop,
        } => run_top_words(file, limit, keep_emojis, stop),
    }
}

struct AnalyzeArgs {
    file: Option<PathBuf>,
    hashtag: Option<String>,
    urls: Option<PathBuf>,
    paste: Option<PathBuf>,
    mode: Mode,
    limit: usize,
    include_comments: bool,
    label: Option<String>,
    output: Option<PathBuf>,
}

async fn run_analyze(config: Config, args: AnalyzeArgs) -> anyhow::Result<()> {
    let collector = SampleCollector::new();

    let (items, default_label) = if let Some(path) = &args.file {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        let label = format!("{} file item(s)", items.len());
        (items, label)
    } else if let Some(tag) = &args.hashtag {
        let (posts, comments) = collector.collect_hashtag(tag, args.limit, args.include_comments);
        (select_mode(posts, comments, args.mode), format!("#{tag}"))
    } else if let Some(path) = &args.urls {
        let urls: Vec<String> = std::fs::read_to_string(path)?
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        let (posts, comments) = collector.collect_from_urls(&urls, args.include_comments);
        let label = format!("{} URL post(s)", posts.len());
        (select_mode(posts, comments, args.mode), label)
    } else if let Some(path) = &args.paste {
        let mut lines: Vec<String> = std::fs::read_to_string(path)?
            .lines()
            .map(String::from)
            .collect();
        // Cap extremely large pastes for responsiveness
        if lines.len() > 1000 {
            tracing::warn!(total = lines.len(), "truncating pasted input to 1000 lines");
            lines.truncate(1000);
        }
        let comments = collector.from_pasted_lines(&lines);
        let label = format!("{} pasted comment(s)", comments.len());
        (comments, label)
    } else {
        anyhow::bail!("one of --file, --hashtag, --urls, or --paste is required");
    };

    let label = args.label.unwrap_or(default_label);
    let pipeline = Pipeline::from_config(&config);

    let scored = match pipeline.analyze_batch(items).await {
        Ok(scored) => scored,
        Err(PipelineError::EmptyBatch) => {
            tracing::warn!("no items to analyze");
            println!("Nothing to analyze. Try different inputs.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let summary = build_summary(&scored, &label);
    tracing::info!(
        total = summary.total_items,
        average_confidence = summary.average_confidence,
        "analysis complete"
    );

    let document = json!({
        "summary": summary,
        "items": scored,
    });
    let rendered = serde_json::to_string_pretty(&document)?;

    match args.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn select_mode(posts: Vec<Item>, comments: Vec<Item>, mode: Mode) -> Vec<Item> {
    match mode {
        Mode::Captions => posts,
        Mode::Comments => comments,
        Mode::Both => {
            let mut items = posts;
            items.extend(comments);
            items
        }
    }
}

fn run_top_words(
    file: PathBuf,
    limit: usize,
    keep_emojis: bool,
    stop: Vec<String>,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let texts: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    let extra: Vec<&str> = stop.iter().map(String::as_str).collect();

    let table = top_words(texts, &extra, limit, keep_emojis);
    for (token, count) in table.iter() {
        println!("{count:>6}  {token}");
    }

    Ok(())
}
