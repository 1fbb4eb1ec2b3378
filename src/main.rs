//! Multi-Source Sentiment Pulse
//!
//! Fetches headlines and social posts for a query, scores them with a
//! lexicon-based analyzer, and renders aggregate sentiment views.

use clap::{Parser, Subcommand};
use sentiment_pulse::{
    config::Config,
    export,
    fetch::Fetcher,
    pipeline::{self, AnalysisRequest},
    render,
    sentiment::SentimentAnalyzer,
    types::Label,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sentiment-pulse")]
#[command(about = "Sentiment analysis over recent news and social text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (optional; defaults apply without one)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, score and summarize items for a query
    Analyze {
        /// Search query
        query: String,
        /// Number of news items to fetch
        #[arg(short, long)]
        limit: Option<usize>,
        /// Also include the social provider
        #[arg(long)]
        social: bool,
        /// Number of social posts to fetch
        #[arg(long)]
        social_limit: Option<usize>,
        /// Write the scored dataset as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<String>,
        /// Write the scored dataset as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<String>,
    },
    /// Score a single text and print its scores
    Score {
        /// Text to score
        text: String,
    },
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
            query,
            limit,
            social,
            social_limit,
            csv,
            json,
        } => {
            analyze(
                config,
                query,
                limit,
                social,
                social_limit,
                csv.as_deref(),
                json.as_deref(),
            )
            .await
        }
        Commands::Score { text } => score_one(&text),
    }
}

#[allow(clippy::too_many_arguments)]
async fn analyze(
    config: Config,
    query: String,
    limit: Option<usize>,
    social: bool,
    social_limit: Option<usize>,
    csv: Option<&str>,
    json: Option<&str>,
) -> anyhow::Result<()> {
    let request = AnalysisRequest {
        query,
        news_limit: limit.unwrap_or(config.limits.news_limit),
        social_limit: social_limit.unwrap_or(config.limits.social_limit),
        include_social: social,
    };

    // Lexicon loads once here; a corrupt resource makes analysis
    // unavailable regardless of provider state.
    let analyzer = SentimentAnalyzer::new()
        .map_err(|e| anyhow::anyhow!("analysis unavailable: {}", e))?;
    let fetcher = Fetcher::new(&config.fetch);

    let analysis = pipeline::run(&request, &fetcher, &analyzer, &config.limits).await?;

    render::print_analysis(&analysis);

    if let Some(path) = csv {
        export::write_csv_file(&analysis.dataset, path)?;
        println!("\nCSV written to {}", path);
    }
    if let Some(path) = json {
        export::write_json_file(&analysis.dataset, path)?;
        println!("JSON written to {}", path);
    }

    Ok(())
}

fn score_one(text: &str) -> anyhow::Result<()> {
    let analyzer = SentimentAnalyzer::new()
        .map_err(|e| anyhow::anyhow!("analysis unavailable: {}", e))?;
    let scores = analyzer.polarity_scores(text);
    let label = Label::from_compound(scores.compound);

    println!("\nText: {}", text);
    println!("neg: {:.4}  neu: {:.4}  pos: {:.4}", scores.neg, scores.neu, scores.pos);
    println!("compound: {:+.4}  label: {}", scores.compound, label);

    Ok(())
}
