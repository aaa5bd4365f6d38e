use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

mod config;

/// Newsprint: cleaning and descriptive analysis for an annotated
/// news-coverage corpus.
///
/// Normalizes free-text topic labels onto the fixed 8-topic taxonomy and
/// produces distribution, sentiment, and TF-IDF term reports.
#[derive(Parser)]
#[command(name = "newsprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize every article's topic onto the canonical taxonomy
    Clean {
        /// Annotated corpus to read (JSON array of articles)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the cleaned corpus
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the topic distribution of a grouped corpus
    Topics {
        /// Grouped corpus to read (JSON object: topic -> articles)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Show the sentiment breakdown per topic
    Sentiment {
        /// Grouped corpus to read (JSON object: topic -> articles)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Show the top TF-IDF terms per topic
    Tfidf {
        /// Grouped corpus to read (JSON object: topic -> articles)
        #[arg(long)]
        input: Option<PathBuf>,

        /// How many terms to show per topic
        #[arg(long, default_value_t = newsprint::analysis::tfidf::DEFAULT_TOP_N)]
        top: usize,
    },

    /// Run every analysis and write a Markdown report
    Report {
        /// Grouped corpus to read (JSON object: topic -> articles)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the Markdown report
        #[arg(long)]
        output: Option<PathBuf>,

        /// How many terms to include per topic
        #[arg(long, default_value_t = newsprint::analysis::tfidf::DEFAULT_TOP_N)]
        top: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsprint=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Clean { input, output } => {
            let input = input.unwrap_or(config.annotated_path);
            let output = output.unwrap_or(config.cleaned_path);

            println!("Cleaning topics in {}...", input.display());

            let mut articles = newsprint::corpus::store::load_articles(&input)?;
            let report = newsprint::topics::clean::clean_articles(&mut articles);
            newsprint::corpus::store::save_articles(&output, &articles)?;

            newsprint::output::terminal::display_clean_report(&report);
            println!(
                "\n{}",
                format!("Cleaned corpus written to {}", output.display()).bold()
            );
        }

        Commands::Topics { input } => {
            let input = input.unwrap_or(config.grouped_path);
            let corpus = newsprint::corpus::store::load_topic_corpus(&input)?;
            let dist = newsprint::analysis::distribution::compute(&corpus);
            newsprint::output::terminal::display_distribution(&dist);
        }

        Commands::Sentiment { input } => {
            let input = input.unwrap_or(config.grouped_path);
            let corpus = newsprint::corpus::store::load_topic_corpus(&input)?;
            let breakdown = newsprint::analysis::sentiment::compute(&corpus);
            newsprint::output::terminal::display_sentiment(&breakdown);
        }

        Commands::Tfidf { input, top } => {
            let input = input.unwrap_or(config.grouped_path);
            let corpus = newsprint::corpus::store::load_topic_corpus(&input)?;

            println!("Extracting terms from {} topics...", corpus.len());
            let results = newsprint::analysis::tfidf::compute(&corpus, top)?;
            newsprint::output::terminal::display_topic_terms(&results);
        }

        Commands::Report { input, output, top } => {
            let input = input.unwrap_or(config.grouped_path);
            let output = output.unwrap_or(config.report_path);
            let corpus = newsprint::corpus::store::load_topic_corpus(&input)?;
            info!(topics = corpus.len(), "Running full analysis");

            let dist = newsprint::analysis::distribution::compute(&corpus);
            let breakdown = newsprint::analysis::sentiment::compute(&corpus);
            let terms = newsprint::analysis::tfidf::compute(&corpus, top)?;

            newsprint::output::terminal::display_distribution(&dist);
            newsprint::output::terminal::display_sentiment(&breakdown);
            newsprint::output::terminal::display_topic_terms(&terms);

            let report_path = newsprint::output::markdown::generate_report(
                &dist, &breakdown, &terms, &output,
            )?;
            println!(
                "\n{}",
                format!("Markdown report saved to: {report_path}").bold()
            );
        }
    }

    Ok(())
}
