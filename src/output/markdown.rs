// Markdown report generation — a file artifact alongside the terminal output.
//
// The `report` subcommand runs every analysis and writes the results here so
// they can be committed next to the corpus or pasted into a writeup.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::analysis::distribution::TopicDistribution;
use crate::analysis::sentiment::SentimentBreakdown;
use crate::analysis::tfidf::TopicTerms;

/// Write a combined analysis report and return the path it was written to.
pub fn generate_report(
    dist: &TopicDistribution,
    sentiment: &SentimentBreakdown,
    terms: &[TopicTerms],
    output_path: &Path,
) -> Result<String> {
    let mut md = String::new();

    writeln!(md, "# Coverage Analysis Report")?;
    writeln!(md)?;
    writeln!(md, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(md)?;

    // Topic distribution table
    writeln!(md, "## Topic Distribution")?;
    writeln!(md)?;
    writeln!(md, "Total articles: {}", dist.total_articles)?;
    writeln!(md)?;
    writeln!(md, "| Topic | Articles | Share |")?;
    writeln!(md, "|---|---:|---:|")?;
    for entry in &dist.counts {
        writeln!(
            md,
            "| {} | {} | {:.1}% |",
            entry.topic, entry.count, entry.percentage
        )?;
    }
    writeln!(md)?;

    // Sentiment breakdown
    writeln!(md, "## Sentiment by Topic")?;
    writeln!(md)?;
    for topic in &sentiment.per_topic {
        writeln!(md, "### {} ({} articles)", topic.topic, topic.article_count)?;
        writeln!(md)?;
        for (s, count) in &topic.counts {
            let percentage = if topic.article_count > 0 {
                *count as f64 / topic.article_count as f64 * 100.0
            } else {
                0.0
            };
            writeln!(md, "- {}: {} ({:.1}%)", s.label(), count, percentage)?;
        }
        writeln!(md)?;
    }

    writeln!(md, "### Overall")?;
    writeln!(md)?;
    for (s, count) in &sentiment.overall {
        let percentage = if sentiment.total_articles > 0 {
            *count as f64 / sentiment.total_articles as f64 * 100.0
        } else {
            0.0
        };
        writeln!(md, "- {}: {} ({:.1}%)", s.label(), count, percentage)?;
    }
    writeln!(md)?;

    // Top terms
    writeln!(md, "## Top TF-IDF Terms by Topic")?;
    writeln!(md)?;
    for topic in terms {
        writeln!(md, "### {}", topic.topic)?;
        writeln!(md)?;
        if topic.terms.is_empty() {
            writeln!(md, "_No usable text._")?;
        } else {
            for (i, (term, score)) in topic.terms.iter().enumerate() {
                writeln!(md, "{}. `{}` ({:.4})", i + 1, term, score)?;
            }
        }
        writeln!(md)?;
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(output_path, md)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    Ok(output_path.display().to_string())
}
