// Colored terminal output for clean reports and corpus analyses.
//
// This module handles all terminal-specific formatting: colors, tables,
// bar charts. The main.rs command arms delegate here.

use colored::Colorize;

use crate::analysis::distribution::TopicDistribution;
use crate::analysis::sentiment::{Sentiment, SentimentBreakdown};
use crate::analysis::tfidf::TopicTerms;
use crate::topics::clean::CleanReport;

/// Display the result of a cleaning pass: what was remapped, and the final
/// per-topic tally.
pub fn display_clean_report(report: &CleanReport) {
    println!("\n{}", "Cleaning complete.".bold());
    println!("  Total articles processed: {}", report.total_articles);

    if report.changes.is_empty() {
        println!("\n  All topics were already canonical.");
    } else {
        println!("\n{}", "Topic changes made:".bold());
        for change in &report.changes {
            // Annotation labels can run long; keep the report scannable
            let original = if change.original.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                format!("'{}'", super::truncate_chars(&change.original, 60))
            };
            println!(
                "  {} -> '{}' ({} articles)",
                original,
                change.mapped_to.to_string().green(),
                change.count
            );
        }
    }

    println!("\n{}", "Final topic distribution:".bold());
    for (topic, count) in &report.distribution {
        println!("  {:<35} {:>4} articles", topic.to_string(), count);
    }
}

/// Display the topic distribution as a bar chart plus a statistics block.
pub fn display_distribution(dist: &TopicDistribution) {
    println!(
        "\n{}",
        format!(
            "=== Topic Distribution ({} articles) ===",
            dist.total_articles
        )
        .bold()
    );
    println!();

    let bar_width: usize = 30;

    for entry in &dist.counts {
        let share = entry.percentage / 100.0;
        let filled = (share * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        // Color by share of the corpus
        let colored_bar = if share >= 0.25 {
            bar.bright_green()
        } else if share >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:<35} {} {:>4} ({:>5.1}%)",
            entry.topic.bold(),
            colored_bar,
            entry.count,
            entry.percentage
        );
    }

    println!();
    println!("  Topics: {}", dist.topic_count);
    println!("  Average per topic: {:.1}", dist.mean_per_topic);
    println!(
        "  Min: {} articles   Max: {} articles",
        dist.min_count, dist.max_count
    );
}

/// Display the per-topic sentiment breakdown and the overall tally.
pub fn display_sentiment(breakdown: &SentimentBreakdown) {
    println!(
        "\n{}",
        format!(
            "=== Sentiment by Topic ({} articles) ===",
            breakdown.total_articles
        )
        .bold()
    );

    for topic in &breakdown.per_topic {
        println!(
            "\n  {} ({} articles)",
            topic.topic.bold(),
            topic.article_count
        );
        for (sentiment, count) in &topic.counts {
            let percentage = if topic.article_count > 0 {
                *count as f64 / topic.article_count as f64 * 100.0
            } else {
                0.0
            };
            println!(
                "    {:<10} {:>4} ({:>5.1}%)",
                colorize_sentiment(sentiment),
                count,
                percentage
            );
        }
    }

    println!("\n{}", "Overall:".bold());
    for (sentiment, count) in &breakdown.overall {
        let percentage = if breakdown.total_articles > 0 {
            *count as f64 / breakdown.total_articles as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "  {:<10} {:>4} ({:>5.1}%)",
            colorize_sentiment(sentiment),
            count,
            percentage
        );
    }
}

/// Display the top TF-IDF terms for every topic.
pub fn display_topic_terms(results: &[TopicTerms]) {
    println!("\n{}", "=== Top TF-IDF Terms by Topic ===".bold());

    for topic in results {
        println!(
            "\n  {} ({} articles)",
            topic.topic.bold(),
            topic.article_count
        );
        if topic.terms.is_empty() {
            println!("    {}", "no usable text".dimmed());
            continue;
        }
        for (i, (term, score)) in topic.terms.iter().enumerate() {
            println!("    {:>2}. {:<20} {:.4}", i + 1, term, score);
        }
    }
}

/// Colorize a sentiment label.
fn colorize_sentiment(sentiment: &Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.label().green(),
        Sentiment::Neutral => sentiment.label().normal(),
        Sentiment::Negative => sentiment.label().red(),
        Sentiment::Other(_) => sentiment.label().dimmed(),
    }
}
