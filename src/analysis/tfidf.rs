// Per-topic TF-IDF term extraction.
//
// Uses the `keyword_extraction` crate to surface the most distinctive terms
// in each topic's articles. Each article is treated as a separate document
// for IDF computation — terms that appear in every article of a topic get
// downweighted, while terms distinctive to certain articles get boosted.
//
// Article text is pre-cleaned before vectorization: embedded URLs are
// stripped, everything is lowercased, punctuation becomes whitespace, and
// tokens shorter than 3 characters are dropped.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::corpus::model::TopicCorpus;

/// How many top terms to keep per topic by default.
pub const DEFAULT_TOP_N: usize = 10;

/// The top-scoring terms for one topic.
#[derive(Debug, Clone)]
pub struct TopicTerms {
    pub topic: String,
    pub article_count: u64,
    /// (term, score) pairs in descending score order; empty when the topic
    /// has no usable text
    pub terms: Vec<(String, f32)>,
}

/// Extract the top `top_n` TF-IDF terms for every topic in the corpus.
pub fn compute(corpus: &TopicCorpus, top_n: usize) -> Result<Vec<TopicTerms>> {
    let url_pattern =
        Regex::new(r"https?://\S+").context("Failed to compile URL-stripping pattern")?;
    let stop_words: Vec<String> = get(LANGUAGE::English);

    let total_articles: u64 = corpus.values().map(|a| a.len() as u64).sum();
    let pb = ProgressBar::new(total_articles);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Extracting [{bar:30}] {pos}/{len} articles")
            .unwrap(),
    );

    let mut results = Vec::new();

    for (topic, articles) in corpus {
        // One document per article, pre-cleaned
        let documents: Vec<String> = articles
            .iter()
            .filter_map(|article| {
                pb.inc(1);
                let text = article.analysis_text()?;
                let cleaned = clean_text(text, &url_pattern);
                (!cleaned.is_empty()).then_some(cleaned)
            })
            .collect();

        if documents.is_empty() {
            info!(topic, "No usable text for topic, skipping term extraction");
            results.push(TopicTerms {
                topic: topic.clone(),
                article_count: articles.len() as u64,
                terms: Vec::new(),
            });
            continue;
        }

        let params = TfIdfParams::UnprocessedDocuments(&documents, &stop_words, None);
        let tfidf = TfIdf::new(params);
        let terms: Vec<(String, f32)> = tfidf.get_ranked_word_scores(top_n);

        results.push(TopicTerms {
            topic: topic.clone(),
            article_count: articles.len() as u64,
            terms,
        });
    }

    pb.finish_and_clear();
    info!(topics = results.len(), "Extracted per-topic terms");
    Ok(results)
}

/// Lowercase, strip URLs, turn punctuation into spaces, and drop tokens
/// shorter than 3 characters.
fn clean_text(text: &str, url_pattern: &Regex) -> String {
    let without_urls = url_pattern.replace_all(text, " ");
    let lowered = without_urls.to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    spaced
        .split_whitespace()
        .filter(|w| w.len() > 2)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::model::Article;

    fn url_re() -> Regex {
        Regex::new(r"https?://\S+").unwrap()
    }

    #[test]
    fn test_clean_text_strips_urls_and_short_tokens() {
        let cleaned = clean_text("Mayor wins! Go to https://example.com/x?a=1 at 9pm", &url_re());
        assert_eq!(cleaned, "mayor wins 9pm");
    }

    #[test]
    fn test_clean_text_handles_punctuation() {
        let cleaned = clean_text("Crime, safety & taxes: the debate", &url_re());
        assert_eq!(cleaned, "crime safety taxes the debate");
    }

    #[test]
    fn test_topic_with_no_text_yields_empty_terms() {
        let corpus: TopicCorpus =
            [("Quiet Topic".to_string(), vec![Article::default()])].into();
        let results = compute(&corpus, 10).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].terms.is_empty());
        assert_eq!(results[0].article_count, 1);
    }

    #[test]
    fn test_terms_capped_and_sorted() {
        let articles: Vec<Article> = [
            "Election night victory rally draws thousands of supporters downtown",
            "Victory speech promises housing reform and transit investment",
            "Supporters celebrate election results across the city boroughs",
            "Transit advocates cheer the housing and bus lane agenda",
        ]
        .iter()
        .map(|t| Article {
            title: Some(t.to_string()),
            ..Default::default()
        })
        .collect();
        let corpus: TopicCorpus = [("Election Victory/Results".to_string(), articles)].into();

        let results = compute(&corpus, 5).unwrap();
        let terms = &results[0].terms;
        assert!(terms.len() <= 5);
        assert!(!terms.is_empty());
        for pair in terms.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "scores should be non-increasing");
        }
        for (term, _) in terms {
            assert!(term.len() > 2, "term '{term}' too short");
        }
    }
}
