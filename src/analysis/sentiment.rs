// Sentiment distribution — Positive/Neutral/Negative breakdown per topic.
//
// The annotation step labeled each article with a sentiment string. The
// three expected values get a fixed display order; anything else (typos,
// absent labels) lands in a per-label "other" bucket rather than being
// dropped, so the per-topic counts always sum to the article count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::model::TopicCorpus;

/// A sentiment label as the annotation step wrote it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    /// Anything outside the expected three, preserved verbatim
    Other(String),
}

impl Sentiment {
    pub fn parse(label: Option<&str>) -> Sentiment {
        match label {
            Some("Positive") => Sentiment::Positive,
            Some("Neutral") => Sentiment::Neutral,
            Some("Negative") => Sentiment::Negative,
            Some(other) => Sentiment::Other(other.to_string()),
            None => Sentiment::Other("Unknown".to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Other(s) => s,
        }
    }
}

/// Sentiment counts for one topic, in display order (Positive, Neutral,
/// Negative, then other labels alphabetically).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSentiment {
    pub topic: String,
    pub article_count: u64,
    pub counts: Vec<(Sentiment, u64)>,
}

/// Per-topic breakdowns plus the aggregate across the whole corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub per_topic: Vec<TopicSentiment>,
    pub overall: Vec<(Sentiment, u64)>,
    pub total_articles: u64,
}

/// Tally sentiments per topic and overall.
pub fn compute(corpus: &TopicCorpus) -> SentimentBreakdown {
    let mut overall: BTreeMap<Sentiment, u64> = BTreeMap::new();
    let mut per_topic = Vec::new();
    let mut total = 0u64;

    for (topic, articles) in corpus {
        let mut counts: BTreeMap<Sentiment, u64> = BTreeMap::new();
        for article in articles {
            let sentiment = Sentiment::parse(article.sentiment.as_deref());
            *counts.entry(sentiment.clone()).or_insert(0) += 1;
            *overall.entry(sentiment).or_insert(0) += 1;
        }
        total += articles.len() as u64;
        per_topic.push(TopicSentiment {
            topic: topic.clone(),
            article_count: articles.len() as u64,
            counts: ordered(counts),
        });
    }

    SentimentBreakdown {
        per_topic,
        overall: ordered(overall),
        total_articles: total,
    }
}

/// Fixed display order: the three expected sentiments first, then any other
/// labels. Zero-count expected sentiments are omitted, matching how the
/// per-topic pie charts dropped empty wedges.
fn ordered(counts: BTreeMap<Sentiment, u64>) -> Vec<(Sentiment, u64)> {
    let mut out = Vec::new();
    for expected in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        if let Some(&n) = counts.get(&expected) {
            out.push((expected, n));
        }
    }
    for (sentiment, n) in counts {
        if matches!(sentiment, Sentiment::Other(_)) {
            out.push((sentiment, n));
        }
    }
    out
}
