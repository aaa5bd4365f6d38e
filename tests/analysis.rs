// Integration tests for the analysis modules over a small grouped corpus.

use newsprint::analysis::{distribution, sentiment, tfidf};
use newsprint::corpus::model::{Article, TopicCorpus};

fn article(title: &str, sentiment: Option<&str>) -> Article {
    Article {
        title: Some(title.to_string()),
        sentiment: sentiment.map(str::to_string),
        ..Default::default()
    }
}

fn sample_corpus() -> TopicCorpus {
    [
        (
            "Election Victory/Results".to_string(),
            vec![
                article("Victory rally draws thousands downtown", Some("Positive")),
                article("Election night results certified by the board", Some("Neutral")),
                article("Supporters celebrate across the boroughs", Some("Positive")),
            ],
        ),
        (
            "Policy Positions".to_string(),
            vec![
                article("Transit plan promises faster buses citywide", Some("Positive")),
                article("Critics question the housing affordability math", Some("Negative")),
            ],
        ),
        (
            "Trump Conflicts".to_string(),
            vec![article("Feud escalates after late-night post", Some("Negative"))],
        ),
    ]
    .into()
}

// ============================================================
// Distribution
// ============================================================

#[test]
fn distribution_counts_and_order() {
    let dist = distribution::compute(&sample_corpus());
    assert_eq!(dist.total_articles, 6);
    assert_eq!(dist.topic_count, 3);
    assert_eq!(dist.counts[0].topic, "Election Victory/Results");
    assert_eq!(dist.counts[0].count, 3);
    assert_eq!(dist.counts[2].count, 1);
    assert_eq!(dist.min_count, 1);
    assert_eq!(dist.max_count, 3);

    let pct_sum: f64 = dist.counts.iter().map(|c| c.percentage).sum();
    assert!((pct_sum - 100.0).abs() < 1e-9);
}

// ============================================================
// Sentiment
// ============================================================

#[test]
fn sentiment_per_topic_sums_match() {
    let breakdown = sentiment::compute(&sample_corpus());
    assert_eq!(breakdown.total_articles, 6);
    for topic in &breakdown.per_topic {
        let sum: u64 = topic.counts.iter().map(|(_, n)| n).sum();
        assert_eq!(sum, topic.article_count, "topic {}", topic.topic);
    }
}

#[test]
fn sentiment_overall_matches_per_topic_totals() {
    let breakdown = sentiment::compute(&sample_corpus());
    let overall_sum: u64 = breakdown.overall.iter().map(|(_, n)| n).sum();
    assert_eq!(overall_sum, breakdown.total_articles);

    let positive = breakdown
        .overall
        .iter()
        .find(|(s, _)| s.label() == "Positive")
        .map(|(_, n)| *n);
    assert_eq!(positive, Some(3));
}

#[test]
fn sentiment_missing_label_counts_as_unknown() {
    let corpus: TopicCorpus = [(
        "Trump Conflicts".to_string(),
        vec![article("No sentiment recorded", None)],
    )]
    .into();
    let breakdown = sentiment::compute(&corpus);
    assert_eq!(breakdown.overall.len(), 1);
    assert_eq!(breakdown.overall[0].0.label(), "Unknown");
}

// ============================================================
// TF-IDF terms
// ============================================================

#[test]
fn tfidf_produces_terms_for_topics_with_text() {
    let results = tfidf::compute(&sample_corpus(), 10).unwrap();
    assert_eq!(results.len(), 3);

    let election = results
        .iter()
        .find(|r| r.topic == "Election Victory/Results")
        .unwrap();
    assert!(!election.terms.is_empty());
    assert!(election.terms.len() <= 10);
    for pair in election.terms.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "scores must be non-increasing");
    }
}

#[test]
fn tfidf_respects_top_n() {
    let results = tfidf::compute(&sample_corpus(), 2).unwrap();
    for topic in &results {
        assert!(topic.terms.len() <= 2, "topic {}", topic.topic);
    }
}

#[test]
fn tfidf_handles_textless_topic_without_error() {
    let mut corpus = sample_corpus();
    corpus.insert("Personal Background/Family".to_string(), vec![Article::default()]);
    let results = tfidf::compute(&corpus, 10).unwrap();
    let quiet = results
        .iter()
        .find(|r| r.topic == "Personal Background/Family")
        .unwrap();
    assert!(quiet.terms.is_empty());
}
