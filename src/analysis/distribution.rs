// Topic distribution — how the corpus splits across the eight topics.

use serde::{Deserialize, Serialize};

use crate::corpus::model::TopicCorpus;

/// Article count and corpus share for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: u64,
    /// Share of the whole corpus, 0.0 to 100.0
    pub percentage: f64,
}

/// Distribution of articles across topics, with summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDistribution {
    /// Per-topic counts, sorted by count descending (ties by topic name)
    pub counts: Vec<TopicCount>,
    pub total_articles: u64,
    pub topic_count: usize,
    pub mean_per_topic: f64,
    pub min_count: u64,
    pub max_count: u64,
}

/// Count articles per topic and derive the summary statistics.
pub fn compute(corpus: &TopicCorpus) -> TopicDistribution {
    let total: u64 = corpus.values().map(|a| a.len() as u64).sum();

    let mut counts: Vec<TopicCount> = corpus
        .iter()
        .map(|(topic, articles)| {
            let count = articles.len() as u64;
            TopicCount {
                topic: topic.clone(),
                count,
                percentage: if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.topic.cmp(&b.topic)));

    let topic_count = counts.len();
    TopicDistribution {
        min_count: counts.iter().map(|c| c.count).min().unwrap_or(0),
        max_count: counts.iter().map(|c| c.count).max().unwrap_or(0),
        mean_per_topic: if topic_count > 0 {
            total as f64 / topic_count as f64
        } else {
            0.0
        },
        counts,
        total_articles: total,
        topic_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::model::Article;

    fn corpus(sizes: &[(&str, usize)]) -> TopicCorpus {
        sizes
            .iter()
            .map(|(topic, n)| (topic.to_string(), vec![Article::default(); *n]))
            .collect()
    }

    #[test]
    fn test_counts_sorted_descending() {
        let dist = compute(&corpus(&[("A", 2), ("B", 5), ("C", 3)]));
        let counts: Vec<u64> = dist.counts.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![5, 3, 2]);
        assert_eq!(dist.total_articles, 10);
        assert_eq!(dist.min_count, 2);
        assert_eq!(dist.max_count, 5);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let dist = compute(&corpus(&[("A", 1), ("B", 3), ("C", 4)]));
        let sum: f64 = dist.counts.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "got {sum}");
    }

    #[test]
    fn test_empty_corpus() {
        let dist = compute(&TopicCorpus::new());
        assert_eq!(dist.total_articles, 0);
        assert_eq!(dist.topic_count, 0);
        assert_eq!(dist.mean_per_topic, 0.0);
        assert!(dist.counts.is_empty());
    }

    #[test]
    fn test_ties_broken_by_topic_name() {
        let dist = compute(&corpus(&[("B", 2), ("A", 2)]));
        assert_eq!(dist.counts[0].topic, "A");
        assert_eq!(dist.counts[1].topic, "B");
    }
}
