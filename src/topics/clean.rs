// The batch cleaning pass — normalize every article's topic in place.
//
// Besides rewriting the Topic field, the pass accumulates which original
// labels were remapped where (for the console report) and the final
// per-topic distribution. After a pass, every Topic in the slice is a
// member of the canonical set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::canon::CanonicalTopic;
use super::normalize::normalize;
use crate::corpus::model::Article;

/// One (original label -> canonical topic) remapping observed during a pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicChange {
    /// The label as it appeared in the input (may be empty for absent topics)
    pub original: String,
    /// The canonical topic it was remapped to
    pub mapped_to: CanonicalTopic,
    /// How many articles carried this label
    pub count: u64,
}

/// Summary of a cleaning pass over one corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanReport {
    /// Total number of articles processed
    pub total_articles: u64,
    /// Remappings, sorted by original label. Labels that were already
    /// canonical do not appear here.
    pub changes: Vec<TopicChange>,
    /// Final article count per canonical topic, in `CanonicalTopic::ALL` order
    pub distribution: Vec<(CanonicalTopic, u64)>,
}

/// Normalize the Topic of every article in place and report what changed.
pub fn clean_articles(articles: &mut [Article]) -> CleanReport {
    let mut changes: BTreeMap<String, (CanonicalTopic, u64)> = BTreeMap::new();
    let mut tally: BTreeMap<CanonicalTopic, u64> = BTreeMap::new();

    for article in articles.iter_mut() {
        let original = article.topic.clone().unwrap_or_default();
        let canonical = normalize(article.topic.as_deref());

        if original != canonical.as_str() {
            let entry = changes.entry(original).or_insert((canonical, 0));
            entry.1 += 1;
        }

        article.topic = Some(canonical.as_str().to_string());
        *tally.entry(canonical).or_insert(0) += 1;
    }

    CleanReport {
        total_articles: articles.len() as u64,
        changes: changes
            .into_iter()
            .map(|(original, (mapped_to, count))| TopicChange {
                original,
                mapped_to,
                count,
            })
            .collect(),
        distribution: CanonicalTopic::ALL
            .iter()
            .map(|&t| (t, tally.get(&t).copied().unwrap_or(0)))
            .collect(),
    }
}
