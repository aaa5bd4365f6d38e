// Data models — Rust structs for the annotated corpus files.
//
// These are the types that flow through the application. The annotation
// step produced them with capitalized field names ("Topic", "Sentiment"),
// and arbitrary extra fields can be present; everything unknown is carried
// through a clean pass untouched via the flattened map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One annotated article record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    /// Free-text topic label from the annotation step; canonical after a
    /// clean pass
    #[serde(rename = "Topic", skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(rename = "Sentiment", skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Either a link or the pasted headline text, depending on the annotator
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Any other fields from the annotation step, preserved as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Article {
    /// The best available text for term extraction: the title when present,
    /// otherwise the URL field (which annotators sometimes filled with plain
    /// headline text instead of a link).
    pub fn analysis_text(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.url.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// The grouped corpus shape: canonical topic name -> articles filed under it.
///
/// A BTreeMap so iteration (and therefore every report) is deterministic.
pub type TopicCorpus = BTreeMap<String, Vec<Article>>;
