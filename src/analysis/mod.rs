// Descriptive analysis over the grouped corpus — distribution, sentiment,
// and per-topic TF-IDF terms.

pub mod distribution;
pub mod sentiment;
pub mod tfidf;
