// JSON file I/O for the corpus shapes.
//
// There is no recovery story here: a malformed file or a bad path is a
// fatal error for the run, surfaced with the offending path in the context
// chain.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::model::{Article, TopicCorpus};

/// Load a flat corpus — a JSON array of article records.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let articles: Vec<Article> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse article array in {}", path.display()))?;
    info!(count = articles.len(), path = %path.display(), "Loaded corpus");
    Ok(articles)
}

/// Write a flat corpus back out, pretty-printed like the annotation step's
/// own output.
pub fn save_articles(path: &Path, articles: &[Article]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(articles)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write corpus file {}", path.display()))?;
    info!(count = articles.len(), path = %path.display(), "Wrote corpus");
    Ok(())
}

/// Load a grouped corpus — a JSON object mapping topic names to article
/// arrays.
pub fn load_topic_corpus(path: &Path) -> Result<TopicCorpus> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let corpus: TopicCorpus = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse topic map in {}", path.display()))?;
    info!(topics = corpus.len(), path = %path.display(), "Loaded grouped corpus");
    Ok(corpus)
}
