use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Every path has a default derived from the data directory, matching the
/// layout the annotation step produced. The .env file is loaded
/// automatically at startup via dotenvy; CLI flags override these values.
pub struct Config {
    /// Root of the corpus files (NEWSPRINT_DATA_DIR, default ./data).
    /// Kept so callers can resolve their own corpus-relative paths.
    #[allow(dead_code)]
    pub data_dir: PathBuf,
    /// The annotated corpus to clean
    pub annotated_path: PathBuf,
    /// Where the cleaned corpus is written
    pub cleaned_path: PathBuf,
    /// The grouped (topic -> articles) corpus the analyses read
    pub grouped_path: PathBuf,
    /// Where the Markdown report is written
    pub report_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("NEWSPRINT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let path_var = |var: &str, default: PathBuf| {
            env::var(var).map(PathBuf::from).unwrap_or(default)
        };

        Ok(Self {
            annotated_path: path_var(
                "NEWSPRINT_ANNOTATED_PATH",
                data_dir.join("annotated_articles.json"),
            ),
            cleaned_path: path_var(
                "NEWSPRINT_CLEANED_PATH",
                data_dir.join("clean_annotated_articles.json"),
            ),
            grouped_path: path_var(
                "NEWSPRINT_GROUPED_PATH",
                data_dir.join("articles_by_topic.json"),
            ),
            report_path: path_var(
                "NEWSPRINT_REPORT_PATH",
                PathBuf::from("output/newsprint-report.md"),
            ),
            data_dir,
        })
    }
}
