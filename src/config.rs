use std::path::PathBuf;

const DEFAULT_CONTENT_DIR: &str = "./data";
const HISTORY_FILE: &str = "history.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub content_dir: PathBuf,
    pub history_path: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let content_dir = std::env::var("CONTENT_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));

        let history_path = std::env::var("HISTORY_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_history_path);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            content_dir,
            history_path,
            log_level,
        }
    }
}

fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("adaptive-practice").join(HISTORY_FILE))
        .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
}

/// Bounds for question set assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Topic-matching questions required before the topic filter is trusted.
    pub min_topic_matches: usize,
    pub max_questions: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            min_topic_matches: 5,
            max_questions: 7,
        }
    }
}
