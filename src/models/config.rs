use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub author: String,
    pub editor: String,
    pub index_file: String,
    pub endpoint: String,
    pub referer: String,
    pub user_agent: String,
    pub wrap_width: usize,
    pub log_level: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            author: "Neo Orez".to_string(),
            editor: "nvim".to_string(),
            index_file: "Readme.md".to_string(),
            endpoint: "https://leetcode.com/graphql".to_string(),
            referer: "https://leetcode.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36"
                .to_string(),
            wrap_width: 100,
            log_level: "warn".to_string(),
        }
    }
}

impl UserConfig {
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("leetgrab").join("config.json"))
}

pub fn load_config() -> UserConfig {
    match get_config_path() {
        Some(path) if path.exists() => match fs::read_to_string(&path) {
            Ok(contents) => parse_config(&contents),
            Err(_) => UserConfig::default(),
        },
        _ => UserConfig::default(),
    }
}

pub fn parse_config(contents: &str) -> UserConfig {
    serde_json::from_str(contents).unwrap_or_default()
}
