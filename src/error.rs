use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid problem link '{0}': expected https://<host>/problems/<slug>/")]
    InvalidLink(String),

    #[error("unknown language choice '{0}'")]
    InvalidChoice(String),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no question found for slug '{0}'")]
    QuestionNotFound(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("code snippet not found for language '{0}'")]
    SnippetNotFound(String),

    #[error("failed to write '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor '{editor}' exited with {status}")]
    EditorExit {
        editor: String,
        status: std::process::ExitStatus,
    },

    #[error("no editor configured")]
    NoEditor,

    #[error("failed to update index '{}': {source}", .path.display())]
    Index {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
