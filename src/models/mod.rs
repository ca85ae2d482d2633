pub mod config;
pub mod language;
pub mod question;

// config is accessed as crate::models::config::{load_config, UserConfig}
pub use language::Language;
pub use question::{CodeSnippet, Question};
