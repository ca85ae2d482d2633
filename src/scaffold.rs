use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{CodeSnippet, Language, Question};

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionFile {
    /// Relative to the directory the tool runs in.
    pub path: PathBuf,
    pub content: String,
}

/// First snippet whose language label matches exactly.
pub fn select_snippet<'a>(snippets: &'a [CodeSnippet], label: &str) -> Result<&'a CodeSnippet> {
    snippets
        .iter()
        .find(|s| s.language == label)
        .ok_or_else(|| Error::SnippetNotFound(label.to_string()))
}

pub fn solution_dir(language: Language, frontend_id: &str) -> PathBuf {
    Path::new(language.dir_name()).join(frontend_id)
}

pub fn solution_path(language: Language, frontend_id: &str) -> PathBuf {
    solution_dir(language, frontend_id).join(format!("solution.{}", language.extension()))
}

pub fn render_solution(link: &str, author: &str, difficulty: &str, text: &str, code: &str) -> String {
    // "*/" would end the block comment early; "/*" nests in Rust and Kotlin.
    let text = text.trim_end().replace("*/", "* /").replace("/*", "/ *");

    format!(
        "// Source: {}\n// Author: {}\n// Difficulty: {}\n\n/*\n{}\n*/\n\n{}",
        link, author, difficulty, text, code
    )
}

impl SolutionFile {
    pub fn compose(
        language: Language,
        question: &Question,
        link: &str,
        author: &str,
        text: &str,
        code: &str,
    ) -> Self {
        Self {
            path: solution_path(language, &question.question_frontend_id),
            content: render_solution(link, author, &question.difficulty, text, code),
        }
    }

    /// Write under `root`, creating directories as needed. Existing files are overwritten.
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let target = root.join(&self.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&target, &self.content).map_err(|source| Error::FileSystem {
            path: target.clone(),
            source,
        })?;

        info!(path = %target.display(), bytes = self.content.len(), "solution written");
        Ok(target)
    }
}
