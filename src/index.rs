use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Component, Path};

use tracing::info;

use crate::error::{Error, Result};

pub const INDEX_PREAMBLE: &str = "# Solutions\n\
\n\
|#|Title|Solution|Difficulty|\n\
|---|---|---|---|\n";

#[derive(Debug, Clone)]
pub struct IndexRecord {
    pub frontend_id: String,
    pub title: String,
    pub source_link: String,
    pub language: String,
    /// '/'-separated, relative to the directory holding the index file.
    pub relative_path: String,
    pub difficulty: String,
}

impl IndexRecord {
    pub fn to_row(&self) -> String {
        format!(
            "|{}|[{}]({}) | [{}](./{})|{}|",
            self.frontend_id,
            self.title,
            self.source_link,
            self.language,
            self.relative_path,
            self.difficulty
        )
    }
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Link from the index file's directory to `target`, both given relative to the working root.
///
/// An absolute index path or one climbing out with `..` gets the root-relative link.
pub fn relative_link(index_file: &Path, target: &Path) -> String {
    let target_parts = normal_components(target);
    let plain = index_file
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !plain {
        return target_parts.join("/");
    }

    let index_dir = index_file.parent().map(normal_components).unwrap_or_default();
    let common = index_dir
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec!["..".to_string(); index_dir.len() - common];
    parts.extend_from_slice(&target_parts[common..]);
    parts.join("/")
}

/// Append one row, creating the file with the table preamble first if needed.
pub fn append_record(index_path: &Path, record: &IndexRecord) -> Result<()> {
    let to_index_err = |source: std::io::Error| Error::Index {
        path: index_path.to_path_buf(),
        source,
    };

    let created = !index_path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(index_path)
        .map_err(to_index_err)?;

    if created {
        file.write_all(INDEX_PREAMBLE.as_bytes()).map_err(to_index_err)?;
    }

    writeln!(file, "{}", record.to_row()).map_err(to_index_err)?;

    info!(path = %index_path.display(), id = %record.frontend_id, created, "index row appended");
    Ok(())
}
