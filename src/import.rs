//! Bulk task import from plain-text and JSON files.
//!
//! `.txt` files hold one description per line; `.json` files hold
//! `{"tasks": ["...", ...]}`. Blank lines and non-string JSON entries
//! are skipped, matching what the standalone importer always did.

use std::path::{Path, PathBuf};

use crate::store::{StoreError, TaskStore};

/// Error type for import operations
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Import tasks from a file, dispatching on the extension.
/// Returns the number of tasks inserted.
pub fn import_file(store: &TaskStore, path: &Path) -> Result<usize, ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let text = std::fs::read_to_string(path).map_err(|e| ImportError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    match ext.as_str() {
        "txt" => import_lines(store, &text),
        "json" => import_json(store, &text),
        other => Err(ImportError::UnsupportedFileType(other.to_string())),
    }
}

/// One description per non-empty line.
fn import_lines(store: &TaskStore, text: &str) -> Result<usize, ImportError> {
    let mut count = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match store.add(line) {
            Ok(_) => count += 1,
            // Whitespace-only after clamping; nothing worth keeping
            Err(StoreError::EmptyDescription) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(count)
}

/// `{"tasks": ["...", ...]}`; entries that are not strings are skipped.
fn import_json(store: &TaskStore, text: &str) -> Result<usize, ImportError> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    let mut count = 0;
    if let Some(tasks) = doc.get("tasks").and_then(|t| t.as_array()) {
        for entry in tasks {
            let Some(description) = entry.as_str() else {
                continue;
            };
            match store.add(description) {
                Ok(_) => count += 1,
                Err(StoreError::EmptyDescription) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(count)
}
