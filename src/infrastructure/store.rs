//! File-backed record store.
//!
//! The external collaborator supplies the complete flat collection per
//! invocation; this module only reads it into memory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::category::CategoryRecord;
use crate::infrastructure::error::{InfraError, InfraResult};

/// Wrapper shape used by TOML files and keyed JSON documents.
#[derive(Debug, Deserialize)]
struct RecordFile {
    categories: Vec<CategoryRecord>,
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_user_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load category records from a JSON or TOML file.
///
/// JSON accepts either a bare array of records or `{"categories": [...]}`;
/// TOML expects `[[categories]]` tables. The format is chosen by file
/// extension, defaulting to JSON.
#[instrument(level = "debug")]
pub fn load_records(path: &Path) -> InfraResult<Vec<CategoryRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;

    let records = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&content, path)?,
        _ => parse_json(&content, path)?,
    };

    debug!(count = records.len(), "loaded category records");
    Ok(records)
}

fn parse_json(content: &str, path: &Path) -> InfraResult<Vec<CategoryRecord>> {
    if let Ok(records) = serde_json::from_str::<Vec<CategoryRecord>>(content) {
        return Ok(records);
    }
    serde_json::from_str::<RecordFile>(content)
        .map(|file| file.categories)
        .map_err(|e| InfraError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn parse_toml(content: &str, path: &Path) -> InfraResult<Vec<CategoryRecord>> {
    toml::from_str::<RecordFile>(content)
        .map(|file| file.categories)
        .map_err(|e| InfraError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
