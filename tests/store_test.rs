//! Tests for the file-backed record store

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use taxotree::infrastructure::store::{expand_user_path, load_records};
use taxotree::infrastructure::InfraError;

fn write_records_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write records file");
    path
}

#[test]
fn given_json_array_when_loading_then_returns_records() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_records_file(
        &temp,
        "categories.json",
        r#"[
            {"id": 1, "parent_id": 0, "name": "Tech"},
            {"id": 2, "parent_id": 1, "name": "Rust", "slug": "rust"}
        ]"#,
    );

    // Act
    let records = load_records(&path).unwrap();

    // Assert
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Tech");
    assert_eq!(records[1].slug.as_deref(), Some("rust"));
}

#[test]
fn given_wrapped_json_when_loading_then_returns_records() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_records_file(
        &temp,
        "categories.json",
        r#"{"categories": [{"id": 1, "parent_id": 0, "name": "Tech"}]}"#,
    );

    // Act
    let records = load_records(&path).unwrap();

    // Assert
    assert_eq!(records.len(), 1);
}

#[test]
fn given_toml_tables_when_loading_then_returns_records() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_records_file(
        &temp,
        "categories.toml",
        r#"
[[categories]]
id = 1
parent_id = 0
name = "Tech"

[[categories]]
id = 2
parent = 1
name = "Rust"
"#,
    );

    // Act
    let records = load_records(&path).unwrap();

    // Assert
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].parent_id, 1);
}

#[test]
fn given_invalid_json_when_loading_then_parse_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_records_file(&temp, "categories.json", "not json at all");

    // Act
    let result = load_records(&path);

    // Assert
    assert!(matches!(result.unwrap_err(), InfraError::Parse { .. }));
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    // Act
    let result = load_records(Path::new("/nonexistent/categories.json"));

    // Assert
    assert!(matches!(result.unwrap_err(), InfraError::Io { .. }));
}

#[test]
fn given_plain_path_when_expanding_then_unchanged() {
    assert_eq!(
        expand_user_path(Path::new("categories.json")),
        PathBuf::from("categories.json")
    );
}

#[test]
fn given_unset_variable_when_expanding_then_falls_back_to_original() {
    let path = Path::new("$TAXOTREE_SURELY_UNSET_VAR/categories.json");
    assert_eq!(expand_user_path(path), path.to_path_buf());
}
