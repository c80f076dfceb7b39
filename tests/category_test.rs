//! Tests for category record parsing

use taxotree::domain::{CategoryRecord, TOP_LEVEL_PARENT};

#[test]
fn given_full_json_record_when_parsing_then_all_fields_set() {
    let json = r#"{
        "id": 7,
        "parent_id": 3,
        "name": "Rust",
        "slug": "rust",
        "description": "Systems programming"
    }"#;

    let record: CategoryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.parent_id, 3);
    assert_eq!(record.name, "Rust");
    assert_eq!(record.slug.as_deref(), Some("rust"));
    assert_eq!(record.description.as_deref(), Some("Systems programming"));
}

#[test]
fn given_parent_alias_when_parsing_then_maps_to_parent_id() {
    let json = r#"{"id": 1, "parent": 2, "name": "X"}"#;

    let record: CategoryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.parent_id, 2);
}

#[test]
fn given_missing_parent_when_parsing_then_defaults_to_top_level() {
    let json = r#"{"id": 1, "name": "X"}"#;

    let record: CategoryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.parent_id, TOP_LEVEL_PARENT);
    assert!(record.is_top_level());
    assert!(record.slug.is_none());
    assert!(record.description.is_none());
}

#[test]
fn given_absent_optionals_when_serializing_then_fields_are_omitted() {
    let record = CategoryRecord {
        id: 1,
        parent_id: 0,
        name: "X".to_string(),
        slug: None,
        description: None,
    };

    let json = serde_json::to_string(&record).unwrap();
    assert!(!json.contains("slug"));
    assert!(!json.contains("description"));
}
