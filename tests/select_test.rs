//! Tests for the selection boundary

use taxotree::domain::{CategoryRecord, TreeBuilder};
use taxotree::infrastructure::error::InfraResult;
use taxotree::infrastructure::{selection_items, SelectionItem, Selector};

fn cat(id: u64, parent_id: u64, name: &str) -> CategoryRecord {
    CategoryRecord {
        id,
        parent_id,
        name: name.to_string(),
        slug: None,
        description: None,
    }
}

/// Selector that always picks the item at a fixed position.
struct FakeSelector {
    pick: usize,
}

impl Selector for FakeSelector {
    fn select_one(
        &self,
        items: &[SelectionItem],
        _prompt: &str,
    ) -> InfraResult<Option<SelectionItem>> {
        Ok(items.get(self.pick).cloned())
    }
}

#[test]
fn given_forest_when_building_items_then_indented_in_hierarchy_order() {
    // Arrange
    let records = vec![cat(1, 0, "Tech"), cat(2, 1, "Rust"), cat(3, 0, "Travel")];
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records).unwrap();

    // Act
    let items = selection_items(&tree, "  ");

    // Assert
    let displays: Vec<&str> = items.iter().map(|i| i.display.as_str()).collect();
    assert_eq!(
        displays,
        vec!["Tech (tech)", "  Rust (rust)", "Travel (travel)"]
    );
    assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn given_fake_selector_when_selecting_then_returns_chosen_item() {
    // Arrange
    let records = vec![cat(1, 0, "Tech"), cat(2, 1, "Rust")];
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records).unwrap();
    let items = selection_items(&tree, "  ");

    // Act
    let selector = FakeSelector { pick: 1 };
    let selected = selector.select_one(&items, "category> ").unwrap();

    // Assert
    assert_eq!(selected.map(|item| item.id), Some(2));
}

#[test]
fn given_empty_forest_when_building_items_then_empty() {
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&[]).unwrap();

    assert!(selection_items(&tree, "  ").is_empty());
}
