//! Tests for terminal tree rendering

use taxotree::cli::render::ToDisplayTrees;
use taxotree::domain::{CategoryRecord, TreeBuilder};

fn cat(id: u64, parent_id: u64, name: &str) -> CategoryRecord {
    CategoryRecord {
        id,
        parent_id,
        name: name.to_string(),
        slug: None,
        description: None,
    }
}

#[test]
fn given_forest_when_rendering_then_one_tree_per_top_level_category() {
    let records = vec![cat(1, 0, "Tech"), cat(2, 1, "Rust"), cat(3, 0, "Travel")];
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records).unwrap();

    let rendered = tree.to_display_trees(false);
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].to_string(), "Tech\n└── Rust\n");
    assert_eq!(rendered[1].to_string(), "Travel\n");
}

#[test]
fn given_ids_flag_when_rendering_then_labels_carry_ids() {
    let records = vec![cat(1, 0, "Tech")];
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records).unwrap();

    let rendered = tree.to_display_trees(true);
    assert_eq!(rendered[0].to_string(), "Tech (1)\n");
}

#[test]
fn given_subtree_when_rendering_then_single_tree_rooted_at_category() {
    let records = vec![cat(1, 0, "Tech"), cat(2, 1, "Rust"), cat(3, 2, "Async")];
    let mut builder = TreeBuilder::new();
    let tree = builder.build_subtree(1, &records).unwrap();

    let rendered = tree.to_display_trees(false);
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].to_string(), "Tech\n└── Rust\n    └── Async\n");
}
