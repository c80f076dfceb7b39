//! Terminal tree rendering via termtree.

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::category::CategoryRecord;

pub(crate) fn label(record: &CategoryRecord, show_ids: bool) -> String {
    if show_ids {
        format!("{} ({})", record.name, record.id)
    } else {
        record.name.clone()
    }
}

pub trait ToDisplayTrees {
    /// One display tree per top-level category; a subtree arena yields a
    /// single tree rooted at its category.
    fn to_display_trees(&self, show_ids: bool) -> Vec<Tree<String>>;
}

impl ToDisplayTrees for TreeArena {
    fn to_display_trees(&self, show_ids: bool) -> Vec<Tree<String>> {
        fn node_tree(arena: &TreeArena, idx: Index, show_ids: bool) -> Option<Tree<String>> {
            let node = arena.get_node(idx)?;
            let text = match &node.data {
                NodeData::Root => ".".to_string(),
                NodeData::Category(record) => label(record, show_ids),
            };
            let mut tree = Tree::new(text);
            for &child in &node.children {
                if let Some(sub) = node_tree(arena, child, show_ids) {
                    tree.push(sub);
                }
            }
            Some(tree)
        }

        let Some(root_idx) = self.root() else {
            return Vec::new();
        };
        let Some(root) = self.get_node(root_idx) else {
            return Vec::new();
        };

        match &root.data {
            // the sentinel itself is not rendered
            NodeData::Root => root
                .children
                .iter()
                .filter_map(|&child| node_tree(self, child, show_ids))
                .collect(),
            NodeData::Category(_) => node_tree(self, root_idx, show_ids).into_iter().collect(),
        }
    }
}
