use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::category::CategoryRecord;

/// Payload of a tree node.
///
/// The sentinel root collects top-level categories and carries no record;
/// every other node represents exactly one category.
#[derive(Debug, Clone)]
pub enum NodeData {
    Root,
    Category(CategoryRecord),
}

impl NodeData {
    /// The category record, `None` for the sentinel root.
    pub fn category(&self) -> Option<&CategoryRecord> {
        match self {
            NodeData::Root => None,
            NodeData::Category(record) => Some(record),
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeData::Root => write!(f, "."),
            NodeData::Category(record) => write!(f, "{}", record.name),
        }
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Category payload for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in input order
    pub children: Vec<Index>,
}

/// Arena-based forest for category hierarchies.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. A full forest is rooted at the sentinel; a subtree build
/// roots directly at a category node. The structure is not mutated after
/// construction.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Whether this arena is a full forest under the sentinel root.
    pub fn is_forest(&self) -> bool {
        self.root
            .and_then(|idx| self.get_node(idx))
            .map(|node| matches!(node.data, NodeData::Root))
            .unwrap_or(false)
    }

    /// Preorder iterator: each node before its descendants, children in
    /// input order. Yields the node's depth below the root.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Flatten into parent-before-children, depth-first order.
    ///
    /// The sentinel root contributes no record. Pure and restartable:
    /// repeated calls yield identical sequences.
    #[instrument(level = "debug", skip(self))]
    pub fn flatten(&self) -> Vec<&CategoryRecord> {
        self.flatten_with_depth()
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }

    /// Flattened records paired with their hierarchy depth (top-level = 0).
    #[instrument(level = "debug", skip(self))]
    pub fn flatten_with_depth(&self) -> Vec<(usize, &CategoryRecord)> {
        // the sentinel occupies depth 0, so categories in a forest start at 1
        let offset = usize::from(self.is_forest());
        self.iter()
            .filter_map(|(_, depth, node)| {
                node.data.category().map(|record| (depth - offset, record))
            })
            .collect()
    }

    /// Collects all leaf categories (nodes with no children) in the tree.
    ///
    /// Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_categories(&self) -> Vec<&CategoryRecord> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves<'a>(&'a self, node_idx: Index, leaves: &mut Vec<&'a CategoryRecord>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                // a childless sentinel is an empty forest, not a leaf
                if let Some(record) = node.data.category() {
                    leaves.push(record);
                }
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<(Index, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, 0));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}
