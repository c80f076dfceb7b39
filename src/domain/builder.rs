//! Tree builder: turns flat category collections into arena-backed forests.

use std::collections::{HashMap, HashSet};

use generational_arena::Index;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::category::{CategoryRecord, TOP_LEVEL_PARENT};
use crate::domain::error::{DomainError, TreeResult};

/// Constructs category hierarchies from flat record collections.
///
/// Input defect policy is fixed and deterministic: duplicate ids keep the
/// first occurrence in input order, orphaned records (parent chain
/// dead-ends on a missing id) are excluded from the built tree, and a
/// cyclic parent chain fails the build with [`DomainError::CycleDetected`].
pub struct TreeBuilder {
    visited: HashSet<u64>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }

    /// Build the full multi-root forest under a sentinel root.
    ///
    /// Every record reachable from a top-level record via valid parent
    /// links appears exactly once; children keep their relative input
    /// order at each level.
    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn build_forest(&mut self, records: &[CategoryRecord]) -> TreeResult<TreeArena> {
        let (kept, _) = dedup_first(records);
        let children = group_by_parent(&kept);

        let mut tree = TreeArena::new();
        self.visited.clear();
        let root_idx = tree.insert_node(NodeData::Root, None);
        self.attach_children(&mut tree, root_idx, TOP_LEVEL_PARENT, &children)?;

        // Whatever the traversal never reached is either orphaned (dropped)
        // or sits on a cyclic parent chain (fail-fast).
        let index = index_by_id(&kept);
        for &record in &kept {
            if !self.visited.contains(&record.id) {
                if let Some(id) = find_cycle(record, &index) {
                    return Err(DomainError::CycleDetected(id));
                }
                debug!(id = record.id, name = %record.name, "dropping orphaned category");
            }
        }

        Ok(tree)
    }

    /// Build the subtree rooted at a specific category.
    ///
    /// Cycle detection covers the descent from the root: a parent chain
    /// that loops back into the subtree fails the build.
    #[instrument(level = "debug", skip(self, records))]
    pub fn build_subtree(&mut self, root_id: u64, records: &[CategoryRecord]) -> TreeResult<TreeArena> {
        let (kept, _) = dedup_first(records);
        let children = group_by_parent(&kept);
        let root = kept
            .iter()
            .find(|record| record.id == root_id)
            .copied()
            .ok_or(DomainError::UnknownCategory(root_id))?;

        let mut tree = TreeArena::new();
        self.visited.clear();
        self.visited.insert(root.id);
        let root_idx = tree.insert_node(NodeData::Category(root.clone()), None);
        self.attach_children(&mut tree, root_idx, root.id, &children)?;

        Ok(tree)
    }

    /// Attach all descendants of `parent_id` below `parent_idx` using an
    /// explicit stack instead of recursion.
    fn attach_children(
        &mut self,
        tree: &mut TreeArena,
        parent_idx: Index,
        parent_id: u64,
        children: &HashMap<u64, Vec<&CategoryRecord>>,
    ) -> TreeResult<()> {
        let mut stack: Vec<(&CategoryRecord, Index)> = Vec::new();
        if let Some(top) = children.get(&parent_id) {
            // reversed so pop order matches input order
            for &record in top.iter().rev() {
                stack.push((record, parent_idx));
            }
        }

        while let Some((record, parent_idx)) = stack.pop() {
            // every record owns exactly one parent slot, so a revisit
            // means the chain looped back
            if !self.visited.insert(record.id) {
                return Err(DomainError::CycleDetected(record.id));
            }

            let current_idx = tree.insert_node(NodeData::Category(record.clone()), Some(parent_idx));

            if let Some(kids) = children.get(&record.id) {
                for &child in kids.iter().rev() {
                    stack.push((child, current_idx));
                }
            }
        }

        Ok(())
    }

    /// Classify input defects without failing the build.
    ///
    /// Unlike [`build_forest`](Self::build_forest) this never errors; it
    /// reports duplicates, orphans and cycle participants for lint-style
    /// consumers.
    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn audit(&mut self, records: &[CategoryRecord]) -> Audit {
        let (kept, duplicates) = dedup_first(records);
        let children = group_by_parent(&kept);
        let index = index_by_id(&kept);

        // reachability walk from the top level, same order as the build
        let mut placed: HashSet<u64> = HashSet::new();
        let mut stack: Vec<&CategoryRecord> = Vec::new();
        if let Some(top) = children.get(&TOP_LEVEL_PARENT) {
            stack.extend(top.iter().rev().copied());
        }
        while let Some(record) = stack.pop() {
            if !placed.insert(record.id) {
                continue;
            }
            if let Some(kids) = children.get(&record.id) {
                stack.extend(kids.iter().rev().copied());
            }
        }

        let mut audit = Audit {
            duplicates: duplicates.into_iter().cloned().collect(),
            ..Audit::default()
        };
        for &record in &kept {
            if placed.contains(&record.id) {
                continue;
            }
            if find_cycle(record, &index).is_some() {
                audit.cycles.push(record.id);
            } else {
                audit.orphans.push(record.clone());
            }
        }

        audit
    }
}

/// Input defect report produced by [`TreeBuilder::audit`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Audit {
    /// Records whose id already occurred earlier in the input
    pub duplicates: Vec<CategoryRecord>,
    /// Records whose parent chain dead-ends on a missing id
    pub orphans: Vec<CategoryRecord>,
    /// Ids of records sitting on a cyclic parent chain, in input order
    pub cycles: Vec<u64>,
}

impl Audit {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.orphans.is_empty() && self.cycles.is_empty()
    }
}

/// First occurrence of each id wins; later duplicates are split off.
fn dedup_first(records: &[CategoryRecord]) -> (Vec<&CategoryRecord>, Vec<&CategoryRecord>) {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut duplicates = Vec::new();
    for record in records {
        if seen.insert(record.id) {
            kept.push(record);
        } else {
            duplicates.push(record);
        }
    }
    (kept, duplicates)
}

/// Group records by parent id, preserving relative input order per parent.
fn group_by_parent<'a>(kept: &[&'a CategoryRecord]) -> HashMap<u64, Vec<&'a CategoryRecord>> {
    kept.iter().map(|record| (record.parent_id, *record)).into_group_map()
}

fn index_by_id<'a>(kept: &[&'a CategoryRecord]) -> HashMap<u64, &'a CategoryRecord> {
    kept.iter().map(|record| (record.id, *record)).collect()
}

/// Walk the parent chain from `start`; returns the id at which the chain
/// revisits itself, or `None` if it dead-ends (orphan).
///
/// Only called for records the forest traversal could not place, whose
/// chains never reach a placed record or the top level.
fn find_cycle(start: &CategoryRecord, index: &HashMap<u64, &CategoryRecord>) -> Option<u64> {
    let mut seen = HashSet::new();
    let mut current = start;
    loop {
        if !seen.insert(current.id) {
            return Some(current.id);
        }
        match index.get(&current.parent_id) {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}
