//! Interactive selection boundary.
//!
//! The trait abstracts the fuzzy finder so command logic can be tested
//! with fake selectors.

use crate::domain::arena::TreeArena;
use crate::infrastructure::error::{InfraError, InfraResult};

/// One selectable entry: an indented display line plus the category id
/// it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    pub display: String,
    pub id: u64,
}

/// Build selection items from a forest: the flattened hierarchy with
/// indentation showing depth, parent before children.
pub fn selection_items(tree: &TreeArena, indent: &str) -> Vec<SelectionItem> {
    tree.flatten_with_depth()
        .into_iter()
        .map(|(depth, record)| SelectionItem {
            display: format!(
                "{}{} ({})",
                indent.repeat(depth),
                record.name,
                record.display_slug()
            ),
            id: record.id,
        })
        .collect()
}

pub trait Selector {
    /// Present items and return the chosen one, or `None` on abort.
    fn select_one(&self, items: &[SelectionItem], prompt: &str)
        -> InfraResult<Option<SelectionItem>>;
}

/// Real selector implementation using skim (FZF-like).
#[derive(Debug, Default)]
pub struct SkimSelector;

impl Selector for SkimSelector {
    fn select_one(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> InfraResult<Option<SelectionItem>> {
        use skim::prelude::*;
        use std::io::Cursor;

        if items.is_empty() {
            return Ok(None);
        }

        // Build input as newline-separated display strings
        let input = items
            .iter()
            .map(|item| item.display.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let options = SkimOptionsBuilder::default()
            .prompt(Some(prompt))
            .height(Some("50%"))
            .multi(false)
            .build()
            .map_err(|e| InfraError::Selection {
                message: format!("failed to build skim options: {e}"),
            })?;

        let item_reader = SkimItemReader::default();
        let items_arc = item_reader.of_bufread(Cursor::new(input));

        let output = Skim::run_with(&options, Some(items_arc));

        match output {
            Some(out) if out.is_abort => Ok(None),
            Some(out) => {
                if let Some(selected) = out.selected_items.first() {
                    let display = selected.output().to_string();
                    // Find the matching item
                    let item = items.iter().find(|i| i.display == display).cloned();
                    Ok(item)
                } else {
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }
}
