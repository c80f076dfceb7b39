//! Domain layer: entities and hierarchy logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading).

pub mod arena;
pub mod builder;
pub mod category;
pub mod error;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::{Audit, TreeBuilder};
pub use category::{is_valid_slug, slugify, CategoryRecord, TOP_LEVEL_PARENT};
pub use error::{DomainError, TreeResult};
