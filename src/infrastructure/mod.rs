//! Infrastructure layer: file loading and interactive selection

pub mod error;
pub mod select;
pub mod store;

pub use error::{InfraError, InfraResult};
pub use select::{selection_items, SelectionItem, Selector, SkimSelector};
pub use store::{expand_user_path, load_records};
