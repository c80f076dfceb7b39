pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;

pub use config::Settings;
pub use domain::{
    Audit, CategoryRecord, DomainError, NodeData, TreeArena, TreeBuilder, TreeNode, TreeResult,
    TOP_LEVEL_PARENT,
};
pub use infrastructure::{load_records, InfraError};
