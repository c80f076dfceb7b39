//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Hierarchical taxonomy tool: build category trees from flat records and flatten them for display
#[derive(Parser, Debug)]
#[command(name = "taxotree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the category hierarchy as a tree
    Tree {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Append category ids to labels
        #[arg(long)]
        ids: bool,
    },

    /// Flatten the hierarchy to an indented list, parent before children
    List {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Append category ids to labels
        #[arg(long)]
        ids: bool,
    },

    /// Render the subtree rooted at a category
    Subtree {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Root category id
        id: u64,
        /// Append category ids to labels
        #[arg(long)]
        ids: bool,
    },

    /// Lint records: duplicates, orphans, cycles, slug shape
    Check {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Fail on any finding, not just cycles
        #[arg(long)]
        strict: bool,
    },

    /// Show hierarchy statistics
    Stats {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List leaf categories
    Leaves {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Select a category interactively (fzf-like)
    Pick {
        /// Record file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
