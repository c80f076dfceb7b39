//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/taxotree/taxotree.toml`
//! 3. Local config: `./.taxotree.toml`
//! 4. Environment variables: `TAXOTREE_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Template written by `taxotree config init`.
pub const CONFIG_TEMPLATE: &str = r#"# taxotree configuration

# Indentation unit for flattened list output
indent = "  "

# Append category ids to displayed labels
show_ids = false
"#;

/// Unified configuration for taxotree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Indentation unit for flattened list output
    pub indent: String,
    /// Append category ids to displayed labels
    pub show_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            show_ids: false,
        }
    }
}

/// Get the XDG config directory for taxotree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taxotree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("taxotree.toml"))
}

/// Get the path to the local config file in the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(".taxotree.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/taxotree/taxotree.toml`
    /// 3. Local config: `./.taxotree.toml`
    /// 4. Environment variables: `TAXOTREE_*` prefix
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("indent", defaults.indent)?
            .set_default("show_ids", defaults.show_ids)?;

        if let Some(global) = global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        builder
            .add_source(File::from(local_config_path()).required(false))
            .add_source(Environment::with_prefix("TAXOTREE").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
