//! Tests for layered settings

use taxotree::config::{Settings, CONFIG_TEMPLATE};

#[test]
fn given_template_when_parsing_then_matches_defaults() {
    let parsed: Settings = toml::from_str(CONFIG_TEMPLATE).unwrap();
    assert_eq!(parsed, Settings::default());
}

// Defaults and env override share one test: env vars are process-global,
// so splitting them would race under the parallel test runner.
#[test]
fn given_env_override_when_loading_then_env_wins_over_defaults() {
    let defaults = Settings::load().unwrap();
    assert_eq!(defaults.indent, "  ");
    assert!(!defaults.show_ids);

    std::env::set_var("TAXOTREE_INDENT", "....");
    let overridden = Settings::load().unwrap();
    std::env::remove_var("TAXOTREE_INDENT");

    assert_eq!(overridden.indent, "....");
}
