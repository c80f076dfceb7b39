//! Domain entities: category records as supplied by the external store.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Parent identifier marking a top-level category.
pub const TOP_LEVEL_PARENT: u64 = 0;

/// One flat category record.
///
/// The tree builder reads only `id` and `parent_id`; the remaining fields
/// are display data carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    /// Identifier of the parent category, `0` for top-level
    #[serde(default, alias = "parent")]
    pub parent_id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryRecord {
    pub fn is_top_level(&self) -> bool {
        self.parent_id == TOP_LEVEL_PARENT
    }

    /// Slug for display: the stored slug if present, otherwise derived
    /// from the name.
    pub fn display_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.name))
    }
}

impl fmt::Display for CategoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check a slug against the conventional shape: lowercase alphanumeric
/// runs separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    re.is_match(slug)
}

/// Derive a slug from a display name.
pub fn slugify(name: &str) -> String {
    let non_alnum = Regex::new(r"[^a-z0-9]+").unwrap();
    let lowered = name.to_lowercase();
    non_alnum
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("C++ & Rust!", "c-rust")]
    #[case("  Travel  ", "travel")]
    #[case("already-a-slug", "already-a-slug")]
    fn test_slugify(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[rstest]
    #[case("travel", true)]
    #[case("food-and-drink", true)]
    #[case("2024-review", true)]
    #[case("Food", false)]
    #[case("double--hyphen", false)]
    #[case("-leading", false)]
    #[case("", false)]
    fn test_is_valid_slug(#[case] slug: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(slug), expected);
    }

    #[test]
    fn test_display_slug_falls_back_to_name() {
        let record = CategoryRecord {
            id: 1,
            parent_id: TOP_LEVEL_PARENT,
            name: "Food & Drink".to_string(),
            slug: None,
            description: None,
        };
        assert_eq!(record.display_slug(), "food-drink");
    }
}
