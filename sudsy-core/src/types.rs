//! Core domain types for sudsy.

use serde::{Deserialize, Serialize};

/// Filter key that matches every category or vibe.
pub const ANY_KEY: &str = "any";

/// Lowest selectable spice level.
pub const MIN_SPICE: u8 = 1;

/// Highest selectable spice level.
pub const MAX_SPICE: u8 = 5;

/// Rough size of a thought's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    #[default]
    Short,
    Medium,
    Long,
}

/// A single shower thought.
///
/// Thoughts are immutable once loaded. `category` and `vibe` are tag sets kept
/// in source order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    /// Unique identifier (e.g. `st_0001`)
    pub id: String,
    /// The thought itself
    pub text: String,
    /// Category tags (funny, life, ...)
    #[serde(default)]
    pub category: Vec<String>,
    /// Vibe tags (calm, deep, ...)
    #[serde(default)]
    pub vibe: Vec<String>,
    #[serde(default)]
    pub length: Length,
    /// Intensity 1-5. Records without one pass every spice filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice: Option<u8>,
}

impl Thought {
    /// Whether this thought is eligible under `filter`.
    pub fn matches(&self, filter: &Filter) -> bool {
        let category_ok =
            filter.category_key == ANY_KEY || self.category.contains(&filter.category_key);
        let vibe_ok = filter.vibe_key == ANY_KEY || self.vibe.contains(&filter.vibe_key);
        let spice_ok = self.spice.is_none_or(|spice| spice <= filter.spice_level);
        category_ok && vibe_ok && spice_ok
    }
}

/// Selection criteria for the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Category tag, or `any`
    pub category_key: String,
    /// Vibe tag, or `any`
    pub vibe_key: String,
    /// Maximum spice (inclusive)
    pub spice_level: u8,
}

impl Filter {
    pub fn new(category_key: impl Into<String>, vibe_key: impl Into<String>, spice_level: u8) -> Self {
        Self {
            category_key: category_key.into(),
            vibe_key: vibe_key.into(),
            spice_level,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(ANY_KEY, ANY_KEY, MAX_SPICE)
    }
}

/// Visual theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thought(category: &[&str], vibe: &[&str], spice: Option<u8>) -> Thought {
        Thought {
            id: "st_test".to_string(),
            text: "test".to_string(),
            category: category.iter().map(|s| s.to_string()).collect(),
            vibe: vibe.iter().map(|s| s.to_string()).collect(),
            length: Length::Short,
            spice,
        }
    }

    #[test]
    fn test_any_filter_matches_within_spice() {
        let t = thought(&["life"], &["calm"], Some(3));
        assert!(t.matches(&Filter::new("any", "any", 3)));
        assert!(!t.matches(&Filter::new("any", "any", 2)));
    }

    #[test]
    fn test_category_and_vibe_must_both_match() {
        let t = thought(&["life", "meta"], &["deep"], Some(1));
        assert!(t.matches(&Filter::new("meta", "deep", 5)));
        assert!(!t.matches(&Filter::new("meta", "silly", 5)));
        assert!(!t.matches(&Filter::new("tech", "deep", 5)));
    }

    #[test]
    fn test_missing_spice_passes_any_level() {
        let t = thought(&[], &[], None);
        assert!(t.matches(&Filter::new("any", "any", 1)));
        assert!(!t.matches(&Filter::new("funny", "any", 5)));
    }

    #[test]
    fn test_thought_deserializes_with_missing_tags() {
        let t: Thought = serde_json::from_str(r#"{"id":"x","text":"y"}"#).unwrap();
        assert!(t.category.is_empty());
        assert!(t.vibe.is_empty());
        assert_eq!(t.length, Length::Short);
        assert_eq!(t.spice, None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().as_str(), "dark");
    }
}
