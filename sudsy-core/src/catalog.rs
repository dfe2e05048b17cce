//! Selector options and display labels.

use crate::types::{ANY_KEY, MAX_SPICE, MIN_SPICE};

/// One selectable category or vibe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOption {
    pub key: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

impl TagOption {
    const fn new(key: &'static str, label: &'static str, emoji: &'static str) -> Self {
        Self { key, label, emoji }
    }

    /// `emoji label`, as shown on a pill or tab.
    pub fn display(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

pub const CATEGORIES: [TagOption; 6] = [
    TagOption::new(ANY_KEY, "Any", "✨"),
    TagOption::new("funny", "Funny", "😂"),
    TagOption::new("life", "Life", "🧠"),
    TagOption::new("existential", "Existential", "🕳️"),
    TagOption::new("tech", "Tech", "🤖"),
    TagOption::new("meta", "Meta", "🪞"),
];

pub const VIBES: [TagOption; 5] = [
    TagOption::new(ANY_KEY, "Any", "🎛️"),
    TagOption::new("calm", "Calm", "🫧"),
    TagOption::new("deep", "Deep", "🧬"),
    TagOption::new("silly", "Silly", "🫠"),
    TagOption::new("chaos", "Chaos", "🌪️"),
];

/// Which option list a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Category,
    Vibe,
}

impl TagKind {
    pub fn options(self) -> &'static [TagOption] {
        match self {
            TagKind::Category => &CATEGORIES,
            TagKind::Vibe => &VIBES,
        }
    }

    pub fn find(self, key: &str) -> Option<&'static TagOption> {
        self.options().iter().find(|o| o.key == key)
    }

    /// Label for `key`, or "Any" for unknown keys.
    pub fn label_for(self, key: &str) -> &'static str {
        self.find(key).map(|o| o.label).unwrap_or("Any")
    }

    /// Key of the option `step` places away from `key`, wrapping around.
    /// Unknown keys start from the first option.
    pub fn cycle(self, key: &str, step: isize) -> &'static str {
        let options = self.options();
        let len = options.len() as isize;
        let current = options.iter().position(|o| o.key == key).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        options[next].key
    }
}

/// Spice level name without decoration (e.g. "Spicy").
pub fn spice_name(level: u8) -> &'static str {
    match level {
        1 => "Mild",
        2 => "Chill",
        3 => "Medium",
        4 => "Spicy",
        5 => "Chaos",
        _ => "Medium",
    }
}

/// Spice level name with its emoji (e.g. "Spicy 🔥").
pub fn spice_label(level: u8) -> &'static str {
    match level {
        1 => "Mild 🫧",
        2 => "Chill 🌿",
        3 => "Medium 🌶️",
        4 => "Spicy 🔥",
        5 => "Chaos 🌋",
        _ => "Medium 🌶️",
    }
}

pub fn is_valid_spice(level: u8) -> bool {
    (MIN_SPICE..=MAX_SPICE).contains(&level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_known_and_unknown() {
        assert_eq!(TagKind::Category.label_for("existential"), "Existential");
        assert_eq!(TagKind::Vibe.label_for("chaos"), "Chaos");
        assert_eq!(TagKind::Vibe.label_for("nope"), "Any");
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        assert_eq!(TagKind::Category.cycle("meta", 1), "any");
        assert_eq!(TagKind::Category.cycle("any", -1), "meta");
        assert_eq!(TagKind::Vibe.cycle("calm", 1), "deep");
        assert_eq!(TagKind::Vibe.cycle("unknown", 1), "calm");
    }

    #[test]
    fn test_spice_labels() {
        assert_eq!(spice_label(4), "Spicy 🔥");
        assert_eq!(spice_label(9), "Medium 🌶️");
        assert_eq!(spice_name(1), "Mild");
        assert!(is_valid_spice(5));
        assert!(!is_valid_spice(0));
    }
}
