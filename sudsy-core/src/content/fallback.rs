//! Embedded thought list used whenever no external list is available.

use crate::types::{Length, Thought};

fn thought(
    id: &str,
    text: &str,
    category: &[&str],
    vibe: &[&str],
    length: Length,
    spice: u8,
) -> Thought {
    Thought {
        id: id.to_string(),
        text: text.to_string(),
        category: category.iter().map(|s| s.to_string()).collect(),
        vibe: vibe.iter().map(|s| s.to_string()).collect(),
        length,
        spice: Some(spice),
    }
}

/// The curated built-in thoughts.
pub fn embedded_thoughts() -> Vec<Thought> {
    use Length::{Medium, Short};

    vec![
        thought("st_0001", "A towel is basically a portable drying privilege.", &["life"], &["calm", "silly"], Short, 2),
        thought("st_0002", "If you say “shampoo” in your head, your brain auto-adds the bubbles.", &["funny"], &["silly"], Short, 1),
        thought("st_0003", "We’re all just water with anxiety wearing outfits.", &["existential"], &["deep"], Short, 3),
        thought("st_0004", "Soap is a social contract: you agree to remove yesterday from your body.", &["meta", "life"], &["deep", "calm"], Medium, 2),
        thought("st_0005", "The shower is the only place you can be both a philosopher and a rotisserie chicken.", &["funny", "meta"], &["silly", "chaos"], Medium, 3),
        thought("st_0006", "Every ‘new habit’ is just your future self trying to rescue your current self from vibes-based decisions.", &["life"], &["deep"], Medium, 3),
        thought("st_0007", "If time is money, why does it feel like my schedule is sponsored by chaos?", &["existential"], &["chaos", "deep"], Medium, 4),
        thought("st_0008", "Your reflection is a real-time simulation with questionable lighting choices.", &["tech", "meta"], &["silly", "deep"], Short, 2),
        thought("st_0009", "Some problems only exist because you refused to drink water like a responsible mammal.", &["life", "funny"], &["silly"], Medium, 2),
        thought("st_0010", "We invented ‘adulting’ so we could feel guilty for not having a user manual.", &["existential", "life"], &["deep"], Medium, 3),
        thought("st_0011", "If your brain had patch notes, the update would just say: ‘fixed nothing, added worries.’", &["tech", "funny"], &["chaos"], Medium, 4),
        thought("st_0012", "A routine is just a loop you keep running until you either level up or rage quit.", &["life", "tech"], &["deep", "chaos"], Medium, 3),
        thought("st_0013", "The most honest alarm clock is the one that simply screams “consequences.”", &["funny", "life"], &["chaos"], Short, 4),
        thought("st_0014", "A ‘quick shower’ is a myth told by optimistic people who don’t dissociate.", &["funny"], &["silly", "chaos"], Short, 3),
        thought("st_0015", "If you ever feel lost, remember: even GPS is wrong sometimes and it still speaks confidently.", &["life"], &["calm", "deep"], Medium, 2),
        thought("st_0016", "The brain is the only device that can lag while doing absolutely nothing.", &["tech", "meta"], &["silly"], Short, 2),
        thought("st_0017", "Every ‘later’ is just a calendar invitation you never sent.", &["life", "existential"], &["deep"], Short, 3),
        thought("st_0018", "Confidence is just your nervous system bluffing with a straight face.", &["life"], &["deep"], Short, 3),
        thought("st_0019", "If your thoughts were subtitles, you’d turn them off to enjoy the movie.", &["meta"], &["deep", "chaos"], Short, 4),
        thought("st_0020", "Sometimes the ‘fresh start’ is just you, wet, rethinking everything.", &["existential", "life"], &["calm", "deep"], Medium, 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TagKind, CATEGORIES, VIBES};
    use std::collections::HashSet;

    #[test]
    fn test_embedded_ids_are_unique() {
        let thoughts = embedded_thoughts();
        let ids: HashSet<_> = thoughts.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(thoughts.len(), 20);
        assert_eq!(ids.len(), thoughts.len());
    }

    #[test]
    fn test_embedded_tags_are_in_catalog() {
        for t in embedded_thoughts() {
            for c in &t.category {
                assert!(TagKind::Category.find(c).is_some(), "{} has unknown category {c}", t.id);
            }
            for v in &t.vibe {
                assert!(TagKind::Vibe.find(v).is_some(), "{} has unknown vibe {v}", t.id);
            }
        }
        // Every non-"any" option has at least one thought.
        let thoughts = embedded_thoughts();
        for option in CATEGORIES.iter().skip(1) {
            assert!(thoughts.iter().any(|t| t.category.iter().any(|c| c == option.key)));
        }
        for option in VIBES.iter().skip(1) {
            assert!(thoughts.iter().any(|t| t.vibe.iter().any(|v| v == option.key)));
        }
    }
}
