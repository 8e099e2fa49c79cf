//! Static catalog of eco tips shown alongside scores.

use rand::seq::SliceRandom;

/// Rotating tips surfaced on the suggestions screen.
pub const ECO_SUGGESTIONS: &[&str] = &[
    "Try using public transportation.",
    "Bring your own bottle.",
    "Set a time limit for your shower.",
    "Try eating food without meat.",
    "Don't forget to unplug electrical devices.",
    "Separate plastics, glass, and paper into different trash bins.",
];

pub fn all_suggestions() -> &'static [&'static str] {
    ECO_SUGGESTIONS
}

/// Picks one tip at random.
pub fn random_suggestion() -> &'static str {
    let mut rng = rand::thread_rng();
    ECO_SUGGESTIONS
        .choose(&mut rng)
        .copied()
        .unwrap_or(ECO_SUGGESTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_populated() {
        assert_eq!(all_suggestions().len(), 6);
        assert!(all_suggestions().iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_random_suggestion_comes_from_catalog() {
        for _ in 0..50 {
            let tip = random_suggestion();
            assert!(ECO_SUGGESTIONS.contains(&tip));
        }
    }
}
