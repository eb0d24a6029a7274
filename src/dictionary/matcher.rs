// Suggestion matcher - finds the stored word closest to a misspelled request

use strsim::normalized_levenshtein;

use super::store::entries;

/// Default similarity threshold for suggestions (0.0 to 1.0)
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.6;

/// Normalize input text: lowercase and trim whitespace
fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Fuzzy matcher over the dictionary words
#[derive(Debug, Clone)]
pub struct SuggestionMatcher {
    /// Minimum normalized Levenshtein similarity for a suggestion
    threshold: f64,
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionMatcher {
    /// Create a matcher with the default threshold
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }

    /// Create a matcher with a custom threshold, clamped to 0.0..=1.0
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Return the most similar stored word, or None if nothing clears the threshold
    ///
    /// Ties keep the alphabetically first word.
    pub fn best_match(&self, input: &str) -> Option<&'static str> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<(&'static str, f64)> = None;
        for entry in entries() {
            let score = normalized_levenshtein(&normalized, entry.word);
            if score < self.threshold {
                continue;
            }
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((entry.word, score)),
            }
        }

        best.map(|(word, _)| word)
    }
}

/// Suggest the closest stored word using the default matcher
pub fn suggest(input: &str) -> Option<&'static str> {
    SuggestionMatcher::new().best_match(input)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
