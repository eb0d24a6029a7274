// Letter classification and character-frequency checks

use serde::Serialize;
use std::collections::HashMap;

const VOWELS: &str = "aeiou";

/// Vowel and consonant tallies for a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

/// Count vowels and consonants, case-insensitively
///
/// Only ASCII `a`-`z` are classified; spaces, digits, punctuation and
/// non-ASCII letters count towards neither total.
pub fn count_letters(text: &str) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for c in text.to_lowercase().chars() {
        if VOWELS.contains(c) {
            counts.vowels += 1;
        } else if c.is_ascii_lowercase() {
            counts.consonants += 1;
        }
    }
    counts
}

/// True when both strings hold exactly the same characters (case-sensitive)
pub fn is_anagram(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    if left.len() != right.len() {
        return false;
    }
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

/// Characters that occur exactly once, in order of appearance
pub fn non_repeating_chars(text: &str) -> Vec<char> {
    let mut frequency: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    text.chars()
        .filter(|c| frequency.get(c) == Some(&1))
        .collect()
}

#[cfg(test)]
#[path = "letters_test.rs"]
mod tests;
