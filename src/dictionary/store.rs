// Dictionary store - the static vocabulary table
// Entries are fixed at compile time and never mutated; lookups are read-only.

use serde::Serialize;

/// A single vocabulary word with its definition
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Lowercase vocabulary word (e.g., "candid")
    pub word: &'static str,
    /// Definition text
    pub definition: &'static str,
}

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Word is not in the table
    #[error("No definition found for '{word}'{hint}", hint = suggestion_hint(.suggestion))]
    NotFound {
        word: String,
        /// Closest stored word, if one is similar enough
        suggestion: Option<String>,
    },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(word) => format!(" (did you mean '{}'?)", word),
        None => String::new(),
    }
}

// Kept sorted by word: lookups binary search this table.
const ENTRIES: [DictionaryEntry; 10] = [
    DictionaryEntry {
        word: "abundant",
        definition: "existing or available in large quantities",
    },
    DictionaryEntry {
        word: "benevolent",
        definition: "well-meaning and kindly",
    },
    DictionaryEntry {
        word: "candid",
        definition: "truthful and straightforward; frank",
    },
    DictionaryEntry {
        word: "diligent",
        definition: "having or showing care in one's work or duties",
    },
    DictionaryEntry {
        word: "eloquent",
        definition: "fluent or persuasive in speaking or writing",
    },
    DictionaryEntry {
        word: "frugal",
        definition: "sparing or economical with regard to money or food",
    },
    DictionaryEntry {
        word: "gregarious",
        definition: "fond of company; sociable",
    },
    DictionaryEntry {
        word: "humble",
        definition: "having or showing a modest or low estimate of one's importance",
    },
    DictionaryEntry {
        word: "innovative",
        definition: "featuring new methods; advanced and original",
    },
    DictionaryEntry {
        word: "jubilant",
        definition: "feeling or expressing great happiness and triumph",
    },
];

// Keys match exactly: "Candid" and " candid " are not in the table.
fn find(word: &str) -> Option<&'static DictionaryEntry> {
    ENTRIES
        .binary_search_by(|entry| entry.word.cmp(word))
        .ok()
        .map(|index| &ENTRIES[index])
}

/// Look up the definition of a word
///
/// Returns `DictionaryError::NotFound` (with a suggestion when a stored word
/// is close enough) if the word is not in the table.
pub fn lookup(word: &str) -> Result<&'static str, DictionaryError> {
    lookup_entry(word).map(|entry| entry.definition)
}

/// Look up the full entry for a word, with the same matching as `lookup`
pub fn lookup_entry(word: &str) -> Result<&'static DictionaryEntry, DictionaryError> {
    match find(word) {
        Some(entry) => {
            crate::debug!("Dictionary hit for '{}'", entry.word);
            Ok(entry)
        }
        None => {
            let suggestion = super::suggest(word).map(str::to_string);
            crate::debug!(
                "Dictionary miss for '{}' (suggestion: {:?})",
                word,
                suggestion
            );
            Err(DictionaryError::NotFound {
                word: word.to_string(),
                suggestion,
            })
        }
    }
}

/// Check whether a word is in the table
pub fn contains(word: &str) -> bool {
    find(word).is_some()
}

/// All entries, in alphabetical order
pub fn entries() -> &'static [DictionaryEntry] {
    &ENTRIES
}

/// Number of entries in the table
pub fn len() -> usize {
    ENTRIES.len()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
