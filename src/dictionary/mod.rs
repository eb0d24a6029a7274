// Dictionary module - the fixed vocabulary table and its read-only accessors

mod matcher;
mod store;

pub use matcher::{suggest, SuggestionMatcher, DEFAULT_SUGGESTION_THRESHOLD};
pub use store::{
    contains, entries, len, lookup, lookup_entry, DictionaryEntry, DictionaryError,
};
