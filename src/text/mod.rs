// Text utilities - reversal, palindromes, letter counting and character checks

mod letters;
mod reverse;

pub use letters::{count_letters, is_anagram, non_repeating_chars, LetterCounts};
pub use reverse::{is_palindrome, reverse_each_word, reverse_string, spread_chars};
