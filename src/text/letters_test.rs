// Tests for letter counting and character checks
// Test cases:
// - "Hello World" has 3 vowels and 7 consonants
// - Case is ignored; digits, spaces, punctuation and non-ASCII letters are skipped
// - Anagram and non-repeating character helpers

use super::*;

#[test]
fn test_count_letters_hello_world() {
    assert_eq!(
        count_letters("Hello World"),
        LetterCounts {
            vowels: 3,
            consonants: 7
        }
    );
}

#[test]
fn test_count_letters_ignores_case() {
    assert_eq!(count_letters("AEIOU bcd"), count_letters("aeiou BCD"));
    assert_eq!(count_letters("AEIOU").vowels, 5);
}

#[test]
fn test_count_letters_skips_non_letters() {
    let counts = count_letters("123 !?, \t");
    assert_eq!(counts, LetterCounts::default());

    // Non-ASCII letters fall outside a-z
    let counts = count_letters("çé ñ");
    assert_eq!(counts.vowels, 0);
    assert_eq!(counts.consonants, 0);
}

#[test]
fn test_count_letters_y_is_consonant() {
    let counts = count_letters("yay");
    assert_eq!(counts.vowels, 1);
    assert_eq!(counts.consonants, 2);
}

#[test]
fn test_is_anagram() {
    assert!(is_anagram("koko", "koko"));
    assert!(is_anagram("listen", "silent"));
    assert!(!is_anagram("listen", "silence"));
    assert!(!is_anagram("Listen", "silent"));
    assert!(is_anagram("", ""));
}

#[test]
fn test_non_repeating_chars() {
    assert_eq!(non_repeating_chars("swiss"), vec!['w', 'i']);
    assert_eq!(non_repeating_chars("koko"), Vec::<char>::new());
    assert_eq!(non_repeating_chars("abc"), vec!['a', 'b', 'c']);
    assert!(non_repeating_chars("").is_empty());
}
