use super::*;

#[test]
fn test_reverse_each_word() {
    assert_eq!(reverse_each_word("Hello World"), "olleH dlroW");
    assert_eq!(reverse_each_word("Hello World SMita"), "olleH dlroW atiMS");
}

#[test]
fn test_reverse_each_word_keeps_spacing() {
    assert_eq!(reverse_each_word(""), "");
    assert_eq!(reverse_each_word("ab  cd"), "ba  dc");
    assert_eq!(reverse_each_word(" ab "), " ba ");
}

#[test]
fn test_reverse_string() {
    assert_eq!(reverse_string("frontend"), "dnetnorf");
    assert_eq!(reverse_string(""), "");
    assert_eq!(reverse_string("añb"), "bña");
}

#[test]
fn test_is_palindrome() {
    assert!(is_palindrome("racecar"));
    assert!(!is_palindrome("koko ok ok"));
    assert!(is_palindrome("abba"));
    assert!(is_palindrome(""));
    assert!(is_palindrome("x"));
}

#[test]
fn test_palindrome_is_case_sensitive() {
    assert!(!is_palindrome("Racecar"));
    assert!(!is_palindrome("Hello World SMita"));
}

#[test]
fn test_spread_chars() {
    assert_eq!(
        spread_chars("frontend"),
        vec!["f", "r", "o", "n", "t", "e", "n", "d"]
    );
    assert!(spread_chars("").is_empty());
}
