use super::*;

#[test]
fn test_suggests_word_with_single_typo() {
    assert_eq!(suggest("candd"), Some("candid"));
    assert_eq!(suggest("humbel"), Some("humble"));
    assert_eq!(suggest("Diligant"), Some("diligent"));
}

#[test]
fn test_exact_word_suggests_itself() {
    assert_eq!(suggest("eloquent"), Some("eloquent"));
}

#[test]
fn test_unrelated_input_has_no_suggestion() {
    assert_eq!(suggest("xyz"), None);
    assert_eq!(suggest("   "), None);
}

#[test]
fn test_threshold_is_configurable() {
    let strict = SuggestionMatcher::with_threshold(1.0);
    assert_eq!(strict.best_match("frugel"), None);
    assert_eq!(strict.best_match("frugal"), Some("frugal"));

    let lenient = SuggestionMatcher::with_threshold(0.0);
    assert!(lenient.best_match("q").is_some());
}

#[test]
fn test_threshold_is_clamped() {
    let matcher = SuggestionMatcher::with_threshold(7.5);
    assert_eq!(matcher.best_match("frugal"), Some("frugal"));
}
