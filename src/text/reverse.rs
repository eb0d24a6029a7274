// String reversal helpers
// All reversal is per `char`, so multi-byte characters stay intact.

/// Reverse the characters of the whole string
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverse each space-separated word in place, keeping word order
///
/// Splits on single spaces, so runs of spaces survive unchanged:
/// `"Hello World"` becomes `"olleH dlroW"`.
pub fn reverse_each_word(text: &str) -> String {
    text.split(' ')
        .map(reverse_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when the text reads the same reversed (exact, case-sensitive)
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// Split a string into its characters, each as its own string
pub fn spread_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

#[cfg(test)]
#[path = "reverse_test.rs"]
mod tests;
