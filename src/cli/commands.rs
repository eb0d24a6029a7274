// Subcommands and their arguments

use clap::Subcommand;

use crate::sequence::LabelStyle;

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the definition of a vocabulary word
    Define {
        /// Word to look up (exact, lowercase)
        word: String,
    },

    /// List every vocabulary word with its definition
    Words,

    /// Print the FizzBuzz sequence for 1..=N
    Fizzbuzz {
        /// Upper bound (inclusive)
        n: u64,
        /// Label style; defaults to the `fizzbuzzStyle` setting
        #[arg(long, value_enum)]
        style: Option<LabelStyle>,
        /// Print the sequence as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Double every number
    Double {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print 1..=N
    CountUp { n: u64 },

    /// Reverse a string character by character
    Reverse { text: String },

    /// Reverse each word of a string, keeping word order
    ReverseWords { text: String },

    /// Check whether a string reads the same reversed
    Palindrome { text: String },

    /// Count vowels and consonants
    Letters { text: String },

    /// Check whether two strings are anagrams
    Anagram { first: String, second: String },

    /// List the characters that occur exactly once
    Unique { text: String },

    /// Split a string into its characters
    Spread { text: String },

    /// Compare two values with strict and loose equality
    ///
    /// Values are JSON literals (`1`, `"1"`, `[1,2]`, `null`), `undefined`,
    /// or bare text, which is taken as a string.
    Equality {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Combine values left to right with string-coercing `+`
    Concat {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Compare A + B against an expected sum, exactly and within epsilon
    FloatSum {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        expected: f64,
    },

    /// Run the deferred operation and report its outcome
    Settle {
        /// Make the operation reject
        #[arg(long)]
        fail: bool,
    },

    /// Simulate debounced calls at the given millisecond offsets
    Debounce {
        /// Quiet period in milliseconds; defaults to the `debounceDelayMs` setting
        #[arg(long)]
        delay: Option<u64>,
        /// Offsets (ms from start) at which calls are made
        #[arg(required = true)]
        offsets: Vec<u64>,
    },

    /// Run every drill once with the sample inputs
    Demo,
}
