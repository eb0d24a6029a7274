// FizzBuzz generation
//
// Element i (1-indexed) becomes a label when divisible by 3 and/or 5,
// otherwise the number itself. Two label styles exist: the classic
// "Fizz"/"Buzz"/"FizzBuzz" and the short lowercase "fiz"/"buzz"/"fizbuzz".

use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of a FizzBuzz sequence
///
/// Serializes untagged so a sequence renders as a mixed JSON array,
/// e.g. `[1, 2, "Fizz"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FizzBuzzItem {
    Number(u64),
    Label(&'static str),
}

impl fmt::Display for FizzBuzzItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzzItem::Number(n) => write!(f, "{}", n),
            FizzBuzzItem::Label(label) => f.write_str(label),
        }
    }
}

/// Which set of labels to emit
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// "Fizz", "Buzz", "FizzBuzz"
    #[default]
    Classic,
    /// "fiz", "buzz", "fizbuzz"
    Short,
}

impl LabelStyle {
    fn fizz(self) -> &'static str {
        match self {
            LabelStyle::Classic => "Fizz",
            LabelStyle::Short => "fiz",
        }
    }

    fn buzz(self) -> &'static str {
        match self {
            LabelStyle::Classic => "Buzz",
            LabelStyle::Short => "buzz",
        }
    }

    fn fizz_buzz(self) -> &'static str {
        match self {
            LabelStyle::Classic => "FizzBuzz",
            LabelStyle::Short => "fizbuzz",
        }
    }

    /// Map a single 1-based position to its item
    pub fn item_for(self, i: u64) -> FizzBuzzItem {
        match (i % 3 == 0, i % 5 == 0) {
            (true, true) => FizzBuzzItem::Label(self.fizz_buzz()),
            (true, false) => FizzBuzzItem::Label(self.fizz()),
            (false, true) => FizzBuzzItem::Label(self.buzz()),
            (false, false) => FizzBuzzItem::Number(i),
        }
    }
}

/// Lazily produce the sequence for `1..=n`
pub fn fizz_buzz_iter(n: u64, style: LabelStyle) -> impl Iterator<Item = FizzBuzzItem> {
    (1..=n).map(move |i| style.item_for(i))
}

/// Produce the full sequence for `1..=n` (empty when n is 0)
pub fn fizz_buzz(n: u64, style: LabelStyle) -> Vec<FizzBuzzItem> {
    fizz_buzz_iter(n, style).collect()
}

/// FizzBuzz that keeps appending to its own buffer across calls
///
/// Each `extend(n)` pushes the sequence for `1..=n` after whatever earlier
/// calls produced, so two `extend(3)` calls leave six items behind.
#[derive(Debug, Clone)]
pub struct FizzBuzzAccumulator {
    style: LabelStyle,
    items: Vec<FizzBuzzItem>,
}

impl Default for FizzBuzzAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl FizzBuzzAccumulator {
    /// Create an empty accumulator using the short labels
    pub fn new() -> Self {
        Self::with_style(LabelStyle::Short)
    }

    pub fn with_style(style: LabelStyle) -> Self {
        Self {
            style,
            items: Vec::new(),
        }
    }

    /// Append the sequence for `1..=n`; returns only the newly appended items
    pub fn extend(&mut self, n: u64) -> &[FizzBuzzItem] {
        let start = self.items.len();
        self.items.extend(fizz_buzz_iter(n, self.style));
        crate::trace!(
            "Accumulated {} FizzBuzz items ({} total)",
            self.items.len() - start,
            self.items.len()
        );
        &self.items[start..]
    }

    /// Everything accumulated so far
    pub fn items(&self) -> &[FizzBuzzItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all accumulated items
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_items(self) -> Vec<FizzBuzzItem> {
        self.items
    }
}

#[cfg(test)]
#[path = "fizzbuzz_test.rs"]
mod tests;
