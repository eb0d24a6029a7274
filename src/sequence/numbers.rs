// Number-array helpers: doubling every element and counting up to a bound

/// Error types for sequence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// Doubling this element does not fit in an i64
    #[error("Doubling {value} at index {index} overflows")]
    Overflow { index: usize, value: i64 },
}

/// Double every element, failing instead of wrapping on overflow
pub fn double_all(values: &[i64]) -> Result<Vec<i64>, SequenceError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            value
                .checked_mul(2)
                .ok_or(SequenceError::Overflow { index, value })
        })
        .collect()
}

/// `1..=n` as a vector (empty when n is 0)
pub fn count_up(n: u64) -> Vec<u64> {
    (1..=n).collect()
}

#[cfg(test)]
#[path = "numbers_test.rs"]
mod tests;
