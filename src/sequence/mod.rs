// Sequence generators - FizzBuzz variants and small number-array helpers

mod fizzbuzz;
mod numbers;

pub use fizzbuzz::{fizz_buzz, fizz_buzz_iter, FizzBuzzAccumulator, FizzBuzzItem, LabelStyle};
pub use numbers::{count_up, double_all, SequenceError};
