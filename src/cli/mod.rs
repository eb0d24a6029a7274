//! Command-line surface.
//!
//! Parses arguments with clap and dispatches to the library modules. Output
//! goes to the supplied writer so commands can be exercised in tests; all
//! computation lives in the library modules.

mod commands;

pub use commands::Commands;

use clap::{ArgAction, Parser};
use parking_lot::Mutex;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::debounce::{DebounceError, Debouncer};
use crate::dictionary::{self, DictionaryError};
use crate::equality::{self, EqualityError, ScriptValue};
use crate::outcome;
use crate::sequence::{self, FizzBuzzAccumulator, LabelStyle, SequenceError};
use crate::settings::{Settings, SettingsError};
use crate::text;
use crate::util::run_async;

/// Sample sentence used by the demo
const DEMO_SENTENCE: &str = "Hello World SMita";

/// Extra wait after the last simulated call so the trailing call can land
const DEBOUNCE_SETTLE_MARGIN_MS: u64 = 25;

/// Longest delay or call offset the debounce simulation will wait for
pub const MAX_SIMULATED_SPAN_MS: u64 = 60_000;

/// Error types surfaced by the command line
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error(transparent)]
    Equality(#[from] EqualityError),
    #[error(transparent)]
    Debounce(#[from] DebounceError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Debounce simulation would wait longer than `MAX_SIMULATED_SPAN_MS`
    #[error("Debounce simulation {what} of {requested_ms}ms exceeds the {max_ms}ms limit")]
    SimulationTooLong {
        what: &'static str,
        requested_ms: u64,
        max_ms: u64,
    },
    /// Writing output or building the runtime failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Vocabulary lookup and small text/number drills
#[derive(Parser, Debug)]
#[command(name = "wordkit", version, about)]
pub struct Cli {
    /// Settings file (defaults to $WORDKIT_SETTINGS, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// One simulated debounced call that actually ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredCall {
    /// 1-based position of the call in the simulated sequence
    pub call: usize,
    /// Offset at which that call was made
    pub offset_ms: u64,
    /// Measured time from start until the callback ran
    pub fired_after: Duration,
}

impl Cli {
    /// Run the parsed command, writing results to `out`
    pub fn execute<W: Write>(&self, settings: &Settings, out: &mut W) -> Result<(), CliError> {
        crate::debug!("Executing {:?}", self.command);

        match &self.command {
            Commands::Define { word } => {
                let entry = dictionary::lookup_entry(word)?;
                writeln!(out, "{}: {}", entry.word, entry.definition)?;
            }
            Commands::Words => {
                for entry in dictionary::entries() {
                    writeln!(out, "{}: {}", entry.word, entry.definition)?;
                }
            }
            Commands::Fizzbuzz { n, style, json } => {
                let style = style.unwrap_or(settings.fizzbuzz_style);
                let items = sequence::fizz_buzz(*n, style);
                if *json {
                    let rendered = serde_json::to_string(&items)
                        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                    writeln!(out, "{}", rendered)?;
                } else {
                    for item in &items {
                        writeln!(out, "{}", item)?;
                    }
                }
            }
            Commands::Double { values } => {
                let doubled = sequence::double_all(values)?;
                writeln!(out, "{}", join(&doubled))?;
            }
            Commands::CountUp { n } => {
                writeln!(out, "{}", join(&sequence::count_up(*n)))?;
            }
            Commands::Reverse { text } => {
                writeln!(out, "{}", text::reverse_string(text))?;
            }
            Commands::ReverseWords { text } => {
                writeln!(out, "{}", text::reverse_each_word(text))?;
            }
            Commands::Palindrome { text } => {
                writeln!(out, "{}", text::is_palindrome(text))?;
            }
            Commands::Letters { text } => {
                let counts = text::count_letters(text);
                writeln!(out, "Vowels: {}", counts.vowels)?;
                writeln!(out, "Consonants: {}", counts.consonants)?;
            }
            Commands::Anagram { first, second } => {
                writeln!(out, "{}", text::is_anagram(first, second))?;
            }
            Commands::Unique { text } => {
                let unique: String = text::non_repeating_chars(text).into_iter().collect();
                writeln!(out, "{}", unique)?;
            }
            Commands::Spread { text } => {
                writeln!(out, "{:?}", text::spread_chars(text))?;
            }
            Commands::Equality { left, right } => {
                let left = ScriptValue::parse_literal(left)?;
                let right = ScriptValue::parse_literal(right)?;
                write_equality(out, &left, &right)?;
            }
            Commands::Concat { values } => {
                let values = values
                    .iter()
                    .map(|v| ScriptValue::parse_literal(v))
                    .collect::<Result<Vec<_>, _>>()?;
                if let Some(result) = equality::plus_all(&values) {
                    writeln!(out, "{}", result)?;
                }
            }
            Commands::FloatSum { a, b, expected } => {
                writeln!(
                    out,
                    "{} + {} === {}: {}",
                    a,
                    b,
                    expected,
                    equality::float_sum_equals(*a, *b, *expected)
                )?;
                writeln!(
                    out,
                    "within epsilon: {}",
                    equality::float_sum_nearly_equals(*a, *b, *expected)
                )?;
            }
            Commands::Settle { fail } => {
                let result = run_async(outcome::settle(!fail))?;
                let line = outcome::report(&result);
                match result {
                    Ok(_) => writeln!(out, "resolved: {}", line)?,
                    Err(_) => writeln!(out, "rejected: {}", line)?,
                }
            }
            Commands::Debounce { delay, offsets } => {
                let delay_ms = delay.unwrap_or(settings.debounce_delay_ms);
                let fired = simulate_debounce(delay_ms, offsets)?;
                writeln!(
                    out,
                    "{} of {} calls executed (delay {}ms)",
                    fired.len(),
                    offsets.len(),
                    delay_ms
                )?;
                for call in fired {
                    writeln!(
                        out,
                        "call #{} (made at {}ms) fired at {}ms",
                        call.call,
                        call.offset_ms,
                        call.fired_after.as_millis()
                    )?;
                }
            }
            Commands::Demo => run_demo(out)?,
        }

        Ok(())
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_equality<W: Write>(
    out: &mut W,
    left: &ScriptValue,
    right: &ScriptValue,
) -> Result<(), CliError> {
    writeln!(
        out,
        "{} ({}) === {} ({}): {}",
        left,
        left.kind(),
        right,
        right.kind(),
        equality::strict_equals(left, right)
    )?;
    writeln!(
        out,
        "{} ({}) == {} ({}): {}",
        left,
        left.kind(),
        right,
        right.kind(),
        equality::loose_equals(left, right)
    )?;
    Ok(())
}

/// Make debounced calls at the given offsets (sorted) and collect the calls
/// that actually ran, waiting one delay past the last call
///
/// Delays and offsets above `MAX_SIMULATED_SPAN_MS` are rejected.
pub fn simulate_debounce(delay_ms: u64, offsets: &[u64]) -> Result<Vec<FiredCall>, CliError> {
    let mut offsets = offsets.to_vec();
    offsets.sort_unstable();

    check_span("delay", delay_ms)?;
    if let Some(&last) = offsets.last() {
        check_span("offset", last)?;
    }

    let outcome = run_async(async move {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let start = tokio::time::Instant::now();

        let recorder = fired.clone();
        let debouncer = Debouncer::from_millis(delay_ms, move |(call, offset_ms): (usize, u64)| {
            recorder.lock().push(FiredCall {
                call,
                offset_ms,
                fired_after: start.elapsed(),
            });
        });

        for (index, offset_ms) in offsets.iter().copied().enumerate() {
            tokio::time::sleep_until(start + Duration::from_millis(offset_ms)).await;
            debouncer.call((index + 1, offset_ms))?;
        }

        let settle_ms = delay_ms.saturating_add(DEBOUNCE_SETTLE_MARGIN_MS);
        tokio::time::sleep(Duration::from_millis(settle_ms)).await;
        let calls = fired.lock().clone();
        Ok::<_, DebounceError>(calls)
    })??;

    Ok(outcome)
}

fn check_span(what: &'static str, requested_ms: u64) -> Result<(), CliError> {
    if requested_ms > MAX_SIMULATED_SPAN_MS {
        return Err(CliError::SimulationTooLong {
            what,
            requested_ms,
            max_ms: MAX_SIMULATED_SPAN_MS,
        });
    }
    Ok(())
}

/// Run each drill once with the sample inputs
fn run_demo<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "doubled: [{}]", join(&sequence::double_all(&[1, 2, 3])?))?;
    writeln!(out, "numbers: [{}]", join(&sequence::count_up(10)))?;

    let mut accumulator = FizzBuzzAccumulator::new();
    accumulator.extend(15);
    writeln!(out, "fizbuzz: [{}]", join(accumulator.items()))?;
    writeln!(
        out,
        "fizzBuzz: [{}]",
        join(&sequence::fizz_buzz(15, LabelStyle::Classic))
    )?;

    writeln!(
        out,
        "isPalindrome({:?}): {}",
        DEMO_SENTENCE,
        text::is_palindrome(DEMO_SENTENCE)
    )?;

    let settled = run_async(outcome::settle(true))?;
    writeln!(out, "promise: {}", outcome::report(&settled))?;

    writeln!(out, "spread: {:?}", text::spread_chars("frontend"))?;
    writeln!(
        out,
        "split: {:?}",
        DEMO_SENTENCE.split(' ').collect::<Vec<_>>()
    )?;
    writeln!(
        out,
        "reverseStringWord: {}",
        text::reverse_each_word(DEMO_SENTENCE)
    )?;

    let arrays = [
        ScriptValue::Array(vec![ScriptValue::Number(1.0), ScriptValue::Number(21.0)]),
        ScriptValue::Array(vec![ScriptValue::Number(3.0), ScriptValue::Number(4.0)]),
        ScriptValue::Array(vec![ScriptValue::Number(3.0), ScriptValue::Number(5.0)]),
    ];
    if let Some(concatenated) = equality::plus_all(&arrays) {
        writeln!(out, "[1,21] + [3,4] + [3,5]: {}", concatenated)?;
    }
    writeln!(
        out,
        "0.1 + 0.2 === 0.3: {}",
        equality::float_sum_equals(0.1, 0.2, 0.3)
    )?;

    write_equality(
        out,
        &ScriptValue::Str("1".to_string()),
        &ScriptValue::Number(1.0),
    )?;

    let counts = text::count_letters(DEMO_SENTENCE);
    writeln!(out, "Vowels: {}", counts.vowels)?;
    writeln!(out, "Consonants: {}", counts.consonants)?;

    writeln!(out, "anagram(koko, koko): {}", text::is_anagram("koko", "koko"))?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
