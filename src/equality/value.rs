// ScriptValue - dynamic values and their string/number coercions

use std::fmt;

/// Error types for building values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EqualityError {
    /// JSON objects have no counterpart in the value model
    #[error("Objects are not supported: {0}")]
    UnsupportedObject(String),
}

/// A dynamically typed value
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<ScriptValue>),
}

impl ScriptValue {
    /// Parse a command-line literal
    ///
    /// `undefined` is the undefined value, anything that parses as JSON
    /// (except objects) becomes the matching value, and any other text is
    /// taken as a plain string.
    pub fn parse_literal(input: &str) -> Result<Self, EqualityError> {
        let trimmed = input.trim();
        if trimmed == "undefined" {
            return Ok(ScriptValue::Undefined);
        }
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(json) => Self::try_from(json),
            Err(_) => Ok(ScriptValue::Str(input.to_string())),
        }
    }

    /// Name of the value's type
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptValue::Undefined => "undefined",
            ScriptValue::Null => "null",
            ScriptValue::Bool(_) => "boolean",
            ScriptValue::Number(_) => "number",
            ScriptValue::Str(_) => "string",
            ScriptValue::Array(_) => "array",
        }
    }

    /// True for undefined and null
    pub fn is_nullish(&self) -> bool {
        matches!(self, ScriptValue::Undefined | ScriptValue::Null)
    }

    /// Reduce to a primitive: arrays become their string form
    pub fn to_primitive(&self) -> ScriptValue {
        match self {
            ScriptValue::Array(_) => ScriptValue::Str(self.to_display_string()),
            other => other.clone(),
        }
    }

    /// String coercion, as used by `+` and by array joining
    pub fn to_display_string(&self) -> String {
        match self {
            ScriptValue::Undefined => "undefined".to_string(),
            ScriptValue::Null => "null".to_string(),
            ScriptValue::Bool(b) => b.to_string(),
            ScriptValue::Number(n) => format_number(*n),
            ScriptValue::Str(s) => s.clone(),
            ScriptValue::Array(items) => items
                .iter()
                .map(|item| {
                    // Holes, null and undefined join as empty strings
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_display_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Number coercion
    pub fn to_number(&self) -> f64 {
        match self {
            ScriptValue::Undefined => f64::NAN,
            ScriptValue::Null => 0.0,
            ScriptValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            ScriptValue::Number(n) => *n,
            ScriptValue::Str(s) => parse_number(s),
            ScriptValue::Array(_) => parse_number(&self.to_display_string()),
        }
    }
}

impl TryFrom<serde_json::Value> for ScriptValue {
    type Error = EqualityError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        Ok(match value {
            Value::Null => ScriptValue::Null,
            Value::Bool(b) => ScriptValue::Bool(b),
            Value::Number(n) => ScriptValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => ScriptValue::Str(s),
            Value::Array(items) => ScriptValue::Array(
                items
                    .into_iter()
                    .map(ScriptValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => {
                return Err(EqualityError::UnsupportedObject(
                    Value::Object(map).to_string(),
                ))
            }
        })
    }
}

/// Literal rendering: strings quoted, arrays bracketed
impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Str(s) => write!(f, "{:?}", s),
            ScriptValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            other => f.write_str(&other.to_display_string()),
        }
    }
}

/// Format a number the way string coercion does: no trailing `.0`,
/// exponent form outside 1e-6..1e21
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let label = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return label.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", n)
}

/// Parse a string as a number; blank is 0, anything malformed is NaN
fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&trimmed[2..], radix);
    }

    // Reject spellings like "inf" or "nan" that the float parser would accept
    let decimal_only = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_only {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Fold prefixed-literal digits into an f64 so values past u64 keep
/// their magnitude instead of turning into NaN
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
