// Strict and loose equality, string-coercing addition, float sum comparison

use super::ScriptValue;

/// Same type and same value
///
/// NaN never equals itself. Arrays compare by identity, which plain values
/// cannot share, so two arrays are never strictly equal.
pub fn strict_equals(a: &ScriptValue, b: &ScriptValue) -> bool {
    match (a, b) {
        (ScriptValue::Undefined, ScriptValue::Undefined) => true,
        (ScriptValue::Null, ScriptValue::Null) => true,
        (ScriptValue::Bool(x), ScriptValue::Bool(y)) => x == y,
        (ScriptValue::Number(x), ScriptValue::Number(y)) => x == y,
        (ScriptValue::Str(x), ScriptValue::Str(y)) => x == y,
        _ => false,
    }
}

/// Equality after type coercion
///
/// - same type: strict equality
/// - null and undefined equal each other and nothing else
/// - booleans convert to numbers first
/// - number vs string compares numerically
/// - an array against a primitive is reduced to its string form
pub fn loose_equals(a: &ScriptValue, b: &ScriptValue) -> bool {
    use ScriptValue::*;

    if std::mem::discriminant(a) == std::mem::discriminant(b) {
        return strict_equals(a, b);
    }

    match (a, b) {
        (x, y) if x.is_nullish() || y.is_nullish() => x.is_nullish() && y.is_nullish(),
        (Bool(_), other) => loose_equals(&Number(a.to_number()), other),
        (other, Bool(_)) => loose_equals(other, &Number(b.to_number())),
        (Number(x), Str(_)) => *x == b.to_number(),
        (Str(_), Number(y)) => a.to_number() == *y,
        (Array(_), Number(_) | Str(_)) => loose_equals(&a.to_primitive(), b),
        (Number(_) | Str(_), Array(_)) => loose_equals(a, &b.to_primitive()),
        _ => false,
    }
}

/// The `+` operator: concatenates if either side is a string after
/// reducing arrays to strings, otherwise adds numerically
pub fn plus(a: &ScriptValue, b: &ScriptValue) -> ScriptValue {
    let left = a.to_primitive();
    let right = b.to_primitive();

    match (&left, &right) {
        (ScriptValue::Str(_), _) | (_, ScriptValue::Str(_)) => ScriptValue::Str(format!(
            "{}{}",
            left.to_display_string(),
            right.to_display_string()
        )),
        _ => ScriptValue::Number(left.to_number() + right.to_number()),
    }
}

/// Left-to-right `+` over all values; None when there are none
pub fn plus_all(values: &[ScriptValue]) -> Option<ScriptValue> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(first.clone(), |acc, value| plus(&acc, value)))
}

/// Exact comparison of `a + b` against `expected`
pub fn float_sum_equals(a: f64, b: f64, expected: f64) -> bool {
    a + b == expected
}

/// Comparison of `a + b` against `expected` within a relative epsilon
pub fn float_sum_nearly_equals(a: f64, b: f64, expected: f64) -> bool {
    let tolerance = f64::EPSILON * expected.abs().max(1.0);
    ((a + b) - expected).abs() <= tolerance
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
