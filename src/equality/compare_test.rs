// Tests for equality and coercion
// Test cases:
// - "1" === 1 is false, "1" == 1 is true
// - null/undefined only loosely equal each other
// - [1, 21] + [3, 4] + [3, 5] is "1,213,43,5"
// - 0.1 + 0.2 is not exactly 0.3

use super::*;
use ScriptValue::*;

fn s(text: &str) -> ScriptValue {
    Str(text.to_string())
}

fn arr(values: &[f64]) -> ScriptValue {
    Array(values.iter().map(|v| Number(*v)).collect())
}

#[test]
fn test_string_one_vs_number_one() {
    assert!(!strict_equals(&s("1"), &Number(1.0)));
    assert!(loose_equals(&s("1"), &Number(1.0)));
    assert!(loose_equals(&Number(1.0), &s("1")));
}

#[test]
fn test_strict_equality_same_type() {
    assert!(strict_equals(&Number(1.0), &Number(1.0)));
    assert!(strict_equals(&Number(0.0), &Number(-0.0)));
    assert!(!strict_equals(&Number(f64::NAN), &Number(f64::NAN)));
    assert!(strict_equals(&s("a"), &s("a")));
    assert!(strict_equals(&Null, &Null));
    assert!(!strict_equals(&Null, &Undefined));
    assert!(!strict_equals(&arr(&[1.0]), &arr(&[1.0])));
}

#[test]
fn test_nullish_loose_equality() {
    assert!(loose_equals(&Null, &Undefined));
    assert!(loose_equals(&Undefined, &Null));
    assert!(!loose_equals(&Null, &Number(0.0)));
    assert!(!loose_equals(&Undefined, &s("")));
    assert!(!loose_equals(&Bool(false), &Null));
}

#[test]
fn test_boolean_loose_equality() {
    assert!(loose_equals(&Bool(true), &Number(1.0)));
    assert!(loose_equals(&Bool(false), &s("0")));
    assert!(loose_equals(&s(""), &Bool(false)));
    assert!(!loose_equals(&Bool(true), &s("true")));
}

#[test]
fn test_array_loose_equality() {
    assert!(loose_equals(&arr(&[1.0, 2.0]), &s("1,2")));
    assert!(loose_equals(&arr(&[7.0]), &Number(7.0)));
    assert!(loose_equals(&Array(vec![]), &Bool(false)));
    assert!(!loose_equals(&arr(&[1.0]), &arr(&[1.0])));
}

#[test]
fn test_nan_is_never_loosely_equal() {
    assert!(!loose_equals(&Number(f64::NAN), &Number(f64::NAN)));
    assert!(!loose_equals(&s("abc"), &Number(f64::NAN)));
}

#[test]
fn test_array_concatenation_coerces_to_string() {
    let result = plus_all(&[arr(&[1.0, 21.0]), arr(&[3.0, 4.0]), arr(&[3.0, 5.0])]);
    assert_eq!(result, Some(s("1,213,43,5")));
}

#[test]
fn test_plus_numeric_and_mixed() {
    assert_eq!(plus(&Number(1.0), &Number(2.0)), Number(3.0));
    assert_eq!(plus(&Number(1.0), &s("2")), s("12"));
    assert_eq!(plus(&Bool(true), &Number(1.0)), Number(2.0));
    assert_eq!(plus(&Null, &Number(5.0)), Number(5.0));
    assert_eq!(plus(&s("a"), &Undefined), s("aundefined"));
    assert_eq!(plus_all(&[]), None);
    assert_eq!(plus_all(&[Number(4.0)]), Some(Number(4.0)));
}

#[test]
fn test_float_sum_comparison() {
    assert!(!float_sum_equals(0.1, 0.2, 0.3));
    assert!(float_sum_nearly_equals(0.1, 0.2, 0.3));
    assert!(float_sum_equals(0.5, 0.25, 0.75));
    assert!(!float_sum_nearly_equals(0.1, 0.2, 0.31));
}
