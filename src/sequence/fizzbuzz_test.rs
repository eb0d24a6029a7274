// Tests for FizzBuzz generation
// Test cases:
// - Classic sequence for 15 matches the reference output
// - Length always equals n, including n = 0
// - Label rules hold for every position
// - Short labels and the accumulating variant

use super::*;
use FizzBuzzItem::{Label, Number};

#[test]
fn test_classic_fizz_buzz_fifteen() {
    let expected = vec![
        Number(1),
        Number(2),
        Label("Fizz"),
        Number(4),
        Label("Buzz"),
        Label("Fizz"),
        Number(7),
        Number(8),
        Label("Fizz"),
        Label("Buzz"),
        Number(11),
        Label("Fizz"),
        Number(13),
        Number(14),
        Label("FizzBuzz"),
    ];
    assert_eq!(fizz_buzz(15, LabelStyle::Classic), expected);
}

#[test]
fn test_length_matches_bound() {
    for n in [0u64, 1, 2, 3, 14, 15, 16, 100] {
        assert_eq!(fizz_buzz(n, LabelStyle::Classic).len() as u64, n);
    }
    assert!(fizz_buzz(0, LabelStyle::Short).is_empty());
}

#[test]
fn test_label_rules_hold_for_every_position() {
    let items = fizz_buzz(300, LabelStyle::Classic);
    for (index, item) in items.iter().enumerate() {
        let i = index as u64 + 1;
        let expected = match (i % 3, i % 5) {
            (0, 0) => Label("FizzBuzz"),
            (0, _) => Label("Fizz"),
            (_, 0) => Label("Buzz"),
            _ => Number(i),
        };
        assert_eq!(*item, expected, "position {}", i);
    }
}

#[test]
fn test_short_style_labels() {
    let items = fizz_buzz(15, LabelStyle::Short);
    assert_eq!(items[2], Label("fiz"));
    assert_eq!(items[4], Label("buzz"));
    assert_eq!(items[14], Label("fizbuzz"));
    assert_eq!(items[6], Number(7));
}

#[test]
fn test_display_and_json_rendering() {
    let items = fizz_buzz(5, LabelStyle::Classic);
    let rendered: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    assert_eq!(rendered, vec!["1", "2", "Fizz", "4", "Buzz"]);

    let json = serde_json::to_string(&items).unwrap();
    assert_eq!(json, r#"[1,2,"Fizz",4,"Buzz"]"#);
}

#[test]
fn test_label_style_deserializes_lowercase() {
    let style: LabelStyle = serde_json::from_str(r#""short""#).unwrap();
    assert_eq!(style, LabelStyle::Short);
    assert_eq!(LabelStyle::default(), LabelStyle::Classic);
}

#[test]
fn test_accumulator_grows_across_calls() {
    let mut acc = FizzBuzzAccumulator::new();
    assert!(acc.is_empty());

    let first = acc.extend(3).to_vec();
    assert_eq!(first, vec![Number(1), Number(2), Label("fiz")]);

    let second = acc.extend(5).to_vec();
    assert_eq!(second.len(), 5);
    assert_eq!(second[4], Label("buzz"));

    // Earlier output is kept, not replaced
    assert_eq!(acc.len(), 8);
    assert_eq!(acc.items()[..3], first[..]);
}

#[test]
fn test_accumulator_clear_and_into_items() {
    let mut acc = FizzBuzzAccumulator::with_style(LabelStyle::Classic);
    acc.extend(15);
    assert_eq!(acc.items().last(), Some(&Label("FizzBuzz")));

    acc.clear();
    assert!(acc.is_empty());

    acc.extend(1);
    assert_eq!(acc.into_items(), vec![Number(1)]);
}
