//! Equality and coercion demonstrations.
//!
//! A minimal dynamic value model (`ScriptValue`) and the comparisons built on it:
//! - `strict_equals`: same type and same value
//! - `loose_equals`: compares after type coercion (`"1"` equals `1`)
//! - `plus` / `plus_all`: `+` with string coercion (`[1, 21] + [3, 4]` is `"1,213,4"`)
//! - `float_sum_equals`: why `0.1 + 0.2` is not `0.3`

mod compare;
mod value;

pub use compare::{
    float_sum_equals, float_sum_nearly_equals, loose_equals, plus, plus_all, strict_equals,
};
pub use value::{EqualityError, ScriptValue};
