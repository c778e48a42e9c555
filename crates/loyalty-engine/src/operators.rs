//! Operator semantics
//!
//! Pure comparison of a fact value against a condition value. Unlike most
//! of the workspace's error handling, nothing here returns `Result`: rule
//! data may be hand-edited or stale, so every malformed combination fails
//! closed to `false` instead of erroring. A bad rule degrades to "no
//! match", never a crashed run.

use loyalty_core::{Operator, Value};

/// Compare a fact value against a condition value
///
/// `left` is the concrete fact value, `right` the literal from the
/// condition. Equality is strict and type-sensitive; ordering operators
/// require both operands to be numbers; membership operators require an
/// array on the right. NaN never satisfies any numeric operator,
/// `notEqual` included.
pub fn compare(left: &Value, op: Operator, right: &Value) -> bool {
    match op {
        Operator::Equal => left == right,
        Operator::NotEqual => not_equal(left, right),

        Operator::GreaterThan => ordering(left, right, |l, r| l > r),
        Operator::GreaterThanInclusive => ordering(left, right, |l, r| l >= r),
        Operator::LessThan => ordering(left, right, |l, r| l < r),
        Operator::LessThanInclusive => ordering(left, right, |l, r| l <= r),

        Operator::In => in_array(left, right),
        Operator::NotIn => match right {
            // Negation of `in`, but a malformed (non-array) value still
            // fails closed rather than inverting into a match.
            Value::Array(_) => !in_array(left, right),
            _ => false,
        },

        Operator::Contains => contains(left, right),
        Operator::DoesNotContain => match left {
            Value::Null => false,
            _ => !contains(left, right),
        },

        Operator::Unknown => false,
    }
}

fn not_equal(left: &Value, right: &Value) -> bool {
    if let (Value::Number(l), Value::Number(r)) = (left, right) {
        // IEEE would make NaN != NaN true; a NaN fact must never match.
        if l.is_nan() || r.is_nan() {
            return false;
        }
    }
    left != right
}

fn ordering(left: &Value, right: &Value, cmp: fn(f64, f64) -> bool) -> bool {
    match (left.as_number(), right.as_number()) {
        (Some(l), Some(r)) => cmp(l, r),
        _ => false,
    }
}

fn in_array(left: &Value, right: &Value) -> bool {
    match right {
        Value::Array(items) => items.iter().any(|item| item == left),
        _ => false,
    }
}

fn contains(left: &Value, right: &Value) -> bool {
    match left {
        // An array fact contains the condition value as an element
        Value::Array(items) => items.iter().any(|item| item == right),
        // A scalar fact is treated as a single-element collection
        other => other == right,
    }
}
