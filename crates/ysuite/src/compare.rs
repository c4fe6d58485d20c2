//! Structural equality over [`Value`] trees.

use crate::number::numbers_equal;
use crate::value::Value;

/// Compare two values structurally.
///
/// Arrays are compared element-wise in order. Objects are equal when they
/// hold the same key set with equal values per key, regardless of order.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => documents_equal(x, y),
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, v)| {
                    y.iter()
                        .find(|(yk, _)| yk == k)
                        .is_some_and(|(_, yv)| values_equal(v, yv))
                })
        }
        _ => false,
    }
}

/// Compare two document sequences: same length, pairwise equal in order.
pub fn documents_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
}
