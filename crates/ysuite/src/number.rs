use crate::value::Number;

/// Format an f64 for diagnostic dumps.
/// - finite values use the shortest round-trip form (`1.0`, `0.5`, `1e100`)
/// - non-finite values use YAML spelling: `.nan`, `.inf`, `-.inf`
pub(crate) fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return String::from(".nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { ".inf" } else { "-.inf" });
    }
    let mut buf = ryu::Buffer::new();
    String::from(buf.format_finite(value))
}

/// Numeric equality across representations.
///
/// Integers and floats are equal when they denote the same number, so
/// `1` and `1.0` compare equal. The comparison is exact: large integers are
/// never rounded through f64. NaN equals NaN, so every value equals itself,
/// but NaN never equals an integer.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (a, b) {
        (Number::F64(x), Number::F64(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Number::F64(f), other) | (other, Number::F64(f)) => float_equals_int(*f, as_i128(other)),
        (x, y) => as_i128(x) == as_i128(y),
    }
}

fn as_i128(n: &Number) -> i128 {
    match n {
        Number::I64(i) => i128::from(*i),
        Number::U64(u) => i128::from(*u),
        // Callers only pass integer variants; floats are handled before this.
        Number::F64(f) => *f as i128,
    }
}

fn float_equals_int(f: f64, i: i128) -> bool {
    // 2^64: no i64 or u64 reaches this magnitude.
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    if !f.is_finite() || f.trunc() != f || f.abs() >= LIMIT {
        return false;
    }
    f as i128 == i
}
