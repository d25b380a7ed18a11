//! Predicates used by [`FieldChain`](super::FieldChain) checks.
//!
//! Every predicate receives the raw JSON value of the field, or `None` when
//! the field is absent. Path parameters arrive as JSON strings.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Optional sign, digits, optional fraction.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").unwrap());

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// Present and not blank once rendered as text.
///
/// `null`, `""` and `[]` count as empty; numbers and booleans never do.
pub fn not_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

pub fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    value.and_then(as_f64).is_some()
}

/// A JSON integer or a string of digits, whatever its magnitude.
pub fn is_int(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.is_i64() || n.is_u64(),
        Some(Value::String(s)) => INTEGER.is_match(s),
        _ => false,
    }
}

pub fn is_positive(value: Option<&Value>) -> bool {
    value.and_then(as_f64).is_some_and(|n| n > 0.0)
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    value.and_then(as_bool).is_some()
}

/// A JSON number, or a string matching the numeric pattern, that is finite
/// as an `f64`.
pub fn as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC.is_match(s) => s.parse().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// A JSON integer, or a string of digits with an optional sign.
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if INTEGER.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

/// `true`/`false`, `"true"`/`"false"`, `"1"`/`"0"` and `1`/`0`.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_empty() {
        assert!(!not_empty(None));
        assert!(!not_empty(Some(&json!(null))));
        assert!(!not_empty(Some(&json!(""))));
        assert!(!not_empty(Some(&json!([]))));
        assert!(not_empty(Some(&json!(" "))));
        assert!(not_empty(Some(&json!(0))));
        assert!(not_empty(Some(&json!(false))));
    }

    #[test]
    fn test_numeric_accepts_numbers_and_numeric_strings() {
        for ok in [json!(500), json!(-2.5), json!("500"), json!("+1.25"), json!(".5")] {
            assert!(is_numeric(Some(&ok)), "{ok} should be numeric");
        }
        for bad in [json!("abc"), json!("1e5"), json!("5."), json!(""), json!(true), json!(null)] {
            assert!(!is_numeric(Some(&bad)), "{bad} should not be numeric");
        }
    }

    #[test]
    fn test_positive() {
        assert!(is_positive(Some(&json!("0.01"))));
        assert!(!is_positive(Some(&json!(0))));
        assert!(!is_positive(Some(&json!("-3"))));
        assert!(!is_positive(None));
    }

    #[test]
    fn test_int() {
        assert_eq!(as_i64(&json!("42")), Some(42));
        assert_eq!(as_i64(&json!("007")), Some(7));
        assert_eq!(as_i64(&json!("-1")), Some(-1));
        assert_eq!(as_i64(&json!("4.2")), None);
        assert_eq!(as_i64(&json!("not-valid-url")), None);
        assert!(!is_int(Some(&json!("4.2"))));
        assert!(!is_int(Some(&json!(4.2))));
    }

    #[test]
    fn test_int_has_no_magnitude_limit() {
        let huge = json!("99999999999999999999");

        assert!(is_int(Some(&huge)));
        assert!(is_positive(Some(&huge)));
        assert_eq!(as_i64(&huge), None);
        assert!(is_int(Some(&json!(u64::MAX))));
    }

    #[test]
    fn test_overflowing_numeric_string_is_not_numeric() {
        let huge = json!("9".repeat(400));

        assert_eq!(as_f64(&huge), None);
        assert!(!is_numeric(Some(&huge)));
        assert!(!is_positive(Some(&huge)));
        assert!(is_numeric(Some(&json!("9".repeat(300)))));
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(as_bool(&json!(true)), Some(true));
        assert_eq!(as_bool(&json!("false")), Some(false));
        assert_eq!(as_bool(&json!("1")), Some(true));
        assert_eq!(as_bool(&json!(0)), Some(false));
        assert_eq!(as_bool(&json!("yes")), None);
        assert_eq!(as_bool(&json!(2)), None);
        assert!(!is_boolean(Some(&json!(null))));
    }
}
