//! Rendering of payload values for filter comparison
//!
//! Filters arrive as plain strings, so every JSON value needs a single
//! textual form to compare against:
//!
//! - strings compare as-is
//! - numbers use the shortest round-trip decimal, never an exponent and
//!   never a forced fraction (`100`, not `100.0` or `1e2`)
//! - booleans are `true` / `false`
//! - null, objects and arrays fall back to compact JSON text

use std::borrow::Cow;

use serde_json::{Number, Value};

/// Render a payload value the way a filter value would spell it
pub fn filter_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(number_string(n)),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Null | Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

fn number_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display is shortest round-trip and positional
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_are_verbatim() {
        assert_eq!(filter_string(&json!("active")), "active");
        assert_eq!(filter_string(&json!("")), "");
        assert_eq!(filter_string(&json!("100.0")), "100.0");
    }

    #[test]
    fn test_integers() {
        assert_eq!(filter_string(&json!(100)), "100");
        assert_eq!(filter_string(&json!(-42)), "-42");
        assert_eq!(filter_string(&json!(0)), "0");
        assert_eq!(filter_string(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_floats_drop_trailing_zeros() {
        let whole: Value = serde_json::from_str("100.0").unwrap();
        assert_eq!(filter_string(&whole), "100");

        let padded: Value = serde_json::from_str("100.00").unwrap();
        assert_eq!(filter_string(&padded), "100");

        assert_eq!(filter_string(&json!(2.5)), "2.5");
        assert_eq!(filter_string(&json!(0.1)), "0.1");
    }

    #[test]
    fn test_floats_never_use_exponent() {
        let big: Value = serde_json::from_str("1e2").unwrap();
        assert_eq!(filter_string(&big), "100");

        let small: Value = serde_json::from_str("1e-7").unwrap();
        assert_eq!(filter_string(&small), "0.0000001");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(filter_string(&json!(true)), "true");
        assert_eq!(filter_string(&json!(false)), "false");
    }

    #[test]
    fn test_fallback_for_structured_values() {
        assert_eq!(filter_string(&Value::Null), "null");
        assert_eq!(filter_string(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(filter_string(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
