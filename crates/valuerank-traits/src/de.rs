//! Lenient field decoders for provider and snapshot JSON.
//!
//! Quote payloads put `{}`, `{"raw": .., "fmt": ..}`, `null` or strings where
//! a number belongs. A field that cannot be read becomes `None` instead of
//! failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a finite number from a bare number, a numeric string, or a
/// `{"raw": ..}` wrapper.
#[must_use]
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Object(map) => map.get("raw").and_then(number),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

/// Deserializes an optional `f64`, mapping anything unusable to `None`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

/// Deserializes epoch seconds given as an integer or a float.
pub fn lenient_epoch<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(epoch))
}

/// Reads epoch seconds, truncating fractional values.
#[must_use]
pub fn epoch(value: &Value) -> Option<i64> {
    if let Some(secs) = value.as_i64() {
        return Some(secs);
    }
    number(value)
        .filter(|secs| (i64::MIN as f64..=i64::MAX as f64).contains(secs))
        .map(|secs| secs as i64)
}

/// Deserializes an optional string; non-string values become `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Deserializes a symbol; a missing or non-string value becomes blank.
pub fn lenient_symbol<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_shapes() {
        assert_eq!(number(&json!(1.5)), Some(1.5));
        assert_eq!(number(&json!(3)), Some(3.0));
        assert_eq!(number(&json!({"raw": 0.25, "fmt": "25%"})), Some(0.25));
        assert_eq!(number(&json!(" 2.0 ")), Some(2.0));
        assert_eq!(number(&json!({})), None);
        assert_eq!(number(&json!("Infinity")), None);
        assert_eq!(number(&json!("NaN")), None);
        assert_eq!(number(&json!("n/a")), None);
        assert_eq!(number(&json!(true)), None);
        assert_eq!(number(&Value::Null), None);
    }

    #[test]
    fn test_epoch_shapes() {
        assert_eq!(epoch(&json!(1_714_003_200)), Some(1_714_003_200));
        assert_eq!(epoch(&json!(1_714_003_200.0)), Some(1_714_003_200));
        assert_eq!(epoch(&json!({"raw": 1_714_003_200})), Some(1_714_003_200));
        assert_eq!(epoch(&json!(1e300)), None);
        assert_eq!(epoch(&json!("soon")), None);
    }
}
