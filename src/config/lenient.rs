//! Field deserializers that never fail the document.
//!
//! A configuration produced by a form UI routinely carries `null`, empty
//! strings, or numbers typed as text. Those fields become `None` and the
//! item accessor substitutes the default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional field, mapping `null` and wrong-typed values to
/// `None`. Numeric strings such as `"2.5"` are accepted for number fields.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value_lenient(value))
}

/// Same rules as [`lenient`], applied to an already parsed value.
pub fn from_value_lenient<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            let retry = match &value {
                Value::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number),
                _ => None,
            };
            let parsed = retry.and_then(|v| serde_json::from_value::<T>(v).ok());
            if parsed.is_none() {
                tracing::debug!(%err, %value, "ignoring malformed field, default applies");
            }
            parsed
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Item {
        #[serde(default, deserialize_with = "lenient")]
        radius: Option<f64>,
        #[serde(default, deserialize_with = "lenient")]
        hidden: Option<bool>,
    }

    fn parse(json: &str) -> Item {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn null_and_missing_are_none() {
        assert_eq!(parse(r#"{"radius": null}"#).radius, None);
        assert_eq!(parse("{}").radius, None);
    }

    #[test]
    fn wrong_types_are_none() {
        let item = parse(r#"{"radius": [1, 2], "hidden": "nope"}"#);
        assert_eq!(item.radius, None);
        assert_eq!(item.hidden, None);
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(parse(r#"{"radius": " 2.5"}"#).radius, Some(2.5));
        assert_eq!(parse(r#"{"radius": 3}"#).radius, Some(3.0));
    }
}
