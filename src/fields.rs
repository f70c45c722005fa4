//! Contact field values and the validation rule applied before mutations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Custom contact fields, keyed by field name.
///
/// Values are dynamically typed JSON; [`validate_fields`] restricts them to
/// the types the service accepts before any request is sent.
pub type ContactFields = Map<String, Value>;

/// The value types the service accepts for custom contact fields.
///
/// Timestamps travel as RFC 3339 strings on the wire, so a string field that
/// parses as RFC 3339 classifies as [`FieldValue::Timestamp`] and anything
/// else as [`FieldValue::String`]; either is accepted. Floats, nulls, arrays,
/// and objects are rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Classify a JSON value, returning `None` when its type is outside the
    /// accepted set.
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(match DateTime::parse_from_rfc3339(s) {
                Ok(ts) => FieldValue::Timestamp(ts.with_timezone(&Utc)),
                Err(_) => FieldValue::String(s.clone()),
            }),
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Number(n) => n.as_i64().map(FieldValue::Integer),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => Value::String(s),
            FieldValue::Boolean(b) => Value::Bool(b),
            FieldValue::Integer(i) => Value::Number(i.into()),
            FieldValue::Timestamp(ts) => Value::String(ts.to_rfc3339()),
        }
    }
}

/// Name of a JSON value's type, for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Copy `fields`, dropping the reserved `email` key and rejecting any value
/// whose type the service does not accept.
///
/// Fails on the first disallowed value with an error naming the field and
/// its actual type; no partial map is returned. The output never contains
/// `email`, so callers can insert it afterwards without collision.
pub fn validate_fields(fields: &ContactFields) -> Result<ContactFields> {
    let mut sanitized = Map::with_capacity(fields.len());
    for (name, value) in fields {
        // email is always supplied as a separate argument, never via fields.
        if name == "email" {
            continue;
        }
        if FieldValue::from_json(value).is_none() {
            return Err(Error::InvalidFieldType {
                field: name.clone(),
                actual: json_type_name(value),
            });
        }
        sanitized.insert(name.clone(), value.clone());
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> ContactFields {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn email_key_is_always_dropped() {
        let input = fields(json!({"email": "a@b.com", "firstName": "Ada"}));
        let out = validate_fields(&input).unwrap();
        assert!(!out.contains_key("email"));
        assert_eq!(out.get("firstName"), Some(&json!("Ada")));
    }

    #[test]
    fn email_key_is_dropped_even_with_disallowed_value() {
        // email is stripped before type checking, so its value never matters.
        let input = fields(json!({"email": ["not", "a", "string"]}));
        let out = validate_fields(&input).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn valid_fields_pass_through_unchanged() {
        let input = fields(json!({
            "firstName": "Ada",
            "subscribed": true,
            "loginCount": 42,
            "joinedAt": "2024-03-01T12:00:00Z",
        }));
        let out = validate_fields(&input).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn float_value_is_rejected_naming_the_field() {
        let input = fields(json!({"score": 1.5}));
        let err = validate_fields(&input).unwrap_err();
        assert!(matches!(
            &err,
            Error::InvalidFieldType { field, actual } if field == "score" && *actual == "float"
        ));
        assert!(err.to_string().contains("score"));
    }

    #[test]
    fn null_array_and_object_values_are_rejected() {
        for (value, actual) in [
            (json!(null), "null"),
            (json!([1, 2]), "array"),
            (json!({"nested": true}), "object"),
        ] {
            let input = fields(json!({"bad": value}));
            let err = validate_fields(&input).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidFieldType { ref field, actual: got } if field == "bad" && got == actual
            ));
        }
    }

    #[test]
    fn no_partial_map_on_failure() {
        let input = fields(json!({"aGood": "x", "zBad": 1.5}));
        assert!(validate_fields(&input).is_err());
    }

    #[test]
    fn timestamp_string_classifies_as_timestamp() {
        let value = json!("2024-03-01T12:00:00+02:00");
        assert!(matches!(
            FieldValue::from_json(&value),
            Some(FieldValue::Timestamp(_))
        ));
    }

    #[test]
    fn field_value_conversions_serialize_to_wire_forms() {
        assert_eq!(Value::from(FieldValue::from("x")), json!("x"));
        assert_eq!(Value::from(FieldValue::from(true)), json!(true));
        assert_eq!(Value::from(FieldValue::from(7)), json!(7));

        let ts: DateTime<Utc> = "2024-03-01T12:00:00Z".parse().unwrap();
        assert_eq!(
            Value::from(FieldValue::from(ts)),
            json!("2024-03-01T12:00:00+00:00")
        );
    }
}
