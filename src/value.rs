//! Value types for line protocol fields.

use ordered_float::OrderedFloat;
use serde::Serialize;

/// Represents a typed field value in a line protocol point.
///
/// This enum covers the four data types the line protocol can express in a
/// field: strings, floats, booleans and integers. There is no null variant;
/// casting always produces one of these four or fails.
///
/// Serializes untagged, i.e. as the bare scalar (`Value::Integer(2)` becomes
/// JSON `2`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// String value, unquoted and unescaped.
    String(String),

    /// 64-bit floating point value.
    Float(OrderedFloat<f64>),

    /// Boolean value.
    Bool(bool),

    /// Signed 64-bit integer (the `i`-suffixed literal form).
    Integer(i64),
}

impl Value {
    /// Returns the value as a string reference if it is a `String` variant.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an owned string if it is a `String` variant.
    pub fn string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Returns the value as a f64 if it is a `Float` variant.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(f.into_inner()),
            _ => None,
        }
    }

    /// Returns the value as a bool if it is a `Bool` variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an i64 if it is an `Integer` variant.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(OrderedFloat(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Value accessor tests
    // =========================================================================

    #[test]
    fn test_as_string() {
        let v = Value::String("hello".to_string());
        assert_eq!(v.as_string(), Some("hello"));

        // Wrong type returns None
        assert_eq!(Value::Integer(42).as_string(), None);
        assert_eq!(Value::Bool(true).as_string(), None);
    }

    #[test]
    fn test_string() {
        let v = Value::String("hello".to_string());
        assert_eq!(v.string(), Some("hello".to_string()));

        assert_eq!(Value::Integer(42).string(), None);
    }

    #[test]
    fn test_as_float() {
        let v = Value::Float(OrderedFloat(2.72));
        assert_eq!(v.as_float(), Some(2.72));

        // Wrong type returns None
        assert_eq!(Value::Integer(42).as_float(), None);
        assert_eq!(Value::String("2.72".to_string()).as_float(), None);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));

        // Wrong type returns None
        assert_eq!(Value::Integer(1).as_bool(), None);
        assert_eq!(Value::String("true".to_string()).as_bool(), None);
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(Value::Integer(42).as_integer(), Some(42));
        assert_eq!(Value::Integer(-100).as_integer(), Some(-100));
        assert_eq!(Value::Integer(i64::MAX).as_integer(), Some(i64::MAX));

        // Wrong type returns None
        assert_eq!(Value::Float(OrderedFloat(42.0)).as_integer(), None);
    }

    // =========================================================================
    // Value Display tests
    // =========================================================================

    #[test]
    fn test_display_string() {
        let v = Value::String("hello world".to_string());
        assert_eq!(v.to_string(), "hello world");
    }

    #[test]
    fn test_display_float() {
        let v = Value::Float(OrderedFloat(1.23456));
        assert!(v.to_string().starts_with("1.23"));
    }

    #[test]
    fn test_display_bool() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_display_integer() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Integer(-100).to_string(), "-100");
    }

    // =========================================================================
    // Value equality tests
    // =========================================================================

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::String("a".to_string()), Value::String("a".to_string()));
        assert_ne!(Value::String("a".to_string()), Value::String("b".to_string()));

        assert_eq!(Value::Integer(42), Value::Integer(42));
        assert_ne!(Value::Integer(42), Value::Integer(43));

        // Different types are not equal
        assert_ne!(Value::Integer(2), Value::Float(OrderedFloat(2.0)));
        assert_ne!(Value::String("42".to_string()), Value::Integer(42));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(2.0), Value::Float(OrderedFloat(2.0)));
        assert_eq!(Value::from(2i64), Value::Integer(2));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::json!(Value::Integer(2)), serde_json::json!(2));
        assert_eq!(serde_json::json!(Value::Bool(true)), serde_json::json!(true));
        assert_eq!(
            serde_json::json!(Value::String("x".to_string())),
            serde_json::json!("x")
        );
    }
}
