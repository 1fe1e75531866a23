//! Bind-argument values for raw ordering clauses.

use serde::{Deserialize, Serialize};

/// A positional bind argument carried by a raw clause.
///
/// The handle implementation decides placeholder syntax and binding; this
/// crate only transports the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// JSON value.
    Json(serde_json::Value),
}

impl BindValue {
    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<serde_json::Value> for BindValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_impls() {
        assert_eq!(BindValue::from(42i32), BindValue::Int(42));
        assert_eq!(BindValue::from(42i64), BindValue::Int(42));
        assert_eq!(BindValue::from(true), BindValue::Bool(true));
        assert_eq!(BindValue::from("abc"), BindValue::String("abc".into()));
        assert!(matches!(BindValue::from(1.5f64), BindValue::Float(_)));
    }

    #[test]
    fn test_is_null() {
        assert!(BindValue::Null.is_null());
        assert!(!BindValue::Int(0).is_null());
    }
}
