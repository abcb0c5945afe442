use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single translation value read from a message bundle.
///
/// Anything the literal walk cannot classify (identifiers, template strings,
/// nested objects, ...) is kept as its raw source text in a `Text` value.
/// Members of a JSON body that are not scalars (`null`, arrays, objects) are
/// kept as parsed in `Json`, so a rewrite emits them unchanged.
///
/// Serializes untagged, so `Text("Hi")` becomes `"Hi"`, `Number(2)` becomes
/// `2`, `Bool(true)` becomes `true` and `Json` is written verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(Number),
    Text(String),
    Json(Value),
}

impl ScalarValue {
    pub fn text(value: impl Into<String>) -> Self {
        ScalarValue::Text(value.into())
    }

    /// Build a number from a parsed `f64`.
    ///
    /// Integral values in the `i64` or `u64` range are stored as integers so
    /// they serialize as `1` rather than `1.0`. Larger magnitudes keep the
    /// float representation. Returns `None` for NaN and infinities, which JSON
    /// cannot hold.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value.fract() == 0.0 {
            if value.abs() < i64::MAX as f64 {
                return Some(ScalarValue::Number(Number::from(value as i64)));
            }
            if value > 0.0 && value < u64::MAX as f64 {
                return Some(ScalarValue::Number(Number::from(value as u64)));
            }
        }
        Number::from_f64(value).map(ScalarValue::Number)
    }

    /// Convert a JSON member into a scalar.
    ///
    /// `null`, arrays and objects are kept as they are.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => ScalarValue::Text(s.clone()),
            Value::Number(n) => ScalarValue::Number(n.clone()),
            Value::Bool(b) => ScalarValue::Bool(*b),
            other => ScalarValue::Json(other.clone()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ScalarValue::Text(s) => Value::String(s.clone()),
            ScalarValue::Number(n) => Value::Number(n.clone()),
            ScalarValue::Bool(b) => Value::Bool(*b),
            ScalarValue::Json(v) => v.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => write!(f, "{}", s),
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(Number::from(value))
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Number(Number::from(value))
    }
}
