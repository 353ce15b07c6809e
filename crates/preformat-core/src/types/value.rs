//! Dynamic log argument values

use serde_json::Value as JsonValue;

/// A single argument of a log call
///
/// Log calls are variadic and loosely typed: a call may mix strings,
/// numbers, flags and structured data. `Value` models that argument
/// space, including the "absent" (`Undefined`) and "empty" (`Null`)
/// values that format rules distinguish between.
///
/// # Example
///
/// ```
/// use preformat_core::{args, Value};
///
/// let params = args!["Hello %s!", "World", 42, true];
/// assert_eq!(params[0], Value::from("Hello %s!"));
/// assert_eq!(params[2], Value::Number(42.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,
    /// Explicitly empty value
    Null,
    Bool(bool),
    /// Double precision number
    Number(f64),
    /// Arbitrary precision integer (rendered with an `n` suffix)
    BigInt(i128),
    String(String),
    /// Unique symbol, identified by its description
    Symbol(String),
    Array(Vec<Value>),
    /// Object with keys kept in insertion order
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Create a symbol value
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(description.into())
    }

    /// Create a bigint value
    pub fn bigint(value: impl Into<i128>) -> Self {
        Value::BigInt(value.into())
    }

    /// Create an object from key/value pairs, keeping their order
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// `Undefined` or `Null`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Scalars (everything except arrays and objects)
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Get the string content if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Name of the value's type, as reported by `typeof`-style checks
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Convert to a JSON value
    ///
    /// Returns `None` for values JSON cannot represent at the top level
    /// (`Undefined`, symbols). Non-finite numbers become `null`, nested
    /// unrepresentable entries become `null` in arrays and are skipped in
    /// objects.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Value::Undefined | Value::Symbol(_) => None,
            Value::Null => Some(JsonValue::Null),
            Value::Bool(b) => Some(JsonValue::Bool(*b)),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 => {
                Some(JsonValue::from(*n as i64))
            }
            Value::Number(n) => Some(
                serde_json::Number::from_f64(*n)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null),
            ),
            Value::BigInt(n) => Some(JsonValue::String(n.to_string())),
            Value::String(s) => Some(JsonValue::String(s.clone())),
            Value::Array(items) => Some(JsonValue::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(JsonValue::Null))
                    .collect(),
            )),
            Value::Object(entries) => Some(JsonValue::Object(
                entries
                    .iter()
                    .filter_map(|(k, v)| v.to_json().map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

number_from!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Undefined)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Build a `Vec<Value>` argument list
///
/// Every expression is converted with `Value::from`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(1.5), Value::Number(1.5));
        assert_eq!(Value::from(3_u8), Value::Number(3.0));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        );
    }

    #[test]
    fn test_from_json_keeps_structure() {
        let value = Value::from(json!({ "a": [1, null], "b": "x" }));
        assert_eq!(
            value,
            Value::object([
                ("a", Value::Array(vec![Value::Number(1.0), Value::Null])),
                ("b", Value::from("x")),
            ])
        );
    }

    #[test]
    fn test_to_json() {
        let value = Value::object([
            ("n", Value::Number(1.0)),
            ("f", Value::Number(0.5)),
            ("u", Value::Undefined),
            ("nan", Value::Number(f64::NAN)),
        ]);
        assert_eq!(
            value.to_json(),
            Some(json!({ "n": 1, "f": 0.5, "nan": null }))
        );
        assert_eq!(Value::Undefined.to_json(), None);
        assert_eq!(Value::symbol("s").to_json(), None);
    }

    #[test]
    fn test_nullish() {
        assert!(Value::Undefined.is_nullish());
        assert!(Value::Null.is_nullish());
        assert!(!Value::from(0).is_nullish());
        assert!(!Value::from("").is_nullish());
    }

    #[test]
    fn test_args_macro() {
        let empty = crate::args![];
        assert!(empty.is_empty());

        let params = crate::args!["a", 1, false, Value::Null];
        assert_eq!(params.len(), 4);
        assert_eq!(params[3], Value::Null);
    }
}
