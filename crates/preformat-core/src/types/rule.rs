//! Format rules

use std::fmt;
use std::sync::Arc;

use super::value::Value;

/// Producer of a format value, evaluated once per log call
pub type RuleProducer = Arc<dyn Fn() -> Value + Send + Sync>;

/// The prefix/format value configured for a mode
///
/// # Example
///
/// ```
/// use preformat_core::{FormatRule, Value};
///
/// let prefix = FormatRule::from("[app]");
/// let stamp = FormatRule::lazy(|| Value::from("12:00:00"));
///
/// assert_eq!(prefix.resolve(), Value::from("[app]"));
/// assert_eq!(stamp.resolve(), Value::from("12:00:00"));
/// ```
#[derive(Clone)]
pub enum FormatRule {
    /// A single primitive value
    Literal(Value),
    /// An ordered sequence of primitive values
    Sequence(Vec<Value>),
    /// A zero-argument producer, re-invoked on every call that needs it
    Lazy(RuleProducer),
}

impl FormatRule {
    pub fn literal(value: impl Into<Value>) -> Self {
        FormatRule::Literal(value.into())
    }

    pub fn sequence<T, I>(values: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        FormatRule::Sequence(values.into_iter().map(Into::into).collect())
    }

    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        FormatRule::Lazy(Arc::new(producer))
    }

    /// A literal `undefined`/`null`, which defers to the `default` rule
    pub fn is_nullish(&self) -> bool {
        matches!(self, FormatRule::Literal(value) if value.is_nullish())
    }

    /// Evaluate the rule into the value handed to the renderer
    pub fn resolve(&self) -> Value {
        match self {
            FormatRule::Literal(value) => value.clone(),
            FormatRule::Sequence(values) => Value::Array(values.clone()),
            FormatRule::Lazy(producer) => producer(),
        }
    }
}

impl fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRule::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            FormatRule::Sequence(values) => f.debug_tuple("Sequence").field(values).finish(),
            FormatRule::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<Value> for FormatRule {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => FormatRule::Sequence(values),
            other => FormatRule::Literal(other),
        }
    }
}

impl From<&str> for FormatRule {
    fn from(value: &str) -> Self {
        FormatRule::Literal(value.into())
    }
}

impl From<String> for FormatRule {
    fn from(value: String) -> Self {
        FormatRule::Literal(value.into())
    }
}

impl From<bool> for FormatRule {
    fn from(value: bool) -> Self {
        FormatRule::Literal(value.into())
    }
}

impl From<f64> for FormatRule {
    fn from(value: f64) -> Self {
        FormatRule::Literal(value.into())
    }
}

impl From<i64> for FormatRule {
    fn from(value: i64) -> Self {
        FormatRule::Literal(value.into())
    }
}

impl From<i32> for FormatRule {
    fn from(value: i32) -> Self {
        FormatRule::Literal(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for FormatRule {
    fn from(values: Vec<T>) -> Self {
        FormatRule::sequence(values)
    }
}
