//! Format tables and constructor input normalization

use crate::types::{FormatRule, LogMethod, Mode, Value};

/// Mapping from mode name to format rule
///
/// Keys keep their insertion order. A lookup for a mode without a usable
/// rule falls back to the `default` entry.
///
/// # Example
///
/// ```
/// use preformat_core::{FormatRule, FormatTable, Value};
///
/// let table = FormatTable::new()
///     .with("log", "Log:")
///     .with("error", FormatRule::lazy(|| Value::from("Error:")))
///     .with_default("X:");
///
/// assert_eq!(table.resolve("log"), Value::from("Log:"));
/// assert_eq!(table.resolve("error"), Value::from("Error:"));
/// assert_eq!(table.resolve("info"), Value::from("X:"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatTable {
    entries: Vec<(String, FormatRule)>,
}

impl FormatTable {
    /// Create an empty table (no formatting for any mode)
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the rule for a mode, replacing any previous rule
    pub fn with(mut self, mode: impl Into<String>, rule: impl Into<FormatRule>) -> Self {
        self.insert(mode, rule);
        self
    }

    /// Set the rule for the `default` mode
    pub fn with_default(self, rule: impl Into<FormatRule>) -> Self {
        self.with(Mode::DEFAULT, rule)
    }

    /// Set the rule for a mode, replacing any previous rule
    pub fn insert(&mut self, mode: impl Into<String>, rule: impl Into<FormatRule>) {
        let mode = mode.into();
        let rule = rule.into();
        match self.entries.iter_mut().find(|(name, _)| *name == mode) {
            Some(entry) => entry.1 = rule,
            None => self.entries.push((mode, rule)),
        }
    }

    /// Get the rule configured for exactly this mode
    pub fn get(&self, mode: &str) -> Option<&FormatRule> {
        self.entries
            .iter()
            .find(|(name, _)| name == mode)
            .map(|(_, rule)| rule)
    }

    /// Get the `default` rule
    pub fn default_rule(&self) -> Option<&FormatRule> {
        self.get(Mode::DEFAULT)
    }

    /// Rule governing a mode: its own entry unless missing or nullish,
    /// else `default`
    pub fn rule_for(&self, mode: &str) -> Option<&FormatRule> {
        match self.get(mode) {
            Some(rule) if !rule.is_nullish() => Some(rule),
            _ => self.default_rule(),
        }
    }

    /// Evaluate the governing rule for a mode
    ///
    /// Lazy rules are invoked on every call. `Value::Undefined` means no
    /// formatting applies.
    pub fn resolve(&self, mode: &str) -> Value {
        self.rule_for(mode)
            .map(FormatRule::resolve)
            .unwrap_or(Value::Undefined)
    }

    /// Mode names with an entry, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatRule)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn contains(&self, mode: &str) -> bool {
        self.get(mode).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mode set of a logger built from this table: table keys, then
    /// `default`, then the built-in severities, without duplicates
    pub fn modes(&self) -> Vec<Mode> {
        let builtins = LogMethod::ALL.iter().map(|method| method.as_str());
        let mut modes: Vec<Mode> = Vec::new();
        for name in self.keys().chain(std::iter::once(Mode::DEFAULT)).chain(builtins) {
            let mode = Mode::new(name);
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }
        modes
    }
}

impl<K, R> FromIterator<(K, R)> for FormatTable
where
    K: Into<String>,
    R: Into<FormatRule>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut table = FormatTable::new();
        for (mode, rule) in iter {
            table.insert(mode, rule);
        }
        table
    }
}

/// What a logger is constructed from: nothing, a single rule applied to
/// every mode, or a full table
#[derive(Debug, Clone, Default)]
pub enum FormatInput {
    #[default]
    Empty,
    Rule(FormatRule),
    Table(FormatTable),
}

impl FormatInput {
    /// Normalize into a table; a single rule becomes `{ default: rule }`
    pub fn into_table(self) -> FormatTable {
        match self {
            FormatInput::Empty => FormatTable::new(),
            FormatInput::Rule(rule) => FormatTable::new().with_default(rule),
            FormatInput::Table(table) => table,
        }
    }
}

impl From<()> for FormatInput {
    fn from(_: ()) -> Self {
        FormatInput::Empty
    }
}

impl From<FormatTable> for FormatInput {
    fn from(table: FormatTable) -> Self {
        FormatInput::Table(table)
    }
}

impl From<FormatRule> for FormatInput {
    fn from(rule: FormatRule) -> Self {
        FormatInput::Rule(rule)
    }
}

/// Objects are tables; every other value shape is a rule for `default`
impl From<Value> for FormatInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(entries) => FormatInput::Table(entries.into_iter().collect()),
            other => FormatInput::Rule(other.into()),
        }
    }
}

impl From<serde_json::Value> for FormatInput {
    fn from(value: serde_json::Value) -> Self {
        Value::from(value).into()
    }
}

impl<T: Into<FormatInput>> From<Option<T>> for FormatInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! rule_input_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FormatInput {
                fn from(value: $ty) -> Self {
                    FormatInput::Rule(value.into())
                }
            }
        )*
    };
}

rule_input_from!(&str, String, bool, f64, i64, i32);

impl<T: Into<Value>> From<Vec<T>> for FormatInput {
    fn from(values: Vec<T>) -> Self {
        FormatInput::Rule(FormatRule::sequence(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_precedence() {
        let table = FormatTable::new()
            .with("log", "Log:")
            .with("error", FormatRule::lazy(|| Value::from("Error:")))
            .with_default("X:");

        assert_eq!(table.resolve("log"), Value::from("Log:"));
        assert_eq!(table.resolve("error"), Value::from("Error:"));
        assert_eq!(table.resolve("info"), Value::from("X:"));
        assert_eq!(table.resolve("success"), Value::from("X:"));
    }

    #[test]
    fn test_unset_default_resolves_undefined() {
        let table = FormatTable::new().with("log", "Log:");
        assert_eq!(table.resolve("warn"), Value::Undefined);
        assert!(table.rule_for("warn").is_none());
    }

    #[test]
    fn test_nullish_entry_defers_to_default() {
        let table = FormatTable::new()
            .with("log", Value::Null)
            .with_default("D:");
        assert_eq!(table.resolve("log"), Value::from("D:"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = FormatTable::new().with("log", "a");
        table.insert("log", "b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("log"), Value::from("b"));
    }

    #[test]
    fn test_modes_union() {
        let table = FormatTable::new().with("success", "<DONE>").with("log", "L");
        let modes = table.modes();
        let names: Vec<&str> = modes.iter().map(Mode::as_str).collect();
        assert_eq!(
            names,
            vec!["success", "log", "default", "debug", "error", "info", "trace", "warn"]
        );
    }

    #[test]
    fn test_input_normalization() {
        let table = FormatInput::from("Prefix:").into_table();
        assert_eq!(table.resolve("info"), Value::from("Prefix:"));

        let table = FormatInput::from(vec!["a", "b"]).into_table();
        assert!(matches!(table.default_rule(), Some(FormatRule::Sequence(_))));

        let table = FormatInput::from(json!({ "success": "<DONE>" })).into_table();
        assert_eq!(table.resolve("success"), Value::from("<DONE>"));
        assert!(table.default_rule().is_none());

        let table = FormatInput::from(()).into_table();
        assert!(table.is_empty());

        let table = FormatInput::from(None::<&str>).into_table();
        assert!(table.is_empty());
    }
}
