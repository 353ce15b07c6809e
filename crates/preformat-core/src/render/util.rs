//! Default renderer

use super::inspect::{inspect, InspectOptions};
use super::printf::format_values;
use super::traits::Renderer;
use crate::types::Value;

/// printf-style renderer with debug-style inspection of non-text values
///
/// Before substitution, every argument that is neither a string nor a
/// number is replaced by its inspected form. A rule value such as `true`
/// or `null` therefore renders as a highlighted literal instead of bare
/// text, and a rule like `"[%s]"` still substitutes the first argument.
///
/// # Example
///
/// ```
/// use preformat_core::render::{Renderer, UtilRenderer};
/// use preformat_core::Value;
///
/// let renderer = UtilRenderer::plain();
/// let out = renderer.render(&Value::from("Prefix:"), Some(&Value::from("Hello %s!")));
/// assert_eq!(out, vec!["Prefix: Hello %s!".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilRenderer {
    colors: bool,
}

impl Default for UtilRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl UtilRenderer {
    /// Create a renderer, optionally emitting ANSI colors for inspected values
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Create a renderer without colors
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    fn prepare(&self, value: &Value) -> Value {
        match value {
            Value::String(_) | Value::Number(_) => value.clone(),
            other => Value::String(inspect(other, InspectOptions { colors: self.colors })),
        }
    }
}

impl Renderer for UtilRenderer {
    fn render(&self, rule: &Value, first: Option<&Value>) -> Vec<String> {
        let values: Vec<Value> = std::iter::once(rule)
            .chain(first)
            .map(|value| self.prepare(value))
            .collect();
        vec![format_values(&values, self.colors)]
    }

    fn format(&self, values: &[Value]) -> String {
        format_values(values, self.colors)
    }
}
