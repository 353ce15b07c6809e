//! Renderer trait definition

use std::sync::Arc;

use crate::types::Value;

/// Turns a format rule value plus the first log argument into text
///
/// Implementations:
/// - `UtilRenderer`: printf-style substitution with value inspection
/// - Custom renderers for hosts that need a different notation
pub trait Renderer: Send + Sync {
    /// Render the resolved rule value together with the first argument
    ///
    /// The output replaces the first argument of the call. It may hold any
    /// number of strings; an empty output drops the first argument.
    fn render(&self, rule: &Value, first: Option<&Value>) -> Vec<String>;

    /// Join a full argument list into a single line of output
    fn format(&self, values: &[Value]) -> String;
}

/// Type alias for an Arc-wrapped renderer
pub type SharedRenderer = Arc<dyn Renderer>;
