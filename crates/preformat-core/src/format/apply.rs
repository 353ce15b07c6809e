//! Formatter bridge between format rules and log arguments

use super::table::FormatTable;
use crate::render::Renderer;
use crate::types::Value;

/// Format the arguments of one log call for a mode
///
/// - Without `force`, an empty argument list stays empty and nothing is
///   looked up or rendered.
/// - When no rule governs the mode, the arguments are returned unchanged.
/// - Otherwise the rule value is rendered together with the first argument
///   and the output replaces it; the remaining arguments follow untouched.
///
/// `raw` is never modified; the result is always a fresh vector.
///
/// # Example
///
/// ```
/// use preformat_core::format::{apply_format, FormatTable};
/// use preformat_core::render::UtilRenderer;
/// use preformat_core::{args, Value};
///
/// let table = FormatTable::new().with_default("Prefix:");
/// let params = apply_format(&table, "log", &args!["Hello %s!", "World"], false, &UtilRenderer::plain());
/// assert_eq!(params, args!["Prefix: Hello %s!", "World"]);
/// ```
pub fn apply_format(
    table: &FormatTable,
    mode: &str,
    raw: &[Value],
    force: bool,
    renderer: &dyn Renderer,
) -> Vec<Value> {
    if !force && raw.is_empty() {
        return Vec::new();
    }

    let rule = table.resolve(mode);
    if rule.is_undefined() {
        return raw.to_vec();
    }

    let (first, rest) = match raw.split_first() {
        Some((first, rest)) => (Some(first), rest),
        None => (None, raw),
    };
    renderer
        .render(&rule, first)
        .into_iter()
        .map(Value::String)
        .chain(rest.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::render::UtilRenderer;
    use crate::types::FormatRule;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Renderer that counts calls and echoes its inputs
    #[derive(Default)]
    struct CountingRenderer {
        calls: AtomicUsize,
    }

    impl Renderer for CountingRenderer {
        fn render(&self, rule: &Value, first: Option<&Value>) -> Vec<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            UtilRenderer::plain().render(rule, first)
        }

        fn format(&self, values: &[Value]) -> String {
            UtilRenderer::plain().format(values)
        }
    }

    fn plain() -> UtilRenderer {
        UtilRenderer::plain()
    }

    #[test]
    fn test_no_rule_is_identity() {
        let table = FormatTable::new();
        let raw = args!["a", 1, true];
        assert_eq!(apply_format(&table, "log", &raw, false, &plain()), raw);
    }

    #[test]
    fn test_empty_args_skip_rendering() {
        let table = FormatTable::new().with("log", "Log:");
        let renderer = CountingRenderer::default();
        assert!(apply_format(&table, "log", &[], false, &renderer).is_empty());
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_force_renders_rule_alone() {
        let table = FormatTable::new().with("log", "Log:");
        assert_eq!(
            apply_format(&table, "log", &[], true, &plain()),
            args!["Log:"]
        );
    }

    #[test]
    fn test_force_without_rule_stays_empty() {
        let table = FormatTable::new();
        assert!(apply_format(&table, "log", &[], true, &plain()).is_empty());
    }

    #[test]
    fn test_prefix_first_argument_only() {
        let table = FormatTable::new().with_default("Prefix:");
        assert_eq!(
            apply_format(&table, "info", &args!["Hello %s!", "World"], false, &plain()),
            args!["Prefix: Hello %s!", "World"]
        );
    }

    #[test]
    fn test_lazy_rule_evaluated_per_call() {
        let counter = Arc::new(AtomicUsize::new(0));
        let producer = Arc::clone(&counter);
        let table = FormatTable::new().with_default(FormatRule::lazy(move || {
            Value::from(format!("#{}", producer.fetch_add(1, Ordering::SeqCst)))
        }));

        let first = apply_format(&table, "log", &args!["a"], false, &plain());
        let second = apply_format(&table, "log", &args!["a"], false, &plain());
        assert_eq!(first, args!["#0 a"]);
        assert_eq!(second, args!["#1 a"]);

        // not evaluated when the call has nothing to format
        apply_format(&table, "log", &[], false, &plain());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_raw_untouched() {
        let table = FormatTable::new().with("log", "L:");
        let input = args!["a", "b"];
        let output = apply_format(&table, "log", &input, false, &plain());
        assert_eq!(input, args!["a", "b"]);
        assert_eq!(output, args!["L: a", "b"]);
    }

    #[test]
    fn test_lazy_undefined_means_no_formatting() {
        let table = FormatTable::new().with_default(FormatRule::lazy(|| Value::Undefined));
        assert_eq!(
            apply_format(&table, "warn", &args!["x"], false, &plain()),
            args!["x"]
        );
    }
}
