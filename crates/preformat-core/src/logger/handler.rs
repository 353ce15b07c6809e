//! Dispatch handlers

use std::sync::Arc;

use crate::sink::Sink;
use crate::types::{Mode, Value};

/// Arguments passed to a dispatch handler
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandlerArgs {
    /// Arguments as the caller supplied them
    pub raw: Vec<Value>,
    /// Arguments after the mode's format rule was applied
    pub params: Vec<Value>,
}

impl HandlerArgs {
    pub fn new(raw: Vec<Value>, params: Vec<Value>) -> Self {
        Self { raw, params }
    }
}

/// The logger's built-in dispatch, handed to custom handlers so they can
/// still reach the sink
///
/// Built-in severities go to the sink method of the same name; `default`
/// and custom modes go to `log`.
#[derive(Clone, Copy)]
pub struct BuiltinDispatch<'a> {
    sink: &'a dyn Sink,
}

impl<'a> BuiltinDispatch<'a> {
    pub fn new(sink: &'a dyn Sink) -> Self {
        Self { sink }
    }

    /// Write `args.params` to the sink method for `mode`
    pub fn dispatch(&self, mode: &Mode, args: &HandlerArgs) {
        self.sink.write(mode.sink_method(), &args.params);
    }
}

impl std::fmt::Debug for BuiltinDispatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDispatch").finish_non_exhaustive()
    }
}

/// Receives every dispatched log call in place of the built-in dispatch
///
/// Implemented for any `Fn(&Mode, &HandlerArgs, &BuiltinDispatch)`
/// closure.
pub trait Handler: Send + Sync {
    fn handle(&self, mode: &Mode, args: &HandlerArgs, builtin: &BuiltinDispatch<'_>);
}

impl<F> Handler for F
where
    F: Fn(&Mode, &HandlerArgs, &BuiltinDispatch<'_>) + Send + Sync,
{
    fn handle(&self, mode: &Mode, args: &HandlerArgs, builtin: &BuiltinDispatch<'_>) {
        self(mode, args, builtin)
    }
}

/// Type alias for an Arc-wrapped handler
pub type SharedHandler = Arc<dyn Handler>;

/// Wrap a closure into a `SharedHandler`
pub fn shared_handler<F>(handler: F) -> SharedHandler
where
    F: Fn(&Mode, &HandlerArgs, &BuiltinDispatch<'_>) + Send + Sync + 'static,
{
    Arc::new(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::sink::MemorySink;
    use crate::types::LogMethod;

    #[test]
    fn test_builtin_dispatch_routing() {
        let sink = MemorySink::new();
        let builtin = BuiltinDispatch::new(&sink);
        let args = HandlerArgs::new(args!["raw"], args!["formatted"]);

        builtin.dispatch(&Mode::new("warn"), &args);
        builtin.dispatch(&Mode::Default, &args);
        builtin.dispatch(&Mode::new("success"), &args);

        let methods: Vec<LogMethod> = sink.records().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![LogMethod::Warn, LogMethod::Log, LogMethod::Log]);
        assert!(sink.records().iter().all(|r| r.params == args!["formatted"]));
    }

    #[test]
    fn test_closure_is_handler() {
        let sink = MemorySink::new();
        let handler = shared_handler(|mode, args, builtin| {
            if mode.as_str() != "debug" {
                builtin.dispatch(mode, args);
            }
        });

        let args = HandlerArgs::new(vec![], args!["x"]);
        handler.handle(&Mode::new("debug"), &args, &BuiltinDispatch::new(&sink));
        handler.handle(&Mode::new("info"), &args, &BuiltinDispatch::new(&sink));
        assert_eq!(sink.len(), 1);
    }
}
