//! The `Preformat` logger

use std::sync::Arc;

use parking_lot::RwLock;

use super::handler::{BuiltinDispatch, HandlerArgs, SharedHandler};
use super::views::{Force, Format};
use crate::error::{PreformatError, PreformatResult};
use crate::format::{apply_format, FormatInput, FormatTable};
use crate::render::{Renderer, SharedRenderer, UtilRenderer};
use crate::sink::{ConsoleSink, SharedSink, Sink};
use crate::types::{LogMethod, Mode, Value};
use crate::{trace_log, warn_log};

/// Logger that prepends a per-mode format value to the first argument of
/// each call and hands the result to a replaceable dispatch handler
///
/// The mode set is fixed at construction: every key of the format table,
/// `default`, and the built-in severities. Each mode can be called four
/// ways:
///
/// | Surface | Formats empty calls | Dispatches | Returns |
/// |---|---|---|---|
/// | `logger.log(..)` / `logger.call(mode, ..)` | no | yes | the logger |
/// | `logger.force().log(..)` | yes | yes | the logger |
/// | `logger.format().log(..)` | no | no | formatted arguments |
/// | `logger.format().force().log(..)` | yes | no | formatted arguments |
///
/// # Thread Safety
///
/// The handler slot sits behind a `RwLock`, so a logger can be shared
/// across threads. The active handler is read when a call dispatches; calls
/// racing with `handle` on other threads may see either handler.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use preformat_core::sink::MemorySink;
/// use preformat_core::{args, FormatTable, LogMethod, Preformat};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Preformat::new(FormatTable::new().with("success", "<DONE>"))
///     .with_sink(Arc::clone(&sink));
///
/// logger.call("success", &args!["Hello %s!", "World"]).unwrap();
///
/// let record = sink.last().unwrap();
/// assert_eq!(record.method, LogMethod::Log);
/// assert_eq!(record.params, args!["<DONE> Hello %s!", "World"]);
/// ```
pub struct Preformat {
    table: FormatTable,
    modes: Vec<Mode>,
    renderer: SharedRenderer,
    sink: SharedSink,
    handler: RwLock<Option<SharedHandler>>,
}

impl Default for Preformat {
    fn default() -> Self {
        Self::new(())
    }
}

impl Preformat {
    /// Create a logger from nothing, a single rule, or a format table
    ///
    /// A single rule applies to every mode through `default`. Output goes
    /// to the console until `with_sink` or `handle` says otherwise.
    pub fn new(input: impl Into<FormatInput>) -> Self {
        let table = input.into().into_table();
        let modes = table.modes();
        Self {
            table,
            modes,
            renderer: Arc::new(UtilRenderer::default()),
            sink: Arc::new(ConsoleSink::new()),
            handler: RwLock::new(None),
        }
    }

    /// Replace the sink used by the built-in dispatch
    pub fn with_sink(self, sink: impl Sink + 'static) -> Self {
        self.with_shared_sink(Arc::new(sink))
    }

    pub fn with_shared_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the renderer that combines rule values with first arguments
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    /// All modes this logger accepts
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn has_mode(&self, name: &str) -> bool {
        self.modes.iter().any(|mode| mode == name)
    }

    /// Look up a mode by name
    pub fn mode(&self, name: &str) -> PreformatResult<&Mode> {
        self.modes.iter().find(|mode| *mode == name).ok_or_else(|| {
            warn_log!("call to unknown mode '{}'", name);
            PreformatError::unknown_mode(name)
        })
    }

    /// Format and dispatch a call for any mode in the mode set
    pub fn call(&self, mode: &str, args: &[Value]) -> PreformatResult<&Self> {
        let mode = self.mode(mode)?;
        Ok(self.emit(mode, args, false))
    }

    /// Format and dispatch a call for a built-in severity
    pub fn method(&self, method: LogMethod, args: &[Value]) -> &Self {
        self.emit(&Mode::Method(method), args, false)
    }

    /// Format and dispatch a call for the `default` mode
    pub fn default_mode(&self, args: &[Value]) -> &Self {
        self.emit(&Mode::Default, args, false)
    }

    log_methods!(&Self);

    /// Calls that format even when no arguments are given
    pub fn force(&self) -> Force<'_> {
        Force::new(self)
    }

    /// Calls that return the formatted arguments instead of dispatching
    pub fn format(&self) -> Format<'_> {
        Format::new(self)
    }

    /// Route every subsequent dispatch through `handler`
    ///
    /// The handler replaces the built-in dispatch entirely; it receives
    /// that dispatch as its third argument to forward to when it wants to.
    pub fn handle<F>(&self, handler: F) -> &Self
    where
        F: Fn(&Mode, &HandlerArgs, &BuiltinDispatch<'_>) + Send + Sync + 'static,
    {
        self.set_handler(Some(Arc::new(handler)))
    }

    /// Set or clear the dispatch handler; `None` restores built-in dispatch
    pub fn set_handler(&self, handler: Option<SharedHandler>) -> &Self {
        trace_log!(
            "dispatch handler {}",
            if handler.is_some() { "set" } else { "cleared" }
        );
        *self.handler.write() = handler;
        self
    }

    /// Restore the built-in dispatch
    pub fn clear_handler(&self) -> &Self {
        self.set_handler(None)
    }

    pub fn has_handler(&self) -> bool {
        self.handler.read().is_some()
    }

    pub(crate) fn apply(&self, mode: &Mode, args: &[Value], force: bool) -> Vec<Value> {
        apply_format(&self.table, mode.as_str(), args, force, self.renderer.as_ref())
    }

    pub(crate) fn emit(&self, mode: &Mode, raw: &[Value], force: bool) -> &Self {
        let args = HandlerArgs::new(raw.to_vec(), self.apply(mode, raw, force));
        let builtin = BuiltinDispatch::new(self.sink.as_ref());

        // Released before the call so a handler may swap itself out
        let handler = self.handler.read().clone();
        match handler {
            Some(handler) => handler.handle(mode, &args, &builtin),
            None => builtin.dispatch(mode, &args),
        }
        self
    }
}

impl std::fmt::Debug for Preformat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preformat")
            .field("table", &self.table)
            .field("modes", &self.modes)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
