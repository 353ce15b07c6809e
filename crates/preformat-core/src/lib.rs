//! Preformat Core
//!
//! Per-mode prefix formatting in front of a console-style sink.
//! A logger is built from a format rule (or a table of rules keyed by
//! mode); every call prepends the mode's rendered rule to the first
//! argument and dispatches the result, either to the console or to a
//! custom handler.
//!
//! ## Logging with a prefix
//!
//! ```rust
//! use std::sync::Arc;
//! use preformat_core::sink::MemorySink;
//! use preformat_core::{args, FormatRule, FormatTable, Preformat, Value};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Preformat::new(
//!     FormatTable::new()
//!         .with("error", FormatRule::lazy(|| Value::from("[ERR]")))
//!         .with_default("[app]"),
//! )
//! .with_sink(Arc::clone(&sink));
//!
//! logger
//!     .info(&args!["started on port %d", 8080])
//!     .error(&args!["lost connection"]);
//!
//! assert_eq!(sink.lines(), vec!["[app] started on port 8080", "[ERR] lost connection"]);
//! ```
//!
//! ## Custom dispatch
//!
//! ```rust
//! use preformat_core::{args, Preformat};
//!
//! let logger = Preformat::new("[app]");
//! logger.handle(|mode, args, builtin| {
//!     if mode.as_str() != "debug" {
//!         builtin.dispatch(mode, args);
//!     }
//! });
//!
//! // Format without dispatching
//! assert_eq!(logger.format().log(&args!["ready"]), args!["[app] ready"]);
//! ```

pub mod types;
pub mod error;
pub mod render;
pub mod format;
pub mod sink;
pub mod logger;
pub mod config;
pub mod diagnostics;

// Re-export commonly used types
pub use types::{FormatRule, LogMethod, Mode, RuleProducer, Value};

pub use error::{PreformatError, PreformatResult};

pub use format::{apply_format, FormatInput, FormatTable};

pub use render::{Renderer, UtilRenderer};

pub use sink::{ConsoleSink, MemorySink, NoOpSink, Sink};

pub use logger::{BuiltinDispatch, Handler, HandlerArgs, Preformat, SharedHandler};

pub use config::FormatConfig;
