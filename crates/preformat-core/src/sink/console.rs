//! Console sink implementation

use std::backtrace::{Backtrace, BacktraceStatus};
use std::io::{self, IsTerminal, Write};

use super::traits::Sink;
use crate::render::{Renderer, UtilRenderer};
use crate::types::{LogMethod, Value};

/// A sink that writes to the console (stdout/stderr)
///
/// `log`, `info` and `debug` go to stdout; `error`, `warn` and `trace` go
/// to stderr. `trace` lines are prefixed with `Trace: ` and followed by a
/// backtrace when `RUST_BACKTRACE` enables one. Arguments are joined with
/// printf-style substitution, so `("Hello %s!", "World")` prints
/// `Hello World!`.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    stdout: UtilRenderer,
    stderr: UtilRenderer,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a console sink, coloring each stream when it is a terminal
    pub fn new() -> Self {
        Self {
            stdout: UtilRenderer::new(io::stdout().is_terminal()),
            stderr: UtilRenderer::new(io::stderr().is_terminal()),
        }
    }

    /// Create a console sink with colors forced on or off
    pub fn with_colors(colors: bool) -> Self {
        Self {
            stdout: UtilRenderer::new(colors),
            stderr: UtilRenderer::new(colors),
        }
    }

    fn uses_stderr(method: LogMethod) -> bool {
        matches!(method, LogMethod::Error | LogMethod::Warn | LogMethod::Trace)
    }
}

impl Sink for ConsoleSink {
    fn write(&self, method: LogMethod, params: &[Value]) {
        // Write failures (closed pipe, detached terminal) are dropped
        if Self::uses_stderr(method) {
            let line = self.stderr.format(params);
            let mut err = io::stderr().lock();
            if method == LogMethod::Trace {
                let _ = writeln!(err, "Trace: {}", line);
                let backtrace = Backtrace::capture();
                if backtrace.status() == BacktraceStatus::Captured {
                    let _ = writeln!(err, "{}", backtrace);
                }
            } else {
                let _ = writeln!(err, "{}", line);
            }
        } else {
            let line = self.stdout.format(params);
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }
    }
}
