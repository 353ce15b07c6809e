//! Sink trait definition

use std::sync::Arc;

use crate::types::{LogMethod, Value};

/// Console-style output target for formatted log arguments
///
/// Implementations:
/// - `ConsoleSink`: Writes to stdout/stderr
/// - `NoOpSink`: Silent sink
/// - `MemorySink`: Records every write, for tests and embedding hosts
/// - `LevelSink`: Forwards to a leveled `LevelLogger`
pub trait Sink: Send + Sync {
    /// Write one log call's arguments through the given severity
    fn write(&self, method: LogMethod, params: &[Value]);

    fn debug(&self, params: &[Value]) {
        self.write(LogMethod::Debug, params);
    }

    fn error(&self, params: &[Value]) {
        self.write(LogMethod::Error, params);
    }

    fn info(&self, params: &[Value]) {
        self.write(LogMethod::Info, params);
    }

    fn log(&self, params: &[Value]) {
        self.write(LogMethod::Log, params);
    }

    fn trace(&self, params: &[Value]) {
        self.write(LogMethod::Trace, params);
    }

    fn warn(&self, params: &[Value]) {
        self.write(LogMethod::Warn, params);
    }
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn Sink>;

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;

impl<T: Sink + ?Sized> Sink for Arc<T> {
    fn write(&self, method: LogMethod, params: &[Value]) {
        (**self).write(method, params);
    }
}

impl<T: Sink + ?Sized> Sink for Box<T> {
    fn write(&self, method: LogMethod, params: &[Value]) {
        (**self).write(method, params);
    }
}
