//! No-op sink implementation

use super::traits::Sink;
use crate::types::{LogMethod, Value};

/// A sink that does nothing
///
/// Useful for silencing a logger while keeping a custom handler's
/// builtin dispatch harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn write(&self, _method: LogMethod, _params: &[Value]) {}
}
