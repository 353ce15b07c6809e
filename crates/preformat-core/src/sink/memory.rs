//! In-memory recording sink

use parking_lot::Mutex;

use super::traits::Sink;
use crate::render::{Renderer, UtilRenderer};
use crate::types::{LogMethod, Value};

/// One write received by a `MemorySink`
#[derive(Debug, Clone, PartialEq)]
pub struct SinkRecord {
    /// Severity the write went through
    pub method: LogMethod,
    /// Arguments exactly as the sink received them
    pub params: Vec<Value>,
}

impl SinkRecord {
    pub fn new(method: LogMethod, params: Vec<Value>) -> Self {
        Self { method, params }
    }

    /// The line a console would print for this record (no colors)
    pub fn line(&self) -> String {
        UtilRenderer::plain().format(&self.params)
    }
}

/// In-memory sink for testing and for hosts that collect output
///
/// Every write is recorded in order. Share it through an `Arc` to keep a
/// handle for inspection after passing it to a logger.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use preformat_core::sink::{MemorySink, Sink};
/// use preformat_core::{args, LogMethod};
///
/// let sink = Arc::new(MemorySink::new());
/// sink.warn(&args!["careful %s", "now"]);
/// assert_eq!(sink.records()[0].method, LogMethod::Warn);
/// assert_eq!(sink.lines(), vec!["careful now".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records.lock().clone()
    }

    /// Rendered console lines of all records so far
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(SinkRecord::line).collect()
    }

    /// The most recent record
    pub fn last(&self) -> Option<SinkRecord> {
        self.records.lock().last().cloned()
    }

    /// Remove and return all records
    pub fn take(&self) -> Vec<SinkRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Clear all records
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if nothing was written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write(&self, method: LogMethod, params: &[Value]) {
        self.records
            .lock()
            .push(SinkRecord::new(method, params.to_vec()));
    }
}

impl Clone for MemorySink {
    fn clone(&self) -> Self {
        Self {
            records: Mutex::new(self.records()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.log(&args!["a", 1]);
        sink.error(&args!["b"]);

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SinkRecord::new(LogMethod::Log, args!["a", 1]));
        assert_eq!(records[1].method, LogMethod::Error);
        assert_eq!(sink.last().map(|r| r.params), Some(args!["b"]));
    }

    #[test]
    fn test_memory_sink_lines() {
        let sink = MemorySink::new();
        sink.info(&args!["%d items", 3]);
        sink.info(&args![true]);
        assert_eq!(sink.lines(), vec!["3 items".to_string(), "true".to_string()]);
    }

    #[test]
    fn test_memory_sink_take_and_clear() {
        let sink = MemorySink::new();
        sink.log(&args!["x"]);
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());

        sink.log(&args!["y"]);
        sink.clear();
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_memory_sink_clone() {
        let sink = MemorySink::new();
        sink.log(&args!["x"]);

        let cloned = sink.clone();
        cloned.log(&args!["y"]);

        // Writing to the clone doesn't affect the original
        assert_eq!(sink.len(), 1);
        assert_eq!(cloned.len(), 2);
    }

    #[test]
    fn test_memory_sink_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(MemorySink::new());
        let mut handles = vec![];

        for i in 0..10 {
            let sink_clone = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                sink_clone.log(&args![format!("message_{}", i)]);
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 10);
    }
}
