//! Adapter from log methods onto a leveled logger

use std::sync::Arc;

use super::traits::Sink;
use crate::render::{Renderer, UtilRenderer};
use crate::types::{LogMethod, Value};

/// Leveled logger abstraction a host may already have
///
/// Messages arrive fully rendered, one line per log call.
pub trait LevelLogger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped leveled logger
pub type SharedLevelLogger = Arc<dyn LevelLogger>;

impl<T: LevelLogger + ?Sized> LevelLogger for Arc<T> {
    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Sink that renders each call to one line and forwards it to a `LevelLogger`
///
/// `log` maps to `info` and `trace` maps to `debug`; the other methods keep
/// their level.
#[derive(Debug, Clone)]
pub struct LevelSink<L> {
    logger: L,
    renderer: UtilRenderer,
}

impl<L: LevelLogger> LevelSink<L> {
    pub fn new(logger: L) -> Self {
        Self {
            logger,
            renderer: UtilRenderer::plain(),
        }
    }

    /// Keep ANSI colors in the forwarded messages
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.renderer = UtilRenderer::new(colors);
        self
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}

impl<L: LevelLogger> Sink for LevelSink<L> {
    fn write(&self, method: LogMethod, params: &[Value]) {
        let message = self.renderer.format(params);
        match method {
            LogMethod::Debug | LogMethod::Trace => self.logger.debug(&message),
            LogMethod::Info | LogMethod::Log => self.logger.info(&message),
            LogMethod::Warn => self.logger.warn(&message),
            LogMethod::Error => self.logger.error(&message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl LevelLogger for RecordingLogger {
        fn debug(&self, message: &str) {
            self.lines.lock().push(format!("DEBUG {}", message));
        }

        fn info(&self, message: &str) {
            self.lines.lock().push(format!("INFO {}", message));
        }

        fn warn(&self, message: &str) {
            self.lines.lock().push(format!("WARN {}", message));
        }

        fn error(&self, message: &str) {
            self.lines.lock().push(format!("ERROR {}", message));
        }
    }

    #[test]
    fn test_level_mapping() {
        let logger = Arc::new(RecordingLogger::default());
        let sink = LevelSink::new(Arc::clone(&logger));

        sink.log(&args!["Hello %s!", "World"]);
        sink.trace(&args!["t"]);
        sink.warn(&args!["w"]);
        sink.error(&args!["e", 1]);

        assert_eq!(
            *logger.lines.lock(),
            vec![
                "INFO Hello World!".to_string(),
                "DEBUG t".to_string(),
                "WARN w".to_string(),
                "ERROR e 1".to_string(),
            ]
        );
    }
}
