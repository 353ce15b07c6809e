//! Force and format-only call surfaces

use super::preformat::Preformat;
use crate::error::PreformatResult;
use crate::types::{LogMethod, Mode, Value};

/// Dispatching calls that format even when no arguments are given
#[derive(Debug, Clone, Copy)]
pub struct Force<'a> {
    logger: &'a Preformat,
}

impl<'a> Force<'a> {
    pub(crate) fn new(logger: &'a Preformat) -> Self {
        Self { logger }
    }

    pub fn call(&self, mode: &str, args: &[Value]) -> PreformatResult<&'a Preformat> {
        let logger = self.logger;
        let mode = logger.mode(mode)?;
        Ok(logger.emit(mode, args, true))
    }

    pub fn method(&self, method: LogMethod, args: &[Value]) -> &'a Preformat {
        self.logger.emit(&Mode::Method(method), args, true)
    }

    pub fn default_mode(&self, args: &[Value]) -> &'a Preformat {
        self.logger.emit(&Mode::Default, args, true)
    }

    log_methods!(&'a Preformat);
}

/// Calls that compute the formatted arguments without dispatching them
#[derive(Debug, Clone, Copy)]
pub struct Format<'a> {
    logger: &'a Preformat,
}

impl<'a> Format<'a> {
    pub(crate) fn new(logger: &'a Preformat) -> Self {
        Self { logger }
    }

    pub fn call(&self, mode: &str, args: &[Value]) -> PreformatResult<Vec<Value>> {
        let mode = self.logger.mode(mode)?;
        Ok(self.logger.apply(mode, args, false))
    }

    pub fn method(&self, method: LogMethod, args: &[Value]) -> Vec<Value> {
        self.logger.apply(&Mode::Method(method), args, false)
    }

    pub fn default_mode(&self, args: &[Value]) -> Vec<Value> {
        self.logger.apply(&Mode::Default, args, false)
    }

    log_methods!(Vec<Value>);

    /// Format-only calls that format even when no arguments are given
    pub fn force(&self) -> FormatForce<'a> {
        FormatForce {
            logger: self.logger,
        }
    }
}

/// Format-only calls that format even when no arguments are given
#[derive(Debug, Clone, Copy)]
pub struct FormatForce<'a> {
    logger: &'a Preformat,
}

impl<'a> FormatForce<'a> {
    pub fn call(&self, mode: &str, args: &[Value]) -> PreformatResult<Vec<Value>> {
        let mode = self.logger.mode(mode)?;
        Ok(self.logger.apply(mode, args, true))
    }

    pub fn method(&self, method: LogMethod, args: &[Value]) -> Vec<Value> {
        self.logger.apply(&Mode::Method(method), args, true)
    }

    pub fn default_mode(&self, args: &[Value]) -> Vec<Value> {
        self.logger.apply(&Mode::Default, args, true)
    }

    log_methods!(Vec<Value>);
}

#[cfg(test)]
mod tests {
    use crate::args;
    use crate::render::UtilRenderer;
    use crate::sink::MemorySink;
    use crate::{FormatTable, Preformat};
    use std::sync::Arc;

    fn logger() -> (Preformat, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Preformat::new(
            FormatTable::new()
                .with("log", "Log:")
                .with("success", "<DONE>"),
        )
        .with_sink(Arc::clone(&sink))
        .with_renderer(UtilRenderer::plain());
        (logger, sink)
    }

    #[test]
    fn test_format_does_not_dispatch() {
        let (logger, sink) = logger();
        assert_eq!(logger.format().log(&args!["a"]), args!["Log: a"]);
        assert_eq!(logger.format().call("success", &args!["a"]).unwrap(), args!["<DONE> a"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_format_empty_vs_force() {
        let (logger, _) = logger();
        assert!(logger.format().log(&[]).is_empty());
        assert_eq!(logger.format().force().log(&[]), args!["Log:"]);
        assert_eq!(
            logger.format().force().call("success", &[]).unwrap(),
            args!["<DONE>"]
        );
        // no rule for warn and no default
        assert!(logger.format().force().warn(&[]).is_empty());
    }

    #[test]
    fn test_forced_rule_text_kept_verbatim() {
        let logger = Preformat::new(FormatTable::new().with("log", "50%% done"))
            .with_renderer(UtilRenderer::plain());

        assert_eq!(logger.format().force().log(&[]), args!["50%% done"]);
        // with a first argument the rule is a pattern again
        assert_eq!(logger.format().log(&args!["now"]), args!["50% done now"]);
    }

    #[test]
    fn test_force_dispatches() {
        let (logger, sink) = logger();
        logger.force().log(&[]);
        logger.force().call("success", &[]).unwrap();
        logger.force().default_mode(&[]);

        let params: Vec<_> = sink.records().into_iter().map(|r| r.params).collect();
        assert_eq!(params, vec![args!["Log:"], args!["<DONE>"], args![]]);
    }

    #[test]
    fn test_surfaces_share_resolution() {
        let (logger, sink) = logger();
        let input = args!["x", 2];
        let formatted = logger.format().log(&input);
        let forced = logger.format().force().log(&input);
        logger.log(&input);
        logger.force().log(&input);

        assert_eq!(formatted, forced);
        assert!(sink.records().iter().all(|r| r.params == formatted));
    }
}
