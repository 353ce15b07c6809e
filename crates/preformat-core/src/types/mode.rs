//! Log modes and built-in severities

use std::fmt;

/// Built-in console severities
///
/// Every logger exposes all of these, whether or not a format rule was
/// configured for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogMethod {
    Debug,
    Error,
    Info,
    Log,
    Trace,
    Warn,
}

impl LogMethod {
    /// All built-in severities, in canonical order
    pub const ALL: [LogMethod; 6] = [
        LogMethod::Debug,
        LogMethod::Error,
        LogMethod::Info,
        LogMethod::Log,
        LogMethod::Trace,
        LogMethod::Warn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogMethod::Debug => "debug",
            LogMethod::Error => "error",
            LogMethod::Info => "info",
            LogMethod::Log => "log",
            LogMethod::Trace => "trace",
            LogMethod::Warn => "warn",
        }
    }

    /// Parse a built-in severity name (case-sensitive)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Check if `name` names a built-in severity
    pub fn is_log_method(name: &str) -> bool {
        Self::parse(name).is_some()
    }
}

impl fmt::Display for LogMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logging mode: the catch-all `default`, a built-in severity, or a
/// caller-defined category such as `success`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Default,
    Method(LogMethod),
    Custom(String),
}

impl Mode {
    pub const DEFAULT: &'static str = "default";

    /// Classify a mode name
    pub fn new(name: &str) -> Self {
        if name == Self::DEFAULT {
            Mode::Default
        } else if let Some(method) = LogMethod::parse(name) {
            Mode::Method(method)
        } else {
            Mode::Custom(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Default => Self::DEFAULT,
            Mode::Method(method) => method.as_str(),
            Mode::Custom(name) => name,
        }
    }

    /// The built-in severity this mode names, if any
    pub fn log_method(&self) -> Option<LogMethod> {
        match self {
            Mode::Method(method) => Some(*method),
            _ => None,
        }
    }

    /// Sink method used by the built-in dispatch
    ///
    /// `default` and custom modes go to `log`.
    pub fn sink_method(&self) -> LogMethod {
        self.log_method().unwrap_or(LogMethod::Log)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Mode::new(name)
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        Mode::new(&name)
    }
}

impl From<LogMethod> for Mode {
    fn from(method: LogMethod) -> Self {
        Mode::Method(method)
    }
}

impl PartialEq<str> for Mode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Mode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_methods() {
        for method in LogMethod::ALL {
            assert!(LogMethod::is_log_method(method.as_str()));
            assert_eq!(LogMethod::parse(method.as_str()), Some(method));
        }
        assert!(!LogMethod::is_log_method("default"));
        assert!(!LogMethod::is_log_method("Log"));
    }

    #[test]
    fn test_mode_classification() {
        assert_eq!(Mode::new("default"), Mode::Default);
        assert_eq!(Mode::new("warn"), Mode::Method(LogMethod::Warn));
        assert_eq!(Mode::new("success"), Mode::Custom("success".to_string()));
        assert_eq!(Mode::new("success"), "success");
    }

    #[test]
    fn test_sink_method_fallback() {
        assert_eq!(Mode::new("trace").sink_method(), LogMethod::Trace);
        assert_eq!(Mode::Default.sink_method(), LogMethod::Log);
        assert_eq!(Mode::new("success").sink_method(), LogMethod::Log);
    }
}
