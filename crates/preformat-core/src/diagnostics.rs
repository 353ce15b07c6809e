//! Internal diagnostics for troubleshooting the logger itself
//!
//! Records what happens behind a call (handler swaps, unknown modes,
//! config loads) in a side file, never in the sink the host logs through.
//! Off unless `PREFORMAT_DEBUG` is `1` or `true`.
//!
//! - `PREFORMAT_LOG_LEVEL`: lowest recorded level (`trace`, `debug`, `info`, `warn`, `error`)
//! - `PREFORMAT_LOG_FILE`: target file (default: `<temp dir>/preformat-debug.log`)

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

const DEFAULT_FILE_NAME: &str = "preformat-debug.log";

/// Diagnostic severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Case-insensitive lookup by name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fixed width keeps the message column aligned
        write!(f, "{:<5}", self.as_str().to_uppercase())
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// A diagnostics destination: one file, a threshold, and an on/off switch
struct Recorder {
    path: PathBuf,
    file: Option<File>,
    threshold: Level,
    enabled: bool,
}

impl Recorder {
    fn new(path: PathBuf, threshold: Level, enabled: bool) -> Self {
        Self {
            path,
            file: None,
            threshold,
            enabled,
        }
    }

    fn from_env() -> Self {
        let threshold = std::env::var("PREFORMAT_LOG_LEVEL")
            .ok()
            .and_then(|name| Level::parse(&name))
            .unwrap_or(Level::Debug);
        let path = std::env::var_os("PREFORMAT_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_FILE_NAME));

        Self::new(path, threshold, env_flag("PREFORMAT_DEBUG"))
    }

    fn accepts(&self, level: Level) -> bool {
        self.enabled && level >= self.threshold
    }

    fn record(&mut self, level: Level, target: &str, message: fmt::Arguments<'_>) {
        if !self.accepts(level) {
            return;
        }

        if self.file.is_none() {
            self.file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .ok();
        }
        let Some(file) = self.file.as_mut() else {
            return;
        };

        // Failures to write diagnostics are never surfaced to the caller
        let _ = writeln!(file, "{} {} {}: {}", timestamp(), level, target, message);
        let _ = file.flush();
    }

    fn truncate(&mut self) {
        self.file = None;
        let _ = File::create(&self.path);
    }
}

/// Seconds since the epoch with millisecond precision
fn timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => format!("{}.{:03}", elapsed.as_secs(), elapsed.subsec_millis()),
        Err(_) => "0.000".to_string(),
    }
}

static RECORDER: Lazy<Mutex<Recorder>> = Lazy::new(|| Mutex::new(Recorder::from_env()));

/// Record a diagnostic line for `target` (usually a module path)
///
/// Prefer the `trace_log!`, `debug_log!` and `warn_log!` macros, which
/// fill in the target and skip formatting while diagnostics are off.
pub fn record(level: Level, target: &str, message: fmt::Arguments<'_>) {
    RECORDER.lock().record(level, target, message);
}

/// Whether a line at `level` would currently be written
pub fn enabled_for(level: Level) -> bool {
    RECORDER.lock().accepts(level)
}

pub fn is_enabled() -> bool {
    RECORDER.lock().enabled
}

/// Switch diagnostics on or off, overriding `PREFORMAT_DEBUG`
pub fn set_enabled(enabled: bool) {
    RECORDER.lock().enabled = enabled;
}

/// Set the lowest recorded level, overriding `PREFORMAT_LOG_LEVEL`
pub fn set_level(level: Level) {
    RECORDER.lock().threshold = level;
}

/// Redirect diagnostics to another file, overriding `PREFORMAT_LOG_FILE`
pub fn set_log_file(path: impl AsRef<Path>) {
    let mut recorder = RECORDER.lock();
    recorder.path = path.as_ref().to_path_buf();
    recorder.file = None;
}

pub fn log_file_path() -> PathBuf {
    RECORDER.lock().path.clone()
}

/// Empty the diagnostics file
pub fn clear_log() {
    RECORDER.lock().truncate();
}

#[doc(hidden)]
#[macro_export]
macro_rules! __diagnostic {
    ($level:expr, $($arg:tt)*) => {
        if $crate::diagnostics::enabled_for($level) {
            $crate::diagnostics::record($level, module_path!(), format_args!($($arg)*));
        }
    };
}

/// Record a trace-level diagnostic from the calling module
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::__diagnostic!($crate::diagnostics::Level::Trace, $($arg)*)
    };
}

/// Record a debug-level diagnostic from the calling module
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::__diagnostic!($crate::diagnostics::Level::Debug, $($arg)*)
    };
}

/// Record a warning diagnostic from the calling module
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::__diagnostic!($crate::diagnostics::Level::Warn, $($arg)*)
    };
}
