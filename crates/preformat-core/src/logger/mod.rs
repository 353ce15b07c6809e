//! The logger factory and its call surfaces
//!
//! - `Preformat`: per-mode formatting plus pluggable dispatch
//! - `Force`, `Format`, `FormatForce`: the force and format-only surfaces
//! - `Handler`: custom dispatch, with `BuiltinDispatch` to fall back on

/// Named methods for the built-in severities, delegating to `self.method`
macro_rules! log_methods {
    ($ret:ty) => {
        /// Call the `debug` mode
        pub fn debug(&self, args: &[Value]) -> $ret {
            self.method(LogMethod::Debug, args)
        }

        /// Call the `error` mode
        pub fn error(&self, args: &[Value]) -> $ret {
            self.method(LogMethod::Error, args)
        }

        /// Call the `info` mode
        pub fn info(&self, args: &[Value]) -> $ret {
            self.method(LogMethod::Info, args)
        }

        /// Call the `log` mode
        pub fn log(&self, args: &[Value]) -> $ret {
            self.method(LogMethod::Log, args)
        }

        /// Call the `trace` mode
        pub fn trace(&self, args: &[Value]) -> $ret {
            self.method(LogMethod::Trace, args)
        }

        /// Call the `warn` mode
        pub fn warn(&self, args: &[Value]) -> $ret {
            self.method(LogMethod::Warn, args)
        }
    };
}

mod handler;
mod preformat;
mod views;

pub use handler::{shared_handler, BuiltinDispatch, Handler, HandlerArgs, SharedHandler};
pub use preformat::Preformat;
pub use views::{Force, Format, FormatForce};
