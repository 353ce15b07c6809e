//! Core types for log calls
//!
//! This module contains the value model shared by the renderer, the sinks
//! and the logger.

mod value;
mod mode;
mod rule;

pub use value::Value;
pub use mode::{LogMethod, Mode};
pub use rule::{FormatRule, RuleProducer};
