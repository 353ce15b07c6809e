//! Per-mode format rule resolution
//!
//! - `FormatTable`: mode → rule mapping with `default` fallback
//! - `FormatInput`: the three constructor shapes (nothing, rule, table)
//! - `apply_format`: the bridge from rule + raw arguments to sink arguments

mod table;
mod apply;

pub use table::{FormatInput, FormatTable};
pub use apply::apply_format;
