//! Format configuration
//!
//! Format tables can be kept in YAML or JSON files instead of code:
//! - `FormatConfig`: the file structure, with load/save helpers
//! - `FormatConfig::build`: turn a config into a ready `Preformat`

mod file;

pub use file::FormatConfig;
