//! Rendering of format rules and log arguments
//!
//! - `Renderer` trait: the seam the logger renders through
//! - `UtilRenderer`: printf-style substitution (`%s`, `%d`, `%i`, `%f`,
//!   `%j`, `%o`) with debug-style inspection of non-text values

mod traits;
mod inspect;
mod printf;
mod util;

pub use traits::{Renderer, SharedRenderer};
pub use inspect::{format_number, inspect, quote_string, InspectOptions};
pub use printf::{format_values, parse_float_prefix, parse_int_prefix, to_js_string, to_number};
pub use util::UtilRenderer;
