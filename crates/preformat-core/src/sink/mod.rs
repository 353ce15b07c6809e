//! Output sinks for formatted log calls

mod traits;
mod console;
mod noop;
mod memory;
mod level;

pub use traits::{BoxedSink, SharedSink, Sink};
pub use console::ConsoleSink;
pub use noop::NoOpSink;
pub use memory::{MemorySink, SinkRecord};
pub use level::{LevelLogger, LevelSink, SharedLevelLogger};
