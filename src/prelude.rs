pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::pool::{DelayProcessor, Pool, Processor, WorkerId};
pub use crate::queue::TaskQueue;
pub use crate::report::{ErrorChannel, ErrorReport};
pub use crate::sink::{CaptureSink, ConsoleSink, ProgressSink};
pub use crate::task::Task;
