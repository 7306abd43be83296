//! Utilities for inspecting warnings and other non-fatal findings from parsing.

mod logger;
mod message;

pub use logger::{Logger, LoggerIter};
pub use message::{LogMessage, Warning};
