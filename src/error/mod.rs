//! Errors from reading text files and laying out their content.

#[macro_use]
pub(crate) mod utils;
mod config;
mod parse;
mod read;

pub use config::ConfigError;
pub use parse::{ParseError, ParseErrorKind};
pub use read::ReadError;
pub use utils::MetaData;
