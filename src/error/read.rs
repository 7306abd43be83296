//! Main error type from reading text files.

use std::{error::Error, fmt, io, path::PathBuf};

use crate::error::{ConfigError, ParseError};

#[derive(Debug)]
/// Errors from loading text into a key store.
///
/// No text from a failed load becomes available.
pub enum ReadError {
    /// A file or directory could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A line in a file could not be parsed.
    Parse(ParseError),
    /// The requested text is not configured, eg. an unknown language.
    Config(ConfigError),
}

impl_from_error![
    ReadError;
    [Parse, ParseError],
    [Config, ConfigError]
];

impl ReadError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::Io { source, .. } => Some(source),
            ReadError::Parse(err) => Some(err),
            ReadError::Config(err) => Some(err),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::Io { path, source } => {
                write!(f, "Could not read '{}': {}", path.display(), source)
            }
            ReadError::Parse(err) => write!(f, "Could not parse text: {}", err),
            ReadError::Config(err) => write!(f, "Could not load text: {}", err),
        }
    }
}
