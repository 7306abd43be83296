use crate::error::MetaData;
use std::fmt;

#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
/// Log message with additional information.
pub struct LogMessage {
    /// Logged warning.
    pub warning: Warning,
    /// Information of where the message originated from.
    pub meta_data: MetaData,
}

impl LogMessage {
    pub(crate) fn with_warning(warning: Warning, meta_data: &MetaData) -> Self {
        LogMessage {
            warning,
            meta_data: meta_data.clone(),
        }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(test, derive(PartialEq))]
/// A non-fatal finding while parsing text files.
pub enum Warning {
    /// A line started with `[` but matched no known tag. It was added to the text as-is.
    UnknownTag { line: String },
    /// A `[Key]` line reused a key which was already read. The earlier text was replaced.
    DuplicateKey { key: String },
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] WARNING: {}", self.meta_data, self.warning)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Warning::*;

        match self {
            UnknownTag { line } => write!(
                f,
                "line '{}' looks like a tag but no such tag exists: read it as text",
                line
            ),
            DuplicateKey { key } => write!(
                f,
                "key '{}' was already used: replaced the earlier text",
                key
            ),
        }
    }
}
