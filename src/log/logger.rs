use crate::{
    error::MetaData,
    log::{LogMessage, Warning},
};

#[derive(Clone, Debug, Default)]
/// Collection of warnings found while parsing.
///
/// Every warning is also forwarded to the `log` facade at the `warn` level.
pub struct Logger {
    /// Non-fatal findings, in the order they were encountered.
    pub warnings: Vec<LogMessage>,
}

impl Logger {
    pub(crate) fn add_warning(&mut self, warning: Warning, meta_data: &MetaData) {
        let message = LogMessage::with_warning(warning, meta_data);
        ::log::warn!("{}", message);

        self.warnings.push(message);
    }

    /// Whether no warnings were logged.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Append the warnings of another logger, keeping its messages after ours.
    pub fn extend(&mut self, other: Logger) {
        self.warnings.extend(other.warnings);
    }

    /// Create an iterator over the log items.
    ///
    /// The iterator visits the messages in the order they were read: by source, then by
    /// line number within the source.
    pub fn iter(&self) -> LoggerIter {
        LoggerIter {
            warnings: self.warnings.iter(),
        }
    }
}

pub struct LoggerIter<'a> {
    warnings: std::slice::Iter<'a, LogMessage>,
}

impl<'a> Iterator for LoggerIter<'a> {
    type Item = &'a LogMessage;

    fn next(&mut self) -> Option<Self::Item> {
        self.warnings.next()
    }
}
