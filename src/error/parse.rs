use std::{error::Error, fmt};

use crate::error::{utils::MetaData, ConfigError};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing a line of a text file.
///
/// Parsing stops at the first error. The error carries the file name and line it was
/// encountered in, so that loading can be aborted with a useful diagnostic.
pub struct ParseError {
    /// The offending line.
    pub line: String,
    /// Type of error.
    pub kind: ParseErrorKind,
    /// Where the line was read from.
    pub meta_data: MetaData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// A body line was read before any `[Key]` line in the file.
    OrphanBodyLine,
    /// A tag which modifies a record was read before any `[Key]` line in the file.
    OrphanTag { tag: String },
    /// A tag argument which should be a number could not be read as one.
    ExpectedNumber { value: String },
    /// A `[Default Choice]` tag had a negative value.
    NegativeDefaultChoice { value: i64 },
    /// A tag referred to configured data which does not exist.
    Config(ConfigError),
}

impl_from_error![
    ParseErrorKind;
    [Config, ConfigError]
];

impl ParseError {
    pub(crate) fn from_kind<T: Into<String>>(
        line: T,
        kind: ParseErrorKind,
        meta_data: MetaData,
    ) -> Self {
        ParseError {
            line: line.into(),
            kind,
            meta_data,
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseErrorKind::*;

        write!(f, "({}) ", self.meta_data)?;

        match &self.kind {
            OrphanBodyLine => write!(
                f,
                "Found text before any `[Key]` line: all text must belong to a key"
            ),
            OrphanTag { tag } => write!(
                f,
                "Found a `{}` tag before any `[Key]` line: tags must follow a key",
                tag
            ),
            ExpectedNumber { value } => write!(f, "Could not parse a number from '{}'", value),
            NegativeDefaultChoice { value } => write!(
                f,
                "Default choice must be 0 or larger but was {}",
                value
            ),
            Config(err) => write!(f, "{}", err),
        }?;

        write!(f, " (line: {})", &self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_print_source_and_offending_line() {
        let error = ParseError::from_kind(
            "Orphaned text.",
            ParseErrorKind::OrphanBodyLine,
            MetaData::new("intro.txt", 2),
        );

        let printed = format!("{}", error);

        assert!(printed.starts_with("(intro.txt:3)"));
        assert!(printed.ends_with("(line: Orphaned text.)"));
    }

    #[test]
    fn config_errors_are_the_source_of_parse_errors() {
        let error = ParseError::from_kind(
            "[DFace] Nobody",
            ParseErrorKind::Config(ConfigError::UnknownFace {
                name: "Nobody".to_string(),
            }),
            MetaData::from(0),
        );

        assert!(error.source().is_some());
    }
}
