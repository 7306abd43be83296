//! Utilities for printing and handling errors.

use std::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Information about the origin of a line.
///
/// To be used to present errors and warnings from parsing, allowing access to where
/// the offending line was read from.
pub struct MetaData {
    /// Name of the file (or other source) the line was read from.
    pub source: String,
    /// Which line in the source the item originated from.
    pub line_index: u32,
}

impl MetaData {
    pub(crate) fn new<T: Into<String>>(source: T, line_index: usize) -> Self {
        MetaData {
            source: source.into(),
            line_index: line_index as u32,
        }
    }

    /// One-based line number, as shown to users.
    pub fn line(&self) -> u32 {
        self.line_index + 1
    }
}

impl fmt::Display for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line())
    }
}

/// Wrapper to implement From for variants when the variant is simply encapsulated
/// in the enum.
///
/// # Example
/// Running
/// ```ignore
/// impl_from_error![
///     MyError;
///     [Variant, ErrorData]
/// ];
/// ```
/// is identical to running
/// ```ignore
/// impl From<ErrorData> for MyError {
///     fn from(err: ErrorData) -> Self {
///         MyError::Variant(err)
///     }
/// }
/// ```
/// The macro can also implement several variants at once:
/// ```ignore
/// impl_from_error![
///     MyError;
///     [Variant1, ErrorData1],
///     [Variant2, ErrorData2]
/// ];
/// ```
macro_rules! impl_from_error {
    ($for_type:ident; $([$variant:ident, $from_type:ident]),+) => {
        $(
            impl From<$from_type> for $for_type {
                fn from(err: $from_type) -> Self {
                    $for_type::$variant(err)
                }
            }
        )*
    }
}

#[cfg(test)]
impl From<usize> for MetaData {
    fn from(line_index: usize) -> Self {
        MetaData::new(crate::consts::STRING_SOURCE_NAME, line_index)
    }
}
