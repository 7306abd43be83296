//! Layout of text into lines for a message box.

mod measure;
mod wrapper;

pub use measure::{CachedMeasure, Measure, MonospaceMeasure};
pub use wrapper::{wrap_text, WrapOptions};
