//! Measurement of text width.

use std::{cell::RefCell, collections::HashMap};

use unicode_width::UnicodeWidthStr;

/// Measures the width of text as it would be drawn.
///
/// The text given to the measure never contains inline codes. Any `Fn(&str) -> u32` is
/// a measure, so hosts can pass their font measurement as a closure.
pub trait Measure {
    fn text_width(&self, text: &str) -> u32;
}

impl<F> Measure for F
where
    F: Fn(&str) -> u32,
{
    fn text_width(&self, text: &str) -> u32 {
        self(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Measure for fixed-width fonts: every terminal cell has the same width.
///
/// Wide characters (eg. CJK) take two cells.
pub struct MonospaceMeasure {
    pub cell_width: u32,
}

impl MonospaceMeasure {
    pub fn new(cell_width: u32) -> Self {
        MonospaceMeasure { cell_width }
    }
}

impl Measure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> u32 {
        UnicodeWidthStr::width(text) as u32 * self.cell_width
    }
}

#[derive(Debug)]
/// Measure which remembers the widths returned by another measure.
///
/// Useful when the underlying measure is expensive, since wrapping measures every
/// line prefix it tries.
pub struct CachedMeasure<M> {
    inner: M,
    cache: RefCell<HashMap<String, u32>>,
}

impl<M: Measure> CachedMeasure<M> {
    pub fn new(inner: M) -> Self {
        CachedMeasure {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct texts measured so far.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Forget all measured widths, eg. after the font changed.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<M: Measure> Measure for CachedMeasure<M> {
    fn text_width(&self, text: &str) -> u32 {
        if let Some(&width) = self.cache.borrow().get(text) {
            return width;
        }

        let width = self.inner.text_width(text);
        self.cache.borrow_mut().insert(text.to_string(), width);

        width
    }
}
