//! Wrapping of text into lines which fit a box.

use crate::{
    config::{Config, NameStyle},
    consts::{
        DEFAULT_CHOICE_MARGIN, DEFAULT_FACE_WIDTH, DEFAULT_PAGE_LINES, LINE_BREAK_MARKER,
        RESET_COLOR_CODE,
    },
    escape::{last_color_code, strip_codes},
    wrap::Measure,
};

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of newlines, which become a single manual line break.
static NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("newline regex should compile"));

/// Manual line break markers.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[line\]").expect("line break regex should compile"));

#[derive(Clone, Debug, PartialEq)]
/// Settings for a single wrap.
pub struct WrapOptions {
    /// Name of the speaker, if any.
    pub name: Option<String>,
    /// How the name is shown. Only inline names are added to the lines.
    pub name_style: NameStyle,
    /// Whether the text is a choice, which loses the choice margin from its width.
    pub is_choice: bool,
    /// Whether a face is shown next to the text, which loses the face width.
    pub has_face: bool,
    /// Width taken by a face.
    pub face_width: u32,
    /// Width taken by the choice margin.
    pub choice_margin: u32,
    /// Number of lines on a page. Inline names are repeated at the top of every page.
    pub page_lines: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        WrapOptions {
            name: None,
            name_style: NameStyle::Box,
            is_choice: false,
            has_face: false,
            face_width: DEFAULT_FACE_WIDTH,
            choice_margin: DEFAULT_CHOICE_MARGIN,
            page_lines: DEFAULT_PAGE_LINES,
        }
    }
}

impl WrapOptions {
    /// Options for a message, with sizes and name style from a configuration.
    pub fn message(config: &Config) -> Self {
        WrapOptions {
            name_style: config.name_style,
            face_width: config.face_width,
            choice_margin: config.choice_margin,
            page_lines: config.page_lines,
            ..Default::default()
        }
    }

    /// Options for a single choice, with sizes from a configuration.
    pub fn choice(config: &Config) -> Self {
        WrapOptions {
            is_choice: true,
            ..WrapOptions::message(config)
        }
    }

    pub fn with_name<T: Into<String>>(mut self, name: T) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    pub fn with_face(mut self, has_face: bool) -> Self {
        self.has_face = has_face;
        self
    }

    /// Width left for text in a box of the given width.
    pub fn available_width(&self, max_width: u32) -> u32 {
        let mut width = max_width;

        if self.has_face {
            width = width.saturating_sub(self.face_width);
        }

        if self.is_choice {
            width = width.saturating_sub(self.choice_margin);
        }

        width
    }

    /// The line which shows the name at the top of a page, if names are inline.
    fn name_line(&self) -> Option<String> {
        match (&self.name, self.name_style) {
            (Some(name), NameStyle::Inline) => Some(format!("{}{}", name, RESET_COLOR_CODE)),
            _ => None,
        }
    }
}

/// Wrap text into lines which fit inside the given width.
///
/// Newlines and `[line]` markers force a line break. Otherwise words are added to the
/// current line until the next word would make it wider than the available width, at
/// which point a new line is started. A word which is wider than the box on its own is
/// put on a line of its own without being split.
///
/// Inline codes take no width. The last color code is repeated at the start of every
/// new line, so that colored text stays colored when it wraps. No other code is carried
/// over.
///
/// # Examples
/// ```
/// # use external_text::{wrap_text, WrapOptions};
/// let measure = |text: &str| text.chars().count() as u32;
///
/// let lines = wrap_text("Hello [line]World", 80, &measure, &WrapOptions::default());
/// assert_eq!(lines, &["Hello", "World"]);
///
/// let lines = wrap_text(r"A \c[2]red fox jumps", 10, &measure, &WrapOptions::default());
/// assert_eq!(lines, &[r"A \c[2]red fox", r"\c[2]jumps"]);
/// ```
pub fn wrap_text<M>(body: &str, max_width: u32, measure: &M, options: &WrapOptions) -> Vec<String>
where
    M: Measure + ?Sized,
{
    let width = options.available_width(max_width);
    let normalized = NEWLINES.replace_all(body.trim(), LINE_BREAK_MARKER);

    let mut lines = LineBuilder::new(width, measure, options.name_line(), options.page_lines);

    for word in normalized.split_whitespace() {
        for (i, piece) in LINE_BREAK.split(word).enumerate() {
            if i > 0 || lines.is_too_wide_with(piece) {
                lines.break_line();
            }

            lines.push_word(piece);

            // New lines start in the color which was active where the break happened
            if let Some(code) = last_color_code(piece) {
                lines.color = code.to_string();
            }
        }
    }

    lines.finish()
}

/// Accumulator for the lines of a single wrap.
struct LineBuilder<'m, M: ?Sized> {
    lines: Vec<String>,
    current: String,
    has_words: bool,
    color: String,
    line_index: usize,
    name_line: Option<String>,
    /// Set when a page ended: the name is added once the next page gets content.
    name_pending: bool,
    page_lines: usize,
    width: u32,
    measure: &'m M,
}

impl<'m, M: Measure + ?Sized> LineBuilder<'m, M> {
    fn new(width: u32, measure: &'m M, name_line: Option<String>, page_lines: usize) -> Self {
        let mut builder = LineBuilder {
            lines: Vec::new(),
            current: String::new(),
            has_words: false,
            color: String::new(),
            line_index: 0,
            name_line,
            name_pending: false,
            page_lines,
            width,
            measure,
        };

        if let Some(name_line) = builder.name_line.clone() {
            builder.lines.push(name_line);
            builder.line_index += 1;
        }

        builder
    }

    /// Whether adding a word would make the current line too wide.
    ///
    /// Always false for an empty line, since the word cannot fit any better on the next.
    fn is_too_wide_with(&self, word: &str) -> bool {
        if !self.has_words || word.is_empty() {
            return false;
        }

        let candidate = format!("{}{}", self.current, word);
        self.measure.text_width(&strip_codes(&candidate)) > self.width
    }

    fn push_word(&mut self, word: &str) {
        if !word.is_empty() {
            self.push_pending_name();

            self.current.push_str(word);
            self.current.push(' ');
            self.has_words = true;
        }
    }

    /// Finish the current line and start a new one, seeded with the current color.
    fn break_line(&mut self) {
        self.push_pending_name();

        self.lines.push(self.current.trim_end().to_string());
        self.line_index += 1;

        if self.name_line.is_some()
            && self.page_lines > 0
            && self.line_index % self.page_lines == 0
        {
            self.name_pending = true;
            self.line_index += 1;
        }

        self.current = self.color.clone();
        self.has_words = false;
    }

    /// Add the name line of a page which has content.
    fn push_pending_name(&mut self) {
        if self.name_pending {
            if let Some(name_line) = &self.name_line {
                self.lines.push(name_line.clone());
            }

            self.name_pending = false;
        }
    }

    /// A page without content is dropped along with its name line.
    fn finish(mut self) -> Vec<String> {
        if self.has_words || self.lines.is_empty() {
            self.lines.push(self.current.trim_end().to_string());
        }

        self.lines
    }
}
