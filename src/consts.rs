// Comment markers, only recognized at the start of a line
pub const LINE_COMMENT_MARKERS: &[&str] = &["#", "//"];

// Text markers
pub const LINE_BREAK_MARKER: &'static str = "[line]";
pub const BYTE_ORDER_MARK: char = '\u{feff}';

// Inline codes
pub const ESCAPE_CHAR: char = '\\';
pub const RESET_COLOR_CODE: &'static str = "\\c[0]";

// Layout defaults
pub const DEFAULT_MESSAGE_WIDTH: u32 = 520;
pub const DEFAULT_FACE_WIDTH: u32 = 112;
pub const DEFAULT_CHOICE_MARGIN: u32 = 8;
pub const DEFAULT_PAGE_LINES: usize = 4;
pub const DEFAULT_VISIBLE_CHOICE_LINES: usize = 4;

// Source name used for text read from strings
pub const STRING_SOURCE_NAME: &'static str = "<string>";

// Special keys
pub const LANGUAGE_SELECT_KEY: &'static str = "Language Select";
pub const LANGUAGE_SETTING: &'static str = "Language";
