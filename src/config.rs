//! Layout configuration.

use crate::consts::{
    DEFAULT_CHOICE_MARGIN, DEFAULT_FACE_WIDTH, DEFAULT_MESSAGE_WIDTH, DEFAULT_PAGE_LINES,
    DEFAULT_VISIBLE_CHOICE_LINES,
};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// How the speaker name of a message is shown.
pub enum NameStyle {
    /// In a separate name box. The name is not part of the wrapped lines.
    Box,
    /// As a line of its own at the top of every page of the message.
    Inline,
}

impl Default for NameStyle {
    fn default() -> Self {
        NameStyle::Box
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
/// Sizes and styles used when laying out messages and choices.
///
/// All widths are in the same unit as the host's measurement function, usually pixels.
pub struct Config {
    /// How speaker names are shown.
    pub name_style: NameStyle,
    /// Width available for text in the message box.
    pub message_width: u32,
    /// Width taken by a face next to the text.
    pub face_width: u32,
    /// Width available for text in the choice box.
    pub choice_width: u32,
    /// Width taken by the selection margin of each choice.
    pub choice_margin: u32,
    /// Number of lines shown on one page of a message.
    pub page_lines: usize,
    /// Number of choice lines the choice box can show at once.
    pub visible_choice_lines: usize,
    /// Whether the choice box shrinks to fit fewer lines than it can show.
    pub shrink_choice_window: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name_style: NameStyle::default(),
            message_width: DEFAULT_MESSAGE_WIDTH,
            face_width: DEFAULT_FACE_WIDTH,
            choice_width: DEFAULT_MESSAGE_WIDTH,
            choice_margin: DEFAULT_CHOICE_MARGIN,
            page_lines: DEFAULT_PAGE_LINES,
            visible_choice_lines: DEFAULT_VISIBLE_CHOICE_LINES,
            shrink_choice_window: true,
        }
    }
}
