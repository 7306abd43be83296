//! Parsed text records and their display settings.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A face graphic: the face set file and the index of the face inside it.
pub struct FaceImage {
    pub file: String,
    pub index: u32,
}

impl FaceImage {
    pub fn new<T: Into<String>>(file: T, index: u32) -> Self {
        FaceImage {
            file: file.into(),
            index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Where the face of a message comes from.
///
/// Actor and party faces are looked up by the host when the message is displayed, since
/// the actor's face or the party order may change during play.
pub enum FaceSource {
    /// The message has no face.
    None,
    /// A face set file and index given directly, or through the face registry.
    Image(FaceImage),
    /// The face of the actor with this id.
    Actor(u32),
    /// The face of the party member in this slot, counted from 0.
    Party(u32),
}

impl Default for FaceSource {
    fn default() -> Self {
        FaceSource::None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Vertical position of the message box.
pub enum Position {
    Top,
    Center,
    Bottom,
}

impl Default for Position {
    fn default() -> Self {
        Position::Bottom
    }
}

impl Position {
    /// Read a position from its case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "top" => Some(Position::Top),
            "center" => Some(Position::Center),
            "bottom" => Some(Position::Bottom),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Background style of the message box.
pub enum Background {
    Normal,
    Dim,
    Transparent,
}

impl Default for Background {
    fn default() -> Self {
        Background::Normal
    }
}

impl Background {
    /// Read a background from its case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "normal" => Some(Background::Normal),
            "dim" => Some(Background::Dim),
            "transparent" => Some(Background::Transparent),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A single parsed unit of text: everything between one `[Key]` line and the next.
pub struct TextRecord {
    /// Unique key of the record.
    pub key: String,
    /// Face to show next to the message.
    pub face: FaceSource,
    /// Name of the speaker. Empty if there is no speaker.
    ///
    /// May contain inline codes, which are left for the host to expand.
    pub name: String,
    /// Raw text lines of the record, joined by newlines.
    pub body: String,
    /// Position of the message box.
    pub position: Position,
    /// Background of the message box.
    pub background: Background,
    /// Cancel setting when the record is shown as a set of choices.
    ///
    /// `0` disables cancelling, `1..=N` makes cancel select that choice and `N + 1`
    /// gives cancel a branch of its own.
    pub default_choice: Option<u32>,
}

impl TextRecord {
    /// Create an empty record with the given key and default settings.
    pub fn new<T: Into<String>>(key: T) -> Self {
        TextRecord {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Add a line of text to the body, separated from earlier text by a newline.
    pub(crate) fn push_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }

        self.body.push_str(line);
    }

    /// Whether a speaker name is set.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
