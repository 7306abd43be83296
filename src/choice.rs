//! Layout of choice sets.
//!
//! A record shown as a set of choices has one choice per line of its text. Each choice is
//! wrapped on its own, so long choices can take several lines of the choice box.

use crate::{
    config::Config,
    error::ConfigError,
    record::TextRecord,
    wrap::{wrap_text, Measure, WrapOptions},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What happens when the player cancels a choice set.
pub enum CancelBehavior {
    /// The choice set cannot be cancelled.
    Disabled,
    /// Cancelling selects the choice with this index.
    Choice(usize),
    /// Cancelling leads to a branch of its own. Its index is the number of choices, ie.
    /// one past the last choice.
    Branch(usize),
}

impl CancelBehavior {
    /// Read the cancel behavior from a record's default choice setting.
    ///
    /// `0` (or no setting) disables cancelling, `1..=N` selects that choice (counted
    /// from 1) and `N + 1` gives cancel its own branch.
    ///
    /// # Errors
    /// *   [`DefaultChoiceOutOfRange`][crate::error::ConfigError::DefaultChoiceOutOfRange]:
    ///     if the setting is larger than `N + 1`.
    pub fn from_default_choice(
        default_choice: Option<u32>,
        num_choices: usize,
    ) -> Result<Self, ConfigError> {
        let value = match default_choice {
            None | Some(0) => return Ok(CancelBehavior::Disabled),
            Some(value) => value,
        };

        let index = value as usize - 1;

        if index < num_choices {
            Ok(CancelBehavior::Choice(index))
        } else if index == num_choices {
            Ok(CancelBehavior::Branch(num_choices))
        } else {
            Err(ConfigError::DefaultChoiceOutOfRange { value, num_choices })
        }
    }

    /// Index which is returned to the caller on cancel, if cancelling is enabled.
    pub fn index(&self) -> Option<usize> {
        match self {
            CancelBehavior::Disabled => None,
            CancelBehavior::Choice(index) | CancelBehavior::Branch(index) => Some(*index),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A single choice and its wrapped lines.
pub struct ChoiceEntry {
    /// Raw text of the choice.
    pub text: String,
    /// Wrapped lines of the choice.
    pub lines: Vec<String>,
    /// Number of lines of all choices before this one.
    pub offset: usize,
}

impl ChoiceEntry {
    /// Number of lines the choice takes in the choice box.
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Choices laid out for the choice box.
pub struct ChoiceLayout {
    pub choices: Vec<ChoiceEntry>,
    /// Height of the choice box in lines.
    pub window_height_lines: usize,
    /// First visible line of the choice list.
    pub scroll_top: usize,
    pub cancel: CancelBehavior,
}

impl ChoiceLayout {
    /// Number of lines of all choices together.
    pub fn total_lines(&self) -> usize {
        self.choices.iter().map(|choice| choice.height()).sum()
    }

    /// Wrapped lines of every choice, in order.
    pub fn choice_lines(&self) -> Vec<&[String]> {
        self.choices
            .iter()
            .map(|choice| choice.lines.as_slice())
            .collect()
    }

    /// Scroll the choice list so that the choice with the given index is fully visible,
    /// moving it as little as possible. Returns the new scroll top.
    ///
    /// Choices taller than the box are scrolled to their first line.
    pub fn scroll_to(&mut self, index: usize) -> usize {
        if let Some(choice) = self.choices.get(index) {
            let bottom = choice.offset + choice.height();

            if choice.offset < self.scroll_top || choice.height() > self.window_height_lines {
                self.scroll_top = choice.offset;
            } else if bottom > self.scroll_top + self.window_height_lines {
                self.scroll_top = bottom - self.window_height_lines;
            }
        }

        self.scroll_top
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Lays out records as choice sets.
pub struct ChoiceLayoutEngine {
    /// Width of the choice box.
    pub max_width: u32,
    /// Number of lines the choice box can show.
    pub visible_lines: usize,
    /// Whether the box shrinks when the choices need fewer lines than it can show.
    pub shrink_height: bool,
    /// Wrap settings for every choice.
    pub options: WrapOptions,
}

impl ChoiceLayoutEngine {
    pub fn new(config: &Config) -> Self {
        ChoiceLayoutEngine {
            max_width: config.choice_width,
            visible_lines: config.visible_choice_lines,
            shrink_height: config.shrink_choice_window,
            options: WrapOptions::choice(config),
        }
    }

    /// Split a record into choices and wrap each of them.
    ///
    /// # Examples
    /// ```
    /// # use external_text::{read_text_from_string, CancelBehavior, ChoiceLayoutEngine, Config};
    /// let store = read_text_from_string("\
    /// [Key] Shop
    /// [Default Choice] 3
    /// Buy
    /// Sell
    /// ").unwrap();
    ///
    /// let engine = ChoiceLayoutEngine::new(&Config::default());
    /// let measure = |text: &str| 10 * text.chars().count() as u32;
    ///
    /// let layout = engine.layout(store.get("Shop").unwrap(), &measure).unwrap();
    ///
    /// assert_eq!(layout.choices.len(), 2);
    /// assert_eq!(layout.cancel, CancelBehavior::Branch(2));
    /// ```
    ///
    /// # Errors
    /// *   [`DefaultChoiceOutOfRange`][crate::error::ConfigError::DefaultChoiceOutOfRange]:
    ///     if the record's default choice is larger than the number of choices plus one.
    pub fn layout<M>(&self, record: &TextRecord, measure: &M) -> Result<ChoiceLayout, ConfigError>
    where
        M: Measure + ?Sized,
    {
        let mut offset = 0;

        let choices = split_choices(&record.body)
            .map(|text| {
                let lines = wrap_text(text, self.max_width, measure, &self.options);
                let entry = ChoiceEntry {
                    text: text.to_string(),
                    lines,
                    offset,
                };

                offset += entry.height();
                entry
            })
            .collect::<Vec<_>>();

        let cancel = CancelBehavior::from_default_choice(record.default_choice, choices.len())?;

        let window_height_lines = if self.shrink_height {
            self.visible_lines.min(offset)
        } else {
            self.visible_lines
        };

        Ok(ChoiceLayout {
            choices,
            window_height_lines,
            scroll_top: 0,
            cancel,
        })
    }
}

/// Split text into choices at its line breaks.
fn split_choices(body: &str) -> impl Iterator<Item = &str> {
    body.split(|c| c == '\n' || c == '\r')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
}
