//! Games in several languages.
//!
//! Every language has a text file of its own named after the language, eg.
//! `Data/English.txt` and `Data/Deutsch.txt`. Which one is loaded is kept as a
//! `Language=<name>` line in the game's ini settings.

use crate::{
    consts::{LANGUAGE_SELECT_KEY, LANGUAGE_SETTING},
    error::ConfigError,
    session::Session,
};

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use std::path::{Path, PathBuf};

/// Text shown in the language select window if the game has none of its own.
pub const DEFAULT_LANGUAGE_SELECT_TEXT: &str = "Select a language from the list.";

/// Extension of language text files.
const LANGUAGE_FILE_EXTENSION: &str = "txt";

static LANGUAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)^{}=(\w+)", LANGUAGE_SETTING))
        .expect("language setting regex should compile")
});

#[derive(Clone, Debug, PartialEq, Eq)]
/// Languages a game is available in. The first is the default.
pub struct Languages {
    names: Vec<String>,
}

impl Default for Languages {
    fn default() -> Self {
        Languages {
            names: vec!["English".to_string()],
        }
    }
}

impl Languages {
    /// Create the list from language names. Returns `None` if there are no names.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(|name| name.into()).collect::<Vec<_>>();

        if names.is_empty() {
            None
        } else {
            Some(Languages { names })
        }
    }

    pub fn default_language(&self) -> &str {
        &self.names[0]
    }

    pub fn contains(&self, language: &str) -> bool {
        self.names.iter().any(|name| name == language)
    }

    /// Get the language with a name.
    ///
    /// # Errors
    /// *   [`UnknownLanguage`][crate::error::ConfigError::UnknownLanguage]: if the
    ///     language is not in the list.
    pub fn require(&self, language: &str) -> Result<&str, ConfigError> {
        self.names
            .iter()
            .find(|name| *name == language)
            .map(|name| name.as_str())
            .ok_or_else(|| ConfigError::UnknownLanguage {
                name: language.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: a list has at least its default language.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Find the language set in ini settings.
    ///
    /// The last `Language=<name>` setting with a known language is used. If there is
    /// none, the default language is.
    ///
    /// # Examples
    /// ```
    /// # use external_text::language::Languages;
    /// let languages = Languages::new(vec!["English", "Deutsch"]).unwrap();
    ///
    /// assert_eq!(languages.check_language("[Game]\nLanguage=Deutsch\n"), "Deutsch");
    /// assert_eq!(languages.check_language("[Game]\nLanguage=Klingon\n"), "English");
    /// ```
    pub fn check_language(&self, ini: &str) -> &str {
        LANGUAGE_LINE
            .captures_iter(ini)
            .filter_map(|captures| captures.get(1))
            .filter_map(|language| self.require(language.as_str()).ok())
            .last()
            .unwrap_or_else(|| self.default_language())
    }
}

/// Set the language in ini settings.
///
/// Every line with a `Language=<name>` setting is changed to the language. If there was
/// none, a setting is appended as a line of its own.
pub fn set_language(ini: &str, language: &str) -> String {
    let setting = format!("{}={}", LANGUAGE_SETTING, language);

    if LANGUAGE_LINE.is_match(ini) {
        return LANGUAGE_LINE
            .replace_all(ini, NoExpand(&setting))
            .into_owned();
    }

    let mut content = ini.to_string();

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }

    content.push_str(&setting);
    content.push('\n');

    content
}

/// Path to the text file of a language.
pub fn language_file<P: AsRef<Path>>(dir: P, language: &str) -> PathBuf {
    dir.as_ref()
        .join(language)
        .with_extension(LANGUAGE_FILE_EXTENSION)
}

/// Text to show in the language select window.
pub fn language_select_text(session: &Session) -> String {
    let text = session.get_text(LANGUAGE_SELECT_KEY).unwrap_or_else(|err| {
        ::log::warn!("could not get the language select text: {}", err);
        None
    });

    text.unwrap_or_else(|| DEFAULT_LANGUAGE_SELECT_TEXT.to_string())
}
