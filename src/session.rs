//! The text session: loaded records, overrides and the calls a game makes into them.

use crate::{
    choice::{ChoiceLayout, ChoiceLayoutEngine},
    config::Config,
    database::Terms,
    error::{ConfigError, ReadError},
    escape::expand_text_codes,
    faces::{FaceLookup, FaceRegistry},
    language::{language_file, Languages},
    log::Logger,
    overrides::{OverrideResolver, OverrideTable, TextSource},
    parse::{TagSet, TextParser},
    record::{Background, FaceImage, FaceSource, Position, TextRecord},
    store::{KeyPattern, KeyStore},
    wrap::{wrap_text, Measure, WrapOptions},
};

use once_cell::sync::OnceCell;

use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
/// A message laid out for the message box.
pub struct Message {
    /// Lines to show, in order. Inline names are included as lines of their own.
    pub lines: Vec<String>,
    /// Name of the speaker, for a name box.
    pub name: Option<String>,
    /// Face to show next to the text.
    pub face: Option<FaceImage>,
    pub position: Position,
    pub background: Background,
}

/// The host's message box.
///
/// The session lays out a message completely before handing it to the window. The
/// window decides how the caller waits for the message to be closed: `display` returns
/// a completion signal of the window's own choosing, eg. a future or a channel receiver.
pub trait MessageWindow {
    type Completion;

    fn display(&mut self, message: Message) -> Self::Completion;
}

#[derive(Debug, Default)]
/// Loaded text and the overrides set while playing.
///
/// A session is replaced or [reloaded][Session::reload()] whenever a game is loaded:
/// the records are read again and all overrides are cleared.
///
/// # Examples
/// ```
/// # use external_text::{read_text_from_string, Config, Session};
/// let store = read_text_from_string("\
/// [Key] NeutralDialogue
/// Nice weather today.
/// [Key] EvilDialogue
/// Get lost.
/// ").unwrap();
///
/// let mut session = Session::with_store(Config::default(), store);
///
/// session.add_override("NeutralDialogue", "Hm.");
/// assert_eq!(session.get_text("NeutralDialogue").unwrap().as_deref(), Some("Hm."));
///
/// session.remove_override("NeutralDialogue");
/// assert_eq!(
///     session.get_text("NeutralDialogue").unwrap().as_deref(),
///     Some("Nice weather today.")
/// );
/// ```
pub struct Session {
    config: Config,
    store: KeyStore,
    overrides: OverrideTable,
    terms: OnceCell<Terms>,
}

impl Session {
    /// Create a session without any text.
    pub fn new(config: Config) -> Self {
        Session::with_store(config, KeyStore::new())
    }

    pub fn with_store(config: Config, store: KeyStore) -> Self {
        Session {
            config,
            store,
            overrides: OverrideTable::new(),
            terms: OnceCell::new(),
        }
    }

    /// Replace the loaded records and clear all overrides.
    ///
    /// Cached vocabulary from [`terms`][Session::terms()] is kept: it is computed once
    /// for the lifetime of the session.
    pub fn reload(&mut self, store: KeyStore) {
        ::log::debug!(
            "reloading session with {} records, clearing {} overrides",
            store.len(),
            self.overrides.len()
        );

        self.store = store;
        self.overrides.clear();
    }

    /// Read every file in a directory tree and reload the session with the result.
    ///
    /// The session is only changed if every file could be read.
    pub fn load_dir<P: AsRef<Path>>(
        &mut self,
        dir: P,
        tags: TagSet,
        faces: FaceRegistry,
    ) -> Result<Logger, ReadError> {
        let mut parser = TextParser::new(tags, faces);
        parser.read_dir(dir)?;

        let (store, logger) = parser.finish();
        self.reload(store);

        Ok(logger)
    }

    /// Read a single file and reload the session with the result.
    ///
    /// The session is only changed if the file could be read.
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        tags: TagSet,
        faces: FaceRegistry,
    ) -> Result<Logger, ReadError> {
        let mut parser = TextParser::new(tags, faces);
        parser.read_file(path)?;

        let (store, logger) = parser.finish();
        self.reload(store);

        Ok(logger)
    }

    /// Read the text file of a language from a directory and reload the session with it.
    ///
    /// # Errors
    /// *   [`UnknownLanguage`][crate::error::ConfigError::UnknownLanguage]: if the
    ///     language is not one of the game's languages. The file is not read.
    pub fn load_language<P: AsRef<Path>>(
        &mut self,
        dir: P,
        languages: &Languages,
        language: &str,
        tags: TagSet,
        faces: FaceRegistry,
    ) -> Result<Logger, ReadError> {
        let language = languages.require(language)?;
        ::log::debug!("loading text for language '{}'", language);

        self.load_file(language_file(dir, language), tags, faces)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &KeyStore {
        &self.store
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn resolver(&self) -> OverrideResolver<'_> {
        OverrideResolver::new(&self.store, &self.overrides)
    }

    /// Get the current text of a key: its override if one is set, otherwise its text
    /// trimmed of surrounding whitespace. `None` if the key does not exist.
    ///
    /// # Errors
    /// *   [`UnknownKeyReference`][crate::error::ConfigError::UnknownKeyReference]: if
    ///     the key is overridden by a key which does not exist.
    pub fn get_text(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.resolver().resolve(key)
    }

    /// Override the text of a key. Any earlier override of the key is replaced.
    ///
    /// Plain strings override with literal text. Use [`TextSource::key`] to override
    /// with the text of another key.
    pub fn add_override<K, S>(&mut self, key: K, source: S)
    where
        K: Into<String>,
        S: Into<TextSource>,
    {
        self.overrides.add(key, source);
    }

    /// Remove the override of a key. Does nothing if the key is not overridden.
    pub fn remove_override(&mut self, key: &str) {
        self.overrides.remove(key);
    }

    /// Replace `\t[key]` codes in text with the current text of the keys.
    pub fn expand_text_codes(&self, text: &str) -> String {
        let resolver = self.resolver();

        expand_text_codes(text, |key| resolver.resolve(key).ok().flatten()).into_owned()
    }

    /// Get the record of a key with its text replaced by the current text.
    ///
    /// Overridden keys which are not in the store get a record with default settings.
    fn current_record(&self, key: &str) -> Result<Option<TextRecord>, ConfigError> {
        let text = match self.get_text(key)? {
            Some(text) => self.expand_text_codes(&text),
            None => return Ok(None),
        };

        let mut record = self
            .store
            .get(key)
            .cloned()
            .unwrap_or_else(|| TextRecord::new(key));
        record.body = text;

        Ok(Some(record))
    }

    /// Lay out the text of a key for the message box.
    ///
    /// Returns `None` if the key does not exist.
    ///
    /// # Errors
    /// *   [`UnknownActor`][crate::error::ConfigError::UnknownActor] or
    ///     [`UnknownPartyMember`][crate::error::ConfigError::UnknownPartyMember]: if the
    ///     record has an actor or party face which the host cannot provide.
    /// *   [`UnknownKeyReference`][crate::error::ConfigError::UnknownKeyReference]: if
    ///     the key is overridden by a key which does not exist.
    pub fn wrap_message<M, F>(
        &self,
        key: &str,
        measure: &M,
        faces: &F,
    ) -> Result<Option<Message>, ConfigError>
    where
        M: Measure + ?Sized,
        F: FaceLookup + ?Sized,
    {
        let record = match self.current_record(key)? {
            Some(record) => record,
            None => return Ok(None),
        };

        let face = resolve_face(&record.face, faces)?;
        let name = if record.has_name() {
            Some(record.name.clone())
        } else {
            None
        };

        let mut options = WrapOptions::message(&self.config)
            .with_face(face.as_ref().map_or(false, |face| !face.file.is_empty()));
        options.name = name.clone();

        let lines = wrap_text(&record.body, self.config.message_width, measure, &options);

        Ok(Some(Message {
            lines,
            name,
            face,
            position: record.position,
            background: record.background,
        }))
    }

    /// Lay out the text of a key for scrolling text: no name and no face.
    pub fn wrap_scrolling<M>(&self, key: &str, measure: &M) -> Result<Option<Vec<String>>, ConfigError>
    where
        M: Measure + ?Sized,
    {
        let options = WrapOptions::message(&self.config);

        Ok(self
            .current_record(key)?
            .map(|record| wrap_text(&record.body, self.config.message_width, measure, &options)))
    }

    /// Lay out the text of a key as a set of choices.
    ///
    /// # Errors
    /// *   [`DefaultChoiceOutOfRange`][crate::error::ConfigError::DefaultChoiceOutOfRange]:
    ///     if the record's default choice is larger than the number of choices plus one.
    pub fn wrap_choices<M>(&self, key: &str, measure: &M) -> Result<Option<ChoiceLayout>, ConfigError>
    where
        M: Measure + ?Sized,
    {
        let engine = ChoiceLayoutEngine::new(&self.config);

        match self.current_record(key)? {
            Some(record) => engine.layout(&record, measure).map(Some),
            None => Ok(None),
        }
    }

    /// Lay out the text of a key and hand it to the message window.
    ///
    /// Keys which do not exist show a message saying so. Returns the window's completion
    /// signal.
    pub fn show_text<M, F, W>(
        &self,
        key: &str,
        measure: &M,
        faces: &F,
        window: &mut W,
    ) -> Result<W::Completion, ConfigError>
    where
        M: Measure + ?Sized,
        F: FaceLookup + ?Sized,
        W: MessageWindow + ?Sized,
    {
        let message = match self.wrap_message(key, measure, faces)? {
            Some(message) => message,
            None => {
                ::log::debug!("no text for key '{}'", key);

                let text = format!("There is no text for the key {}.", key);
                let options = WrapOptions::message(&self.config);

                Message {
                    lines: wrap_text(&text, self.config.message_width, measure, &options),
                    name: None,
                    face: None,
                    position: Position::default(),
                    background: Background::default(),
                }
            }
        };

        Ok(window.display(message))
    }

    /// Keys matching a pattern, in sorted order.
    ///
    /// Skips the first `from` matches and returns at most `to` after them (all if `None`).
    pub fn block_text<P: Into<KeyPattern>>(
        &self,
        pattern: P,
        from: usize,
        to: Option<usize>,
    ) -> Vec<String> {
        self.store.select_keys(&pattern.into(), from, to, true)
    }

    /// Keys matching a pattern, in the order they were read.
    pub fn block_text_unsorted<P: Into<KeyPattern>>(
        &self,
        pattern: P,
        from: usize,
        to: Option<usize>,
    ) -> Vec<String> {
        self.store.select_keys(&pattern.into(), from, to, false)
    }

    /// System vocabulary with text from the session replacing the defaults.
    ///
    /// Computed on the first call and kept for the lifetime of the session. Later
    /// overrides and reloads are not reflected.
    pub fn terms(&self, defaults: &Terms) -> Result<&Terms, ConfigError> {
        self.terms
            .get_or_try_init(|| Terms::resolve(&self.resolver(), defaults))
    }
}

/// Find the face image for a record's face.
fn resolve_face<F>(face: &FaceSource, faces: &F) -> Result<Option<FaceImage>, ConfigError>
where
    F: FaceLookup + ?Sized,
{
    match face {
        FaceSource::None => Ok(None),
        FaceSource::Image(image) => Ok(Some(image.clone())),
        FaceSource::Actor(actor_id) => faces
            .actor_face(*actor_id)
            .map(Some)
            .ok_or(ConfigError::UnknownActor {
                actor_id: *actor_id,
            }),
        FaceSource::Party(slot) => faces
            .party_face(*slot)
            .map(Some)
            .ok_or(ConfigError::UnknownPartyMember { slot: *slot }),
    }
}
