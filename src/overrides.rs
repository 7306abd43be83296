//! Session overrides of the text behind a key.
//!
//! Overrides let a game change what a key shows without touching the text files, eg.
//! to swap an NPC's neutral dialogue for an evil one after a story event. They are set
//! by scripts during play and are never stored.

use crate::{error::ConfigError, store::KeyStore};

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Replacement text for an overridden key.
pub enum TextSource {
    /// The text itself.
    Literal(String),
    /// The text of another key in the key store.
    ///
    /// Only the key store is consulted: an override of the referenced key is not followed.
    KeyRef(String),
}

impl TextSource {
    pub fn literal<T: Into<String>>(text: T) -> Self {
        TextSource::Literal(text.into())
    }

    pub fn key<T: Into<String>>(key: T) -> Self {
        TextSource::KeyRef(key.into())
    }

    /// Get the current text of the source.
    ///
    /// # Errors
    /// *   [`UnknownKeyReference`][crate::error::ConfigError::UnknownKeyReference]: if
    ///     the source refers to a key which does not exist.
    pub fn resolve(&self, store: &KeyStore) -> Result<String, ConfigError> {
        match self {
            TextSource::Literal(text) => Ok(text.clone()),
            TextSource::KeyRef(key) => store.text(key).map(|text| text.to_string()).ok_or_else(
                || ConfigError::UnknownKeyReference {
                    key: key.to_string(),
                },
            ),
        }
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        TextSource::literal(text)
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        TextSource::Literal(text)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Overrides set during a session, by key.
pub struct OverrideTable {
    overrides: HashMap<String, TextSource>,
}

impl OverrideTable {
    pub fn new() -> Self {
        OverrideTable::default()
    }

    /// Override a key. An earlier override of the key is replaced.
    pub fn add<K, S>(&mut self, key: K, source: S)
    where
        K: Into<String>,
        S: Into<TextSource>,
    {
        self.overrides.insert(key.into(), source.into());
    }

    /// Remove the override of a key, if there is one.
    pub fn remove(&mut self, key: &str) -> Option<TextSource> {
        self.overrides.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&TextSource> {
        self.overrides.get(key)
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
/// Resolves keys to their current text: overridden text if an override is set,
/// otherwise the text from the key store.
pub struct OverrideResolver<'a> {
    store: &'a KeyStore,
    overrides: &'a OverrideTable,
}

impl<'a> OverrideResolver<'a> {
    pub fn new(store: &'a KeyStore, overrides: &'a OverrideTable) -> Self {
        OverrideResolver { store, overrides }
    }

    /// Get the current text for a key, or `None` if the key does not exist.
    ///
    /// Text from the key store is trimmed of surrounding whitespace. Literal overrides are
    /// returned as they were given. Nothing is cached, so changes to the overrides are
    /// seen immediately.
    ///
    /// # Errors
    /// *   [`UnknownKeyReference`][crate::error::ConfigError::UnknownKeyReference]: if
    ///     the key is overridden by a key which does not exist.
    pub fn resolve(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.overrides.get(key) {
            Some(source) => source.resolve(self.store).map(Some),
            None => Ok(self.store.text(key).map(|text| text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parse::read_text_from_string;

    fn store() -> KeyStore {
        read_text_from_string(
            "\
[Key] NeutralDialogue
  Nice weather today.
[Key] EvilDialogue
Get lost.
",
        )
        .unwrap()
    }

    #[test]
    fn keys_without_override_resolve_to_trimmed_store_text() {
        let store = store();
        let overrides = OverrideTable::new();
        let resolver = OverrideResolver::new(&store, &overrides);

        assert_eq!(
            resolver.resolve("NeutralDialogue").unwrap().as_deref(),
            Some("Nice weather today.")
        );
        assert_eq!(resolver.resolve("Missing").unwrap(), None);
    }

    #[test]
    fn literal_overrides_replace_text() {
        let store = store();
        let mut overrides = OverrideTable::new();

        overrides.add("NeutralDialogue", "Hm.");

        let resolver = OverrideResolver::new(&store, &overrides);
        assert_eq!(
            resolver.resolve("NeutralDialogue").unwrap().as_deref(),
            Some("Hm.")
        );
    }

    #[test]
    fn adding_an_override_twice_replaces_it() {
        let store = store();
        let mut overrides = OverrideTable::new();

        overrides.add("A", "X");
        overrides.add("A", "Y");

        let resolver = OverrideResolver::new(&store, &overrides);
        assert_eq!(resolver.resolve("A").unwrap().as_deref(), Some("Y"));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn key_overrides_resolve_to_the_referenced_text() {
        let store = store();
        let mut overrides = OverrideTable::new();

        overrides.add("NeutralDialogue", TextSource::key("EvilDialogue"));

        let resolver = OverrideResolver::new(&store, &overrides);
        assert_eq!(
            resolver.resolve("NeutralDialogue").unwrap().as_deref(),
            Some("Get lost.")
        );
    }

    #[test]
    fn key_overrides_are_not_followed_further() {
        let store = store();
        let mut overrides = OverrideTable::new();

        overrides.add("NeutralDialogue", TextSource::key("EvilDialogue"));
        overrides.add("EvilDialogue", "Overridden as well.");

        let resolver = OverrideResolver::new(&store, &overrides);
        assert_eq!(
            resolver.resolve("NeutralDialogue").unwrap().as_deref(),
            Some("Get lost.")
        );
    }

    #[test]
    fn key_overrides_to_missing_keys_are_errors() {
        let store = store();
        let mut overrides = OverrideTable::new();

        overrides.add("NeutralDialogue", TextSource::key("Missing"));

        let resolver = OverrideResolver::new(&store, &overrides);
        assert_eq!(
            resolver.resolve("NeutralDialogue"),
            Err(ConfigError::UnknownKeyReference {
                key: "Missing".to_string()
            })
        );
    }

    #[test]
    fn removing_an_override_restores_store_text() {
        let store = store();
        let mut overrides = OverrideTable::new();

        overrides.add("EvilDialogue", "Hello friend!");
        assert!(overrides.remove("EvilDialogue").is_some());
        assert!(overrides.remove("EvilDialogue").is_none());

        let resolver = OverrideResolver::new(&store, &overrides);
        assert_eq!(
            resolver.resolve("EvilDialogue").unwrap().as_deref(),
            Some("Get lost.")
        );
    }
}
