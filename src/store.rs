//! Storage of parsed records by key.

use crate::record::TextRecord;

use indexmap::IndexMap;
use regex::Regex;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Records read from text files, stored by key in the order they were first read.
pub struct KeyStore {
    records: IndexMap<String, TextRecord>,
}

#[derive(Clone, Debug)]
/// Pattern to select keys with for block text.
pub enum KeyPattern {
    /// Keys which contain the string.
    Contains(String),
    /// Keys which match the regular expression anywhere.
    Matches(Regex),
}

impl KeyPattern {
    pub fn is_match(&self, key: &str) -> bool {
        match self {
            KeyPattern::Contains(pattern) => key.contains(pattern.as_str()),
            KeyPattern::Matches(regex) => regex.is_match(key),
        }
    }
}

impl From<&str> for KeyPattern {
    fn from(pattern: &str) -> Self {
        KeyPattern::Contains(pattern.to_string())
    }
}

impl From<Regex> for KeyPattern {
    fn from(regex: Regex) -> Self {
        KeyPattern::Matches(regex)
    }
}

impl KeyStore {
    pub fn new() -> Self {
        KeyStore::default()
    }

    /// Insert a record under its key.
    ///
    /// A record with the same key is replaced and returned. The key keeps its original
    /// place in the read order.
    pub fn insert(&mut self, record: TextRecord) -> Option<TextRecord> {
        self.records.insert(record.key.clone(), record)
    }

    pub fn get(&self, key: &str) -> Option<&TextRecord> {
        self.records.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut TextRecord> {
        self.records.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Body of a record, trimmed of surrounding whitespace.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(|record| record.body.trim())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over keys in the order they were first read.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|key| key.as_str())
    }

    /// Iterate over records in the order they were first read.
    pub fn records(&self) -> impl Iterator<Item = &TextRecord> {
        self.records.values()
    }

    /// Select keys matching a pattern.
    ///
    /// Keys are visited in sorted order if `sorted` is set, otherwise in read order.
    /// The first `from` matches are skipped and at most `to` matches are returned after
    /// that (all of them if `to` is `None`).
    ///
    /// # Examples
    /// ```
    /// # use external_text::{read_text_from_string, KeyPattern};
    /// let content = "\
    /// [Key] Intro 2
    /// The sun rose.
    /// [Key] Intro 1
    /// It was dark.
    /// [Key] Ralph's Intro
    /// I'm Ralph.
    /// ";
    ///
    /// let store = read_text_from_string(content).unwrap();
    ///
    /// let keys = store.select_keys(&KeyPattern::from("Intro "), 0, None, true);
    /// assert_eq!(keys, &["Intro 1", "Intro 2"]);
    /// ```
    pub fn select_keys(
        &self,
        pattern: &KeyPattern,
        from: usize,
        to: Option<usize>,
        sorted: bool,
    ) -> Vec<String> {
        let mut keys = self.keys().collect::<Vec<_>>();

        if sorted {
            keys.sort();
        }

        keys.into_iter()
            .filter(|key| pattern.is_match(key))
            .skip(from)
            .take(to.unwrap_or(usize::MAX))
            .map(|key| key.to_string())
            .collect()
    }
}
