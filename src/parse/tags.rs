//! Tag matchers: the patterns which turn a line into a change of the current record.
//!
//! A [`TagSet`] is an ordered list of matchers. Every non-comment line is tried against
//! the matchers in order and the first one which matches consumes the line. The built-in
//! set can be extended with new matchers, which are tried after the built-in ones.

use crate::{
    error::{MetaData, ParseErrorKind},
    faces::FaceRegistry,
    log::{Logger, Warning},
    record::{Background, FaceImage, FaceSource, Position, TextRecord},
    store::KeyStore,
};

use regex::Regex;

use std::fmt;

/// Function which applies a matched tag. Receives the capture groups of the match.
///
/// Groups which did not participate in the match are given as empty strings.
pub type TagHandler =
    Box<dyn Fn(&[&str], &mut TagContext) -> Result<(), ParseErrorKind> + Send + Sync>;

/// Box a closure as a [`TagHandler`].
pub fn tag_handler<F>(handler: F) -> TagHandler
where
    F: Fn(&[&str], &mut TagContext) -> Result<(), ParseErrorKind> + Send + Sync + 'static,
{
    Box::new(handler)
}

/// State available to a tag handler while a line is applied.
pub struct TagContext<'a> {
    pub(crate) store: &'a mut KeyStore,
    pub(crate) current_key: &'a mut Option<String>,
    pub(crate) faces: &'a FaceRegistry,
    pub(crate) logger: &'a mut Logger,
    pub(crate) meta_data: &'a MetaData,
    pub(crate) tag: &'a str,
}

impl<'a> TagContext<'a> {
    /// Start a new, empty record and make it the target of following lines.
    pub fn start_record(&mut self, key: &str) {
        let key = key.trim();

        if self.store.insert(TextRecord::new(key)).is_some() {
            self.logger.add_warning(
                Warning::DuplicateKey {
                    key: key.to_string(),
                },
                self.meta_data,
            );
        }

        *self.current_key = Some(key.to_string());
    }

    /// The record which following lines are added to.
    ///
    /// # Errors
    /// *   [`OrphanTag`][crate::error::ParseErrorKind::OrphanTag]: if no `[Key]` line has
    ///     been read yet.
    pub fn record(&mut self) -> Result<&mut TextRecord, ParseErrorKind> {
        let tag = self.tag;

        let record = match self.current_key.as_ref() {
            Some(key) => self.store.get_mut(key),
            None => None,
        };

        record.ok_or_else(|| ParseErrorKind::OrphanTag {
            tag: tag.to_string(),
        })
    }

    /// Registry of named faces.
    pub fn faces(&self) -> &FaceRegistry {
        self.faces
    }
}

/// A pattern and the handler to apply when a line matches it.
pub struct TagMatcher {
    name: String,
    pattern: Regex,
    handler: TagHandler,
}

impl TagMatcher {
    /// Create a matcher from a regular expression.
    ///
    /// The `name` is used in error messages, eg. `[Face]`.
    pub fn new<T, F>(name: T, pattern: &str, handler: F) -> Result<Self, regex::Error>
    where
        T: Into<String>,
        F: Fn(&[&str], &mut TagContext) -> Result<(), ParseErrorKind> + Send + Sync + 'static,
    {
        Ok(TagMatcher {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            handler: tag_handler(handler),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the capture groups if the line matches.
    fn captures<'l>(&self, line: &'l str) -> Option<Vec<&'l str>> {
        self.pattern.captures(line).map(|captures| {
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()).unwrap_or(""))
                .collect()
        })
    }
}

impl fmt::Debug for TagMatcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TagMatcher")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

#[derive(Debug)]
/// Ordered set of tag matchers. The first matcher to match a line wins.
///
/// # Examples
/// Adding a custom tag:
/// ```
/// # use external_text::{TagSet, TextParser, FaceRegistry};
/// let mut tags = TagSet::builtin();
///
/// tags.add(
///     "[Speaker]",
///     r"(?i)^\[Speaker\]\s*(.+)$",
///     |captures, context| {
///         context.record()?.name = captures[0].to_uppercase();
///         Ok(())
///     },
/// )
/// .unwrap();
///
/// let mut parser = TextParser::new(tags, FaceRegistry::new());
/// parser.read_str("script", "[Key] Intro\n[Speaker] Ralph\nHello!").unwrap();
///
/// let (store, _) = parser.finish();
/// assert_eq!(&store.get("Intro").unwrap().name, "RALPH");
/// ```
pub struct TagSet {
    matchers: Vec<TagMatcher>,
}

impl Default for TagSet {
    fn default() -> Self {
        TagSet::builtin()
    }
}

impl TagSet {
    /// Set with no matchers. Every line becomes text.
    pub fn empty() -> Self {
        TagSet {
            matchers: Vec::new(),
        }
    }

    /// Set with the built-in tags, in order of priority.
    pub fn builtin() -> Self {
        let matchers = builtin_matchers()
            .into_iter()
            .map(|(name, pattern, handler)| TagMatcher {
                name: name.to_string(),
                // Built-in patterns are constant and covered by tests
                pattern: Regex::new(pattern).unwrap_or_else(|err| {
                    panic!("built-in tag pattern for {} is invalid: {}", name, err)
                }),
                handler,
            })
            .collect();

        TagSet { matchers }
    }

    /// Add a matcher after all current matchers.
    pub fn add<T, F>(&mut self, name: T, pattern: &str, handler: F) -> Result<(), regex::Error>
    where
        T: Into<String>,
        F: Fn(&[&str], &mut TagContext) -> Result<(), ParseErrorKind> + Send + Sync + 'static,
    {
        self.push(TagMatcher::new(name, pattern, handler)?);
        Ok(())
    }

    /// Add a matcher after all current matchers.
    pub fn push(&mut self, matcher: TagMatcher) {
        self.matchers.push(matcher);
    }

    /// Add all matchers of another set after the current matchers, keeping their order.
    pub fn merge(&mut self, other: TagSet) {
        self.matchers.extend(other.matchers);
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Names of the matchers, in the order they are tried.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|matcher| matcher.name())
    }

    /// Find the first matcher for a line along with its captures.
    pub(crate) fn find<'s, 'l>(
        &'s self,
        line: &'l str,
    ) -> Option<(&'s TagMatcher, Vec<&'l str>)> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.captures(line).map(|captures| (matcher, captures)))
    }

    pub(crate) fn apply(
        matcher: &TagMatcher,
        captures: &[&str],
        context: &mut TagContext,
    ) -> Result<(), ParseErrorKind> {
        (matcher.handler)(captures, context)
    }
}

fn parse_number(value: &str) -> Result<u32, ParseErrorKind> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseErrorKind::ExpectedNumber {
            value: value.to_string(),
        })
}

fn parse_default_choice(value: &str) -> Result<u32, ParseErrorKind> {
    let number = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseErrorKind::ExpectedNumber {
            value: value.to_string(),
        })?;

    if number < 0 {
        Err(ParseErrorKind::NegativeDefaultChoice { value: number })
    } else if number > u32::MAX as i64 {
        Err(ParseErrorKind::ExpectedNumber {
            value: value.to_string(),
        })
    } else {
        Ok(number as u32)
    }
}

fn builtin_matchers() -> Vec<(&'static str, &'static str, TagHandler)> {
    vec![
        (
            "[Key]",
            r"(?i)^\[Key\]\s*(.+)$",
            tag_handler(|captures, context| {
                context.start_record(captures[0]);
                Ok(())
            }),
        ),
        (
            "[Face]",
            r"(?i)^\[Face\]\s*([^,]+?)\s*(?:,\s*(.*))?$",
            tag_handler(|captures, context| {
                let index = parse_number(captures[1])?;
                context.record()?.face = FaceSource::Image(FaceImage::new(captures[0], index));
                Ok(())
            }),
        ),
        (
            "[AFace]",
            r"(?i)^\[AFace\]\s*(.*)$",
            tag_handler(|captures, context| {
                let actor_id = parse_number(captures[0])?;
                context.record()?.face = FaceSource::Actor(actor_id);
                Ok(())
            }),
        ),
        (
            "[PFace]",
            r"(?i)^\[PFace\]\s*(.*)$",
            tag_handler(|captures, context| {
                let slot = parse_number(captures[0])?;
                context.record()?.face = FaceSource::Party(slot);
                Ok(())
            }),
        ),
        (
            "[DFace]",
            r"(?i)^\[DFace\]\s*(.+)$",
            tag_handler(|captures, context| {
                let face = context.faces().require(captures[0].trim())?.clone();
                context.record()?.face = FaceSource::Image(face);
                Ok(())
            }),
        ),
        (
            "[Name]",
            r"(?i)^\[Name\]\s*(.+)$",
            tag_handler(|captures, context| {
                context.record()?.name = captures[0].trim().to_string();
                Ok(())
            }),
        ),
        (
            "[FName]",
            r"(?i)^\[FName\]\s*(.+)$",
            tag_handler(|captures, context| {
                let name = captures[0].trim();
                let face = context.faces().require(name)?.clone();

                let record = context.record()?;
                record.name = name.to_string();
                record.face = FaceSource::Image(face);

                Ok(())
            }),
        ),
        (
            "[Position]",
            r"(?i)^\[Position\]\s*(Top|Center|Bottom)$",
            tag_handler(|captures, context| {
                if let Some(position) = Position::from_name(captures[0]) {
                    context.record()?.position = position;
                }
                Ok(())
            }),
        ),
        (
            "[Background]",
            r"(?i)^\[Background\]\s*(Normal|Dim|Transparent)$",
            tag_handler(|captures, context| {
                if let Some(background) = Background::from_name(captures[0]) {
                    context.record()?.background = background;
                }
                Ok(())
            }),
        ),
        (
            "[Default Choice]",
            r"(?i)^\[Default Choice\]\s*(.*)$",
            tag_handler(|captures, context| {
                let default_choice = parse_default_choice(captures[0])?;
                context.record()?.default_choice = Some(default_choice);
                Ok(())
            }),
        ),
    ]
}
