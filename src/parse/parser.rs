//! Reading of text files into records.

use crate::{
    consts::{BYTE_ORDER_MARK, LINE_BREAK_MARKER, LINE_COMMENT_MARKERS, STRING_SOURCE_NAME},
    error::{MetaData, ParseError, ParseErrorKind, ReadError},
    faces::FaceRegistry,
    log::{Logger, Warning},
    parse::tags::{TagContext, TagSet},
    store::KeyStore,
};

use ignore::WalkBuilder;

use std::{fs, io, path::Path};

#[derive(Debug, Default)]
/// Parser which reads any number of text sources into a single key store.
///
/// Sources are read in the order they are given and lines within a source in order.
/// Once all sources have been read, [`finish`][TextParser::finish()] yields the store.
/// If reading a source fails the parser should be discarded: no text from a failed load
/// is meant to be used.
pub struct TextParser {
    tags: TagSet,
    faces: FaceRegistry,
    store: KeyStore,
    logger: Logger,
    current_key: Option<String>,
}

impl TextParser {
    pub fn new(tags: TagSet, faces: FaceRegistry) -> Self {
        TextParser {
            tags,
            faces,
            store: KeyStore::new(),
            logger: Logger::default(),
            current_key: None,
        }
    }

    /// Read text from a string. The `source` name is used in errors and warnings.
    ///
    /// The active key carries over between sources: text at the top of a source is added
    /// to the last record of the previous source. Only text before the first `[Key]`
    /// line of the whole load is an error.
    ///
    /// # Errors
    /// *   [`OrphanBodyLine`][crate::error::ParseErrorKind::OrphanBodyLine]: if text is
    ///     found before the first `[Key]` line.
    /// *   [`OrphanTag`][crate::error::ParseErrorKind::OrphanTag]: if a record tag is
    ///     found before the first `[Key]` line.
    /// *   Any error returned by a tag handler, eg.
    ///     [`ExpectedNumber`][crate::error::ParseErrorKind::ExpectedNumber].
    pub fn read_str(&mut self, source: &str, content: &str) -> Result<(), ParseError> {
        let TextParser {
            tags,
            faces,
            store,
            logger,
            current_key,
        } = self;

        let mut num_lines = 0;

        for (i, line) in content.lines().enumerate() {
            let line = if i == 0 {
                line.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                line
            }
            .trim_end();

            if is_empty_or_comment(line) {
                continue;
            }

            num_lines += 1;
            let meta_data = MetaData::new(source, i);

            if let Some((matcher, captures)) = tags.find(line) {
                let mut context = TagContext {
                    store: &mut *store,
                    current_key: &mut *current_key,
                    faces: &*faces,
                    logger: &mut *logger,
                    meta_data: &meta_data,
                    tag: matcher.name(),
                };

                TagSet::apply(matcher, &captures, &mut context)
                    .map_err(|kind| ParseError::from_kind(line, kind, meta_data.clone()))?;

                continue;
            }

            let record = match current_key.as_ref() {
                Some(key) => store.get_mut(key),
                None => None,
            };

            match record {
                Some(record) => {
                    if looks_like_tag(line) {
                        logger.add_warning(
                            Warning::UnknownTag {
                                line: line.to_string(),
                            },
                            &meta_data,
                        );
                    }

                    record.push_line(line);
                }
                None => {
                    return Err(ParseError::from_kind(
                        line,
                        ParseErrorKind::OrphanBodyLine,
                        meta_data,
                    ));
                }
            }
        }

        ::log::debug!("read {} text lines from '{}'", num_lines, source);

        Ok(())
    }

    /// Read text from a file.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ReadError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|err| ReadError::io(path, err))?;
        self.read_str(&path.display().to_string(), &content)?;

        Ok(())
    }

    /// Read every file in a directory tree.
    ///
    /// Files are read in order of their paths, sorted by name at every level. File and
    /// directory names carry no other meaning. Hidden files and ignore files are not
    /// treated specially.
    pub fn read_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<(), ReadError> {
        let dir = dir.as_ref();

        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        for entry in builder.build() {
            let entry = entry.map_err(|err| {
                let message = err.to_string();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));

                ReadError::io(dir, source)
            })?;

            if entry.file_type().map_or(false, |kind| kind.is_file()) {
                self.read_file(entry.path())?;
            }
        }

        Ok(())
    }

    /// Yield the records read so far along with the warnings found while reading them.
    pub fn finish(self) -> (KeyStore, Logger) {
        ::log::debug!("finished reading {} text records", self.store.len());
        (self.store, self.logger)
    }
}

/// Read text records from a string using the built-in tags and no named faces.
///
/// # Examples
/// ```
/// # use external_text::read_text_from_string;
/// let content = "\
/// [Key] Greeting
/// Hi there.
///
/// [Key] Farewell
/// Bye.
/// ";
///
/// let store = read_text_from_string(content).unwrap();
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.text("Greeting"), Some("Hi there."));
/// ```
pub fn read_text_from_string(content: &str) -> Result<KeyStore, ParseError> {
    let mut parser = TextParser::default();
    parser.read_str(STRING_SOURCE_NAME, content)?;

    Ok(parser.finish().0)
}

/// Read text records from every file in a directory tree.
pub fn read_text_from_dir<P: AsRef<Path>>(
    dir: P,
    tags: TagSet,
    faces: FaceRegistry,
) -> Result<(KeyStore, Logger), ReadError> {
    let mut parser = TextParser::new(tags, faces);
    parser.read_dir(dir)?;

    Ok(parser.finish())
}

/// Whether a line is blank or a comment. Comments may be indented.
fn is_empty_or_comment(line: &str) -> bool {
    let line = line.trim_start();

    line.is_empty()
        || LINE_COMMENT_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
}

/// Whether a text line starts with what looks like an unknown tag.
fn looks_like_tag(line: &str) -> bool {
    line.starts_with('[')
        && line.contains(']')
        && !line
            .get(..LINE_BREAK_MARKER.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(LINE_BREAK_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::record::{Background, FaceImage, FaceSource, Position};

    fn read(content: &str) -> Result<(KeyStore, Logger), ParseError> {
        let faces = FaceRegistry::new().with_face("Ralph", "Actor1", 0);

        let mut parser = TextParser::new(TagSet::builtin(), faces);
        parser.read_str("test", content)?;

        Ok(parser.finish())
    }

    #[test]
    fn records_are_split_at_key_lines() {
        let content = "\
[Key] Greeting
Hi there.
[Key] Farewell
Bye.
";

        let (store, _) = read(content).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(&store.get("Greeting").unwrap().body, "Hi there.");
        assert_eq!(&store.get("Farewell").unwrap().body, "Bye.");
    }

    #[test]
    fn text_lines_are_joined_with_newlines() {
        let content = "\
[Key] Intro
Line one.

Line two.
";

        let (store, _) = read(content).unwrap();

        assert_eq!(&store.get("Intro").unwrap().body, "Line one.\nLine two.");
    }

    #[test]
    fn comments_and_blank_lines_never_become_text() {
        let content = "\
# Chapter one
[Key] Intro
// a note
Line one.
    # indented comment
   
Line two.
";

        let (store, _) = read(content).unwrap();

        assert_eq!(&store.get("Intro").unwrap().body, "Line one.\nLine two.");
    }

    #[test]
    fn leading_whitespace_of_text_is_kept_and_trailing_is_removed() {
        let (store, _) = read("[Key] Intro\n  Indented.   \r\n").unwrap();

        assert_eq!(&store.get("Intro").unwrap().body, "  Indented.");
    }

    #[test]
    fn byte_order_mark_is_removed() {
        let (store, _) = read("\u{feff}[Key] Intro\nText.").unwrap();

        assert!(store.contains_key("Intro"));
    }

    #[test]
    fn face_and_name_tags_set_record_fields() {
        let content = "\
[Key] Intro
[Face] Actor2, 5
[Name] \\c[15]\\n[1]
Hello.
";

        let (store, _) = read(content).unwrap();
        let record = store.get("Intro").unwrap();

        assert_eq!(record.face, FaceSource::Image(FaceImage::new("Actor2", 5)));
        assert_eq!(&record.name, "\\c[15]\\n[1]");
        assert_eq!(&record.body, "Hello.");
    }

    #[test]
    fn actor_and_party_faces_are_resolved_later() {
        let (store, _) = read("[Key] A\n[AFace] 3\n[Key] B\n[PFace] 0").unwrap();

        assert_eq!(store.get("A").unwrap().face, FaceSource::Actor(3));
        assert_eq!(store.get("B").unwrap().face, FaceSource::Party(0));
    }

    #[test]
    fn later_face_tags_replace_earlier_ones() {
        let (store, _) = read("[Key] A\n[AFace] 3\n[DFace] Ralph").unwrap();

        assert_eq!(
            store.get("A").unwrap().face,
            FaceSource::Image(FaceImage::new("Actor1", 0))
        );
    }

    #[test]
    fn face_name_tag_sets_both_name_and_face() {
        let (store, _) = read("[Key] A\n[FName] Ralph\nHi.").unwrap();
        let record = store.get("A").unwrap();

        assert_eq!(&record.name, "Ralph");
        assert_eq!(record.face, FaceSource::Image(FaceImage::new("Actor1", 0)));
    }

    #[test]
    fn unknown_named_face_is_a_config_error() {
        let error = read("[Key] A\n[DFace] Ulrika").unwrap_err();

        match error.kind {
            ParseErrorKind::Config(crate::error::ConfigError::UnknownFace { name }) => {
                assert_eq!(&name, "Ulrika")
            }
            other => panic!("expected unknown face error but got {:?}", other),
        }

        assert_eq!(error.meta_data.line(), 2);
    }

    #[test]
    fn position_and_background_are_set_case_insensitively() {
        let (store, _) = read("[Key] A\n[Position] top\n[Background] TRANSPARENT").unwrap();
        let record = store.get("A").unwrap();

        assert_eq!(record.position, Position::Top);
        assert_eq!(record.background, Background::Transparent);
    }

    #[test]
    fn default_choice_is_read_as_number() {
        let (store, _) = read("[Key] A\n[Default Choice] 3\nYes\nNo").unwrap();

        assert_eq!(store.get("A").unwrap().default_choice, Some(3));
    }

    #[test]
    fn negative_default_choice_is_an_error() {
        let error = read("[Key] A\n[Default Choice] -2").unwrap_err();

        assert_eq!(
            error.kind,
            ParseErrorKind::NegativeDefaultChoice { value: -2 }
        );
    }

    #[test]
    fn malformed_face_index_is_an_error() {
        let error = read("[Key] A\n[Face] Actor1, first").unwrap_err();

        assert_eq!(
            error.kind,
            ParseErrorKind::ExpectedNumber {
                value: "first".to_string()
            }
        );
    }

    #[test]
    fn unknown_bracketed_lines_are_text_with_a_warning() {
        let (store, logger) = read("[Key] A\n[Unknown] foo").unwrap();

        assert_eq!(&store.get("A").unwrap().body, "[Unknown] foo");
        assert_eq!(logger.warnings.len(), 1);
    }

    #[test]
    fn manual_line_breaks_are_not_warned_about() {
        let (store, logger) = read("[Key] A\nOne\n[line]Two").unwrap();

        assert_eq!(&store.get("A").unwrap().body, "One\n[line]Two");
        assert!(logger.is_empty());
    }

    #[test]
    fn text_before_any_key_is_an_orphan_error() {
        let error = read("# comment\nHello?\n[Key] A").unwrap_err();

        assert_eq!(error.kind, ParseErrorKind::OrphanBodyLine);
        assert_eq!(error.meta_data.line(), 2);
        assert_eq!(&error.line, "Hello?");
    }

    #[test]
    fn tags_before_any_key_are_orphan_errors() {
        let error = read("[Name] Ralph").unwrap_err();

        assert_eq!(
            error.kind,
            ParseErrorKind::OrphanTag {
                tag: "[Name]".to_string()
            }
        );
    }

    #[test]
    fn duplicate_keys_are_replaced_by_the_last_one_with_a_warning() {
        let (store, logger) = read("[Key] A\nFirst.\n[Key] B\nB.\n[Key] A\nSecond.").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(&store.get("A").unwrap().body, "Second.");
        assert_eq!(logger.warnings.len(), 1);
    }

    #[test]
    fn active_key_carries_over_into_the_next_source() {
        let mut parser = TextParser::default();

        parser.read_str("a.txt", "[Key] Long\nPart one.").unwrap();
        parser.read_str("b.txt", "Part two.\n[Key] Short\nHi.").unwrap();

        let (store, _) = parser.finish();

        assert_eq!(&store.get("Long").unwrap().body, "Part one.\nPart two.");
        assert_eq!(&store.get("Short").unwrap().body, "Hi.");
    }

    #[test]
    fn only_the_first_source_can_have_orphaned_text() {
        let mut parser = TextParser::default();

        let error = parser.read_str("a.txt", "Text.").unwrap_err();

        assert_eq!(error.kind, ParseErrorKind::OrphanBodyLine);
        assert_eq!(&error.meta_data.source, "a.txt");
    }

    #[test]
    fn keys_without_space_after_tag_are_read() {
        let (store, _) = read("[Key]System_Level\nLv").unwrap();

        assert_eq!(store.text("System_Level"), Some("Lv"));
    }
}
