use external_text::error::{ConfigError, ParseErrorKind};
use external_text::log::Warning;
use external_text::*;

#[test]
fn each_key_line_starts_a_record() {
    let content = "\
[Key] Greeting
Hi there.
[Key] Farewell
Bye.
";

    let store = read_text_from_string(content).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("Greeting").unwrap().body, "Hi there.");
    assert_eq!(store.get("Farewell").unwrap().body, "Bye.");
}

#[test]
fn unknown_tags_under_a_key_are_kept_as_text() {
    let content = "\
[Key] Bell
[Unknown] foo
Ding.
";

    let mut parser = TextParser::default();
    parser.read_str("bell.txt", content).unwrap();

    let (store, logger) = parser.finish();

    assert_eq!(store.get("Bell").unwrap().body, "[Unknown] foo\nDing.");
    assert_eq!(logger.warnings.len(), 1);

    match &logger.warnings[0].warning {
        Warning::UnknownTag { line } => assert_eq!(line, "[Unknown] foo"),
        other => panic!("expected an unknown tag warning but got {:?}", other),
    }
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let content = "\
# A comment
[Key] Intro
    // An indented comment

Welcome!
";

    let store = read_text_from_string(content).unwrap();

    assert_eq!(store.text("Intro"), Some("Welcome!"));
}

#[test]
fn tags_set_record_settings() {
    let content = "\
[Key] Intro
[Face] Actor1, 2
[Name] Ralph
[Position] top
[Background] Dim
[Default Choice] 0
Welcome!
";

    let store = read_text_from_string(content).unwrap();
    let record = store.get("Intro").unwrap();

    assert_eq!(record.face, FaceSource::Image(FaceImage::new("Actor1", 2)));
    assert_eq!(record.name, "Ralph");
    assert_eq!(record.position, Position::Top);
    assert_eq!(record.background, Background::Dim);
    assert_eq!(record.default_choice, Some(0));
}

#[test]
fn named_faces_are_taken_from_registry() {
    let content = "\
[Key] Intro
[FName] Ralph
Welcome!

[Key] Outro
[DFace] Ralph
Goodbye!
";

    let faces = FaceRegistry::new().with_face("Ralph", "Actor1", 0);

    let mut parser = TextParser::new(TagSet::default(), faces);
    parser.read_str("intro.txt", content).unwrap();
    let (store, _) = parser.finish();

    let intro = store.get("Intro").unwrap();
    assert_eq!(intro.name, "Ralph");
    assert_eq!(intro.face, FaceSource::Image(FaceImage::new("Actor1", 0)));

    let outro = store.get("Outro").unwrap();
    assert_eq!(outro.name, "");
    assert_eq!(outro.face, FaceSource::Image(FaceImage::new("Actor1", 0)));
}

#[test]
fn unknown_named_faces_are_errors() {
    let content = "\
[Key] Intro
[DFace] Nobody
Welcome!
";

    let error = read_text_from_string(content).unwrap_err();

    assert_eq!(
        error.kind,
        ParseErrorKind::Config(ConfigError::UnknownFace {
            name: "Nobody".to_string()
        })
    );
}

#[test]
fn text_before_any_key_is_an_error_with_its_line() {
    let content = "# Intro\nWhere am I?\n";

    let error = read_text_from_string(content).unwrap_err();

    assert_eq!(error.kind, ParseErrorKind::OrphanBodyLine);
    assert_eq!(error.meta_data.line(), 2);
    assert!(format!("{}", error).contains("Where am I?"));
}

#[test]
fn malformed_numbers_are_errors() {
    let error = read_text_from_string("[Key] A\n[AFace] one\nHi.").unwrap_err();

    assert_eq!(
        error.kind,
        ParseErrorKind::ExpectedNumber {
            value: "one".to_string()
        }
    );
}

#[test]
fn negative_default_choices_are_errors() {
    let error = read_text_from_string("[Key] A\n[Default Choice] -1\nYes\nNo").unwrap_err();

    assert_eq!(error.kind, ParseErrorKind::NegativeDefaultChoice { value: -1 });
}

#[test]
fn duplicate_keys_keep_last_record_with_a_warning() {
    let content = "\
[Key] A
First.
[Key] B
Other.
[Key] A
Second.
";

    let mut parser = TextParser::default();
    parser.read_str("dup.txt", content).unwrap();
    let (store, logger) = parser.finish();

    assert_eq!(store.text("A"), Some("Second."));
    assert_eq!(store.keys().collect::<Vec<_>>(), &["A", "B"]);
    assert_eq!(logger.warnings.len(), 1);
}

#[test]
fn custom_tags_can_be_added() {
    let content = "\
[Key] Bell
[Sound] Bell1
Ding.
";

    let mut tags = TagSet::builtin();
    tags.add("[Sound]", r"(?i)^\[Sound\]\s*(.+)$", |captures, context| {
        let record = context.record()?;
        record.name = format!("Sound: {}", captures[0]);
        Ok(())
    })
    .unwrap();

    let mut parser = TextParser::new(tags, FaceRegistry::new());
    parser.read_str("bell.txt", content).unwrap();
    let (store, logger) = parser.finish();

    assert_eq!(store.get("Bell").unwrap().name, "Sound: Bell1");
    assert_eq!(store.text("Bell"), Some("Ding."));
    assert!(logger.is_empty());
}
