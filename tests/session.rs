use external_text::error::ConfigError;
use external_text::*;

use regex::Regex;

use std::sync::mpsc::{channel, Receiver, Sender};

fn measure(text: &str) -> u32 {
    text.chars().count() as u32
}

fn session() -> Session {
    let content = "\
[Key] NeutralDialogue
Nice weather today.

[Key] EvilDialogue
Get lost.

[Key] Quest 1
Find the sword.

[Key] Quest 3
Slay the dragon.

[Key] Quest 2
Cross the river.

[Key] Shop
[Default Choice] 3
Buy
Sell

[Key] Warning
\\c[2]Danger! The bridge ahead is out.
";

    let store = read_text_from_string(content).unwrap();

    Session::with_store(Config::default(), store)
}

#[test]
fn overrides_replace_earlier_overrides() {
    let mut session = session();

    session.add_override("NeutralDialogue", "X");
    session.add_override("NeutralDialogue", "Y");

    assert_eq!(session.get_text("NeutralDialogue").unwrap().as_deref(), Some("Y"));
}

#[test]
fn overrides_can_refer_to_other_keys() {
    let mut session = session();

    session.add_override("NeutralDialogue", TextSource::key("EvilDialogue"));

    assert_eq!(
        session.get_text("NeutralDialogue").unwrap().as_deref(),
        Some("Get lost.")
    );
}

#[test]
fn overrides_referring_to_missing_keys_are_errors() {
    let mut session = session();

    session.add_override("NeutralDialogue", TextSource::key("Nothing"));

    assert_eq!(
        session.get_text("NeutralDialogue"),
        Err(ConfigError::UnknownKeyReference {
            key: "Nothing".to_string()
        })
    );
}

#[test]
fn block_text_finds_keys_by_substring_in_sorted_order() {
    let session = session();

    assert_eq!(
        session.block_text("Quest", 0, None),
        &["Quest 1", "Quest 2", "Quest 3"]
    );
    assert_eq!(session.block_text("Quest", 1, Some(1)), &["Quest 2"]);
}

#[test]
fn unsorted_block_text_keeps_order_of_reading() {
    let session = session();

    assert_eq!(
        session.block_text_unsorted("Quest", 0, None),
        &["Quest 1", "Quest 3", "Quest 2"]
    );
}

#[test]
fn block_text_can_match_a_regex() {
    let session = session();
    let pattern = Regex::new(r"Dialogue$").unwrap();

    assert_eq!(
        session.block_text(pattern, 0, None),
        &["EvilDialogue", "NeutralDialogue"]
    );
}

#[test]
fn default_choice_past_the_last_choice_is_a_cancel_branch() {
    let session = session();

    let layout = session.wrap_choices("Shop", &measure).unwrap().unwrap();

    assert_eq!(layout.cancel, CancelBehavior::Branch(2));
    assert_eq!(layout.cancel.index(), Some(2));
    assert_eq!(layout.window_height_lines, 2);
}

#[test]
fn colors_carry_over_wrapped_lines() {
    let config = Config {
        message_width: 20,
        ..Config::default()
    };
    let store = session().store().clone();
    let session = Session::with_store(config, store);

    let lines = session.wrap_scrolling("Warning", &measure).unwrap().unwrap();

    assert_eq!(
        lines,
        &[
            "\\c[2]Danger! The bridge",
            "\\c[2]ahead is out."
        ]
    );
}

struct ChannelWindow {
    sender: Sender<Message>,
}

impl MessageWindow for ChannelWindow {
    type Completion = Receiver<()>;

    fn display(&mut self, message: Message) -> Receiver<()> {
        let (done, completion) = channel();

        self.sender.send(message).unwrap();
        done.send(()).unwrap();

        completion
    }
}

#[test]
fn shown_text_completes_through_the_window() {
    let session = session();
    let (sender, messages) = channel();
    let mut window = ChannelWindow { sender };

    let completion = session
        .show_text("EvilDialogue", &measure, &NoFaces, &mut window)
        .unwrap();

    completion.recv().unwrap();

    let message = messages.recv().unwrap();
    assert_eq!(message.lines, &["Get lost."]);
    assert_eq!(message.face, None);
}
