use external_text::*;

use std::sync::Arc;
use std::thread;

#[test]
fn sessions_can_be_moved_between_threads() {
    let content = "\
[Key] Intro
Mont Blanc was a world-renowned mountain guide.
";

    let store = read_text_from_string(content).unwrap();
    let mut session = Session::with_store(Config::default(), store);

    let handle = thread::spawn(move || {
        session.add_override("Intro", "He befriended thousands of climbers.");
        session
    });

    let session = handle.join().unwrap();

    assert_eq!(
        session.get_text("Intro").unwrap().as_deref(),
        Some("He befriended thousands of climbers.")
    );
}

#[test]
fn sessions_can_be_shared_between_threads() {
    let store = read_text_from_string("[Key] Intro\nHello [line]World").unwrap();
    let session = Arc::new(Session::with_store(Config::default(), store));

    let handles = (0..4)
        .map(|_| {
            let session = Arc::clone(&session);

            thread::spawn(move || {
                let measure = |text: &str| text.chars().count() as u32;
                session.wrap_scrolling("Intro", &measure).unwrap().unwrap()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), &["Hello", "World"]);
    }
}
