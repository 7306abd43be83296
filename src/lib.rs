//! Dialogue and other game text kept in plain text files.
//!
//! Text is written in files of tagged records, one record per key:
//!
//! ```plain
//! [Key] Intro 1
//! [Face] Actor1, 0
//! [Name] Ralph
//! Welcome to the village!
//! It's not much, but it's home.
//!
//! [Key] Shop
//! [Default Choice] 3
//! Buy
//! Sell
//! ```
//!
//! The files are [read][crate::parse] into a [`KeyStore`], which a [`Session`] uses to
//! look up text by key. While playing, the text of a key can be
//! [overridden][Session::add_override()] by other text, eg. when a character changes
//! their mind. Text is then [wrapped][wrap_text()] into lines which fit a message box,
//! or [laid out][ChoiceLayoutEngine] as a set of choices.
//!
//! # Example
//! ```
//! # use external_text::{read_text_from_string, Config, Session};
//! let content = "\
//! [Key] Greeting
//! [Name] Ralph
//! Welcome to the village! It's not much, but it's home.
//! ";
//!
//! let store = read_text_from_string(content).unwrap();
//! let session = Session::with_store(Config::default(), store);
//!
//! // Text is measured by the host, here one unit per character
//! let measure = |text: &str| text.chars().count() as u32;
//!
//! let lines = session.wrap_scrolling("Greeting", &measure).unwrap().unwrap();
//! assert_eq!(lines, &["Welcome to the village! It's not much, but it's home."]);
//! ```
//!
//! # Inline codes
//! Text can contain the host's inline codes, eg. `\c[2]` to change the text color. Codes
//! take no width when wrapping and colors carry over to the next line when a colored
//! text is wrapped. The code `\t[key]` is replaced by the current text of another key.
//!
//! # Features
//! *   `serde_support`: derives `Deserialize` and `Serialize` for records, stores and
//!     configuration.

#[macro_use]
pub mod error;

mod choice;
mod config;
mod consts;
pub mod database;
pub mod escape;
mod faces;
pub mod language;
pub mod log;
mod overrides;
pub mod parse;
mod record;
mod session;
mod store;
pub mod wrap;

pub use choice::{CancelBehavior, ChoiceEntry, ChoiceLayout, ChoiceLayoutEngine};
pub use config::{Config, NameStyle};
pub use faces::{FaceLookup, FaceRegistry, NoFaces};
pub use overrides::{OverrideResolver, OverrideTable, TextSource};
pub use parse::{read_text_from_dir, read_text_from_string, TagSet, TextParser};
pub use record::{Background, FaceImage, FaceSource, Position, TextRecord};
pub use session::{Message, MessageWindow, Session};
pub use store::{KeyPattern, KeyStore};
pub use wrap::{wrap_text, Measure, MonospaceMeasure, WrapOptions};
