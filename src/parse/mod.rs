//! Parsing of tagged text files into records.
//!
//! A text file is a sequence of tag lines and text lines:
//!
//! ```plain
//! # Comments start with '#' or '//'
//! [Key] Intro 1
//! [FName] Ralph
//! [Position] Top
//! Welcome to the village!
//! It's not much, but it's home.
//! ```
//!
//! Each `[Key]` line starts a new record. Tag lines which follow set the record's face,
//! name and display settings. All other lines are added to the record's text.

mod parser;
pub mod tags;

pub use parser::{read_text_from_dir, read_text_from_string, TextParser};
pub use tags::{tag_handler, TagContext, TagHandler, TagMatcher, TagSet};
