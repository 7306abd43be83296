//! Inline text codes.
//!
//! Codes are written as a backslash, a single letter and an optional argument in square
//! brackets, eg. `\c[2]` to change the text color. A double backslash is a literal
//! backslash. Codes take no space when text is measured.

use crate::consts::ESCAPE_CHAR;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use std::borrow::Cow;

/// Any code, or an escaped backslash.
static CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\\\|\\\w(?:\[\w+\])?").expect("code regex should compile"));

/// Color codes, or an escaped backslash.
static COLOR_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\\\|(?i:\\c(?:\[\w+\])?)").expect("color code regex should compile")
});

/// Text codes which refer to other keys, or an escaped backslash.
static TEXT_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\\\|(?i:\\t\[([^\]]+)\])").expect("text code regex should compile")
});

fn is_escaped_backslash(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c == ESCAPE_CHAR)
}

/// Remove all codes from text, leaving what would be visible on screen.
///
/// # Examples
/// ```
/// # use external_text::escape::strip_codes;
/// assert_eq!(strip_codes(r"\c[2]Ralph\c[0] waves."), "Ralph waves.");
/// assert_eq!(strip_codes(r"C:\\Games"), r"C:\Games");
/// ```
pub fn strip_codes(text: &str) -> Cow<str> {
    if !text.contains(ESCAPE_CHAR) {
        return Cow::Borrowed(text);
    }

    CODE.replace_all(text, |captures: &Captures| {
        if is_escaped_backslash(&captures[0]) {
            ESCAPE_CHAR.to_string()
        } else {
            String::new()
        }
    })
}

/// Get the last color code in a piece of text, if any.
///
/// # Examples
/// ```
/// # use external_text::escape::last_color_code;
/// assert_eq!(last_color_code(r"\c[2]red\c[3]green"), Some(r"\c[3]"));
/// assert_eq!(last_color_code("plain"), None);
/// ```
pub fn last_color_code(text: &str) -> Option<&str> {
    if !text.contains(ESCAPE_CHAR) {
        return None;
    }

    COLOR_CODE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|code| !is_escaped_backslash(code))
        .last()
}

/// Replace `\t[key]` codes with the raw text of the referenced key.
///
/// References are not expanded recursively. Keys which cannot be found are replaced
/// with a message naming the key, so that the mistake is visible in game.
pub fn expand_text_codes<F>(text: &str, lookup: F) -> Cow<str>
where
    F: Fn(&str) -> Option<String>,
{
    if !text.contains(ESCAPE_CHAR) {
        return Cow::Borrowed(text);
    }

    TEXT_CODE.replace_all(text, |captures: &Captures| match captures.get(1) {
        Some(key) => lookup(key.as_str()).unwrap_or_else(|| {
            format!("Invalid key [{}]. No matching text exists.", key.as_str())
        }),
        None => captures[0].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_with_and_without_arguments_are_stripped() {
        assert_eq!(strip_codes(r"\n[1] paid 10\G."), " paid 10.");
        assert_eq!(strip_codes(r"\C[15]Loud\c"), "Loud");
    }

    #[test]
    fn text_without_codes_is_borrowed() {
        assert!(matches!(strip_codes("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn escaped_backslash_does_not_start_a_color_code() {
        assert_eq!(last_color_code(r"\\c[2]"), None);
        assert_eq!(last_color_code(r"\\\c[2]"), Some(r"\c[2]"));
    }

    #[test]
    fn color_codes_are_found_case_insensitively() {
        assert_eq!(last_color_code(r"\C[4]Shout"), Some(r"\C[4]"));
    }

    #[test]
    fn text_codes_are_replaced_by_lookup() {
        let lookup = |key: &str| match key {
            "Town" => Some("Riverside".to_string()),
            _ => None,
        };

        assert_eq!(
            expand_text_codes(r"Welcome to \t[Town]!", lookup),
            "Welcome to Riverside!"
        );
    }

    #[test]
    fn unknown_text_codes_name_the_missing_key() {
        let expanded = expand_text_codes(r"\T[Nowhere] and \t[Town]", |_| None);

        assert_eq!(
            expanded,
            "Invalid key [Nowhere]. No matching text exists. and \
             Invalid key [Town]. No matching text exists."
        );
    }
}
