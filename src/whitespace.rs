//! Whitespace and line-ending normalization
//!
//! Whitespace means Unicode `White_Space` throughout, which is what both
//! `char::is_whitespace` and the regex `\s` class match.

use crate::blank::is_blank;
use once_cell::sync::Lazy;
use regex::Regex;

/// Line ending used by [`normalize_line_endings`] on this platform
#[cfg(windows)]
pub const NATIVE_LINE_ENDING: &str = "\r\n";

/// Line ending used by [`normalize_line_endings`] on this platform
#[cfg(not(windows))]
pub const NATIVE_LINE_ENDING: &str = "\n";

/// Escaped line-ending markers, longest first
const CRLF_MARKER: &str = r"\r\n";
const CR_MARKER: &str = r"\r";
const LF_MARKER: &str = r"\n";

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace: invalid run pattern"));

/// Replace escaped line-ending markers with the native line ending
///
/// The markers are the literal backslash sequences `\r\n`, `\r` and `\n`
/// as they appear in JSON dumps or single-line log fields, not control
/// characters. They are replaced in that order, so `\r\n` becomes one line
/// break rather than two.
///
/// Blank input gives an empty string.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(
///     normalize_line_endings(Some(r"This is a test. \r\n")),
///     format!("This is a test. {}", NATIVE_LINE_ENDING)
/// );
/// ```
pub fn normalize_line_endings(text: Option<&str>) -> String {
    normalize_line_endings_to(text, NATIVE_LINE_ENDING)
}

/// Same as [`normalize_line_endings`] with an explicit target line ending
pub fn normalize_line_endings_to(text: Option<&str>, line_ending: &str) -> String {
    let text = match text {
        Some(t) if !is_blank(text) => t,
        _ => return String::new(),
    };

    text.replace(CRLF_MARKER, LF_MARKER)
        .replace(CR_MARKER, LF_MARKER)
        .replace(LF_MARKER, line_ending)
}

/// Replace every run of whitespace with a single space
///
/// Leading and trailing runs are collapsed too, not removed.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(collapse_whitespace(Some("This  is \t\n a  test.")), "This is a test.");
/// ```
pub fn collapse_whitespace(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !is_blank(text) => t,
        _ => return String::new(),
    };

    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Count words in a string
///
/// A word is any run of non-whitespace characters, so punctuation attached
/// to a word does not count separately.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(word_count(Some("Hello world, this is a test!")), 6);
/// assert_eq!(word_count(None), 0);
/// ```
pub fn word_count(text: Option<&str>) -> usize {
    text.map_or(0, |t| t.split_whitespace().count())
}
