//! Length-limited display of text
//!
//! Lengths are counted in characters (Unicode scalar values), never bytes,
//! so truncation cannot split a multi-byte character. Text that already
//! fits is always returned unchanged.

use crate::blank::is_blank;

/// Marker inserted where text was cut
pub const DEFAULT_FILL: &str = "...";

/// Characters [`truncate_middle`] keeps from the end by default
pub const DEFAULT_KEEP_END: usize = 10;

/// Byte offset just past the first `n` characters
fn char_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(offset, _)| offset)
}

/// The first `n` characters of `text`
fn head(text: &str, n: usize) -> &str {
    &text[..char_offset(text, n)]
}

/// The last `n` characters of `text`
fn tail(text: &str, n: usize) -> &str {
    let len = text.chars().count();
    &text[char_offset(text, len.saturating_sub(n))..]
}

/// Non-blank text together with its length in characters
fn measured(text: Option<&str>) -> Option<(&str, usize)> {
    match text {
        Some(t) if !is_blank(text) => Some((t, t.chars().count())),
        _ => None,
    }
}

/// Cut text to at most `max_length` characters
///
/// No marker is appended; use [`truncate_end`] for that.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(truncate(Some("This is a demonstration"), 14), "This is a demo");
/// ```
pub fn truncate(text: Option<&str>, max_length: usize) -> String {
    truncate_end(text, max_length, "")
}

/// Shorten text by cutting out its middle
///
/// Keeps the last `keep_end` characters and as many leading characters as
/// fit, with `fill` in between, for a result of exactly `max_length`
/// characters. When `max_length` leaves no room for a leading part
/// (`max_length <= keep_end + fill` length) the text is returned unchanged.
///
/// # Example
/// ```rust,ignore
/// let text = "FromBeginningWithAMiddleThatIsThereAndGetsToTheEnd";
/// assert_eq!(truncate_middle(Some(text), 20, "...", 10), "FromBeg...tsToTheEnd");
/// ```
pub fn truncate_middle(
    text: Option<&str>,
    max_length: usize,
    fill: &str,
    keep_end: usize,
) -> String {
    let Some((text, len)) = measured(text) else {
        return String::new();
    };

    if len <= max_length {
        return text.to_string();
    }

    let fill_len = fill.chars().count();
    if max_length <= keep_end + fill_len {
        log::trace!(
            "No room to truncate {} chars to {} keeping {} + {:?}",
            len,
            max_length,
            keep_end,
            fill
        );
        return text.to_string();
    }

    let keep_start = max_length - keep_end - fill_len;
    format!("{}{}{}", head(text, keep_start), fill, tail(text, keep_end))
}

/// Shorten text by cutting its end, appending `fill`
///
/// The result is `max_length` characters long, fill included. If the fill
/// alone is longer than `max_length` the fill is returned.
///
/// # Example
/// ```rust,ignore
/// let text = "FromBeginningWithAMiddleThatIsThereAndGetsToTheEnd";
/// assert_eq!(truncate_end(Some(text), 16, "..."), "FromBeginning...");
/// ```
pub fn truncate_end(text: Option<&str>, max_length: usize, fill: &str) -> String {
    let Some((text, len)) = measured(text) else {
        return String::new();
    };

    if len <= max_length {
        return text.to_string();
    }

    let keep = kept_length(max_length, fill);
    format!("{}{}", head(text, keep), fill)
}

/// Shorten text by cutting its start, prepending `fill`
///
/// # Example
/// ```rust,ignore
/// let text = "FromBeginningWithAMiddleThatIsThereAndGetsToTheEnd";
/// assert_eq!(truncate_start(Some(text), 18, "..."), "...AndGetsToTheEnd");
/// ```
pub fn truncate_start(text: Option<&str>, max_length: usize, fill: &str) -> String {
    let Some((text, len)) = measured(text) else {
        return String::new();
    };

    if len <= max_length {
        return text.to_string();
    }

    let keep = kept_length(max_length, fill);
    format!("{}{}", fill, tail(text, keep))
}

/// Characters of the original text that fit next to `fill`
fn kept_length(max_length: usize, fill: &str) -> usize {
    let fill_len = fill.chars().count();
    if fill_len > max_length {
        log::trace!("Fill {:?} is longer than {} chars", fill, max_length);
    }
    max_length.saturating_sub(fill_len)
}
