//! Blank checks and blank-to-default conversions
//!
//! "Blank" means absent, empty, or whitespace only. Whitespace follows
//! Unicode `White_Space`, the same set `str::trim` removes.
//!
//! All functions take `Option<&str>` so that a missing value and an empty
//! one go through the same code path. For method syntax see
//! [`TextExt`](crate::TextExt).

/// Check whether text is absent or contains only whitespace
///
/// # Example
/// ```rust,ignore
/// assert!(is_blank(None));
/// assert!(is_blank(Some(" \t\n")));
/// assert!(!is_blank(Some("q")));
/// ```
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

/// Negation of [`is_blank`]
pub fn is_not_blank(text: Option<&str>) -> bool {
    !is_blank(text)
}

/// Same contract as [`is_not_blank`]; reads better in some call sites
///
/// ```rust,ignore
/// if has_value(form.get("email")) { ... }
/// ```
pub fn has_value(text: Option<&str>) -> bool {
    !is_blank(text)
}

/// Return `default` when text is blank, otherwise the text as given
///
/// The original text is returned untrimmed.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(default_if_blank(Some("  "), "n/a"), "n/a");
/// assert_eq!(default_if_blank(Some(" x "), "n/a"), " x ");
/// ```
pub fn default_if_blank(text: Option<&str>, default: &str) -> String {
    match text {
        Some(t) if !is_blank(text) => t.to_string(),
        _ => default.to_string(),
    }
}

/// Trim surrounding whitespace, mapping absent text to an empty string
pub fn trim_or_empty(text: Option<&str>) -> String {
    text.map(str::trim).unwrap_or_default().to_string()
}

/// Return an empty string for absent or zero-length text
///
/// Whitespace-only text is *not* blank here and comes back unchanged. Use
/// [`blank_if_whitespace`] to also clear whitespace-only values.
pub fn blank_if_empty(text: Option<&str>) -> String {
    text.unwrap_or_default().to_string()
}

/// Return an empty string for absent or whitespace-only text
///
/// Non-blank text is returned untrimmed.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(blank_if_whitespace(Some("   ")), "");
/// assert_eq!(blank_if_whitespace(Some(" abc")), " abc");
/// ```
pub fn blank_if_whitespace(text: Option<&str>) -> String {
    default_if_blank(text, "")
}

/// Wrap a single value in a list, dropping blank values
///
/// # Example
/// ```rust,ignore
/// assert_eq!(single_item_list(Some("Default Item")), vec!["Default Item"]);
/// assert!(single_item_list(Some(" ")).is_empty());
/// ```
pub fn single_item_list(text: Option<&str>) -> Vec<String> {
    match text {
        Some(t) if !is_blank(text) => vec![t.to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t\r\n\u{3000}")));
        assert!(!is_blank(Some("q")));
        assert!(!is_blank(Some("  q  ")));
    }

    #[test]
    fn test_not_blank_variants_agree() {
        for text in [None, Some(""), Some(" "), Some("q"), Some("This is a string")] {
            assert_eq!(is_not_blank(text), !is_blank(text));
            assert_eq!(has_value(text), is_not_blank(text));
        }
    }

    #[test]
    fn test_default_if_blank() {
        assert_eq!(default_if_blank(None, "default_val"), "default_val");
        assert_eq!(default_if_blank(Some(""), "default_val"), "default_val");
        assert_eq!(default_if_blank(Some("  "), "default_val"), "default_val");
        assert_eq!(default_if_blank(Some("test1"), "default_val"), "test1");
        assert_eq!(default_if_blank(Some(" t "), "default_val"), " t ");
    }

    #[test]
    fn test_trim_or_empty() {
        assert_eq!(trim_or_empty(None), "");
        assert_eq!(trim_or_empty(Some(" ")), "");
        assert_eq!(trim_or_empty(Some(" test1 ")), "test1");
        assert_eq!(trim_or_empty(Some("test2 ")), "test2");
        assert_eq!(trim_or_empty(Some(" test3")), "test3");
    }

    #[test]
    fn test_blank_if_empty_keeps_whitespace() {
        assert_eq!(blank_if_empty(None), "");
        assert_eq!(blank_if_empty(Some("")), "");
        assert_eq!(blank_if_empty(Some(" ")), " ");
        assert_eq!(blank_if_empty(Some("abc")), "abc");
    }

    #[test]
    fn test_blank_if_whitespace() {
        assert_eq!(blank_if_whitespace(None), "");
        assert_eq!(blank_if_whitespace(Some("")), "");
        assert_eq!(blank_if_whitespace(Some(" ")), "");
        assert_eq!(blank_if_whitespace(Some("abc")), "abc");
        assert_eq!(blank_if_whitespace(Some(" abc ")), " abc ");
    }

    #[test]
    fn test_single_item_list() {
        assert!(single_item_list(None).is_empty());
        assert!(single_item_list(Some("")).is_empty());
        assert!(single_item_list(Some("  \t")).is_empty());
        assert_eq!(single_item_list(Some("Default Item")), vec!["Default Item"]);
        assert_eq!(single_item_list(Some(" padded ")), vec![" padded "]);
    }
}
