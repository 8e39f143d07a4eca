//! Method syntax for the text helpers
//!
//! [`TextExt`] is implemented for `str`, `String`, `Option<&str>` and
//! `Option<String>`, so optional form fields and plain strings read the
//! same way at the call site:
//!
//! ```rust
//! use textfmt::TextExt;
//!
//! let missing: Option<&str> = None;
//! assert!(missing.is_blank());
//! assert_eq!("report.PDF".extension_or("txt"), "pdf");
//! assert_eq!(Some("a  b").collapse_whitespace(), "a b");
//! ```
//!
//! Names that would be shadowed by inherent `str`/`String` methods are
//! changed: `remove_suffix` instead of `strip_suffix`, `truncated*` instead
//! of `truncate*`.

use crate::case::Locale;
use crate::truncate::{DEFAULT_FILL, DEFAULT_KEEP_END};
use crate::{blank, case, labels, parsing, truncate, whitespace};

/// Yes/No labels for `bool`
pub trait YesNo {
    fn to_yes_no(&self) -> String;
    fn to_yes_no_with(&self, yes: &str, no: &str) -> String;
}

impl YesNo for bool {
    fn to_yes_no(&self) -> String {
        labels::yes_no(*self)
    }

    fn to_yes_no_with(&self, yes: &str, no: &str) -> String {
        labels::yes_no_with(*self, yes, no)
    }
}

/// Text helpers as methods on possibly-absent text
pub trait TextExt {
    /// The text, or `None` when absent
    fn as_text(&self) -> Option<&str>;

    fn is_blank(&self) -> bool {
        blank::is_blank(self.as_text())
    }

    fn is_not_blank(&self) -> bool {
        blank::is_not_blank(self.as_text())
    }

    fn has_value(&self) -> bool {
        blank::has_value(self.as_text())
    }

    fn default_if_blank(&self, default: &str) -> String {
        blank::default_if_blank(self.as_text(), default)
    }

    fn trim_or_empty(&self) -> String {
        blank::trim_or_empty(self.as_text())
    }

    fn blank_if_empty(&self) -> String {
        blank::blank_if_empty(self.as_text())
    }

    fn blank_if_whitespace(&self) -> String {
        blank::blank_if_whitespace(self.as_text())
    }

    fn single_item_list(&self) -> Vec<String> {
        blank::single_item_list(self.as_text())
    }

    fn remove_suffix(&self, suffix: &str) -> String {
        parsing::strip_suffix(self.as_text(), suffix)
    }

    fn parse_int_or(&self, default: i32) -> i32 {
        parsing::parse_int_or_default(self.as_text(), default)
    }

    /// Extension or `default`; see [`parsing::extension_or_default`]
    fn extension_or(&self, default: &str) -> String {
        parsing::extension_or_default(self.as_text(), default)
    }

    fn extension_or_txt(&self) -> String {
        parsing::extension_or_default(self.as_text(), parsing::DEFAULT_EXTENSION)
    }

    fn to_title_case(&self, locale: Locale) -> String {
        case::title_case(self.as_text(), locale)
    }

    fn to_sentence_case(&self) -> String {
        case::sentence_case(self.as_text())
    }

    fn normalize_line_endings(&self) -> String {
        whitespace::normalize_line_endings(self.as_text())
    }

    fn collapse_whitespace(&self) -> String {
        whitespace::collapse_whitespace(self.as_text())
    }

    fn word_count(&self) -> usize {
        whitespace::word_count(self.as_text())
    }

    fn truncated(&self, max_length: usize) -> String {
        truncate::truncate(self.as_text(), max_length)
    }

    /// [`truncate::truncate_middle`] with the default fill and keep-end
    fn truncated_middle(&self, max_length: usize) -> String {
        truncate::truncate_middle(self.as_text(), max_length, DEFAULT_FILL, DEFAULT_KEEP_END)
    }

    fn truncated_end(&self, max_length: usize) -> String {
        truncate::truncate_end(self.as_text(), max_length, DEFAULT_FILL)
    }

    fn truncated_start(&self, max_length: usize) -> String {
        truncate::truncate_start(self.as_text(), max_length, DEFAULT_FILL)
    }
}

impl TextExt for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextExt for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextExt for Option<&str> {
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

impl TextExt for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_methods() {
        assert_eq!(true.to_yes_no(), "Yes");
        assert_eq!(false.to_yes_no(), "No");
        assert_eq!(false.to_yes_no_with("Ok", "Cancel"), "Cancel");
    }

    #[test]
    fn test_methods_match_free_functions() {
        let owned = String::from("  hello   world. bye ");
        let some: Option<&str> = Some("test.pdf");
        let none: Option<String> = None;

        assert!(none.is_blank());
        assert!(!none.has_value());
        assert_eq!(none.default_if_blank("x"), "x");
        assert!(none.single_item_list().is_empty());

        assert_eq!(owned.trim_or_empty(), "hello   world. bye");
        assert_eq!(owned.collapse_whitespace(), " hello world. bye ");
        assert_eq!(owned.word_count(), 3);
        assert_eq!(owned.to_sentence_case(), "  Hello   world. Bye ");

        assert_eq!(some.remove_suffix(".pdf"), "test");
        assert_eq!(some.extension_or_txt(), "pdf");
        assert_eq!("42".parse_int_or(0), 42);
        assert_eq!("test this".to_title_case(Locale::Root), "Test This");
    }

    #[test]
    fn test_truncation_methods_use_defaults() {
        let text = "FromBeginningWithAMiddleThatIsThereAndGetsToTheEnd";
        assert_eq!(text.truncated_middle(20), "FromBeg...tsToTheEnd");
        assert_eq!(text.truncated_end(16), "FromBeginning...");
        assert_eq!(text.truncated_start(18), "...AndGetsToTheEnd");
        assert_eq!("This is a demonstration".truncated(14), "This is a demo");
    }
}
