//! Safe parsing and extraction helpers
//!
//! These functions never fail. When the input cannot be interpreted they
//! return a default value, which makes them suitable for user input, file
//! names and form data.

use crate::blank::is_blank;

/// Extension returned by [`extension_or_default`] when none can be extracted
pub const DEFAULT_EXTENSION: &str = "txt";

/// Remove a suffix from the end of a string
///
/// Matching is ordinal and case sensitive.
///
/// * Blank `text` gives an empty string.
/// * A blank `suffix`, or text not ending in `suffix`, gives `text` unchanged.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(strip_suffix(Some("test.pdf"), ".pdf"), "test");
/// assert_eq!(strip_suffix(Some("test.pdf"), "pdf"), "test.");
/// assert_eq!(strip_suffix(Some("test.txt"), "pdf"), "test.txt");
/// ```
pub fn strip_suffix(text: Option<&str>, suffix: &str) -> String {
    let text = match text {
        Some(t) if !is_blank(text) => t,
        _ => return String::new(),
    };

    if is_blank(Some(suffix)) {
        return text.to_string();
    }

    text.strip_suffix(suffix).unwrap_or(text).to_string()
}

/// Parse a string to a 32-bit integer with default value
///
/// Surrounding whitespace and a leading `+` or `-` are accepted. Anything
/// else that is not a decimal integer in `i32` range yields `default`.
///
/// # Arguments
/// * `text` - String to parse
/// * `default` - Default value if parsing fails
///
/// # Example
/// ```rust,ignore
/// assert_eq!(parse_int_or_default(Some("12"), -1), 12);
/// assert_eq!(parse_int_or_default(Some("twelve"), -1), -1);
/// assert_eq!(parse_int_or_default(None, -1), -1);
/// ```
pub fn parse_int_or_default(text: Option<&str>, default: i32) -> i32 {
    let Some(text) = text else {
        return default;
    };

    match text.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            log::trace!("Falling back to {} for unparsable integer {:?}: {}", default, text, e);
            default
        }
    }
}

/// A value that can be written as one CSV segment
///
/// Absent values (`None`) are written as empty segments.
pub trait CsvField {
    fn as_field(&self) -> &str;
}

impl CsvField for &str {
    fn as_field(&self) -> &str {
        self
    }
}

impl CsvField for String {
    fn as_field(&self) -> &str {
        self
    }
}

impl CsvField for &String {
    fn as_field(&self) -> &str {
        self
    }
}

impl CsvField for Option<&str> {
    fn as_field(&self) -> &str {
        self.unwrap_or_default()
    }
}

impl CsvField for Option<String> {
    fn as_field(&self) -> &str {
        self.as_deref().unwrap_or_default()
    }
}

/// Join values with `,`
///
/// No quoting or escaping is applied; each value is written as is.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(join_csv(["A", "B"]), "A,B");
/// assert_eq!(join_csv([Some("A"), None, Some("C")]), "A,,C");
/// assert_eq!(join_csv(Vec::<String>::new()), "");
/// ```
pub fn join_csv<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: CsvField,
{
    let mut result = String::new();

    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            result.push(',');
        }
        result.push_str(item.as_field());
    }

    result
}

/// Extract a three letter file extension, or `"jpeg"`
///
/// Takes everything after the last `.` and lower-cases it. `"jpeg"` is
/// accepted as is; any other extension must be exactly three characters
/// long. In every other case `default` is returned.
///
/// # Arguments
/// * `filename` - File name or path to inspect
/// * `default` - Extension to return when none is usable (usually [`DEFAULT_EXTENSION`])
///
/// # Example
/// ```rust,ignore
/// assert_eq!(extension_or_default(Some("image sample.jpeg"), "txt"), "jpeg");
/// assert_eq!(extension_or_default(Some("Report.PDF"), "txt"), "pdf");
/// assert_eq!(extension_or_default(Some("sample."), "txt"), "txt");
/// assert_eq!(extension_or_default(Some("archive.tar.gz"), "txt"), "txt");
/// ```
pub fn extension_or_default(filename: Option<&str>, default: &str) -> String {
    let filename = match filename {
        Some(f) if !is_blank(filename) => f,
        _ => return default.to_string(),
    };

    let Some(index) = filename.rfind('.') else {
        return default.to_string();
    };

    let extension = filename[index + 1..].to_lowercase();

    if extension == "jpeg" {
        return extension;
    }

    if extension.chars().count() != 3 {
        log::trace!(
            "Extension {:?} of {:?} is not three characters, using {:?}",
            extension,
            filename,
            default
        );
        return default.to_string();
    }

    extension
}
