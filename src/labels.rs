//! Boolean label helpers
//!
//! Turns a flag into a human readable label for listings and reports.

/// Label used for `true` by [`yes_no`]
pub const YES: &str = "Yes";

/// Label used for `false` by [`yes_no`]
pub const NO: &str = "No";

/// Convert a flag to `"Yes"` or `"No"`
///
/// # Example
/// ```rust,ignore
/// assert_eq!(yes_no(true), "Yes");
/// assert_eq!(yes_no(false), "No");
/// ```
pub fn yes_no(flag: bool) -> String {
    yes_no_with(flag, YES, NO)
}

/// Convert a flag to one of two caller supplied labels
///
/// # Arguments
/// * `flag` - Value to convert
/// * `yes` - Label returned for `true`
/// * `no` - Label returned for `false`
///
/// # Example
/// ```rust,ignore
/// assert_eq!(yes_no_with(false, "Ok", "Cancel"), "Cancel");
/// ```
pub fn yes_no_with(flag: bool, yes: &str, no: &str) -> String {
    let label = if flag { yes } else { no };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_defaults() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_yes_no_with_custom_labels() {
        let cases = vec![
            (true, "Positive", "Negative", "Positive"),
            (true, "Ok", "Cancel", "Ok"),
            (false, "Positive", "Negative", "Negative"),
            (false, "Ok", "Cancel", "Cancel"),
        ];

        for (flag, yes, no, expected) in cases {
            assert_eq!(yes_no_with(flag, yes, no), expected);
        }
    }

    #[test]
    fn test_yes_no_with_empty_labels() {
        assert_eq!(yes_no_with(true, "", "No"), "");
    }
}
