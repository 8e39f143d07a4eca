//! textfmt - small string and boolean formatting helpers
//!
//! Every function in this crate is pure and total: absent input, blank
//! input, unparsable numbers and impossible truncation widths all degrade to
//! a documented default instead of failing.
//!
//! - Yes/No labels for booleans
//! - Blank checks and blank-to-default conversions
//! - Suffix, extension and integer helpers
//! - Title case and sentence case with explicit locale rules
//! - Whitespace and line-ending normalization, word counting
//! - Truncation from the end, the start or the middle
//!
//! # Usage
//! ```rust
//! use textfmt::{truncate_middle, TextExt, YesNo};
//!
//! assert_eq!(true.to_yes_no(), "Yes");
//! assert!("   ".is_blank());
//! assert_eq!(
//!     truncate_middle(Some("FromBeginningWithAMiddleThatIsThereAndGetsToTheEnd"), 20, "...", 10),
//!     "FromBeg...tsToTheEnd"
//! );
//! ```

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod blank;
pub mod case;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod ext;
pub mod labels;
pub mod parsing;
pub mod truncate;
pub mod whitespace;

pub use blank::{
    blank_if_empty, blank_if_whitespace, default_if_blank, has_value, is_blank, is_not_blank,
    single_item_list, trim_or_empty,
};
pub use case::{sentence_case, title_case, Locale};
#[cfg(feature = "config")]
pub use config::TextConfig;
pub use error::{Error, Result};
pub use ext::{TextExt, YesNo};
pub use labels::{yes_no, yes_no_with};
pub use parsing::{
    extension_or_default, join_csv, parse_int_or_default, strip_suffix, CsvField, DEFAULT_EXTENSION,
};
pub use truncate::{
    truncate, truncate_end, truncate_middle, truncate_start, DEFAULT_FILL, DEFAULT_KEEP_END,
};
pub use whitespace::{
    collapse_whitespace, normalize_line_endings, normalize_line_endings_to, word_count,
    NATIVE_LINE_ENDING,
};
