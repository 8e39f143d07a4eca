//! Case conversion
//!
//! Title case and sentence case for headings and labels. Casing that depends
//! on language rules takes an explicit [`Locale`] instead of reading any
//! process-wide setting.

use crate::blank::is_blank;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;

/// Casing rules used by [`title_case`]
///
/// Only languages whose case mappings differ from the Unicode defaults need
/// their own variant. Parse one from a language tag with [`str::parse`]:
///
/// ```rust
/// use textfmt::Locale;
///
/// assert_eq!("tr-TR".parse::<Locale>().unwrap(), Locale::Turkic);
/// assert_eq!("en_US.UTF-8".parse::<Locale>().unwrap(), Locale::Root);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// Unicode default case mapping
    #[default]
    Root,
    /// Turkish and Azerbaijani: dotted and dotless i are distinct letters
    Turkic,
}

impl Locale {
    /// Language tag this locale serializes to
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Root => "und",
            Locale::Turkic => "tr",
        }
    }

    fn push_lowercase(&self, c: char, out: &mut String) {
        match (self, c) {
            (Locale::Turkic, 'I') => out.push('ı'),
            (Locale::Turkic, 'İ') => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }

    fn push_uppercase(&self, c: char, out: &mut String) {
        match (self, c) {
            (Locale::Turkic, 'i') => out.push('İ'),
            _ => out.extend(c.to_uppercase()),
        }
    }

    /// Upper-case form of a word or sentence initial
    ///
    /// Initials map one char to one char: when the full mapping expands
    /// (`ß` to `SS`, `ŉ` to `ʼN`) the character is kept as it is.
    fn upper_initial(&self, c: char) -> char {
        if let (Locale::Turkic, 'i') = (self, c) {
            return 'İ';
        }

        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => c,
        }
    }

    /// Lower-case a whole string with this locale's rules
    pub fn to_lowercase(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_lowercase(c, &mut result);
        }
        result
    }

    /// Upper-case a whole string with this locale's rules
    pub fn to_uppercase(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_uppercase(c, &mut result);
        }
        result
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts BCP 47 tags (`tr-TR`) and POSIX locale names (`tr_TR.UTF-8`)
    fn from_str(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        let name = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        if name.eq_ignore_ascii_case("C") || name.eq_ignore_ascii_case("POSIX") {
            return Ok(Locale::Root);
        }

        let language = name.split(['-', '_']).next().unwrap_or_default();

        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(Error::invalid_locale(tag));
        }

        match language.to_ascii_lowercase().as_str() {
            "tr" | "tur" | "az" | "aze" => Ok(Locale::Turkic),
            _ => Ok(Locale::Root),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Capitalize the first letter of each word
///
/// The text is lower-cased first, then every letter that starts a word is
/// upper-cased, both with the rules of `locale`. A letter starts a word
/// unless it follows another letter, a digit or an apostrophe, so
/// `"i'm"` becomes `"I'm"` and `"test2"` becomes `"Test2"`. Combining
/// marks belong to the word they follow, so decomposed text such as
/// `"e\u{301}cole"` keeps a single capital.
///
/// Blank input gives an empty string.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(title_case(Some("test this sentence"), Locale::Root), "Test This Sentence");
/// assert_eq!(title_case(Some("istanbul"), Locale::Turkic), "İstanbul");
/// ```
pub fn title_case(text: Option<&str>, locale: Locale) -> String {
    let text = match text {
        Some(t) if !is_blank(text) => t,
        _ => return String::new(),
    };

    let lowered = locale.to_lowercase(text);
    let mut result = String::with_capacity(lowered.len());
    let mut in_word = false;

    for c in lowered.chars() {
        if c.is_alphabetic() && !in_word {
            result.push(locale.upper_initial(c));
        } else {
            result.push(c);
        }
        in_word = c.is_alphanumeric() || is_apostrophe(c) || (in_word && is_combining_mark(c));
    }

    result
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Capitalize the first letter of each sentence
///
/// A sentence starts at the beginning of the text and after every `.`, `!`
/// or `?`. Characters that are not letters are skipped while looking for the
/// letter to capitalize. Everything else is left as it is; this is meant
/// for short strings such as headings, not prose.
///
/// The output has as many characters as the input: a letter whose
/// upper-case form is several characters (`ß`) is left unchanged.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(sentence_case(Some("hello. (and) bye")), "Hello. (And) bye");
/// ```
pub fn sentence_case(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !is_blank(text) => t,
        _ => return String::new(),
    };

    let mut result = String::with_capacity(text.len());
    let mut new_sentence = true;

    for c in text.chars() {
        if new_sentence && c.is_alphabetic() {
            result.push(Locale::Root.upper_initial(c));
            new_sentence = false;
        } else {
            result.push(c);
        }

        if is_sentence_end(c) {
            new_sentence = true;
        }
    }

    result
}
