//! Defaults for the optional parameters
//!
//! Hosts that want different labels, fills or locale everywhere can keep
//! one [`TextConfig`] and call its methods instead of passing the same
//! arguments at every call site. The config is a plain value; nothing is
//! read from files or the environment by this crate.
//!
//! ```toml
//! yes_label = "Ja"
//! no_label = "Nein"
//! fill = "…"
//! keep_end = 6
//! locale = "tr-TR"
//! ```

use crate::case::{self, Locale};
use crate::error::{Error, Result};
use crate::labels::{NO, YES};
use crate::parsing::{self, DEFAULT_EXTENSION};
use crate::truncate::{self, DEFAULT_FILL, DEFAULT_KEEP_END};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    #[serde(default = "default_yes_label")]
    pub yes_label: String,

    #[serde(default = "default_no_label")]
    pub no_label: String,

    #[serde(default = "default_fill")]
    pub fill: String,

    #[serde(default = "default_keep_end")]
    pub keep_end: usize,

    #[serde(default = "default_extension")]
    pub default_extension: String,

    #[serde(default)]
    pub locale: Locale,
}

fn default_yes_label() -> String {
    YES.to_string()
}
fn default_no_label() -> String {
    NO.to_string()
}
fn default_fill() -> String {
    DEFAULT_FILL.to_string()
}
fn default_keep_end() -> usize {
    DEFAULT_KEEP_END
}
fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            yes_label: default_yes_label(),
            no_label: default_no_label(),
            fill: default_fill(),
            keep_end: default_keep_end(),
            default_extension: default_extension(),
            locale: Locale::default(),
        }
    }
}

impl TextConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TextConfig = toml::from_str(content).map_err(|e| {
            Error::config(format!("Failed to parse text config: {}. Check TOML syntax.", e))
        })?;

        config.validate()?;

        log::debug!(
            "Loaded text config (locale: {}, fill: {:?})",
            config.locale,
            config.fill
        );

        Ok(config)
    }

    /// Check the values a TOML document can get wrong
    pub fn validate(&self) -> Result<()> {
        if self.default_extension.trim().is_empty() {
            return Err(Error::config("default_extension cannot be blank"));
        }

        Ok(())
    }

    pub fn yes_no(&self, flag: bool) -> String {
        crate::labels::yes_no_with(flag, &self.yes_label, &self.no_label)
    }

    pub fn title_case(&self, text: Option<&str>) -> String {
        case::title_case(text, self.locale)
    }

    pub fn extension_or_default(&self, filename: Option<&str>) -> String {
        parsing::extension_or_default(filename, &self.default_extension)
    }

    pub fn truncate_middle(&self, text: Option<&str>, max_length: usize) -> String {
        truncate::truncate_middle(text, max_length, &self.fill, self.keep_end)
    }

    pub fn truncate_end(&self, text: Option<&str>, max_length: usize) -> String {
        truncate::truncate_end(text, max_length, &self.fill)
    }

    pub fn truncate_start(&self, text: Option<&str>, max_length: usize) -> String {
        truncate::truncate_start(text, max_length, &self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TextConfig::default();
        assert_eq!(config.yes_label, "Yes");
        assert_eq!(config.no_label, "No");
        assert_eq!(config.fill, "...");
        assert_eq!(config.keep_end, 10);
        assert_eq!(config.default_extension, "txt");
        assert_eq!(config.locale, Locale::Root);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(TextConfig::from_toml_str("").unwrap(), TextConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = TextConfig::from_toml_str(
            r#"
            yes_label = "Ja"
            no_label = "Nein"
            keep_end = 6
            locale = "tr-TR"
            "#,
        )
        .unwrap();

        assert_eq!(config.yes_no(true), "Ja");
        assert_eq!(config.yes_no(false), "Nein");
        assert_eq!(config.fill, "...");
        assert_eq!(config.locale, Locale::Turkic);
        assert_eq!(config.title_case(Some("istanbul")), "İstanbul");
        assert_eq!(
            config.truncate_middle(Some("FromBeginningWithAMiddleThatIsThereAndGetsToTheEnd"), 20),
            "FromBeginni...TheEnd"
        );
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            TextConfig::from_toml_str("locale = \"42\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TextConfig::from_toml_str("unknown = 1"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TextConfig::from_toml_str("default_extension = \" \""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_config_truncation_uses_fill() {
        let config = TextConfig {
            fill: "…".to_string(),
            ..TextConfig::default()
        };
        assert_eq!(config.truncate_end(Some("abcdefgh"), 4), "abc…");
        assert_eq!(config.truncate_start(Some("abcdefgh"), 4), "…fgh");
        assert_eq!(config.extension_or_default(Some("notes")), "txt");
    }
}
