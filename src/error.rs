use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for textfmt
///
/// None of the text operations fail. Errors only come from the edges where a
/// host hands the crate something to interpret: a locale tag or a TOML
/// defaults document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid locale tag: {0:?}")]
    InvalidLocale(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale(tag.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::invalid_locale("12").to_string(),
            "Invalid locale tag: \"12\""
        );
        assert_eq!(
            Error::config("bad key").to_string(),
            "Configuration error: bad key"
        );
    }
}
