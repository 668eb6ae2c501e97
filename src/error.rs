//! Error types for the site.
//!
//! Every failure here is scoped to a single user action; callers surface or
//! log them and carry on.

use thiserror::Error;

/// The main error type for site operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input was not a well-formed absolute URL.
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        /// The (trimmed) input that failed to parse.
        input: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The key-value store could not be read or written.
    #[error("storage unavailable: {message}")]
    Storage {
        /// Description of what went wrong.
        message: String,
    },

    /// A required page element is missing or has the wrong type.
    #[error("missing page element #{id}")]
    MissingElement {
        /// Element id that was looked up.
        id: &'static str,
    },

    /// The post sequence could not be serialized.
    #[error("failed to serialize posts: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a storage error from any displayable cause.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Result alias for site operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = Error::InvalidUrl {
            input: "nope".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert_eq!(err.to_string(), "invalid URL 'nope': relative URL without a base");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_storage_display() {
        let err = Error::storage("quota exceeded");
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");
    }

    #[test]
    fn test_missing_element_display() {
        let err = Error::MissingElement { id: "feed" };
        assert_eq!(err.to_string(), "missing page element #feed");
    }
}
