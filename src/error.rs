// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Data(DataError),
}

/// Specific error types for data-service failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Requested record does not exist (post, list, business).
    NotFound(String),

    /// A draft post failed validation before submission.
    InvalidDraft(String),

    /// The backing store rejected the operation.
    Unavailable(String),
}

impl DataError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DataError::NotFound(_) => "error-data-not-found",
            DataError::InvalidDraft(_) => "error-data-invalid-draft",
            DataError::Unavailable(_) => "error-data-unavailable",
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::NotFound(what) => write!(f, "Not found: {}", what),
            DataError::InvalidDraft(reason) => write!(f, "Invalid draft: {}", reason),
            DataError::Unavailable(reason) => write!(f, "Service unavailable: {}", reason),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Data(e) => write!(f, "Data Error: {}", e),
        }
    }
}

impl From<DataError> for Error {
    fn from(err: DataError) -> Self {
        Error::Data(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn data_error_wraps_into_error() {
        let err: Error = DataError::NotFound("list l9".into()).into();
        match err {
            Error::Data(DataError::NotFound(what)) => assert!(what.contains("l9")),
            _ => panic!("expected Data variant"),
        }
    }

    #[test]
    fn data_error_i18n_keys() {
        assert_eq!(
            DataError::NotFound(String::new()).i18n_key(),
            "error-data-not-found"
        );
        assert_eq!(
            DataError::InvalidDraft(String::new()).i18n_key(),
            "error-data-invalid-draft"
        );
        assert_eq!(
            DataError::Unavailable(String::new()).i18n_key(),
            "error-data-unavailable"
        );
    }

    #[test]
    fn data_error_display() {
        let err = DataError::InvalidDraft("missing business".to_string());
        assert!(format!("{}", err).contains("missing business"));
    }
}
