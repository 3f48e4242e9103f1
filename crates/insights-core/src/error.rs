//! Error types for the campaign insights dashboard

use thiserror::Error;

/// Main error type for the campaign insights dashboard
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Chart series whose labels and values are not index-aligned
    #[error("Chart series length mismatch: {labels} labels, {values} values")]
    SeriesLength {
        /// Number of category labels
        labels: usize,
        /// Number of data values
        values: usize,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::configuration(format!("Failed to parse config file: {err}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::uninlined_format_args, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        assert!(matches!(app_error, Error::Io(_)));
        assert!(format!("{}", app_error).contains("I/O error"));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::configuration("page_size must be positive");

        assert_eq!(
            format!("{}", error),
            "Configuration error: page_size must be positive"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation("table.page_size", "must be between 1 and 1000");

        assert_eq!(
            format!("{}", error),
            "Validation error: table.page_size - must be between 1 and 1000"
        );
    }

    #[test]
    fn test_series_length_error() {
        let error = Error::SeriesLength {
            labels: 12,
            values: 11,
        };

        assert_eq!(
            format!("{}", error),
            "Chart series length mismatch: 12 labels, 11 values"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
        let app_error = Error::from(json_error);

        assert!(matches!(app_error, Error::Serialization(_)));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_toml_error_maps_to_configuration() {
        let toml_error = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let app_error = Error::from(toml_error);

        match app_error {
            Error::Configuration { message } => {
                assert!(message.starts_with("Failed to parse config file"));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}
