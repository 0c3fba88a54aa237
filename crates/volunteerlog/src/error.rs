//! Error types for volunteerlog.
//!
//! Every fallible store operation reports one of these variants. None of them
//! are fatal: the caller decides whether to surface the message and retry.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for volunteerlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// The identifier was empty or already belongs to a registered volunteer.
    #[error("identifier '{identifier}' is empty or already registered")]
    DuplicateOrEmptyIdentifier {
        /// The rejected identifier.
        identifier: String,
    },

    /// No volunteer is registered under the identifier.
    #[error("no volunteer found with identifier '{identifier}'")]
    UnknownIdentifier {
        /// The identifier that was looked up.
        identifier: String,
    },

    /// A time string could not be parsed as a 24-hour `HH:MM` value.
    #[error("invalid time format '{input}', expected HH:MM")]
    InvalidTimeFormat {
        /// The offending input.
        input: String,
    },

    /// A shift ended before it started and the overnight policy rejects it.
    #[error("shift end {end} is earlier than start {start}")]
    EndBeforeStart {
        /// Start time, formatted `HH:MM`.
        start: String,
        /// End time, formatted `HH:MM`.
        end: String,
    },

    // === Log File Errors ===
    /// The hours field of a log line is not a non-negative integer.
    #[error("malformed hours field '{value}' on line {line}")]
    MalformedHoursField {
        /// 1-based line number in the source.
        line: usize,
        /// The raw field contents.
        value: String,
    },

    /// Failed to read the volunteer log.
    #[error("failed to read volunteer log at {path}: {source}")]
    LogRead {
        /// Path to the log file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the volunteer log.
    #[error("failed to write volunteer log at {path}: {source}")]
    LogWrite {
        /// Path to the log file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// I/O on a caller-supplied reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for volunteerlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a duplicate-or-empty identifier error.
    #[must_use]
    pub fn duplicate(identifier: impl Into<String>) -> Self {
        Self::DuplicateOrEmptyIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create an unknown identifier error.
    #[must_use]
    pub fn unknown(identifier: impl Into<String>) -> Self {
        Self::UnknownIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create an invalid time format error.
    #[must_use]
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }

    /// Check if this error means the identifier was not registered.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownIdentifier { .. })
    }

    /// Check if this error means registration was refused.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateOrEmptyIdentifier { .. })
    }

    /// Check if this error came from file or stream I/O.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::LogRead { .. } | Self::LogWrite { .. } | Self::DirectoryCreate { .. } | Self::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = Error::duplicate("ana@x.org");
        assert_eq!(
            err.to_string(),
            "identifier 'ana@x.org' is empty or already registered"
        );
        assert!(err.is_duplicate());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_unknown_display() {
        let err = Error::unknown("bob@x.org");
        assert_eq!(
            err.to_string(),
            "no volunteer found with identifier 'bob@x.org'"
        );
        assert!(err.is_not_found());
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_invalid_time_display() {
        let err = Error::invalid_time("noon");
        assert!(err.to_string().contains("noon"));
        assert!(err.to_string().contains("HH:MM"));
    }

    #[test]
    fn test_end_before_start_display() {
        let err = Error::EndBeforeStart {
            start: "22:00".to_string(),
            end: "02:00".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("22:00"));
        assert!(msg.contains("02:00"));
    }

    #[test]
    fn test_malformed_hours_display() {
        let err = Error::MalformedHoursField {
            line: 3,
            value: "four".to_string(),
        };
        assert_eq!(err.to_string(), "malformed hours field 'four' on line 3");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_log_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::LogWrite {
            path: PathBuf::from("/readonly/VolunteerLog.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/readonly/VolunteerLog.csv"));
        assert!(msg.contains("access denied"));
        assert!(err.is_io());
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
            assert!(!err.is_io());
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "organization name is empty".to_string(),
        };
        assert!(err.to_string().contains("organization name is empty"));
    }
}
