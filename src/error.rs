//! Error types for Mirolite.

use thiserror::Error;

/// Common error type for Mirolite.
#[derive(Error, Debug)]
pub enum MiroliteError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the storage
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error (bad credentials, invalid or expired token).
    #[error("authentication error: {0}")]
    Auth(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Duplicate unique value.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for MiroliteError {
    fn from(e: sqlx::Error) -> Self {
        MiroliteError::Database(e.to_string())
    }
}

/// Result type alias for Mirolite operations.
pub type Result<T> = std::result::Result<T, MiroliteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = MiroliteError::Auth("invalid password".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid password");
    }

    #[test]
    fn test_permission_error_display() {
        let err = MiroliteError::Permission("creator access required".to_string());
        assert_eq!(err.to_string(), "permission denied: creator access required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = MiroliteError::NotFound("board".to_string());
        assert_eq!(err.to_string(), "board not found");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = MiroliteError::Conflict("email already registered".to_string());
        assert_eq!(err.to_string(), "conflict: email already registered");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MiroliteError = io_err.into();
        assert!(matches!(err, MiroliteError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(MiroliteError::Auth("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
