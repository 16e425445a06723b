//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use shower_common::AppError;
use shower_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Store read/write failure or missing record
    Domain(DomainError),

    /// Rejected user input
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the targeted record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(_) => 500,
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shower_core::Collection;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::from(DomainError::not_found(Collection::Gifts, "123"));
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_GIFT");
        assert_eq!(err.to_string(), "Gift not found: 123");
    }

    #[test]
    fn test_fetch_and_write_errors_are_500() {
        let err = ServiceError::from(DomainError::fetch(Collection::Guests, "timeout"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "FETCH_ERROR");

        let err = ServiceError::from(DomainError::write(Collection::Messages, "denied"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "WRITE_ERROR");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("Name is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_convert_to_app_error() {
        let service_err = ServiceError::from(DomainError::not_found(Collection::Guests, "4"));
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 404);
    }
}
