//! Error types for checklist operations.

use pocket_guardian_core::CoreError;
use pocket_guardian_store::StoreError;
use thiserror::Error;

/// A result type using `ControlError`.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Errors that can occur in checklist operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The mode is unknown and no custom items were supplied.
    #[error("unknown mode '{0}' and no custom items supplied")]
    InvalidMode(String),

    /// The BLE object is not registered.
    #[error("object '{0}' is not registered")]
    ObjectNotFound(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ControlError {
    /// Returns the appropriate HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidMode(_) => 400,
            Self::ObjectNotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}

impl From<CoreError> for ControlError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidMode(mode) => Self::InvalidMode(mode),
            CoreError::EmptyMode(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<StoreError> for ControlError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ObjectNotFound(name) => Self::ObjectNotFound(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        assert_eq!(ControlError::InvalidMode("Beach".into()).http_status_code(), 400);
        assert_eq!(ControlError::ObjectNotFound("Keys".into()).http_status_code(), 404);
        assert_eq!(ControlError::Internal("boom".into()).http_status_code(), 500);
    }

    #[test]
    fn lower_layer_errors_convert() {
        assert_eq!(
            ControlError::from(CoreError::InvalidMode("Beach".into())),
            ControlError::InvalidMode("Beach".into())
        );
        assert_eq!(
            ControlError::from(StoreError::ObjectNotFound("Keys".into())),
            ControlError::ObjectNotFound("Keys".into())
        );
        assert!(matches!(
            ControlError::from(CoreError::EmptyMode("Gym".into())),
            ControlError::Internal(_)
        ));
    }
}
