//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MdmError`]
//! via `From`. Only the `Display` text of an error ever reaches an API client.

use std::error::Error;

/// Boxed source error carried by infrastructure variants.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Workspace-wide error.
#[derive(Debug, thiserror::Error)]
pub enum MdmError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation conflicts with existing state.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] BoxError),

    /// The device enrollment service could not be reached or answered badly.
    #[error("device enrollment service error")]
    Enrollment(#[source] BoxError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("serial number must not be empty")]
    EmptySerialNumber,

    #[error("payload identifier must not be empty")]
    EmptyPayloadIdentifier,
}

/// Business-rule conflicts with already stored data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("profile already exists")]
    ProfileExists {
        /// Identifier of the profile that is already stored.
        payload_identifier: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_message_transparently() {
        let err = MdmError::from(ValidationError::EmptyPayloadIdentifier);
        assert_eq!(err.to_string(), "payload identifier must not be empty");
    }

    #[test]
    fn should_display_conflict_message_without_identifier() {
        let err = MdmError::from(ConflictError::ProfileExists {
            payload_identifier: "com.example.wifi".to_string(),
        });
        assert_eq!(err.to_string(), "profile already exists");
    }

    #[test]
    fn should_hide_source_details_for_storage_errors() {
        let source = std::io::Error::other("disk on fire");
        let err = MdmError::Storage(Box::new(source));
        assert_eq!(err.to_string(), "storage error");
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }
}
