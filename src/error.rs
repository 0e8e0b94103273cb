//! Centralized error types for parcelShell.

use thiserror::Error;

/// All errors produced by the parcelShell library.
///
/// Every variant is recoverable: a failed store operation leaves the
/// store exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParcelError {
    /// The status is not one of "Pending", "In Transit", "Delivered".
    #[error("Invalid status '{0}'. Allowed statuses: Pending, In Transit, Delivered")]
    InvalidStatus(String),

    /// No parcel with the given id exists in the store.
    #[error("Parcel not found: {0}")]
    NotFound(String),

    /// The operation needs at least one parcel in the store.
    #[error("Parcel list is empty")]
    EmptyStore,

    /// The sort field is not one of "sender", "receiver", "status".
    #[error("Invalid sorting criteria '{0}'. Available options: sender, receiver, status")]
    InvalidCriterion(String),

    /// A parcel with the same id is already stored.
    #[error("Parcel already exists: {0}")]
    DuplicateId(String),
}

/// Convenience alias for `Result<T, ParcelError>`.
pub type Result<T> = std::result::Result<T, ParcelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_key() {
        assert_eq!(
            ParcelError::NotFound("P9".into()).to_string(),
            "Parcel not found: P9"
        );
        assert!(ParcelError::InvalidStatus("Lost".into())
            .to_string()
            .contains("'Lost'"));
        assert!(ParcelError::InvalidCriterion("weight".into())
            .to_string()
            .contains("sender, receiver, status"));
    }
}
