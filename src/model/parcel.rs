//! The parcel record.

use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::error::Result;

/// A single shipment record.
///
/// Only `status` is validated. Id, sender and receiver accept any string,
/// including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Unique key inside a store. Never changes after construction.
    id: String,
    /// Free-text sender name.
    sender: String,
    /// Free-text receiver name.
    receiver: String,
    /// Current delivery status.
    status: Status,
}

impl Parcel {
    /// Build a parcel, validating `status` against the closed set.
    ///
    /// Fails with [`ParcelError::InvalidStatus`](crate::error::ParcelError::InvalidStatus)
    /// for anything other than "Pending", "In Transit" or "Delivered".
    pub fn new(
        id: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        status: &str,
    ) -> Result<Self> {
        let status = status.parse::<Status>()?;
        Ok(Self::with_status(id, sender, receiver, status))
    }

    /// Build a parcel from an already-typed status.
    pub fn with_status(
        id: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Only the store mutates status, through its update operation.
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParcelError;

    #[test]
    fn test_new_valid() {
        let p = Parcel::new("P001", "Alice", "Zul", "Pending").unwrap();
        assert_eq!(p.id(), "P001");
        assert_eq!(p.sender(), "Alice");
        assert_eq!(p.receiver(), "Zul");
        assert_eq!(p.status(), Status::Pending);
    }

    #[test]
    fn test_new_invalid_status() {
        let err = Parcel::new("P001", "Alice", "Zul", "Lost").unwrap_err();
        assert_eq!(err, ParcelError::InvalidStatus("Lost".into()));
    }

    #[test]
    fn test_empty_fields_are_tolerated() {
        let p = Parcel::new("", "", "", "Delivered").unwrap();
        assert_eq!(p.id(), "");
        assert_eq!(p.status(), Status::Delivered);
    }

    #[test]
    fn test_json_shape() {
        let p = Parcel::with_status("P002", "Amir", "Frank", Status::InTransit);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["id"], "P002");
        assert_eq!(value["status"], "In Transit");
    }
}
