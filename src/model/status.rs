//! Delivery status of a parcel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParcelError;

/// The closed set of delivery states.
///
/// Any state may move to any other through an explicit status update;
/// there is no forward-only lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl Status {
    /// Every status, in menu order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::InTransit, Status::Delivered];

    /// Display form used in listings and accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }

    /// `"Pending, In Transit, Delivered"`.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the display form.
impl FromStr for Status {
    type Err = ParcelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParcelError::InvalidStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_values() {
        assert_eq!("Pending".parse::<Status>(), Ok(Status::Pending));
        assert_eq!("In Transit".parse::<Status>(), Ok(Status::InTransit));
        assert_eq!("Delivered".parse::<Status>(), Ok(Status::Delivered));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "pending".parse::<Status>(),
            Err(ParcelError::InvalidStatus("pending".into()))
        );
        assert!("In transit".parse::<Status>().is_err());
        assert!(" Delivered".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_allowed_list() {
        assert_eq!(Status::allowed_list(), "Pending, In Transit, Delivered");
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&Status::InTransit).unwrap();
        assert_eq!(json, "\"In Transit\"");
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::InTransit);
    }
}
