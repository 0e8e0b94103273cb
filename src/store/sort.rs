//! Sort criteria for parcel listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParcelError;
use crate::model::parcel::Parcel;

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Sender,
    Receiver,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Sender, SortField::Receiver, SortField::Status];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sender => "sender",
            Self::Receiver => "receiver",
            Self::Status => "status",
        }
    }

    /// `"sender, receiver, status"`.
    pub fn options_list() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Ascending lexicographic comparison on this field.
    ///
    /// Status compares by its display string, so "Delivered" sorts before
    /// "In Transit", which sorts before "Pending".
    pub fn compare(self, a: &Parcel, b: &Parcel) -> Ordering {
        match self {
            Self::Sender => a.sender().cmp(b.sender()),
            Self::Receiver => a.receiver().cmp(b.receiver()),
            Self::Status => a.status().as_str().cmp(b.status().as_str()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for SortField {
    type Err = ParcelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sender" => Ok(Self::Sender),
            "receiver" => Ok(Self::Receiver),
            "status" => Ok(Self::Status),
            _ => Err(ParcelError::InvalidCriterion(s.to_string())),
        }
    }
}
