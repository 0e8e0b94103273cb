//! Core data model types for parcel records.

pub mod parcel;
pub mod status;
