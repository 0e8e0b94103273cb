//! In-memory parcel store and its sort criteria.

pub mod parcel_store;
pub mod sort;

pub use parcel_store::ParcelStore;
pub use sort::SortField;
