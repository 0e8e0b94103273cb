//! Parcel store: an ordered sequence of records with an id index.
//!
//! Records are kept in insertion order in a `Vec`. A `HashMap` from id to
//! position gives constant-time lookup for search, update and delete.
//! Two access styles live side by side:
//!
//! - by id (`search`, `update_status`, `delete`), which never reorders
//!   the remaining records;
//! - by position (`pop`), which removes the most recently inserted record,
//!   like a stack.
//!
//! Sorting is non-destructive: [`ParcelStore::sorted_by`] returns a sorted
//! snapshot and leaves the stored order untouched.

use std::collections::HashMap;

use tracing::{debug, info};

use super::sort::SortField;
use crate::error::{ParcelError, Result};
use crate::model::parcel::Parcel;
use crate::model::status::Status;

/// Owns every parcel for the lifetime of one session.
#[derive(Debug, Default, Clone)]
pub struct ParcelStore {
    parcels: Vec<Parcel>,
    positions: HashMap<String, usize>,
}

impl ParcelStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the three demo parcels
    /// (P001 Alice→Zul, P002 Amir→Frank, P003 Ali→David, all Pending).
    pub fn with_examples() -> Self {
        let mut store = Self::new();
        for (id, sender, receiver) in [
            ("P001", "Alice", "Zul"),
            ("P002", "Amir", "Frank"),
            ("P003", "Ali", "David"),
        ] {
            let inserted = store.insert(Parcel::with_status(id, sender, receiver, Status::Pending));
            debug_assert!(inserted.is_ok());
        }
        store
    }

    /// Number of stored parcels.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Iterate in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parcel> {
        self.parcels.iter()
    }

    /// Append a parcel at the end of the sequence.
    ///
    /// Fails with [`ParcelError::DuplicateId`] if the id is already stored.
    pub fn insert(&mut self, parcel: Parcel) -> Result<()> {
        if self.positions.contains_key(parcel.id()) {
            return Err(ParcelError::DuplicateId(parcel.id().to_string()));
        }
        info!(id = parcel.id(), "Parcel added");
        self.positions
            .insert(parcel.id().to_string(), self.parcels.len());
        self.parcels.push(parcel);
        Ok(())
    }

    /// Remove the parcel with `id` and return it.
    ///
    /// The relative order of the remaining parcels is preserved.
    pub fn delete(&mut self, id: &str) -> Result<Parcel> {
        if self.is_empty() {
            return Err(ParcelError::EmptyStore);
        }
        let pos = self
            .positions
            .remove(id)
            .ok_or_else(|| ParcelError::NotFound(id.to_string()))?;
        let removed = self.parcels.remove(pos);
        self.reindex_from(pos);
        info!(id, "Parcel removed");
        Ok(removed)
    }

    /// Replace the status of the parcel with `id`.
    ///
    /// The status text is validated before the store is consulted, so an
    /// invalid status is reported even when the id does not exist.
    pub fn update_status(&mut self, id: &str, new_status: &str) -> Result<()> {
        let status = new_status.parse::<Status>()?;
        self.set_status(id, status)
    }

    /// Typed variant of [`ParcelStore::update_status`].
    pub fn set_status(&mut self, id: &str, status: Status) -> Result<()> {
        let pos = self.position(id)?;
        let parcel = &mut self.parcels[pos];
        let old = parcel.status();
        parcel.set_status(status);
        info!(id, from = %old, to = %status, "Parcel status updated");
        Ok(())
    }

    /// Look up a parcel by id.
    pub fn search(&self, id: &str) -> Result<&Parcel> {
        let pos = self.position(id)?;
        debug!(id, pos, "Parcel found");
        Ok(&self.parcels[pos])
    }

    /// Remove and return the most recently inserted parcel.
    pub fn pop(&mut self) -> Result<Parcel> {
        let parcel = self.parcels.pop().ok_or(ParcelError::EmptyStore)?;
        self.positions.remove(parcel.id());
        info!(id = parcel.id(), "Last parcel removed");
        Ok(parcel)
    }

    /// A snapshot of the parcels sorted ascending by `field`.
    ///
    /// The sort is stable, so equal keys keep store order. Returns `None`
    /// when there are fewer than two parcels and nothing to sort.
    pub fn sorted_by(&self, field: SortField) -> Option<Vec<&Parcel>> {
        if self.parcels.len() < 2 {
            debug!(count = self.parcels.len(), "No sorting needed");
            return None;
        }
        let mut view: Vec<&Parcel> = self.parcels.iter().collect();
        view.sort_by(|a, b| field.compare(a, b));
        debug!(%field, count = view.len(), "Sorted parcel snapshot");
        Some(view)
    }

    /// Parse `criterion` and sort by it.
    ///
    /// With fewer than two parcels this is `Ok(None)` and the criterion is
    /// not looked at. Otherwise fails with [`ParcelError::InvalidCriterion`]
    /// for anything other than sender, receiver or status (case-insensitive).
    pub fn sort_by_name(&self, criterion: &str) -> Result<Option<Vec<&Parcel>>> {
        if self.parcels.len() < 2 {
            debug!(count = self.parcels.len(), "No sorting needed");
            return Ok(None);
        }
        let field = criterion.parse::<SortField>()?;
        Ok(self.sorted_by(field))
    }

    /// All parcels in store order, or [`ParcelError::EmptyStore`].
    pub fn list_all(&self) -> Result<&[Parcel]> {
        if self.parcels.is_empty() {
            return Err(ParcelError::EmptyStore);
        }
        Ok(&self.parcels)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| ParcelError::NotFound(id.to_string()))
    }

    /// Refresh index entries for every parcel at or after `start`.
    fn reindex_from(&mut self, start: usize) {
        for (pos, parcel) in self.parcels.iter().enumerate().skip(start) {
            if let Some(slot) = self.positions.get_mut(parcel.id()) {
                *slot = pos;
            }
        }
    }
}

impl<'a> IntoIterator for &'a ParcelStore {
    type Item = &'a Parcel;
    type IntoIter = std::slice::Iter<'a, Parcel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
