//! `parcelShell`: an interactive terminal manager for courier parcels.
//!
//! This crate provides the core library: the parcel record type, the
//! in-memory ordered store, and the line-oriented operator shell that
//! drives it.

pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod shell;
pub mod store;
