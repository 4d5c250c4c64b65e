//! Flat-file binary record store.
//!
//! One blob per collection, whole-list read and overwrite. Single
//! process, single writer; there is no locking and no transaction
//! layer. The [`seed`] module recreates the sample catalog the
//! harness ships with.

pub mod error;
pub mod seed;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::{collection_files, RecordStore};
