//! Storage adapters for the item collection.
//!
//! A store translates between the in-memory [`Collection`] and wherever it
//! lives. Every call moves the whole collection: there are no partial reads
//! or writes.

use crate::core::{Collection, StoreError};
use async_trait::async_trait;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns the full collection.
    ///
    /// Never fails: a store that cannot produce its collection reports an
    /// empty one and logs why.
    async fn load(&self) -> Collection;

    /// Replaces the stored collection with `items`.
    async fn save(&self, items: &Collection) -> Result<(), StoreError>;
}
