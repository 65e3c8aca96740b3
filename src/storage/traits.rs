//! Storage abstraction for record lists.
//!
//! The domain layer persists through this trait so any backend (the JSON
//! file store, or an in-memory fake in tests) can sit behind a record
//! manager without the manager changing.
use anyhow::Result;

use crate::domain::models::record::Record;

/// Whole-list persistence for one record domain.
///
/// There is no partial-update primitive: every mutation computes the new
/// full list and replaces the stored blob. A store is exclusively owned by
/// its manager, so `replace` takes `&mut self`.
pub trait RecordStore {
    /// Read the persisted list. Absent, unreadable or unparsable data
    /// degrades to an empty list; this never fails.
    fn load(&self) -> Vec<Record>;

    /// Persist `records` as the new full list.
    fn replace(&mut self, records: &[Record]) -> Result<()>;
}
