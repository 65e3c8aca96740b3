//! In-memory record store.
//!
//! The injected fake behind most manager tests: it keeps the list in a
//! plain `Vec` and counts writes so a test can assert exactly when
//! persistence was touched (the validation gate must never reach it).
use anyhow::Result;

use crate::domain::models::record::Record;
use crate::storage::traits::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Vec<Record>,
    replace_calls: usize,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, as if it had been persisted earlier.
    pub fn with_records(records: Vec<Record>) -> Self {
        MemoryRecordStore {
            records,
            replace_calls: 0,
        }
    }

    /// Number of times `replace` has been called.
    pub fn replace_calls(&self) -> usize {
        self.replace_calls
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn replace(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        self.replace_calls += 1;
        Ok(())
    }
}
