//! JSON-blob record repository.
//!
//! Each record domain persists as one JSON array under its storage key,
//! the same shape a browser would keep in local storage, so data written
//! by earlier versions loads unchanged.
use anyhow::{Context, Result};
use log::{debug, warn};

use crate::domain::models::record::{Record, RecordKind};
use crate::storage::json::connection::JsonStoreConnection;
use crate::storage::traits::RecordStore;

pub struct JsonRecordRepository {
    connection: JsonStoreConnection,
    key: &'static str,
}

impl JsonRecordRepository {
    pub fn new(connection: JsonStoreConnection, kind: RecordKind) -> Self {
        JsonRecordRepository {
            connection,
            key: kind.storage_key(),
        }
    }

    pub fn storage_key(&self) -> &'static str {
        self.key
    }
}

impl RecordStore for JsonRecordRepository {
    fn load(&self) -> Vec<Record> {
        let blob = match self.connection.read_key(self.key) {
            Some(blob) => blob,
            None => return Vec::new(),
        };
        match serde_json::from_str::<Vec<Record>>(&blob) {
            Ok(records) => {
                debug!("Loaded {} records under '{}'", records.len(), self.key);
                records
            }
            Err(error) => {
                warn!(
                    "Stored '{}' data is not a record list ({}); starting empty",
                    self.key, error
                );
                Vec::new()
            }
        }
    }

    fn replace(&mut self, records: &[Record]) -> Result<()> {
        let blob = serde_json::to_string(records)
            .with_context(|| format!("serializing '{}' records", self.key))?;
        self.connection.write_key(self.key, &blob)
    }
}
