//! Storage backends for record lists.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{JsonRecordRepository, JsonStoreConnection};
pub use memory::MemoryRecordStore;
pub use traits::RecordStore;
