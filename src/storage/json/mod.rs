//! # JSON File Storage
//!
//! File-based storage keeping one JSON blob per record domain under a base
//! data directory:
//!
//! ```text
//! data/
//! ├── incomes.json     ← serialized record array
//! └── expenses.json
//! ```
//!
//! Writes are atomic (temp file + rename); absent or corrupt blobs load as
//! an empty list and are never surfaced as errors.

pub mod connection;
pub mod record_repository;

pub use connection::JsonStoreConnection;
pub use record_repository::JsonRecordRepository;
