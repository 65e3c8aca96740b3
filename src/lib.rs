//! # Finance Tracker
//!
//! Record-management core of a single-user personal-finance tracker: two
//! lists of financial records (incomes and expenses) with validated,
//! confirmation-gated create/edit/remove operations, a searched and
//! paginated list view, running totals, write-through persistence to a
//! JSON key/value store, and a spreadsheet export collaborator.
//!
//! Everything is synchronous and single-threaded; operations complete
//! before they return. Presentation (dialogs, layout, navigation) is the
//! caller's job: mutations return explicit outcomes for the caller to
//! render, never blocking prompts.

pub mod domain;
pub mod storage;

use anyhow::Result;
use std::path::Path;

pub use domain::commands::records::{Confirmation, RecordListPage, RemoveOutcome, SubmitOutcome};
pub use domain::export_service::{ExportArtifact, ExportService};
pub use domain::form::{FormMode, RecordForm, ValidationError};
pub use domain::list_view::PAGE_SIZE;
pub use domain::models::record::{Record, RecordId, RecordKind, RecordStatus};
pub use domain::record_manager::RecordManager;
pub use storage::json::{JsonRecordRepository, JsonStoreConnection};
pub use storage::memory::MemoryRecordStore;
pub use storage::traits::RecordStore;

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub total_incomes: f64,
    pub total_expenses: f64,
    /// Combined figure shown on the dashboard's headline card.
    pub total: f64,
}

/// The assembled tracker: one manager per record domain plus the export
/// collaborator, persisting under a shared data directory.
pub struct Tracker {
    pub incomes: RecordManager<JsonRecordRepository>,
    pub expenses: RecordManager<JsonRecordRepository>,
    pub export_service: ExportService,
}

impl Tracker {
    /// Open a tracker rooted at `data_dir`, loading both lists.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let connection = JsonStoreConnection::new(data_dir)?;
        Ok(Tracker {
            incomes: RecordManager::new(
                RecordKind::Income,
                JsonRecordRepository::new(connection.clone(), RecordKind::Income),
            ),
            expenses: RecordManager::new(
                RecordKind::Expense,
                JsonRecordRepository::new(connection, RecordKind::Expense),
            ),
            export_service: ExportService::new(),
        })
    }

    /// Open a tracker in the platform's default data directory.
    pub fn open_default() -> Result<Self> {
        Self::new(JsonStoreConnection::default_data_dir()?)
    }

    /// Dashboard totals over both full lists, independent of any filter.
    pub fn overview(&self) -> Overview {
        let total_incomes = self.incomes.total_amount();
        let total_expenses = self.expenses.total_amount();
        Overview {
            total_incomes,
            total_expenses,
            total: total_incomes + total_expenses,
        }
    }

    /// Export the full income list as a spreadsheet artifact.
    pub fn export_incomes(&self) -> Result<ExportArtifact> {
        self.export_service
            .export_records(RecordKind::Income, self.incomes.records())
    }

    /// Export the full expense list as a spreadsheet artifact.
    pub fn export_expenses(&self) -> Result<ExportArtifact> {
        self.export_service
            .export_records(RecordKind::Expense, self.expenses.records())
    }
}
