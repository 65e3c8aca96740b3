//! Form controller for the record editor.
//!
//! The form holds the six input fields as the user typed them plus the
//! create/edit mode. It knows nothing about storage or pagination; the
//! record manager drives it.
use thiserror::Error;

use crate::domain::models::record::{Record, RecordId, RecordStatus};

/// Validation failure raised at submit time. The form is left untouched so
/// the user can correct it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// Whether a submit will create a new record or replace an edited one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    /// Holds the id of the record being edited; the id survives the edit.
    Editing(RecordId),
}

/// Editable state backing the record editor.
///
/// Starts in `Creating`. Selecting a record for editing copies its fields in
/// and retains its id until the next successful submit or reset.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordForm {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub paid: bool,
    mode: FormMode,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordForm {
    pub fn new() -> Self {
        RecordForm {
            name: String::new(),
            amount: String::new(),
            date: String::new(),
            description: String::new(),
            category: String::new(),
            paid: false,
            mode: FormMode::Creating,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Populate every field from `record` and switch to editing mode.
    pub fn load_record(&mut self, record: &Record) {
        self.name = record.name.clone();
        self.amount = record.amount.clone();
        self.date = record.date.clone();
        self.description = record.description.clone();
        self.category = record.category.clone();
        self.paid = record.status.is_paid();
        self.mode = FormMode::Editing(record.id);
    }

    /// Clear all fields and return to creating mode.
    pub fn reset(&mut self) {
        *self = RecordForm::new();
    }

    /// Check the five required fields. The paid flag is a toggle and cannot
    /// be missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.amount.is_empty() {
            missing.push("amount");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.category.is_empty() {
            missing.push("category");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Build the record a successful submit will store. `id` is the freshly
    /// assigned id when creating, or the retained id when editing.
    pub(crate) fn to_record(&self, id: RecordId) -> Record {
        Record {
            id,
            name: self.name.clone(),
            amount: self.amount.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
            status: RecordStatus::from_paid(self.paid),
            category: self.category.clone(),
        }
    }
}
