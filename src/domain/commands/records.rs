//! Command and result types for record operations.
//!
//! Submit and remove return explicit outcomes instead of raising through
//! blocking dialogs; the caller decides how to present each variant.
use crate::domain::form::ValidationError;
use crate::domain::models::record::{Record, RecordId};

/// The caller's answer to the confirmation prompt for a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Outcome of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new record was appended to the list.
    Created(Record),
    /// The record matching the edited id was replaced in place.
    Updated(Record),
    /// Required fields were missing or the category was not recognised; the
    /// form keeps its fields and nothing was mutated or persisted.
    Invalid(ValidationError),
    /// The caller declined the confirmation; nothing was mutated.
    Cancelled,
}

/// Outcome of a removal request.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(Record),
    /// No record carried the requested id. Removal is idempotent, so this is
    /// a no-op rather than an error.
    NotFound(RecordId),
    Cancelled,
}

/// One page of the filtered record list, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordListPage {
    pub records: Vec<Record>,
    /// 1-indexed page number the slice was taken at.
    pub page: usize,
    /// Records matching the active filter, across all pages.
    pub filtered_len: usize,
    pub has_previous: bool,
    pub has_next: bool,
}
