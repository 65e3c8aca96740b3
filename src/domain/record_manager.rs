//! The record manager: one income or expense list plus its form, filter and
//! pagination state, persisted through an injected store.
//!
//! Every mutation follows the same loop: validate and confirm, compute the
//! new full list, write it through the store, then let the caller re-derive
//! the view. Nothing runs concurrently; each operation completes before the
//! triggering action returns.
use anyhow::Result;
use log::{debug, info, warn};

use crate::domain::commands::records::{Confirmation, RecordListPage, RemoveOutcome, SubmitOutcome};
use crate::domain::form::{FormMode, RecordForm, ValidationError};
use crate::domain::list_view;
use crate::domain::models::record::{Record, RecordId, RecordKind};
use crate::storage::traits::RecordStore;

pub struct RecordManager<S: RecordStore> {
    kind: RecordKind,
    store: S,
    records: Vec<Record>,
    form: RecordForm,
    search_query: String,
    page: usize,
}

impl<S: RecordStore> RecordManager<S> {
    /// Create a manager over `store`, loading whatever the store holds.
    /// Loading happens exactly once, here.
    pub fn new(kind: RecordKind, store: S) -> Self {
        let records = store.load();
        info!("📂 Loaded {} {} from storage", records.len(), kind.storage_key());
        RecordManager {
            kind,
            store,
            records,
            form: RecordForm::new(),
            search_query: String::new(),
            page: 1,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Full list, unfiltered, in append order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    /// Mutable access for the caller binding input fields.
    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    /// Switch the form to editing the record with `id`. Returns false and
    /// leaves the form untouched when the id is unknown.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        match self.records.iter().find(|r| r.id == id) {
            Some(record) => {
                self.form.load_record(record);
                debug!("Editing {} record {}", self.kind.storage_key(), id);
                true
            }
            None => false,
        }
    }

    /// Abandon any in-progress edit and clear the form.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Submit the current form.
    ///
    /// Exactly one record is created or updated when the outcome is
    /// `Created` or `Updated`, and the form resets to creating mode. An
    /// `Invalid` or `Cancelled` outcome leaves the list, the store and the
    /// form untouched.
    pub fn submit(&mut self, decision: Confirmation) -> Result<SubmitOutcome> {
        if let Err(error) = self.validate_form() {
            return Ok(SubmitOutcome::Invalid(error));
        }
        if decision == Confirmation::Declined {
            return Ok(SubmitOutcome::Cancelled);
        }

        let outcome = match self.form.mode() {
            FormMode::Creating => {
                let record = self.form.to_record(Record::next_id(&self.records));
                info!("Created {} record {}", self.kind.storage_key(), record.id);
                self.records.push(record.clone());
                SubmitOutcome::Created(record)
            }
            FormMode::Editing(id) => {
                let record = self.form.to_record(id);
                match self.records.iter_mut().find(|r| r.id == id) {
                    Some(slot) => *slot = record.clone(),
                    // Edited record was removed mid-edit; the list survives
                    // unchanged, matching the original behavior.
                    None => warn!("Edited {} record {} no longer exists", self.kind.storage_key(), id),
                }
                SubmitOutcome::Updated(record)
            }
        };

        self.store.replace(&self.records)?;
        self.form.reset();
        Ok(outcome)
    }

    fn validate_form(&self) -> Result<(), ValidationError> {
        self.form.validate()?;
        if !self.kind.contains_category(&self.form.category) {
            return Err(ValidationError::UnknownCategory(self.form.category.clone()));
        }
        Ok(())
    }

    /// Remove the record with `id` after the caller confirmed. Removing an
    /// unknown id is a no-op and does not rewrite the store.
    pub fn remove(&mut self, id: RecordId, decision: Confirmation) -> Result<RemoveOutcome> {
        if decision == Confirmation::Declined {
            return Ok(RemoveOutcome::Cancelled);
        }
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                let record = self.records.remove(index);
                self.store.replace(&self.records)?;
                info!("Removed {} record {}", self.kind.storage_key(), id);
                Ok(RemoveOutcome::Removed(record))
            }
            None => Ok(RemoveOutcome::NotFound(id)),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Update the search filter. The page returns to 1 so a narrowed result
    /// set cannot leave the view stranded past its last page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page = 1;
    }

    /// Current 1-indexed page.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Step back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Step forward one page while more filtered records remain.
    pub fn next_page(&mut self) {
        let filtered_len = list_view::filter_records(&self.records, &self.search_query).len();
        if list_view::can_advance(filtered_len, self.page) {
            self.page += 1;
        }
    }

    /// The filtered, paginated view for display, derived fresh on every call.
    pub fn current_view(&self) -> RecordListPage {
        list_view::derive_page(&self.records, &self.search_query, self.page)
    }

    /// Sum of every record's amount, ignoring filter and pagination.
    pub fn total_amount(&self) -> f64 {
        self.records.iter().map(Record::amount_value).sum()
    }
}
