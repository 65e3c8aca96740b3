//! Domain layer: the record model, the form controller, list derivation,
//! the record manager and the export collaborator.

pub mod commands;
pub mod export_service;
pub mod form;
pub mod list_view;
pub mod models;
pub mod record_manager;

pub use export_service::{ExportArtifact, ExportService};
pub use form::{FormMode, RecordForm, ValidationError};
pub use record_manager::RecordManager;
