//! Export collaborator: turns a full record list into a spreadsheet
//! artifact for download.
//!
//! Exports always consume the entire unfiltered list; the active search
//! query and page never affect an artifact. One invocation produces one
//! artifact, named after the record kind.
use anyhow::Result;
use csv::Writer;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::record::{Record, RecordKind};

/// Column order matches the record's serialized field order.
const HEADER: [&str; 7] = ["id", "name", "amount", "date", "description", "status", "category"];

/// One export invocation's product.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Artifact name derived from the record kind, e.g. "Incomes.csv".
    pub filename: String,
    pub content: String,
    /// Data rows written, excluding the header.
    pub row_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        ExportService
    }

    /// Serialize `records` into a spreadsheet artifact: a header row of the
    /// record field names followed by one row per record.
    pub fn export_records(&self, kind: RecordKind, records: &[Record]) -> Result<ExportArtifact> {
        info!("📄 EXPORT: Exporting {} {} records", records.len(), kind.label());

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(&HEADER)?;
        for record in records {
            writer.write_record(&[
                record.id.to_string(),
                record.name.clone(),
                record.amount.clone(),
                record.date.clone(),
                record.description.clone(),
                record.status.as_str().to_string(),
                record.category.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("finalizing {} export: {}", kind.label(), e))?;
        let content = String::from_utf8(bytes)?;

        Ok(ExportArtifact {
            filename: format!("{}.csv", kind.label()),
            content,
            row_count: records.len(),
        })
    }

    /// Produce the artifact and write it into `directory`, returning the
    /// full path of the written file.
    pub fn export_to_path(
        &self,
        kind: RecordKind,
        records: &[Record],
        directory: &Path,
    ) -> Result<PathBuf> {
        let artifact = self.export_records(kind, records)?;
        let path = directory.join(&artifact.filename);
        fs::write(&path, artifact.content.as_bytes())?;
        info!("📄 EXPORT: Wrote {} rows to {:?}", artifact.row_count, path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::record::RecordStatus;

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                id: 1710000000000,
                name: "Salary".to_string(),
                amount: "2500".to_string(),
                date: "2024-03-01".to_string(),
                description: "March pay".to_string(),
                status: RecordStatus::Paid,
                category: "Salary".to_string(),
            },
            Record {
                id: 1710000000001,
                name: "Freelance gig".to_string(),
                amount: "400.50".to_string(),
                date: "2024-03-10".to_string(),
                description: "Logo, one-off".to_string(),
                status: RecordStatus::Due,
                category: "Freelance".to_string(),
            },
        ]
    }

    #[test]
    fn test_artifact_is_named_after_the_kind() {
        let service = ExportService::new();
        let incomes = service.export_records(RecordKind::Income, &[]).unwrap();
        assert_eq!(incomes.filename, "Incomes.csv");
        let expenses = service.export_records(RecordKind::Expense, &[]).unwrap();
        assert_eq!(expenses.filename, "Expenses.csv");
    }

    #[test]
    fn test_artifact_has_header_and_one_row_per_record() {
        let service = ExportService::new();
        let artifact = service
            .export_records(RecordKind::Income, &sample_records())
            .unwrap();

        let lines: Vec<&str> = artifact.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,name,amount,date,description,status,category");
        assert_eq!(
            lines[1],
            "1710000000000,Salary,2500,2024-03-01,March pay,PAID,Salary"
        );
        assert_eq!(
            lines[2],
            "1710000000001,Freelance gig,400.50,2024-03-10,\"Logo, one-off\",DUE,Freelance"
        );
        assert_eq!(artifact.row_count, 2);
    }

    #[test]
    fn test_export_to_path_writes_the_artifact() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let service = ExportService::new();

        let path = service
            .export_to_path(RecordKind::Expense, &sample_records(), temp_dir.path())
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "Expenses.csv");
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("id,name,amount,date,description,status,category"));
    }
}
