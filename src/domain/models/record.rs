//! Domain model for income and expense records.
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Record ids are epoch-millisecond timestamps assigned at creation time.
pub type RecordId = i64;

/// Payment status, derived from the paid toggle at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    Paid,
    Due,
}

impl RecordStatus {
    pub fn from_paid(paid: bool) -> Self {
        if paid {
            RecordStatus::Paid
        } else {
            RecordStatus::Due
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, RecordStatus::Paid)
    }

    /// Serialized form, as stored and exported.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Paid => "PAID",
            RecordStatus::Due => "DUE",
        }
    }
}

/// Which of the two record lists a manager operates on.
///
/// The income and expense managers share one implementation; the kind
/// supplies everything that differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Key the list is persisted under in the backing store.
    pub fn storage_key(&self) -> &'static str {
        match self {
            RecordKind::Income => "incomes",
            RecordKind::Expense => "expenses",
        }
    }

    /// Fixed category set offered for this kind of record.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Income => &["Salary", "Freelance", "Investment", "Other"],
            RecordKind::Expense => &["Utility", "Rent", "Groceries", "Entertainment", "Other"],
        }
    }

    /// Display name, also used to name export artifacts.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Incomes",
            RecordKind::Expense => "Expenses",
        }
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories().iter().any(|c| *c == category)
    }
}

/// One income or expense entry.
///
/// `amount` keeps the text the user typed. Lists written by earlier versions
/// may hold a bare JSON number for the amount and omit `category` entirely;
/// both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(deserialize_with = "amount_as_text")]
    pub amount: String,
    /// Calendar date as entered (YYYY-MM-DD).
    pub date: String,
    pub description: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub category: String,
}

impl Record {
    /// Amount parsed as a monetary value. Text that does not parse counts as
    /// zero rather than poisoning totals.
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Assign an id for a record appended to `records`.
    ///
    /// Ids are epoch milliseconds; a creation landing inside the same
    /// millisecond as an existing record bumps past the current maximum so
    /// ids stay unique and monotonically increasing.
    pub fn next_id(records: &[Record]) -> RecordId {
        let now = Utc::now().timestamp_millis();
        match records.iter().map(|r| r.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }
}

fn amount_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(value) => value.to_string(),
    })
}
