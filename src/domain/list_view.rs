//! Derivation of the displayed record list: search filter plus pagination.
//!
//! Nothing here is cached; the manager re-derives the view after every
//! state change.
use crate::domain::commands::records::RecordListPage;
use crate::domain::models::record::Record;

/// Records shown per page.
pub const PAGE_SIZE: usize = 5;

/// Records matching `query`, case-insensitively, against name, description
/// or category. An empty query matches everything. Records without a
/// category match as if it were the empty string.
pub(crate) fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record.description.to_lowercase().contains(&needle)
                || record.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Slice page `page` (1-indexed) out of the filtered list.
pub(crate) fn derive_page(records: &[Record], query: &str, page: usize) -> RecordListPage {
    let filtered = filter_records(records, query);
    let filtered_len = filtered.len();

    let start = page.saturating_sub(1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered_len);
    let records = if start < filtered_len {
        filtered[start..end].iter().map(|r| (*r).clone()).collect()
    } else {
        Vec::new()
    };

    RecordListPage {
        records,
        page,
        filtered_len,
        has_previous: page > 1,
        has_next: can_advance(filtered_len, page),
    }
}

/// "Next" is allowed only while the current page still ends inside the
/// filtered list.
pub(crate) fn can_advance(filtered_len: usize, page: usize) -> bool {
    page * PAGE_SIZE < filtered_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::record::RecordStatus;

    fn record(id: i64, name: &str, description: &str, category: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            amount: "10".to_string(),
            date: "2024-03-01".to_string(),
            description: description.to_string(),
            status: RecordStatus::Due,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_filter_matches_name_description_and_category_case_insensitively() {
        let records = vec![
            record(1, "Rent", "Monthly payment", "Rent"),
            record(2, "Coffee", "Morning espresso", "Entertainment"),
        ];

        let hits = filter_records(&records, "rent");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // matched via description
        assert_eq!(filter_records(&records, "ESPRESSO").len(), 1);
        // matched via category
        assert_eq!(filter_records(&records, "entertain").len(), 1);
        // empty query keeps everything
        assert_eq!(filter_records(&records, "").len(), 2);
    }

    #[test]
    fn test_filter_treats_missing_category_as_empty() {
        let records = vec![record(1, "Gift", "Birthday", "")];
        assert!(filter_records(&records, "salary").is_empty());
        assert_eq!(filter_records(&records, "gift").len(), 1);
    }

    #[test]
    fn test_pagination_bounds_over_twelve_records() {
        let records: Vec<Record> = (1..=12)
            .map(|i| record(i, &format!("Item {}", i), "entry", "Other"))
            .collect();

        let first = derive_page(&records, "", 1);
        assert_eq!(first.records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = derive_page(&records, "", 3);
        assert_eq!(last.records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![11, 12]);
        assert_eq!(last.filtered_len, 12);
        assert!(last.has_previous);
        assert!(!last.has_next);

        // page 3 ends the list, so "next" must be refused
        assert!(!can_advance(12, 3));
        assert!(can_advance(12, 2));
    }

    #[test]
    fn test_page_past_the_filtered_list_is_empty() {
        let records = vec![record(1, "Only", "entry", "Other")];
        let page = derive_page(&records, "", 4);
        assert!(page.records.is_empty());
        assert_eq!(page.filtered_len, 1);
        assert!(!page.has_next);
    }
}
