//! Backup and CSV import
//!
//! JSON import replaces the entire store with the backup's contents; a
//! collection absent from the backup comes back empty. Each collection is
//! decoded independently, so one malformed section falls back to its default
//! instead of failing the whole import. CSV import is additive and skips
//! rows it cannot make sense of.

use std::io::Read;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{TrunkError, TrunkResult};
use crate::models::{AppSettings, Expense, Money};
use crate::storage::AppData;

fn section<T>(doc: &Value, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    doc.get(key)
        .cloned()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .unwrap_or_default()
}

/// Parse a JSON backup into a full application state
///
/// `current_settings` is kept when the backup has no usable settings block.
pub fn parse_backup(json: &str, current_settings: &AppSettings) -> TrunkResult<AppData> {
    let doc: Value = serde_json::from_str(json)
        .map_err(|e| TrunkError::Import(format!("Invalid JSON: {}", e)))?;

    if !doc.is_object() {
        return Err(TrunkError::Import(
            "Backup must be a JSON object".to_string(),
        ));
    }

    let settings = doc
        .get("settings")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_else(|| current_settings.clone());

    Ok(AppData {
        bills: section(&doc, "bills"),
        subscriptions: section(&doc, "subscriptions"),
        income: section(&doc, "income"),
        expenses: section(&doc, "expenses"),
        savings: section(&doc, "savings"),
        borrowed: section(&doc, "borrowed"),
        lent: section(&doc, "lent"),
        tags: section(&doc, "tags"),
        settings,
        ..AppData::default()
    })
}

/// Read expenses from CSV in the export column order
///
/// Expected columns: date, category, description, amount, tags. Rows with an
/// unparseable date or amount, or an empty description, are skipped.
pub fn import_expenses_csv<R: Read>(reader: R) -> TrunkResult<Vec<Expense>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut imported = Vec::new();

    for record in csv_reader.records() {
        let record = record.map_err(|e| TrunkError::Import(format!("Bad CSV record: {}", e)))?;

        let Some(date) = record
            .get(0)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        else {
            continue;
        };
        let description = record.get(2).map(str::trim).unwrap_or("");
        if description.is_empty() {
            continue;
        }
        let Some(amount) = record.get(3).and_then(|s| Money::parse(s).ok()) else {
            continue;
        };
        let category = record.get(1).map(str::trim).unwrap_or("").to_string();

        let mut expense = Expense::new(date, category, description, amount);
        if let Some(tags) = record.get(4) {
            expense.tags = tags
                .split(';')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }
        imported.push(expense);
    }

    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bill;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_backup_round_trip() {
        let mut data = AppData::default();
        data.bills.push(Bill::new(
            "Rent",
            "Housing",
            Money::from_cents(120_000),
            date(2024, 2, 1),
        ));
        data.tags.push("home".into());

        let json = serde_json::to_string(&data).unwrap();
        let parsed = parse_backup(&json, &AppSettings::default()).unwrap();

        assert_eq!(parsed.bills, data.bills);
        assert_eq!(parsed.tags, data.tags);
    }

    #[test]
    fn test_absent_collections_come_back_empty() {
        let current = AppSettings::default();
        let parsed = parse_backup(r#"{"tags": ["work"]}"#, &current).unwrap();

        assert!(parsed.bills.is_empty());
        assert!(parsed.expenses.is_empty());
        assert_eq!(parsed.tags, vec!["work"]);
    }

    #[test]
    fn test_malformed_section_falls_back_to_default() {
        let parsed = parse_backup(
            r#"{"bills": "not a list", "tags": ["work"]}"#,
            &AppSettings::default(),
        )
        .unwrap();

        assert!(parsed.bills.is_empty());
        assert_eq!(parsed.tags, vec!["work"]);
    }

    #[test]
    fn test_unusable_settings_keep_current() {
        let mut current = AppSettings::default();
        current.user_name = "Kaylee".into();

        let parsed = parse_backup(r#"{"settings": 42}"#, &current).unwrap();
        assert_eq!(parsed.settings.user_name, "Kaylee");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = parse_backup("not json", &AppSettings::default());
        assert!(matches!(result, Err(TrunkError::Import(_))));
    }

    #[test]
    fn test_non_object_is_an_error() {
        let result = parse_backup("[1, 2, 3]", &AppSettings::default());
        assert!(matches!(result, Err(TrunkError::Import(_))));
    }

    #[test]
    fn test_csv_import_parses_rows() {
        let csv = "Date,Category,Description,Amount,Tags\n\
                   2024-01-15,Groceries,Weekly shop,62.50,food; weekly\n\
                   2024-01-16,Dining,Lunch,15.00,\n";
        let expenses = import_expenses_csv(csv.as_bytes()).unwrap();

        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].date, date(2024, 1, 15));
        assert_eq!(expenses[0].amount, Money::from_cents(6250));
        assert_eq!(expenses[0].tags, vec!["food", "weekly"]);
        assert!(expenses[1].tags.is_empty());
    }

    #[test]
    fn test_csv_import_skips_bad_rows() {
        let csv = "Date,Category,Description,Amount,Tags\n\
                   not-a-date,Groceries,Weekly shop,62.50,\n\
                   2024-01-15,Groceries,,62.50,\n\
                   2024-01-16,Groceries,Weekly shop,not-money,\n\
                   2024-01-17,Groceries,Weekly shop,10.00,\n";
        let expenses = import_expenses_csv(csv.as_bytes()).unwrap();

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].date, date(2024, 1, 17));
    }
}
