//! JSON backup export
//!
//! The backup document carries the user-entered collections plus settings
//! and tags. Derived state such as net worth history is rebuilt from the
//! tracked entities and is not part of the backup.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrunkError, TrunkResult};
use crate::models::{
    AppSettings, Bill, BorrowedMoney, Expense, Income, LentMoney, SavingsGoal, Subscription,
};
use crate::storage::AppData;

/// The shape of an exported backup file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    pub bills: Vec<Bill>,
    pub subscriptions: Vec<Subscription>,
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub savings: Vec<SavingsGoal>,
    pub borrowed: Vec<BorrowedMoney>,
    pub lent: Vec<LentMoney>,
    pub settings: AppSettings,
    pub tags: Vec<String>,
}

impl BackupDocument {
    pub fn from_data(data: &AppData) -> Self {
        Self {
            bills: data.bills.clone(),
            subscriptions: data.subscriptions.clone(),
            income: data.income.clone(),
            expenses: data.expenses.clone(),
            savings: data.savings.clone(),
            borrowed: data.borrowed.clone(),
            lent: data.lent.clone(),
            settings: data.settings.clone(),
            tags: data.tags.clone(),
        }
    }
}

/// Conventional name for a backup exported on the given day
pub fn default_file_name(today: NaiveDate) -> String {
    format!("moneytrunk-backup-{}.json", today.format("%Y-%m-%d"))
}

/// Write a backup of the given state to a file
pub fn export_backup<P: AsRef<Path>>(data: &AppData, path: P) -> TrunkResult<()> {
    let document = BackupDocument::from_data(data);
    let file = File::create(path.as_ref())
        .map_err(|e| TrunkError::Export(format!("Failed to create backup file: {}", e)))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)
        .map_err(|e| TrunkError::Export(format!("Failed to write backup: {}", e)))?;
    writer
        .flush()
        .map_err(|e| TrunkError::Export(format!("Failed to flush backup: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(date(2024, 3, 5)),
            "moneytrunk-backup-2024-03-05.json"
        );
    }

    #[test]
    fn test_backup_excludes_derived_state() {
        let data = AppData::default();
        let document = BackupDocument::from_data(&data);
        let json = serde_json::to_value(&document).unwrap();

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 9);
        assert!(json.get("netWorthHistory").is_none());
        assert!(json.get("recurringExpenses").is_none());
    }

    #[test]
    fn test_export_then_reimport() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");

        let mut data = AppData::default();
        data.expenses.push(Expense::new(
            date(2024, 1, 15),
            "Groceries",
            "Weekly shop",
            Money::from_cents(6250),
        ));
        data.settings.user_name = "Kaylee".into();

        export_backup(&data, &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let restored =
            crate::services::import::parse_backup(&json, &AppSettings::default()).unwrap();

        assert_eq!(restored.expenses, data.expenses);
        assert_eq!(restored.settings.user_name, "Kaylee");
    }
}
