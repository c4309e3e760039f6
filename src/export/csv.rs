//! CSV expense export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{TrunkError, TrunkResult};
use crate::models::Expense;

/// Write expenses as CSV to any writer
///
/// Columns match what the CSV importer expects back: Date, Category,
/// Description, Amount, Tags. Amounts are plain decimal dollars and tags are
/// joined with "; ".
pub fn write_expenses_csv<W: Write>(writer: W, expenses: &[Expense]) -> TrunkResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Category", "Description", "Amount", "Tags"])
        .map_err(|e| TrunkError::Export(format!("Failed to write CSV header: {}", e)))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                expense.description.clone(),
                expense.amount.to_decimal_string(),
                expense.tags.join("; "),
            ])
            .map_err(|e| TrunkError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrunkError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

/// Write expenses as CSV to a file
pub fn export_expenses_csv<P: AsRef<Path>>(expenses: &[Expense], path: P) -> TrunkResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| TrunkError::Export(format!("Failed to create CSV file: {}", e)))?;
    write_expenses_csv(file, expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut expense = Expense::new(
            date(2024, 1, 15),
            "Groceries",
            "Weekly shop",
            Money::from_cents(6250),
        );
        expense.tags = vec!["food".into(), "weekly".into()];

        let mut out = Vec::new();
        write_expenses_csv(&mut out, &[expense]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Date,Category,Description,Amount,Tags"));
        assert_eq!(
            lines.next(),
            Some("2024-01-15,Groceries,Weekly shop,62.50,food; weekly")
        );
    }

    #[test]
    fn test_round_trips_through_importer() {
        let mut expense = Expense::new(
            date(2024, 1, 15),
            "Groceries",
            "Weekly shop",
            Money::from_cents(6250),
        );
        expense.tags = vec!["food".into()];

        let mut out = Vec::new();
        write_expenses_csv(&mut out, &[expense.clone()]).unwrap();

        let imported = crate::services::import::import_expenses_csv(out.as_slice()).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].date, expense.date);
        assert_eq!(imported[0].amount, expense.amount);
        assert_eq!(imported[0].tags, expense.tags);
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let mut out = Vec::new();
        write_expenses_csv(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim(), "Date,Category,Description,Amount,Tags");
    }
}
