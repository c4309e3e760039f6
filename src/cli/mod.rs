//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the store and services.

pub mod bill;
pub mod budget;
pub mod data;
pub mod expense;
pub mod income;
pub mod loan;
pub mod networth;
pub mod pin;
pub mod recurring;
pub mod report;
pub mod savings;
pub mod subscription;

pub use bill::{handle_bill_command, BillCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{handle_data_command, DataCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use loan::{handle_borrowed_command, handle_lent_command, LoanCommands};
pub use networth::{handle_networth_command, NetWorthCommands};
pub use pin::{handle_pin_command, PinCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportCommands};
pub use savings::{handle_savings_command, SavingsCommands};
pub use subscription::{handle_subscription_command, SubscriptionCommands};

use chrono::{Local, NaiveDate};

use crate::error::{TrunkError, TrunkResult};
use crate::models::Money;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a dollar amount from the command line
pub fn parse_money(s: &str) -> TrunkResult<Money> {
    Money::parse(s).map_err(|e| TrunkError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a YYYY-MM-DD date, defaulting to today when absent
pub fn parse_date_or_today(s: Option<&str>) -> TrunkResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(today()),
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> TrunkResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TrunkError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Split a comma-separated tag argument into a tag list
pub fn parse_tags(s: Option<&str>) -> Vec<String> {
    s.map(|s| {
        s.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert!(parse_money("12.50").is_ok());
        assert!(parse_money("abc").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(Some("food, weekly,")), vec!["food", "weekly"]);
        assert!(parse_tags(None).is_empty());
    }
}
