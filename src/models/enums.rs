//! Shared enums with their persisted wire values
//!
//! The serde representations match the strings the persisted document has
//! always used ("one-time", "paid_off", "credit_card", ...), so older data
//! files keep loading.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a recurring item repeats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[serde(rename = "one-time")]
    OneTime,
    Weekly,
    #[value(name = "biweekly")]
    BiWeekly,
    #[default]
    Monthly,
    Yearly,
}

impl Frequency {
    /// Advance a date by exactly one period of this frequency
    ///
    /// Monthly and yearly advances use calendar arithmetic and clamp to the
    /// last day of the target month (Jan 31 + 1 month = Feb 29 in a leap
    /// year). Returns `None` for frequencies with no period, which the
    /// recurring engine treats as a silent no-op.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Weekly => date.checked_add_days(Days::new(7)),
            Frequency::BiWeekly => date.checked_add_days(Days::new(14)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Yearly => date.checked_add_months(Months::new(12)),
            Frequency::OneTime => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

/// Payment state of a bill
///
/// Transitions happen only through explicit user actions; nothing flips a
/// bill to overdue automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Unpaid,
    Paid,
    Overdue,
    Partial,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillStatus::Unpaid => "unpaid",
            BillStatus::Paid => "paid",
            BillStatus::Overdue => "overdue",
            BillStatus::Partial => "partial",
        };
        write!(f, "{}", s)
    }
}

/// Repeat policy for a bill
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BillRepeat {
    #[default]
    None,
    Monthly,
    Yearly,
}

impl fmt::Display for BillRepeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillRepeat::None => "none",
            BillRepeat::Monthly => "monthly",
            BillRepeat::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

/// Billing cycle for a subscription
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

/// State of a personal loan (borrowed or lent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Active,
    PaidOff,
    Forgiven,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoanStatus::Active => "active",
            LoanStatus::PaidOff => "paid_off",
            LoanStatus::Forgiven => "forgiven",
        };
        write!(f, "{}", s)
    }
}

/// Kind of asset counted toward net worth
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[default]
    Cash,
    Investment,
    Property,
    Vehicle,
    Other,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetType::Cash => "cash",
            AssetType::Investment => "investment",
            AssetType::Property => "property",
            AssetType::Vehicle => "vehicle",
            AssetType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Kind of liability counted against net worth
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityType {
    CreditCard,
    Mortgage,
    CarLoan,
    StudentLoan,
    PersonalLoan,
    #[default]
    Other,
}

impl fmt::Display for LiabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LiabilityType::CreditCard => "credit_card",
            LiabilityType::Mortgage => "mortgage",
            LiabilityType::CarLoan => "car_loan",
            LiabilityType::StudentLoan => "student_loan",
            LiabilityType::PersonalLoan => "personal_loan",
            LiabilityType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_wire_values() {
        assert_eq!(
            serde_json::to_string(&Frequency::OneTime).unwrap(),
            "\"one-time\""
        );
        assert_eq!(
            serde_json::to_string(&Frequency::BiWeekly).unwrap(),
            "\"biweekly\""
        );
        let parsed: Frequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, Frequency::Monthly);
    }

    #[test]
    fn test_loan_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&LoanStatus::PaidOff).unwrap(),
            "\"paid_off\""
        );
    }

    #[test]
    fn test_liability_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&LiabilityType::CreditCard).unwrap(),
            "\"credit_card\""
        );
    }

    #[test]
    fn test_weekly_advance() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            Frequency::Weekly.advance(date).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert_eq!(
            Frequency::BiWeekly.advance(date).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_monthly_advance_clamps_end_of_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            Frequency::Monthly.advance(date).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let date = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert_eq!(
            Frequency::Monthly.advance(date).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_yearly_advance() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            Frequency::Yearly.advance(date).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_one_time_has_no_period() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(Frequency::OneTime.advance(date).is_none());
    }
}
