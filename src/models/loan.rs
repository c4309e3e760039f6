//! Personal loan models
//!
//! Money borrowed from or lent to another person, with a payment history.
//! Balances never go negative: the loan ledger clamps at zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::LoanStatus;
use super::ids::{LoanId, PaymentId};
use super::money::Money;

/// A single payment against a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub notes: String,
}

impl Payment {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: PaymentId::new(),
            date,
            amount,
            notes: String::new(),
        }
    }
}

/// Money you borrowed from someone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedMoney {
    pub id: LoanId,
    pub lender_name: String,
    pub original_amount: Money,
    pub current_balance: Money,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: LoanStatus,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BorrowedMoney {
    /// Create a new active loan with its full balance outstanding
    pub fn new(lender_name: impl Into<String>, amount: Money, start_date: NaiveDate) -> Self {
        Self {
            id: LoanId::new(),
            lender_name: lender_name.into(),
            original_amount: amount,
            current_balance: amount,
            start_date,
            due_date: None,
            status: LoanStatus::Active,
            payments: Vec::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }

    /// Shallow-merge a partial update into this loan
    pub fn apply(&mut self, patch: LoanPatch) {
        if let Some(name) = patch.counterparty {
            self.lender_name = name;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Money you lent to someone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LentMoney {
    pub id: LoanId,
    pub borrower_name: String,
    pub original_amount: Money,
    pub current_balance: Money,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: LoanStatus,
    #[serde(default)]
    pub repayments: Vec<Payment>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl LentMoney {
    /// Create a new active loan with its full balance outstanding
    pub fn new(borrower_name: impl Into<String>, amount: Money, start_date: NaiveDate) -> Self {
        Self {
            id: LoanId::new(),
            borrower_name: borrower_name.into(),
            original_amount: amount,
            current_balance: amount,
            start_date,
            due_date: None,
            status: LoanStatus::Active,
            repayments: Vec::new(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }

    /// Shallow-merge a partial update into this loan
    pub fn apply(&mut self, patch: LoanPatch) {
        if let Some(name) = patch.counterparty {
            self.borrower_name = name;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial update shared by both loan directions
#[derive(Debug, Clone, Default)]
pub struct LoanPatch {
    pub counterparty: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<LoanStatus>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}
