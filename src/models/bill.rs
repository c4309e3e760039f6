//! Bill model
//!
//! A bill is a one-off or repeating obligation with a due date and a payment
//! state. Status only moves through explicit user actions (mark paid); there
//! is no automatic overdue detection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{BillRepeat, BillStatus};
use super::ids::BillId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    pub name: String,
    pub category: String,
    pub amount_due: Money,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_paid: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Money>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub repeat: BillRepeat,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Bill {
    /// Create a new unpaid bill
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount_due: Money,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            category: category.into(),
            amount_due,
            due_date,
            status: BillStatus::Unpaid,
            date_paid: None,
            amount_paid: None,
            notes: String::new(),
            repeat: BillRepeat::None,
            tags: Vec::new(),
        }
    }

    /// Mark this bill paid, recording the payment date and optionally the
    /// amount actually paid when it differs from the amount due
    pub fn mark_paid(&mut self, date_paid: NaiveDate, amount_paid: Option<Money>) {
        self.status = BillStatus::Paid;
        self.date_paid = Some(date_paid);
        self.amount_paid = amount_paid;
    }

    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }

    /// The amount that was actually paid, falling back to the amount due
    pub fn paid_amount(&self) -> Money {
        self.amount_paid.unwrap_or(self.amount_due)
    }

    /// Shallow-merge a partial update into this bill
    pub fn apply(&mut self, patch: BillPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount_due) = patch.amount_due {
            self.amount_due = amount_due;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(repeat) = patch.repeat {
            self.repeat = repeat;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial update for a bill; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct BillPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount_due: Option<Money>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<BillStatus>,
    pub notes: Option<String>,
    pub repeat: Option<BillRepeat>,
    pub tags: Option<Vec<String>>,
}
