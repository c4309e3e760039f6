//! Expense and recurring-expense models
//!
//! An `Expense` is a concrete dated record. A `RecurringExpense` is a
//! template the recurring engine materializes expenses from; generated
//! expenses carry a back-reference to their template. Deleting a template
//! never touches the expenses it already produced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Frequency;
use super::ids::{ExpenseId, RecurringExpenseId};
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Money,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set when this expense was materialized from a recurring template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_expense_id: Option<RecurringExpenseId>,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category: category.into(),
            description: description.into(),
            amount,
            tags: Vec::new(),
            recurring_expense_id: None,
        }
    }

    /// Materialize a concrete expense from a recurring template
    ///
    /// The expense is dated with the template's current due date, not the
    /// processing date.
    pub fn from_template(template: &RecurringExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            date: template.next_due_date,
            category: template.category.clone(),
            description: template.description.clone(),
            amount: template.amount,
            tags: template.tags.clone(),
            recurring_expense_id: Some(template.id),
        }
    }

    /// Shallow-merge a partial update into this expense
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial update for an expense
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub tags: Option<Vec<String>>,
}

/// Template that generates concrete expenses on a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: RecurringExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub next_due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_generated_date: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecurringExpense {
    /// Create a new active template, first due on its start date
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: RecurringExpenseId::new(),
            description: description.into(),
            amount,
            category: category.into(),
            frequency,
            start_date,
            next_due_date: start_date,
            last_generated_date: None,
            is_active: true,
            tags: Vec::new(),
        }
    }

    /// Whether this template should fire for the given day
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.is_active && self.next_due_date <= today
    }

    /// Shallow-merge a partial update into this template
    pub fn apply(&mut self, patch: RecurringExpensePatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(next_due_date) = patch.next_due_date {
            self.next_due_date = next_due_date;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial update for a recurring template
#[derive(Debug, Clone, Default)]
pub struct RecurringExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub frequency: Option<Frequency>,
    pub next_due_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_template_due_on_start_date() {
        let template = RecurringExpense::new(
            "Gym",
            Money::from_cents(3500),
            "Health",
            Frequency::Monthly,
            date(2024, 1, 1),
        );
        assert_eq!(template.next_due_date, date(2024, 1, 1));
        assert!(template.is_active);
        assert!(template.last_generated_date.is_none());
    }

    #[test]
    fn test_is_due() {
        let mut template = RecurringExpense::new(
            "Gym",
            Money::from_cents(3500),
            "Health",
            Frequency::Monthly,
            date(2024, 1, 1),
        );

        assert!(template.is_due(date(2024, 1, 1)));
        assert!(template.is_due(date(2024, 1, 15)));
        assert!(!template.is_due(date(2023, 12, 31)));

        template.is_active = false;
        assert!(!template.is_due(date(2024, 1, 15)));
    }

    #[test]
    fn test_from_template_copies_fields_and_back_reference() {
        let template = RecurringExpense::new(
            "Gym",
            Money::from_cents(3500),
            "Health",
            Frequency::Monthly,
            date(2024, 1, 1),
        );
        let expense = Expense::from_template(&template);

        assert_eq!(expense.date, template.next_due_date);
        assert_eq!(expense.amount, template.amount);
        assert_eq!(expense.category, template.category);
        assert_eq!(expense.description, template.description);
        assert_eq!(expense.recurring_expense_id, Some(template.id));
    }

    #[test]
    fn test_expense_serde_camel_case() {
        let template = RecurringExpense::new(
            "Gym",
            Money::from_cents(3500),
            "Health",
            Frequency::Monthly,
            date(2024, 1, 1),
        );
        let expense = Expense::from_template(&template);
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"recurringExpenseId\""));

        let template_json = serde_json::to_string(&template).unwrap();
        assert!(template_json.contains("\"nextDueDate\""));
        assert!(template_json.contains("\"isActive\""));
    }
}
