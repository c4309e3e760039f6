//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::SavingsGoalId;
use super::money::Money;

/// A savings goal with a target and a running balance
///
/// Deposits only ever increase the balance; there is no upper clamp, so a
/// goal can be funded past its target. "Complete" is a derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: SavingsGoalId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: SavingsGoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
            notes: String::new(),
        }
    }

    /// Add a deposit to this goal
    pub fn deposit(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    /// Whether the goal has been fully funded
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Progress toward the target as a percentage (0% for a zero target)
    pub fn progress_percent(&self) -> f64 {
        self.current_amount.percent_of(self.target_amount)
    }

    /// Shallow-merge a partial update into this goal
    pub fn apply(&mut self, patch: SavingsGoalPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(target_amount) = patch.target_amount {
            self.target_amount = target_amount;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = Some(deadline);
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Partial update for a savings goal
#[derive(Debug, Clone, Default)]
pub struct SavingsGoalPatch {
    pub name: Option<String>,
    pub target_amount: Option<Money>,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposits_accumulate() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(100_000));
        goal.deposit(Money::from_cents(30_000));
        goal.deposit(Money::from_cents(20_000));

        assert_eq!(goal.current_amount, Money::from_cents(50_000));
        assert!(!goal.is_complete());
        assert!((goal.progress_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_over_deposit_allowed() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(100_000));
        goal.deposit(Money::from_cents(150_000));

        // Not clamped; complete is derived
        assert_eq!(goal.current_amount, Money::from_cents(150_000));
        assert!(goal.is_complete());
    }
}
