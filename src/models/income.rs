//! Income source model
//!
//! Income frequency drives a monthly-equivalent projection (weekly sources
//! count four times, biweekly twice); it never generates actual records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Frequency;
use super::ids::IncomeId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: IncomeId,
    pub source_name: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub next_expected_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_received_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Income {
    pub fn new(
        source_name: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        next_expected_date: NaiveDate,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            source_name: source_name.into(),
            amount,
            frequency,
            next_expected_date,
            last_received_date: None,
            notes: String::new(),
            tags: Vec::new(),
        }
    }

    /// Contribution of this source to the estimated monthly income
    ///
    /// One-time and yearly sources are excluded from the estimate.
    pub fn monthly_equivalent(&self) -> Money {
        match self.frequency {
            Frequency::Monthly => self.amount,
            Frequency::BiWeekly => self.amount.mul(2),
            Frequency::Weekly => self.amount.mul(4),
            Frequency::OneTime | Frequency::Yearly => Money::zero(),
        }
    }

    /// Shallow-merge a partial update into this income source
    pub fn apply(&mut self, patch: IncomePatch) {
        if let Some(source_name) = patch.source_name {
            self.source_name = source_name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(next_expected_date) = patch.next_expected_date {
            self.next_expected_date = next_expected_date;
        }
        if let Some(last_received_date) = patch.last_received_date {
            self.last_received_date = Some(last_received_date);
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial update for an income source
#[derive(Debug, Clone, Default)]
pub struct IncomePatch {
    pub source_name: Option<String>,
    pub amount: Option<Money>,
    pub frequency: Option<Frequency>,
    pub next_expected_date: Option<NaiveDate>,
    pub last_received_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(amount: i64, frequency: Frequency) -> Income {
        Income::new(
            "Job",
            Money::from_cents(amount),
            frequency,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
    }

    #[test]
    fn test_monthly_equivalent_weights() {
        assert_eq!(
            income(100_000, Frequency::Monthly).monthly_equivalent(),
            Money::from_cents(100_000)
        );
        assert_eq!(
            income(100_000, Frequency::BiWeekly).monthly_equivalent(),
            Money::from_cents(200_000)
        );
        assert_eq!(
            income(100_000, Frequency::Weekly).monthly_equivalent(),
            Money::from_cents(400_000)
        );
    }

    #[test]
    fn test_one_time_and_yearly_excluded() {
        assert_eq!(
            income(100_000, Frequency::OneTime).monthly_equivalent(),
            Money::zero()
        );
        assert_eq!(
            income(100_000, Frequency::Yearly).monthly_equivalent(),
            Money::zero()
        );
    }
}
