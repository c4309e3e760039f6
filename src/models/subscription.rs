//! Subscription model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::BillingCycle;
use super::ids::SubscriptionId;
use super::money::Money;

/// A recurring service charge on a monthly or yearly billing cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub amount: Money,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        billing_cycle: BillingCycle,
        next_billing_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: SubscriptionId::new(),
            name: name.into(),
            amount,
            billing_cycle,
            next_billing_date,
            category: category.into(),
            notes: String::new(),
            tags: Vec::new(),
        }
    }

    /// Cost of this subscription normalized to one month
    pub fn monthly_cost(&self) -> Money {
        match self.billing_cycle {
            BillingCycle::Monthly => self.amount,
            BillingCycle::Yearly => self.amount.div(12),
        }
    }

    /// Shallow-merge a partial update into this subscription
    pub fn apply(&mut self, patch: SubscriptionPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(billing_cycle) = patch.billing_cycle {
            self.billing_cycle = billing_cycle;
        }
        if let Some(next_billing_date) = patch.next_billing_date {
            self.next_billing_date = next_billing_date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial update for a subscription
#[derive(Debug, Clone, Default)]
pub struct SubscriptionPatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub billing_cycle: Option<BillingCycle>,
    pub next_billing_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_cost() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let monthly = Subscription::new(
            "Streaming",
            Money::from_cents(1599),
            BillingCycle::Monthly,
            date,
            "Subscriptions",
        );
        assert_eq!(monthly.monthly_cost(), Money::from_cents(1599));

        let yearly = Subscription::new(
            "Cloud storage",
            Money::from_cents(12000),
            BillingCycle::Yearly,
            date,
            "Subscriptions",
        );
        assert_eq!(yearly.monthly_cost(), Money::from_cents(1000));
    }

    #[test]
    fn test_apply_patch() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut sub = Subscription::new(
            "Streaming",
            Money::from_cents(1599),
            BillingCycle::Monthly,
            date,
            "Subscriptions",
        );
        sub.apply(SubscriptionPatch {
            amount: Some(Money::from_cents(1799)),
            ..Default::default()
        });
        assert_eq!(sub.amount, Money::from_cents(1799));
        assert_eq!(sub.name, "Streaming");
    }
}
