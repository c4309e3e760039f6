//! Net worth models: assets, liabilities, and dated snapshots

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AssetType, LiabilityType};
use super::ids::{AssetId, LiabilityId};
use super::money::Money;

/// Something you own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub value: Money,
    #[serde(default)]
    pub notes: String,
    pub last_updated: NaiveDate,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        asset_type: AssetType,
        value: Money,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: AssetId::new(),
            name: name.into(),
            asset_type,
            value,
            notes: String::new(),
            last_updated: today,
        }
    }

    /// Update the valuation, stamping the edit date
    pub fn revalue(&mut self, value: Money, today: NaiveDate) {
        self.value = value;
        self.last_updated = today;
    }
}

/// Something you owe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: LiabilityId,
    pub name: String,
    #[serde(rename = "type")]
    pub liability_type: LiabilityType,
    pub balance: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub last_updated: NaiveDate,
}

impl Liability {
    pub fn new(
        name: impl Into<String>,
        liability_type: LiabilityType,
        balance: Money,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: LiabilityId::new(),
            name: name.into(),
            liability_type,
            balance,
            interest_rate: None,
            notes: String::new(),
            last_updated: today,
        }
    }

    /// Update the balance, stamping the edit date
    pub fn rebalance(&mut self, balance: Money, today: NaiveDate) {
        self.balance = balance;
        self.last_updated = today;
    }
}

/// A point-in-time record of total assets, liabilities, and net worth
///
/// Keyed by calendar date; the snapshot recorder keeps at most one row per
/// day, overwriting in place when a row for the day already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub date: NaiveDate,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_worth: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revalue_stamps_date() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let mut asset = Asset::new("Savings account", AssetType::Cash, Money::from_cents(500_000), jan);
        asset.revalue(Money::from_cents(550_000), feb);

        assert_eq!(asset.value, Money::from_cents(550_000));
        assert_eq!(asset.last_updated, feb);
    }

    #[test]
    fn test_type_field_wire_name() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let liability = Liability::new(
            "Visa",
            LiabilityType::CreditCard,
            Money::from_cents(120_000),
            jan,
        );
        let json = serde_json::to_string(&liability).unwrap();
        assert!(json.contains("\"type\":\"credit_card\""));
        assert!(json.contains("\"lastUpdated\""));
    }
}
