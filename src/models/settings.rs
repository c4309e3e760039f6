//! Application settings
//!
//! A singleton within the persisted document. Holds the monthly budget,
//! per-category budgets, the PIN digest, and notification preferences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub category: String,
    pub limit: Money,
}

/// User preferences and budget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub user_name: String,
    pub monthly_budget: Money,
    pub category_budgets: Vec<CategoryBudget>,
    pub dark_mode: bool,
    pub pin_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_hash: Option<String>,
    pub auto_backup_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_backup_date: Option<NaiveDate>,
    pub notifications_enabled: bool,
    /// Percentage of a budget (0-100) at which to warn
    pub budget_alert_threshold: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            monthly_budget: Money::zero(),
            category_budgets: Vec::new(),
            dark_mode: false,
            pin_enabled: false,
            pin_hash: None,
            auto_backup_enabled: false,
            last_backup_date: None,
            notifications_enabled: false,
            budget_alert_threshold: 80.0,
        }
    }
}

impl AppSettings {
    /// Look up the budget limit for a category, if one is set
    pub fn category_limit(&self, category: &str) -> Option<Money> {
        self.category_budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.limit)
    }

    /// Set or replace the budget limit for a category
    pub fn set_category_budget(&mut self, category: impl Into<String>, limit: Money) {
        let category = category.into();
        if let Some(existing) = self
            .category_budgets
            .iter_mut()
            .find(|b| b.category == category)
        {
            existing.limit = limit;
        } else {
            self.category_budgets.push(CategoryBudget { category, limit });
        }
    }

    /// Remove the budget limit for a category; returns whether one existed
    pub fn remove_category_budget(&mut self, category: &str) -> bool {
        let before = self.category_budgets.len();
        self.category_budgets.retain(|b| b.category != category);
        self.category_budgets.len() != before
    }

    /// Shallow-merge a partial update into these settings
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(monthly_budget) = patch.monthly_budget {
            self.monthly_budget = monthly_budget;
        }
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(auto_backup_enabled) = patch.auto_backup_enabled {
            self.auto_backup_enabled = auto_backup_enabled;
        }
        if let Some(notifications_enabled) = patch.notifications_enabled {
            self.notifications_enabled = notifications_enabled;
        }
        if let Some(threshold) = patch.budget_alert_threshold {
            self.budget_alert_threshold = threshold;
        }
    }
}

/// Partial update for settings
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub user_name: Option<String>,
    pub monthly_budget: Option<Money>,
    pub dark_mode: Option<bool>,
    pub auto_backup_enabled: Option<bool>,
    pub notifications_enabled: Option<bool>,
    pub budget_alert_threshold: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let settings = AppSettings::default();
        assert_eq!(settings.budget_alert_threshold, 80.0);
        assert!(!settings.pin_enabled);
    }

    #[test]
    fn test_category_budget_upsert() {
        let mut settings = AppSettings::default();

        settings.set_category_budget("Groceries", Money::from_cents(40_000));
        settings.set_category_budget("Groceries", Money::from_cents(45_000));

        assert_eq!(settings.category_budgets.len(), 1);
        assert_eq!(
            settings.category_limit("Groceries"),
            Some(Money::from_cents(45_000))
        );
        assert_eq!(settings.category_limit("Dining"), None);
    }

    #[test]
    fn test_remove_category_budget() {
        let mut settings = AppSettings::default();
        settings.set_category_budget("Dining", Money::from_cents(20_000));

        assert!(settings.remove_category_budget("Dining"));
        assert!(!settings.remove_category_budget("Dining"));
    }

    #[test]
    fn test_apply_patch() {
        let mut settings = AppSettings::default();
        settings.apply(SettingsPatch {
            monthly_budget: Some(Money::from_cents(200_000)),
            notifications_enabled: Some(true),
            ..Default::default()
        });

        assert_eq!(settings.monthly_budget, Money::from_cents(200_000));
        assert!(settings.notifications_enabled);
        assert_eq!(settings.budget_alert_threshold, 80.0);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        // Older documents may lack newer settings fields entirely
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.budget_alert_threshold, 80.0);
        assert!(settings.pin_hash.is_none());
    }
}
