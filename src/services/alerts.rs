//! Budget alert evaluation
//!
//! Alerts are computed fresh from current state on every check. Nothing
//! records that an alert already fired, so a breached budget keeps warning
//! until spending drops or the budget changes.

use chrono::{Datelike, NaiveDate};

use crate::models::{AppSettings, Expense, Money};

/// What a budget alert is about
#[derive(Debug, Clone, PartialEq)]
pub enum AlertScope {
    Overall,
    Category(String),
}

/// A budget threshold breach for the current month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub scope: AlertScope,
    pub spent: Money,
    pub limit: Money,
    pub percent: f64,
}

fn in_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Whether spending against a limit has crossed the alert threshold
///
/// Uses plain floating division so a zero limit with nonzero spending always
/// fires, while zero spending against a zero limit never does.
pub fn threshold_breached(spent: Money, limit: Money, threshold: f64) -> bool {
    let percent = spent.cents() as f64 / limit.cents() as f64 * 100.0;
    percent >= threshold
}

/// Evaluate all budget alerts for the month containing `today`
///
/// Returns nothing when notifications are disabled. The overall budget is
/// only checked when one is set; category budgets are checked as configured.
pub fn evaluate_alerts(
    expenses: &[Expense],
    settings: &AppSettings,
    today: NaiveDate,
) -> Vec<BudgetAlert> {
    if !settings.notifications_enabled {
        return Vec::new();
    }

    let threshold = settings.budget_alert_threshold;
    let month_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| in_month(e.date, today))
        .collect();

    let mut alerts = Vec::new();

    let total_spent: Money = month_expenses.iter().map(|e| e.amount).sum();
    if settings.monthly_budget.is_positive()
        && threshold_breached(total_spent, settings.monthly_budget, threshold)
    {
        alerts.push(BudgetAlert {
            scope: AlertScope::Overall,
            spent: total_spent,
            limit: settings.monthly_budget,
            percent: total_spent.cents() as f64 / settings.monthly_budget.cents() as f64 * 100.0,
        });
    }

    for budget in &settings.category_budgets {
        let spent: Money = month_expenses
            .iter()
            .filter(|e| e.category == budget.category)
            .map(|e| e.amount)
            .sum();
        if threshold_breached(spent, budget.limit, threshold) {
            alerts.push(BudgetAlert {
                scope: AlertScope::Category(budget.category.clone()),
                spent,
                limit: budget.limit,
                percent: spent.cents() as f64 / budget.limit.cents() as f64 * 100.0,
            });
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings_with_budget(budget: Money) -> AppSettings {
        AppSettings {
            monthly_budget: budget,
            notifications_enabled: true,
            ..AppSettings::default()
        }
    }

    #[test]
    fn test_threshold_breached_boundaries() {
        let limit = Money::from_cents(10_000);
        assert!(threshold_breached(Money::from_cents(8_000), limit, 80.0));
        assert!(!threshold_breached(Money::from_cents(7_999), limit, 80.0));
    }

    #[test]
    fn test_zero_limit_with_spending_fires() {
        assert!(threshold_breached(
            Money::from_cents(100),
            Money::zero(),
            80.0
        ));
    }

    #[test]
    fn test_zero_limit_without_spending_does_not_fire() {
        assert!(!threshold_breached(Money::zero(), Money::zero(), 80.0));
    }

    #[test]
    fn test_disabled_notifications_suppress_everything() {
        let mut settings = settings_with_budget(Money::from_cents(100));
        settings.notifications_enabled = false;
        let expenses = vec![Expense::new(
            date(2024, 1, 15),
            "Dining",
            "Lunch",
            Money::from_cents(5_000),
        )];

        assert!(evaluate_alerts(&expenses, &settings, date(2024, 1, 20)).is_empty());
    }

    #[test]
    fn test_overall_alert_scoped_to_month() {
        let settings = settings_with_budget(Money::from_cents(10_000));
        let expenses = vec![
            Expense::new(date(2024, 1, 15), "Dining", "Lunch", Money::from_cents(9_000)),
            // Prior month spending must not count
            Expense::new(date(2023, 12, 15), "Dining", "Dinner", Money::from_cents(9_000)),
        ];

        let alerts = evaluate_alerts(&expenses, &settings, date(2024, 1, 20));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].scope, AlertScope::Overall);
        assert_eq!(alerts[0].spent, Money::from_cents(9_000));
        assert!((alerts[0].percent - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_overall_alert_without_budget() {
        let settings = settings_with_budget(Money::zero());
        let expenses = vec![Expense::new(
            date(2024, 1, 15),
            "Dining",
            "Lunch",
            Money::from_cents(9_000),
        )];

        assert!(evaluate_alerts(&expenses, &settings, date(2024, 1, 20)).is_empty());
    }

    #[test]
    fn test_category_alert() {
        let mut settings = settings_with_budget(Money::zero());
        settings.set_category_budget("Dining", Money::from_cents(5_000));
        let expenses = vec![
            Expense::new(date(2024, 1, 15), "Dining", "Lunch", Money::from_cents(4_500)),
            Expense::new(date(2024, 1, 16), "Groceries", "Shop", Money::from_cents(9_000)),
        ];

        let alerts = evaluate_alerts(&expenses, &settings, date(2024, 1, 20));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].scope, AlertScope::Category("Dining".into()));
        assert_eq!(alerts[0].limit, Money::from_cents(5_000));
    }
}
