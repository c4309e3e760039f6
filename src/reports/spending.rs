//! Spending aggregation by month and category

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Expense, Money};

/// Month key in `YYYY-MM` form
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Expenses dated within the given month key
pub fn expenses_in_month<'a>(expenses: &'a [Expense], key: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| month_key(e.date) == key)
        .collect()
}

/// Total spending for the given month key
pub fn month_total(expenses: &[Expense], key: &str) -> Money {
    expenses_in_month(expenses, key)
        .iter()
        .map(|e| e.amount)
        .sum()
}

/// Spending per category for the given month key
pub fn category_totals(expenses: &[Expense], key: &str) -> HashMap<String, Money> {
    let mut totals: HashMap<String, Money> = HashMap::new();
    for expense in expenses_in_month(expenses, key) {
        let entry = totals.entry(expense.category.clone()).or_insert(Money::zero());
        *entry = *entry + expense.amount;
    }
    totals
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdownRow {
    pub category: String,
    pub amount: Money,
    /// Share of the month's total spending, 0-100
    pub percentage: f64,
}

/// Per-category breakdown for a month, largest spend first
///
/// With no spending at all, every percentage is zero rather than undefined.
pub fn category_breakdown(expenses: &[Expense], key: &str) -> Vec<CategoryBreakdownRow> {
    let total = month_total(expenses, key);
    let mut rows: Vec<CategoryBreakdownRow> = category_totals(expenses, key)
        .into_iter()
        .map(|(category, amount)| CategoryBreakdownRow {
            category,
            amount,
            percentage: amount.percent_of(total),
        })
        .collect();
    rows.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));
    rows
}

/// Total spending for each of the trailing `months` months, oldest first
///
/// Months with no expenses appear with a zero total.
pub fn monthly_trend(expenses: &[Expense], today: NaiveDate, months: u32) -> Vec<(String, Money)> {
    let mut trend = Vec::with_capacity(months as usize);
    for offset in (0..months).rev() {
        let Some(month_start) = today
            .with_day(1)
            .and_then(|d| d.checked_sub_months(Months::new(offset)))
        else {
            continue;
        };
        let key = month_key(month_start);
        let total = month_total(expenses, &key);
        trend.push((key, total));
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(d: NaiveDate, category: &str, cents: i64) -> Expense {
        Expense::new(d, category, "test", Money::from_cents(cents))
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(date(2024, 1, 5), "Groceries", 6_000),
            expense(date(2024, 1, 20), "Groceries", 4_000),
            expense(date(2024, 1, 12), "Dining", 2_500),
            expense(date(2023, 12, 28), "Groceries", 9_000),
        ]
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(date(2024, 1, 15)), "2024-01");
        assert_eq!(month_key(date(2024, 11, 2)), "2024-11");
    }

    #[test]
    fn test_month_total_scopes_by_month() {
        let expenses = sample();
        assert_eq!(month_total(&expenses, "2024-01"), Money::from_cents(12_500));
        assert_eq!(month_total(&expenses, "2023-12"), Money::from_cents(9_000));
        assert_eq!(month_total(&expenses, "2024-02"), Money::zero());
    }

    #[test]
    fn test_category_breakdown_sorted_desc() {
        let expenses = sample();
        let rows = category_breakdown(&expenses, "2024-01");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Groceries");
        assert_eq!(rows[0].amount, Money::from_cents(10_000));
        assert!((rows[0].percentage - 80.0).abs() < 1e-9);
        assert_eq!(rows[1].category, "Dining");
        assert!((rows[1].percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_empty_month_has_no_rows() {
        let rows = category_breakdown(&sample(), "2024-06");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_monthly_trend_zero_fills() {
        let expenses = sample();
        let trend = monthly_trend(&expenses, date(2024, 2, 10), 3);

        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0], ("2023-12".to_string(), Money::from_cents(9_000)));
        assert_eq!(trend[1], ("2024-01".to_string(), Money::from_cents(12_500)));
        assert_eq!(trend[2], ("2024-02".to_string(), Money::zero()));
    }
}
