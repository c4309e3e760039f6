//! Year-over-year spending comparison

use crate::models::{Expense, Money};

use super::spending::month_total;

/// One month of the comparison
#[derive(Debug, Clone, PartialEq)]
pub struct YearOverYearRow {
    /// Month number, 1-12
    pub month: u32,
    pub current: Money,
    pub previous: Money,
    pub difference: Money,
    /// Change relative to the previous year, absent when there is no
    /// previous-year spending to compare against
    pub percent_change: Option<f64>,
}

/// Twelve-month comparison of `year` against the year before
#[derive(Debug, Clone, PartialEq)]
pub struct YearOverYearReport {
    pub year: i32,
    pub rows: Vec<YearOverYearRow>,
    pub current_total: Money,
    pub previous_total: Money,
}

pub fn year_over_year(expenses: &[Expense], year: i32) -> YearOverYearReport {
    let mut rows = Vec::with_capacity(12);
    let mut current_total = Money::zero();
    let mut previous_total = Money::zero();

    for month in 1..=12 {
        let current = month_total(expenses, &format!("{:04}-{:02}", year, month));
        let previous = month_total(expenses, &format!("{:04}-{:02}", year - 1, month));
        current_total = current_total + current;
        previous_total = previous_total + previous;

        let percent_change = if previous.is_positive() {
            Some((current.cents() - previous.cents()) as f64 / previous.cents() as f64 * 100.0)
        } else {
            None
        };

        rows.push(YearOverYearRow {
            month,
            current,
            previous,
            difference: current - previous,
            percent_change,
        });
    }

    YearOverYearReport {
        year,
        rows,
        current_total,
        previous_total,
    }
}
