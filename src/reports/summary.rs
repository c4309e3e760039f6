//! The monthly overview: the numbers a dashboard would show

use chrono::{Days, NaiveDate};

use crate::models::{Bill, LoanStatus, Money};
use crate::storage::AppData;

use super::spending::{month_key, month_total};

/// Bill progress for the month overview
#[derive(Debug, Clone, PartialEq)]
pub struct BillsSummary {
    pub count: usize,
    pub paid_count: usize,
    pub total_due: Money,
    pub paid_amount: Money,
}

/// Everything the month overview reports
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: String,
    /// Estimated monthly income from recurring sources
    pub income_estimate: Money,
    pub expenses_total: Money,
    pub monthly_budget: Money,
    /// Share of the monthly budget spent, 0 when no budget is set
    pub budget_used_percent: f64,
    pub bills: BillsSummary,
    pub subscriptions_monthly: Money,
    pub savings_total: Money,
    pub borrowed_outstanding: Money,
    pub lent_outstanding: Money,
    /// Unpaid bills due within the next week, soonest first, at most five
    pub upcoming_bills: Vec<Bill>,
}

/// Build the overview for the month containing `today`
pub fn month_summary(data: &AppData, today: NaiveDate) -> MonthSummary {
    let key = month_key(today);
    let expenses_total = month_total(&data.expenses, &key);

    let income_estimate: Money = data.income.iter().map(|i| i.monthly_equivalent()).sum();
    let subscriptions_monthly: Money = data.subscriptions.iter().map(|s| s.monthly_cost()).sum();
    let savings_total: Money = data.savings.iter().map(|g| g.current_amount).sum();

    let borrowed_outstanding: Money = data
        .borrowed
        .iter()
        .filter(|l| l.status == LoanStatus::Active)
        .map(|l| l.current_balance)
        .sum();
    let lent_outstanding: Money = data
        .lent
        .iter()
        .filter(|l| l.status == LoanStatus::Active)
        .map(|l| l.current_balance)
        .sum();

    let paid: Vec<&Bill> = data.bills.iter().filter(|b| b.is_paid()).collect();
    let bills = BillsSummary {
        count: data.bills.len(),
        paid_count: paid.len(),
        total_due: data.bills.iter().map(|b| b.amount_due).sum(),
        paid_amount: paid.iter().map(|b| b.paid_amount()).sum(),
    };

    let week_out = today.checked_add_days(Days::new(7)).unwrap_or(today);
    let mut upcoming_bills: Vec<Bill> = data
        .bills
        .iter()
        .filter(|b| !b.is_paid() && b.due_date >= today && b.due_date <= week_out)
        .cloned()
        .collect();
    upcoming_bills.sort_by_key(|b| b.due_date);
    upcoming_bills.truncate(5);

    MonthSummary {
        month: key,
        income_estimate,
        expenses_total,
        monthly_budget: data.settings.monthly_budget,
        budget_used_percent: expenses_total.percent_of(data.settings.monthly_budget),
        bills,
        subscriptions_monthly,
        savings_total,
        borrowed_outstanding,
        lent_outstanding,
        upcoming_bills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BorrowedMoney, Expense, Frequency, Income, LentMoney, SavingsGoal, Subscription,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_data(today: NaiveDate) -> AppData {
        let mut data = AppData::default();
        data.settings.monthly_budget = Money::from_cents(100_000);

        data.expenses.push(Expense::new(
            today,
            "Groceries",
            "Shop",
            Money::from_cents(25_000),
        ));
        data.income.push(Income::new(
            "Job",
            Money::from_cents(50_000),
            Frequency::BiWeekly,
            today,
        ));
        data.subscriptions.push(Subscription::new(
            "Streaming",
            Money::from_cents(12_000),
            crate::models::BillingCycle::Yearly,
            today,
            "Entertainment",
        ));
        data.savings.push(SavingsGoal::new(
            "Emergency",
            Money::from_cents(500_000),
        ));
        data.borrowed
            .push(BorrowedMoney::new("Alex", Money::from_cents(30_000), today));
        data.lent
            .push(LentMoney::new("Sam", Money::from_cents(10_000), today));
        data
    }

    #[test]
    fn test_month_summary_totals() {
        let today = date(2024, 1, 15);
        let summary = month_summary(&sample_data(today), today);

        assert_eq!(summary.month, "2024-01");
        assert_eq!(summary.expenses_total, Money::from_cents(25_000));
        // Biweekly income counts twice per month
        assert_eq!(summary.income_estimate, Money::from_cents(100_000));
        // Yearly subscription prorated to a month
        assert_eq!(summary.subscriptions_monthly, Money::from_cents(1_000));
        assert_eq!(summary.borrowed_outstanding, Money::from_cents(30_000));
        assert_eq!(summary.lent_outstanding, Money::from_cents(10_000));
        assert!((summary.budget_used_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_paid_off_loans_excluded_from_outstanding() {
        let today = date(2024, 1, 15);
        let mut data = sample_data(today);
        data.borrowed[0].status = LoanStatus::PaidOff;

        let summary = month_summary(&data, today);
        assert_eq!(summary.borrowed_outstanding, Money::zero());
    }

    #[test]
    fn test_upcoming_bills_window_and_order() {
        let today = date(2024, 1, 15);
        let mut data = AppData::default();
        data.bills.push(Bill::new(
            "Rent",
            "Housing",
            Money::from_cents(120_000),
            date(2024, 1, 20),
        ));
        data.bills.push(Bill::new(
            "Power",
            "Utilities",
            Money::from_cents(8_000),
            date(2024, 1, 16),
        ));
        // Outside the seven-day window
        data.bills.push(Bill::new(
            "Insurance",
            "Insurance",
            Money::from_cents(15_000),
            date(2024, 1, 30),
        ));
        // Already past due
        data.bills.push(Bill::new(
            "Water",
            "Utilities",
            Money::from_cents(4_000),
            date(2024, 1, 10),
        ));

        let summary = month_summary(&data, today);
        let names: Vec<&str> = summary
            .upcoming_bills
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["Power", "Rent"]);
    }

    #[test]
    fn test_bills_summary_counts_paid() {
        let today = date(2024, 1, 15);
        let mut data = AppData::default();
        let mut bill = Bill::new("Rent", "Housing", Money::from_cents(120_000), today);
        bill.mark_paid(today, Some(Money::from_cents(118_000)));
        data.bills.push(bill);
        data.bills.push(Bill::new(
            "Power",
            "Utilities",
            Money::from_cents(8_000),
            today,
        ));

        let summary = month_summary(&data, today);
        assert_eq!(summary.bills.count, 2);
        assert_eq!(summary.bills.paid_count, 1);
        assert_eq!(summary.bills.total_due, Money::from_cents(128_000));
        assert_eq!(summary.bills.paid_amount, Money::from_cents(118_000));
    }

    #[test]
    fn test_no_budget_means_zero_percent() {
        let today = date(2024, 1, 15);
        let mut data = sample_data(today);
        data.settings.monthly_budget = Money::zero();

        let summary = month_summary(&data, today);
        assert_eq!(summary.budget_used_percent, 0.0);
    }
}
