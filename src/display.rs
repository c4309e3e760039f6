//! Terminal output formatting
//!
//! Every formatter returns a string the CLI prints as-is. Tables are plain
//! text with widths computed from the data.

use chrono::NaiveDate;

use crate::models::{
    Asset, Bill, BorrowedMoney, Expense, Income, LentMoney, Liability, Money, NetWorthSnapshot,
    RecurringExpense, SavingsGoal, Subscription,
};
use crate::reports::spending::CategoryBreakdownRow;
use crate::reports::summary::MonthSummary;
use crate::reports::year_over_year::YearOverYearReport;
use crate::services::alerts::{AlertScope, BudgetAlert};

fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn fmt_opt_date(date: Option<NaiveDate>) -> String {
    date.map(fmt_date).unwrap_or_else(|| "-".to_string())
}

fn name_width<'a, I: Iterator<Item = &'a str>>(names: I, min: usize) -> usize {
    names.map(str::len).max().unwrap_or(min).max(min)
}

/// Format the bill list as a table
pub fn format_bill_list(bills: &[Bill]) -> String {
    if bills.is_empty() {
        return "No bills found.".to_string();
    }

    let width = name_width(bills.iter().map(|b| b.name.as_str()), 4);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<w$} {:>12} {:<12} {:<8}\n",
        "ID",
        "NAME",
        "AMOUNT",
        "DUE",
        "STATUS",
        w = width
    ));

    for bill in bills {
        output.push_str(&format!(
            "{:<13} {:<w$} {:>12} {:<12} {:<8}\n",
            bill.id.to_string(),
            bill.name,
            bill.amount_due.to_string(),
            fmt_date(bill.due_date),
            bill.status.to_string(),
            w = width
        ));
    }

    output
}

/// Format the subscription list as a table
pub fn format_subscription_list(subscriptions: &[Subscription]) -> String {
    if subscriptions.is_empty() {
        return "No subscriptions found.".to_string();
    }

    let width = name_width(subscriptions.iter().map(|s| s.name.as_str()), 4);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<w$} {:>12} {:<8} {:>12} {:<12}\n",
        "ID",
        "NAME",
        "AMOUNT",
        "CYCLE",
        "MONTHLY",
        "NEXT BILL",
        w = width
    ));

    for sub in subscriptions {
        output.push_str(&format!(
            "{:<13} {:<w$} {:>12} {:<8} {:>12} {:<12}\n",
            sub.id.to_string(),
            sub.name,
            sub.amount.to_string(),
            sub.billing_cycle.to_string(),
            sub.monthly_cost().to_string(),
            fmt_date(sub.next_billing_date),
            w = width
        ));
    }

    output
}

/// Format the income source list as a table
pub fn format_income_list(income: &[Income]) -> String {
    if income.is_empty() {
        return "No income sources found.".to_string();
    }

    let width = name_width(income.iter().map(|i| i.source_name.as_str()), 6);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<w$} {:>12} {:<10} {:>12} {:<12}\n",
        "ID",
        "SOURCE",
        "AMOUNT",
        "FREQUENCY",
        "MONTHLY",
        "NEXT",
        w = width
    ));

    for source in income {
        output.push_str(&format!(
            "{:<13} {:<w$} {:>12} {:<10} {:>12} {:<12}\n",
            source.id.to_string(),
            source.source_name,
            source.amount.to_string(),
            source.frequency.to_string(),
            source.monthly_equivalent().to_string(),
            fmt_date(source.next_expected_date),
            w = width
        ));
    }

    output
}

/// Format an expense list as a table, with a total row
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let width = name_width(expenses.iter().map(|e| e.description.as_str()), 11);
    let cat_width = name_width(expenses.iter().map(|e| e.category.as_str()), 8);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<12} {:<cw$} {:<w$} {:>12}  {}\n",
        "ID",
        "DATE",
        "CATEGORY",
        "DESCRIPTION",
        "AMOUNT",
        "TAGS",
        cw = cat_width,
        w = width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12} {:<12} {:<cw$} {:<w$} {:>12}  {}\n",
            expense.id.to_string(),
            fmt_date(expense.date),
            expense.category,
            expense.description,
            expense.amount.to_string(),
            expense.tags.join(", "),
            cw = cat_width,
            w = width
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!("\nTotal: {} ({} expenses)\n", total, expenses.len()));
    output
}

/// Format recurring templates as a table
pub fn format_recurring_list(templates: &[RecurringExpense]) -> String {
    if templates.is_empty() {
        return "No recurring expenses found.".to_string();
    }

    let width = name_width(templates.iter().map(|t| t.description.as_str()), 11);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<w$} {:>12} {:<10} {:<12} {:<7}\n",
        "ID",
        "DESCRIPTION",
        "AMOUNT",
        "FREQUENCY",
        "NEXT DUE",
        "ACTIVE",
        w = width
    ));

    for template in templates {
        output.push_str(&format!(
            "{:<12} {:<w$} {:>12} {:<10} {:<12} {:<7}\n",
            template.id.to_string(),
            template.description,
            template.amount.to_string(),
            template.frequency.to_string(),
            fmt_date(template.next_due_date),
            if template.is_active { "yes" } else { "no" },
            w = width
        ));
    }

    output
}

/// Format savings goals with progress
pub fn format_savings_list(goals: &[SavingsGoal]) -> String {
    if goals.is_empty() {
        return "No savings goals found.".to_string();
    }

    let width = name_width(goals.iter().map(|g| g.name.as_str()), 4);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<w$} {:>12} {:>12} {:>8} {:<12}\n",
        "ID",
        "NAME",
        "SAVED",
        "TARGET",
        "PROGRESS",
        "DEADLINE",
        w = width
    ));

    for goal in goals {
        output.push_str(&format!(
            "{:<13} {:<w$} {:>12} {:>12} {:>7.1}% {:<12}\n",
            goal.id.to_string(),
            goal.name,
            goal.current_amount.to_string(),
            goal.target_amount.to_string(),
            goal.progress_percent(),
            fmt_opt_date(goal.deadline),
            w = width
        ));
    }

    output
}

/// Format borrowed loans as a table
pub fn format_borrowed_list(loans: &[BorrowedMoney]) -> String {
    if loans.is_empty() {
        return "No borrowed money recorded.".to_string();
    }

    let width = name_width(loans.iter().map(|l| l.lender_name.as_str()), 6);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<w$} {:>12} {:>12} {:<9} {:<12}\n",
        "ID",
        "LENDER",
        "ORIGINAL",
        "BALANCE",
        "STATUS",
        "DUE",
        w = width
    ));

    for loan in loans {
        output.push_str(&format!(
            "{:<13} {:<w$} {:>12} {:>12} {:<9} {:<12}\n",
            loan.id.to_string(),
            loan.lender_name,
            loan.original_amount.to_string(),
            loan.current_balance.to_string(),
            loan.status.to_string(),
            fmt_opt_date(loan.due_date),
            w = width
        ));
    }

    output
}

/// Format lent loans as a table
pub fn format_lent_list(loans: &[LentMoney]) -> String {
    if loans.is_empty() {
        return "No lent money recorded.".to_string();
    }

    let width = name_width(loans.iter().map(|l| l.borrower_name.as_str()), 8);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<w$} {:>12} {:>12} {:<9} {:<12}\n",
        "ID",
        "BORROWER",
        "ORIGINAL",
        "BALANCE",
        "STATUS",
        "DUE",
        w = width
    ));

    for loan in loans {
        output.push_str(&format!(
            "{:<13} {:<w$} {:>12} {:>12} {:<9} {:<12}\n",
            loan.id.to_string(),
            loan.borrower_name,
            loan.original_amount.to_string(),
            loan.current_balance.to_string(),
            loan.status.to_string(),
            fmt_opt_date(loan.due_date),
            w = width
        ));
    }

    output
}

/// Format assets and liabilities with totals and current net worth
pub fn format_net_worth(assets: &[Asset], liabilities: &[Liability]) -> String {
    let mut output = String::new();

    output.push_str("Assets\n");
    if assets.is_empty() {
        output.push_str("  (none)\n");
    }
    for asset in assets {
        output.push_str(&format!(
            "  {:<12} {:<20} {:>14}\n",
            asset.id.to_string(),
            asset.name,
            asset.value.to_string()
        ));
    }

    output.push_str("\nLiabilities\n");
    if liabilities.is_empty() {
        output.push_str("  (none)\n");
    }
    for liability in liabilities {
        output.push_str(&format!(
            "  {:<12} {:<20} {:>14}\n",
            liability.id.to_string(),
            liability.name,
            liability.balance.to_string()
        ));
    }

    let total_assets: Money = assets.iter().map(|a| a.value).sum();
    let total_liabilities: Money = liabilities.iter().map(|l| l.balance).sum();
    output.push_str(&format!(
        "\nTotal assets:      {:>14}\nTotal liabilities: {:>14}\nNet worth:         {:>14}\n",
        total_assets.to_string(),
        total_liabilities.to_string(),
        (total_assets - total_liabilities).to_string()
    ));

    output
}

/// Format the snapshot history, oldest first
pub fn format_net_worth_history(history: &[NetWorthSnapshot]) -> String {
    if history.is_empty() {
        return "No snapshots recorded.".to_string();
    }

    let mut sorted: Vec<&NetWorthSnapshot> = history.iter().collect();
    sorted.sort_by_key(|s| s.date);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:>14} {:>14} {:>14}\n",
        "DATE", "ASSETS", "LIABILITIES", "NET WORTH"
    ));
    for snapshot in sorted {
        output.push_str(&format!(
            "{:<12} {:>14} {:>14} {:>14}\n",
            fmt_date(snapshot.date),
            snapshot.total_assets.to_string(),
            snapshot.total_liabilities.to_string(),
            snapshot.net_worth.to_string()
        ));
    }
    output
}

/// Format the month overview
pub fn format_month_summary(summary: &MonthSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Overview for {}\n\n", summary.month));
    output.push_str(&format!(
        "  Income (est.):   {:>12}\n",
        summary.income_estimate.to_string()
    ));
    output.push_str(&format!(
        "  Expenses:        {:>12}\n",
        summary.expenses_total.to_string()
    ));
    if summary.monthly_budget.is_positive() {
        output.push_str(&format!(
            "  Budget:          {:>12}  ({:.1}% used)\n",
            summary.monthly_budget.to_string(),
            summary.budget_used_percent
        ));
    }
    output.push_str(&format!(
        "  Subscriptions:   {:>12}/mo\n",
        summary.subscriptions_monthly.to_string()
    ));
    output.push_str(&format!(
        "  Savings:         {:>12}\n",
        summary.savings_total.to_string()
    ));
    output.push_str(&format!(
        "  Bills paid:      {:>9}/{} ({} of {})\n",
        summary.bills.paid_count,
        summary.bills.count,
        summary.bills.paid_amount,
        summary.bills.total_due
    ));
    output.push_str(&format!(
        "  Borrowed owed:   {:>12}\n",
        summary.borrowed_outstanding.to_string()
    ));
    output.push_str(&format!(
        "  Lent to others:  {:>12}\n",
        summary.lent_outstanding.to_string()
    ));

    if !summary.upcoming_bills.is_empty() {
        output.push_str("\nDue within a week:\n");
        for bill in &summary.upcoming_bills {
            output.push_str(&format!(
                "  {} {} ({})\n",
                fmt_date(bill.due_date),
                bill.name,
                bill.amount_due
            ));
        }
    }

    output
}

/// Format the per-category spending breakdown
pub fn format_category_breakdown(rows: &[CategoryBreakdownRow], month: &str) -> String {
    if rows.is_empty() {
        return format!("No spending recorded for {}.", month);
    }

    let width = name_width(rows.iter().map(|r| r.category.as_str()), 8);
    let mut output = String::new();
    output.push_str(&format!("Spending by category, {}\n\n", month));
    output.push_str(&format!(
        "{:<w$} {:>12} {:>8}\n",
        "CATEGORY",
        "AMOUNT",
        "SHARE",
        w = width
    ));
    for row in rows {
        output.push_str(&format!(
            "{:<w$} {:>12} {:>7.1}%\n",
            row.category,
            row.amount.to_string(),
            row.percentage,
            w = width
        ));
    }
    output
}

/// Format the monthly spending trend
pub fn format_trend(trend: &[(String, Money)]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<9} {:>12}\n", "MONTH", "SPENT"));
    for (month, total) in trend {
        output.push_str(&format!("{:<9} {:>12}\n", month, total.to_string()));
    }
    output
}

/// Format the year-over-year comparison
pub fn format_year_over_year(report: &YearOverYearReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<7} {:>12} {:>12} {:>12} {:>9}\n",
        "MONTH",
        report.year,
        report.year - 1,
        "CHANGE",
        "CHANGE%"
    ));

    for row in &report.rows {
        let percent = row
            .percent_change
            .map(|p| format!("{:>+8.1}%", p))
            .unwrap_or_else(|| format!("{:>9}", "-"));
        output.push_str(&format!(
            "{:<7} {:>12} {:>12} {:>12} {}\n",
            format!("{:04}-{:02}", report.year, row.month),
            row.current.to_string(),
            row.previous.to_string(),
            row.difference.to_string(),
            percent
        ));
    }

    output.push_str(&format!(
        "\nTotal   {:>12} {:>12} {:>12}\n",
        report.current_total.to_string(),
        report.previous_total.to_string(),
        (report.current_total - report.previous_total).to_string()
    ));
    output
}

/// Format budget alerts as warning lines
pub fn format_alerts(alerts: &[BudgetAlert]) -> String {
    let mut output = String::new();
    for alert in alerts {
        let scope = match &alert.scope {
            AlertScope::Overall => "monthly budget".to_string(),
            AlertScope::Category(category) => format!("'{}' budget", category),
        };
        output.push_str(&format!(
            "Warning: {:.0}% of {} used ({} of {})\n",
            alert.percent, scope, alert.spent, alert.limit
        ));
    }
    output
}
