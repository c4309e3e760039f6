//! The persisted application state and its store wrapper
//!
//! `AppData` is the single aggregate every collection lives in; `Store` owns
//! one `AppData` plus the path it is persisted at. There is exactly one
//! logical writer, so every action mutates the in-memory aggregate and then
//! rewrites the whole document atomically. The store is passed by reference
//! to whoever needs it; there is no global.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::TrunkPaths;
use crate::error::{TrunkError, TrunkResult};
use crate::models::{
    AppSettings, Asset, Bill, BillPatch, BorrowedMoney, Expense, ExpensePatch, Income, IncomePatch,
    LentMoney, Liability, LoanPatch, Money, NetWorthSnapshot, Payment, RecurringExpense,
    RecurringExpensePatch, SavingsGoal, SavingsGoalPatch, SettingsPatch, Subscription,
    SubscriptionPatch,
};
use crate::services::{ledger, recurring, snapshot};

use super::file_io::{read_json, write_json_atomic};

/// Current schema version of the persisted document
///
/// Bumped on breaking layout changes; no migration logic exists, a mismatch
/// is not detected.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Everything MoneyTrunk persists, as one JSON document
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub bills: Vec<Bill>,
    pub subscriptions: Vec<Subscription>,
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub recurring_expenses: Vec<RecurringExpense>,
    pub savings: Vec<SavingsGoal>,
    pub borrowed: Vec<BorrowedMoney>,
    pub lent: Vec<LentMoney>,
    pub assets: Vec<Asset>,
    pub liabilities: Vec<Liability>,
    pub net_worth_history: Vec<NetWorthSnapshot>,
    pub settings: AppSettings,
    pub tags: Vec<String>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            bills: Vec::new(),
            subscriptions: Vec::new(),
            income: Vec::new(),
            expenses: Vec::new(),
            recurring_expenses: Vec::new(),
            savings: Vec::new(),
            borrowed: Vec::new(),
            lent: Vec::new(),
            assets: Vec::new(),
            liabilities: Vec::new(),
            net_worth_history: Vec::new(),
            settings: AppSettings::default(),
            tags: Vec::new(),
        }
    }
}

/// Owns the application state and persists it after every mutation
pub struct Store {
    path: PathBuf,
    data: AppData,
}

impl Store {
    /// Open the store at the standard location, loading existing data or
    /// starting empty
    pub fn open(paths: &TrunkPaths) -> TrunkResult<Self> {
        paths.ensure_directories()?;
        Self::open_at(paths.store_file())
    }

    /// Open the store backed by an explicit file path (useful for testing)
    pub fn open_at(path: PathBuf) -> TrunkResult<Self> {
        let data: AppData = read_json(&path)?;
        Ok(Self { path, data })
    }

    /// Read-only view of the whole aggregate
    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Convenience accessor for settings
    pub fn settings(&self) -> &AppSettings {
        &self.data.settings
    }

    fn persist(&self) -> TrunkResult<()> {
        write_json_atomic(&self.path, &self.data)
    }

    // ==================== Bills ====================

    pub fn add_bill(&mut self, bill: Bill) -> TrunkResult<Bill> {
        self.data.bills.push(bill.clone());
        self.persist()?;
        Ok(bill)
    }

    pub fn update_bill(&mut self, token: &str, patch: BillPatch) -> TrunkResult<Bill> {
        let idx = self.bill_index(token)?;
        self.data.bills[idx].apply(patch);
        let updated = self.data.bills[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_bill(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.bill_index(token)?;
        self.data.bills.remove(idx);
        self.persist()
    }

    /// Explicitly mark a bill paid; the only way its status moves to paid
    pub fn mark_bill_paid(
        &mut self,
        token: &str,
        today: NaiveDate,
        amount_paid: Option<Money>,
    ) -> TrunkResult<Bill> {
        let idx = self.bill_index(token)?;
        self.data.bills[idx].mark_paid(today, amount_paid);
        let updated = self.data.bills[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    fn bill_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .bills
            .iter()
            .position(|b| b.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Bill", token))
    }

    // ==================== Subscriptions ====================

    pub fn add_subscription(&mut self, sub: Subscription) -> TrunkResult<Subscription> {
        self.data.subscriptions.push(sub.clone());
        self.persist()?;
        Ok(sub)
    }

    pub fn update_subscription(
        &mut self,
        token: &str,
        patch: SubscriptionPatch,
    ) -> TrunkResult<Subscription> {
        let idx = self.subscription_index(token)?;
        self.data.subscriptions[idx].apply(patch);
        let updated = self.data.subscriptions[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_subscription(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.subscription_index(token)?;
        self.data.subscriptions.remove(idx);
        self.persist()
    }

    fn subscription_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .subscriptions
            .iter()
            .position(|s| s.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Subscription", token))
    }

    // ==================== Income ====================

    pub fn add_income(&mut self, income: Income) -> TrunkResult<Income> {
        self.data.income.push(income.clone());
        self.persist()?;
        Ok(income)
    }

    pub fn update_income(&mut self, token: &str, patch: IncomePatch) -> TrunkResult<Income> {
        let idx = self.income_index(token)?;
        self.data.income[idx].apply(patch);
        let updated = self.data.income[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_income(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.income_index(token)?;
        self.data.income.remove(idx);
        self.persist()
    }

    fn income_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .income
            .iter()
            .position(|i| i.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Income", token))
    }

    // ==================== Expenses ====================

    pub fn add_expense(&mut self, expense: Expense) -> TrunkResult<Expense> {
        self.data.expenses.push(expense.clone());
        self.persist()?;
        Ok(expense)
    }

    pub fn update_expense(&mut self, token: &str, patch: ExpensePatch) -> TrunkResult<Expense> {
        let idx = self.expense_index(token)?;
        self.data.expenses[idx].apply(patch);
        let updated = self.data.expenses[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_expense(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.expense_index(token)?;
        self.data.expenses.remove(idx);
        self.persist()
    }

    fn expense_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .expenses
            .iter()
            .position(|e| e.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Expense", token))
    }

    // ==================== Recurring Expenses ====================

    pub fn add_recurring_expense(
        &mut self,
        template: RecurringExpense,
    ) -> TrunkResult<RecurringExpense> {
        self.data.recurring_expenses.push(template.clone());
        self.persist()?;
        Ok(template)
    }

    pub fn update_recurring_expense(
        &mut self,
        token: &str,
        patch: RecurringExpensePatch,
    ) -> TrunkResult<RecurringExpense> {
        let idx = self.recurring_index(token)?;
        self.data.recurring_expenses[idx].apply(patch);
        let updated = self.data.recurring_expenses[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    /// Delete a template; expenses it already generated are left untouched
    pub fn delete_recurring_expense(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.recurring_index(token)?;
        self.data.recurring_expenses.remove(idx);
        self.persist()
    }

    pub fn set_recurring_active(&mut self, token: &str, active: bool) -> TrunkResult<RecurringExpense> {
        self.update_recurring_expense(
            token,
            RecurringExpensePatch {
                is_active: Some(active),
                ..Default::default()
            },
        )
    }

    /// Run the recurring engine: materialize due expenses and advance their
    /// templates, merged into the store as a single state update
    pub fn process_recurring(&mut self, today: NaiveDate) -> TrunkResult<Vec<Expense>> {
        let outcome = recurring::process_due(&self.data.recurring_expenses, today);
        self.data.recurring_expenses = outcome.templates;
        self.data.expenses.extend(outcome.generated.iter().cloned());
        self.persist()?;
        Ok(outcome.generated)
    }

    fn recurring_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .recurring_expenses
            .iter()
            .position(|r| r.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Recurring expense", token))
    }

    // ==================== Savings ====================

    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> TrunkResult<SavingsGoal> {
        self.data.savings.push(goal.clone());
        self.persist()?;
        Ok(goal)
    }

    pub fn update_savings_goal(
        &mut self,
        token: &str,
        patch: SavingsGoalPatch,
    ) -> TrunkResult<SavingsGoal> {
        let idx = self.savings_index(token)?;
        self.data.savings[idx].apply(patch);
        let updated = self.data.savings[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_savings_goal(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.savings_index(token)?;
        self.data.savings.remove(idx);
        self.persist()
    }

    /// Deposit into a goal; balances only ever grow, past the target included
    pub fn add_to_savings(&mut self, token: &str, amount: Money) -> TrunkResult<SavingsGoal> {
        if amount.is_negative() {
            return Err(TrunkError::Validation(
                "Deposit amount cannot be negative".into(),
            ));
        }
        let idx = self.savings_index(token)?;
        self.data.savings[idx].deposit(amount);
        let updated = self.data.savings[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    fn savings_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .savings
            .iter()
            .position(|s| s.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Savings goal", token))
    }

    // ==================== Borrowed Money ====================

    pub fn add_borrowed(&mut self, loan: BorrowedMoney) -> TrunkResult<BorrowedMoney> {
        self.data.borrowed.push(loan.clone());
        self.persist()?;
        Ok(loan)
    }

    pub fn update_borrowed(&mut self, token: &str, patch: LoanPatch) -> TrunkResult<BorrowedMoney> {
        let idx = self.borrowed_index(token)?;
        self.data.borrowed[idx].apply(patch);
        let updated = self.data.borrowed[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_borrowed(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.borrowed_index(token)?;
        self.data.borrowed.remove(idx);
        self.persist()
    }

    /// Record a payment against a borrowed loan
    pub fn add_payment_to_borrowed(
        &mut self,
        token: &str,
        payment: Payment,
    ) -> TrunkResult<BorrowedMoney> {
        let idx = self.borrowed_index(token)?;
        let loan = &mut self.data.borrowed[idx];

        let outcome = ledger::apply_payment(loan.current_balance, loan.status, payment.amount);
        loan.current_balance = outcome.new_balance;
        loan.status = outcome.new_status;
        loan.payments.push(payment);

        let updated = loan.clone();
        self.persist()?;
        Ok(updated)
    }

    fn borrowed_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .borrowed
            .iter()
            .position(|b| b.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Borrowed loan", token))
    }

    // ==================== Lent Money ====================

    pub fn add_lent(&mut self, loan: LentMoney) -> TrunkResult<LentMoney> {
        self.data.lent.push(loan.clone());
        self.persist()?;
        Ok(loan)
    }

    pub fn update_lent(&mut self, token: &str, patch: LoanPatch) -> TrunkResult<LentMoney> {
        let idx = self.lent_index(token)?;
        self.data.lent[idx].apply(patch);
        let updated = self.data.lent[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_lent(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.lent_index(token)?;
        self.data.lent.remove(idx);
        self.persist()
    }

    /// Record a repayment received against a lent loan
    pub fn add_repayment_to_lent(&mut self, token: &str, payment: Payment) -> TrunkResult<LentMoney> {
        let idx = self.lent_index(token)?;
        let loan = &mut self.data.lent[idx];

        let outcome = ledger::apply_payment(loan.current_balance, loan.status, payment.amount);
        loan.current_balance = outcome.new_balance;
        loan.status = outcome.new_status;
        loan.repayments.push(payment);

        let updated = loan.clone();
        self.persist()?;
        Ok(updated)
    }

    fn lent_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .lent
            .iter()
            .position(|l| l.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Lent loan", token))
    }

    // ==================== Assets & Liabilities ====================

    pub fn add_asset(&mut self, asset: Asset) -> TrunkResult<Asset> {
        self.data.assets.push(asset.clone());
        self.persist()?;
        Ok(asset)
    }

    pub fn revalue_asset(
        &mut self,
        token: &str,
        value: Money,
        today: NaiveDate,
    ) -> TrunkResult<Asset> {
        let idx = self.asset_index(token)?;
        self.data.assets[idx].revalue(value, today);
        let updated = self.data.assets[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_asset(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.asset_index(token)?;
        self.data.assets.remove(idx);
        self.persist()
    }

    fn asset_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .assets
            .iter()
            .position(|a| a.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Asset", token))
    }

    pub fn add_liability(&mut self, liability: Liability) -> TrunkResult<Liability> {
        self.data.liabilities.push(liability.clone());
        self.persist()?;
        Ok(liability)
    }

    pub fn rebalance_liability(
        &mut self,
        token: &str,
        balance: Money,
        today: NaiveDate,
    ) -> TrunkResult<Liability> {
        let idx = self.liability_index(token)?;
        self.data.liabilities[idx].rebalance(balance, today);
        let updated = self.data.liabilities[idx].clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete_liability(&mut self, token: &str) -> TrunkResult<()> {
        let idx = self.liability_index(token)?;
        self.data.liabilities.remove(idx);
        self.persist()
    }

    fn liability_index(&self, token: &str) -> TrunkResult<usize> {
        self.data
            .liabilities
            .iter()
            .position(|l| l.id.matches(token))
            .ok_or_else(|| TrunkError::not_found("Liability", token))
    }

    // ==================== Net Worth ====================

    /// Record today's net-worth snapshot, overwriting any existing row for
    /// the same calendar date
    pub fn record_net_worth_snapshot(&mut self, today: NaiveDate) -> TrunkResult<NetWorthSnapshot> {
        let recorded = snapshot::record_snapshot(
            &self.data.assets,
            &self.data.liabilities,
            &mut self.data.net_worth_history,
            today,
        );
        self.persist()?;
        Ok(recorded)
    }

    // ==================== Settings ====================

    pub fn update_settings(&mut self, patch: SettingsPatch) -> TrunkResult<AppSettings> {
        self.data.settings.apply(patch);
        let updated = self.data.settings.clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn set_category_budget(
        &mut self,
        category: impl Into<String>,
        limit: Money,
    ) -> TrunkResult<()> {
        self.data.settings.set_category_budget(category, limit);
        self.persist()
    }

    pub fn remove_category_budget(&mut self, category: &str) -> TrunkResult<bool> {
        let removed = self.data.settings.remove_category_budget(category);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Enable the PIN lock with a precomputed digest
    pub fn set_pin_hash(&mut self, hash: String) -> TrunkResult<()> {
        self.data.settings.pin_enabled = true;
        self.data.settings.pin_hash = Some(hash);
        self.persist()
    }

    /// Disable the PIN lock
    pub fn clear_pin(&mut self) -> TrunkResult<()> {
        self.data.settings.pin_enabled = false;
        self.data.settings.pin_hash = None;
        self.persist()
    }

    /// Stamp the date of the most recent backup
    pub fn set_last_backup_date(&mut self, date: NaiveDate) -> TrunkResult<()> {
        self.data.settings.last_backup_date = Some(date);
        self.persist()
    }

    // ==================== Tags ====================

    /// Add a tag to the shared tag list; adding an existing tag is a no-op
    pub fn add_tag(&mut self, tag: impl Into<String>) -> TrunkResult<()> {
        let tag = tag.into();
        if !self.data.tags.contains(&tag) {
            self.data.tags.push(tag);
            self.persist()?;
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: &str) -> TrunkResult<()> {
        self.data.tags.retain(|t| t != tag);
        self.persist()
    }

    // ==================== Data Management ====================

    /// Replace the entire store with an imported aggregate (no merge)
    pub fn replace_data(&mut self, data: AppData) -> TrunkResult<()> {
        self.data = data;
        self.persist()
    }

    /// Wipe everything back to the seed state
    pub fn reset(&mut self) -> TrunkResult<()> {
        self.data = AppData::default();
        self.persist()
    }
}
