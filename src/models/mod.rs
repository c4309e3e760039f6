//! Core data models
//!
//! Plain records with no storage or presentation concerns. Each entity has a
//! strongly-typed ID and, where it can be edited after creation, a companion
//! patch struct implementing shallow-merge partial updates.

pub mod bill;
pub mod enums;
pub mod expense;
pub mod ids;
pub mod income;
pub mod loan;
pub mod money;
pub mod net_worth;
pub mod savings;
pub mod settings;
pub mod subscription;

pub use bill::{Bill, BillPatch};
pub use enums::{
    AssetType, BillRepeat, BillStatus, BillingCycle, Frequency, LiabilityType, LoanStatus,
};
pub use expense::{Expense, ExpensePatch, RecurringExpense, RecurringExpensePatch};
pub use ids::{
    AssetId, BillId, ExpenseId, IncomeId, LiabilityId, LoanId, PaymentId, RecurringExpenseId,
    SavingsGoalId, SubscriptionId,
};
pub use income::{Income, IncomePatch};
pub use loan::{BorrowedMoney, LentMoney, LoanPatch, Payment};
pub use money::Money;
pub use net_worth::{Asset, Liability, NetWorthSnapshot};
pub use savings::{SavingsGoal, SavingsGoalPatch};
pub use settings::{AppSettings, CategoryBudget, SettingsPatch};
pub use subscription::{Subscription, SubscriptionPatch};
