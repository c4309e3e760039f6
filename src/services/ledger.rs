//! Loan balance arithmetic shared by borrowed and lent loans

use crate::models::{LoanStatus, Money};

/// New balance and status after applying one payment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentOutcome {
    pub new_balance: Money,
    pub new_status: LoanStatus,
}

/// Apply a payment to a loan balance
///
/// The balance is clamped at zero; an overpayment does not produce a credit.
/// The status flips to paid-off only when the payment covers the remaining
/// balance, and a forgiven loan stays forgiven.
pub fn apply_payment(balance: Money, status: LoanStatus, amount: Money) -> PaymentOutcome {
    let raw = balance - amount;
    let new_balance = if raw.is_negative() { Money::zero() } else { raw };
    let new_status = if raw.cents() <= 0 {
        LoanStatus::PaidOff
    } else {
        status
    };
    PaymentOutcome {
        new_balance,
        new_status,
    }
}
