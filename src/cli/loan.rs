//! Borrowed and lent money CLI commands
//!
//! Both directions share the same command shape; the handlers differ only
//! in which collection and counterparty naming they touch.

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{BorrowedMoney, LentMoney, LoanPatch, LoanStatus, Payment};
use crate::storage::Store;

use super::{parse_date, parse_date_or_today, parse_money};

/// Loan subcommands, used for both borrowed and lent money
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Record a new loan
    Add {
        /// The other person's name
        person: String,
        /// Original amount
        amount: String,
        /// Start date (defaults to today)
        #[arg(short, long)]
        start: Option<String>,
        /// Due date
        #[arg(short, long)]
        due: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List loans
    List,

    /// Record a payment against a loan
    Pay {
        /// Loan ID
        id: String,
        /// Payment amount
        amount: String,
        /// Payment date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Mark a loan forgiven
    Forgive {
        /// Loan ID
        id: String,
    },

    /// Edit a loan
    Edit {
        /// Loan ID
        id: String,
        #[arg(long)]
        person: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a loan
    Delete {
        /// Loan ID
        id: String,
    },
}

fn build_payment(amount: &str, date: Option<&str>, notes: Option<String>) -> TrunkResult<Payment> {
    let mut payment = Payment::new(parse_date_or_today(date)?, parse_money(amount)?);
    if let Some(notes) = notes {
        payment.notes = notes;
    }
    Ok(payment)
}

fn edit_patch(
    person: Option<String>,
    due: Option<String>,
    notes: Option<String>,
) -> TrunkResult<LoanPatch> {
    Ok(LoanPatch {
        counterparty: person,
        due_date: due.as_deref().map(parse_date).transpose()?,
        notes,
        ..Default::default()
    })
}

/// Handle a borrowed money command
pub fn handle_borrowed_command(store: &mut Store, cmd: LoanCommands) -> TrunkResult<()> {
    match cmd {
        LoanCommands::Add {
            person,
            amount,
            start,
            due,
            notes,
        } => {
            let start = parse_date_or_today(start.as_deref())?;
            let mut loan = BorrowedMoney::new(person, parse_money(&amount)?, start);
            loan.due_date = due.as_deref().map(parse_date).transpose()?;
            if let Some(notes) = notes {
                loan.notes = notes;
            }

            let loan = store.add_borrowed(loan)?;
            println!(
                "Recorded {} borrowed from {}",
                loan.original_amount, loan.lender_name
            );
        }

        LoanCommands::List => {
            println!("{}", display::format_borrowed_list(&store.data().borrowed));
        }

        LoanCommands::Pay {
            id,
            amount,
            date,
            notes,
        } => {
            let payment = build_payment(&amount, date.as_deref(), notes)?;
            let loan = store.add_payment_to_borrowed(&id, payment)?;
            println!(
                "Paid {} toward {}; balance {}",
                loan.payments.last().map(|p| p.amount).unwrap_or_default(),
                loan.lender_name,
                loan.current_balance
            );
            if loan.status == LoanStatus::PaidOff {
                println!("Loan paid off.");
            }
        }

        LoanCommands::Forgive { id } => {
            let loan = store.update_borrowed(
                &id,
                LoanPatch {
                    status: Some(LoanStatus::Forgiven),
                    ..Default::default()
                },
            )?;
            println!("Marked loan from {} forgiven", loan.lender_name);
        }

        LoanCommands::Edit {
            id,
            person,
            due,
            notes,
        } => {
            let loan = store.update_borrowed(&id, edit_patch(person, due, notes)?)?;
            println!("Updated loan from {}", loan.lender_name);
        }

        LoanCommands::Delete { id } => {
            store.delete_borrowed(&id)?;
            println!("Deleted borrowed loan {}", id);
        }
    }

    Ok(())
}

/// Handle a lent money command
pub fn handle_lent_command(store: &mut Store, cmd: LoanCommands) -> TrunkResult<()> {
    match cmd {
        LoanCommands::Add {
            person,
            amount,
            start,
            due,
            notes,
        } => {
            let start = parse_date_or_today(start.as_deref())?;
            let mut loan = LentMoney::new(person, parse_money(&amount)?, start);
            loan.due_date = due.as_deref().map(parse_date).transpose()?;
            if let Some(notes) = notes {
                loan.notes = notes;
            }

            let loan = store.add_lent(loan)?;
            println!(
                "Recorded {} lent to {}",
                loan.original_amount, loan.borrower_name
            );
        }

        LoanCommands::List => {
            println!("{}", display::format_lent_list(&store.data().lent));
        }

        LoanCommands::Pay {
            id,
            amount,
            date,
            notes,
        } => {
            let payment = build_payment(&amount, date.as_deref(), notes)?;
            let loan = store.add_repayment_to_lent(&id, payment)?;
            println!(
                "Received {} from {}; balance {}",
                loan.repayments.last().map(|p| p.amount).unwrap_or_default(),
                loan.borrower_name,
                loan.current_balance
            );
            if loan.status == LoanStatus::PaidOff {
                println!("Loan repaid in full.");
            }
        }

        LoanCommands::Forgive { id } => {
            let loan = store.update_lent(
                &id,
                LoanPatch {
                    status: Some(LoanStatus::Forgiven),
                    ..Default::default()
                },
            )?;
            println!("Marked loan to {} forgiven", loan.borrower_name);
        }

        LoanCommands::Edit {
            id,
            person,
            due,
            notes,
        } => {
            let loan = store.update_lent(&id, edit_patch(person, due, notes)?)?;
            println!("Updated loan to {}", loan.borrower_name);
        }

        LoanCommands::Delete { id } => {
            store.delete_lent(&id)?;
            println!("Deleted lent loan {}", id);
        }
    }

    Ok(())
}
