//! Expense CLI commands
//!
//! Listing expenses first runs the recurring engine, so templates that came
//! due since the last invocation materialize before anything is shown.
//! Adding an expense re-evaluates budget alerts and prints any breaches.

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{Expense, ExpensePatch};
use crate::reports::spending;
use crate::services::alerts;
use crate::storage::Store;

use super::{parse_date, parse_date_or_today, parse_money, parse_tags, today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category
        #[arg(short, long, default_value = "Misc")]
        category: String,
        /// Date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List expenses
    List {
        /// Restrict to a month (YYYY-MM, defaults to all)
        #[arg(short, long)]
        month: Option<String>,
        /// Restrict to a category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(store: &mut Store, cmd: ExpenseCommands) -> TrunkResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
            tags,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let mut expense = Expense::new(date, category, description, parse_money(&amount)?);
            expense.tags = parse_tags(tags.as_deref());

            let expense = store.add_expense(expense)?;
            println!(
                "Added expense {} ({}) in {}",
                expense.description, expense.amount, expense.category
            );

            let alerts = alerts::evaluate_alerts(&store.data().expenses, store.settings(), today());
            if !alerts.is_empty() {
                print!("{}", display::format_alerts(&alerts));
            }
        }

        ExpenseCommands::List { month, category } => {
            let generated = store.process_recurring(today())?;
            if !generated.is_empty() {
                println!("Generated {} recurring expense(s).\n", generated.len());
            }

            let expenses: Vec<_> = store
                .data()
                .expenses
                .iter()
                .filter(|e| {
                    month
                        .as_deref()
                        .map(|m| spending::month_key(e.date) == m)
                        .unwrap_or(true)
                })
                .filter(|e| {
                    category
                        .as_deref()
                        .map(|c| e.category == c)
                        .unwrap_or(true)
                })
                .cloned()
                .collect();
            println!("{}", display::format_expense_list(&expenses));
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
            tags,
        } => {
            let patch = ExpensePatch {
                description,
                amount: amount.as_deref().map(parse_money).transpose()?,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
                tags: tags.as_deref().map(|t| parse_tags(Some(t))),
            };
            let expense = store.update_expense(&id, patch)?;
            println!("Updated expense {}", expense.description);
        }

        ExpenseCommands::Delete { id } => {
            store.delete_expense(&id)?;
            println!("Deleted expense {}", id);
        }
    }

    Ok(())
}
