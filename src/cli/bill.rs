//! Bill CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{Bill, BillPatch, BillRepeat};
use crate::storage::Store;

use super::{parse_date, parse_date_or_today, parse_money, parse_tags};

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a new bill
    Add {
        /// Bill name
        name: String,
        /// Amount due (e.g., "120.00")
        amount: String,
        /// Due date (YYYY-MM-DD)
        due: String,
        /// Category
        #[arg(short, long, default_value = "Bills")]
        category: String,
        /// Repeat schedule
        #[arg(short, long, value_enum, default_value_t = BillRepeat::None)]
        repeat: BillRepeat,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List all bills
    List,

    /// Mark a bill as paid
    Pay {
        /// Bill ID (or unambiguous prefix)
        id: String,
        /// Amount actually paid, when it differs from the amount due
        #[arg(short, long)]
        amount: Option<String>,
        /// Payment date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit a bill
    Edit {
        /// Bill ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        repeat: Option<BillRepeat>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a bill
    Delete {
        /// Bill ID
        id: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(store: &mut Store, cmd: BillCommands) -> TrunkResult<()> {
    match cmd {
        BillCommands::Add {
            name,
            amount,
            due,
            category,
            repeat,
            tags,
            notes,
        } => {
            let mut bill = Bill::new(name, category, parse_money(&amount)?, parse_date(&due)?);
            bill.repeat = repeat;
            bill.tags = parse_tags(tags.as_deref());
            if let Some(notes) = notes {
                bill.notes = notes;
            }

            let bill = store.add_bill(bill)?;
            println!("Added bill {} ({}) due {}", bill.name, bill.amount_due, bill.due_date);
        }

        BillCommands::List => {
            println!("{}", display::format_bill_list(&store.data().bills));
        }

        BillCommands::Pay { id, amount, date } => {
            let amount_paid = amount.as_deref().map(parse_money).transpose()?;
            let date = parse_date_or_today(date.as_deref())?;
            let bill = store.mark_bill_paid(&id, date, amount_paid)?;
            println!("Marked {} paid ({}) on {}", bill.name, bill.paid_amount(), date);
        }

        BillCommands::Edit {
            id,
            name,
            amount,
            due,
            category,
            repeat,
            notes,
        } => {
            let patch = BillPatch {
                name,
                category,
                amount_due: amount.as_deref().map(parse_money).transpose()?,
                due_date: due.as_deref().map(parse_date).transpose()?,
                repeat,
                notes,
                ..Default::default()
            };
            let bill = store.update_bill(&id, patch)?;
            println!("Updated bill {}", bill.name);
        }

        BillCommands::Delete { id } => {
            store.delete_bill(&id)?;
            println!("Deleted bill {}", id);
        }
    }

    Ok(())
}
