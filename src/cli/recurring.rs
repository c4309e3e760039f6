//! Recurring expense CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{Frequency, RecurringExpense, RecurringExpensePatch};
use crate::storage::Store;

use super::{parse_date, parse_date_or_today, parse_money, parse_tags, today};

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring expense template
    Add {
        /// Description
        description: String,
        /// Amount per occurrence
        amount: String,
        /// How often it recurs
        #[arg(short, long, value_enum, default_value_t = Frequency::Monthly)]
        frequency: Frequency,
        /// Category
        #[arg(short, long, default_value = "Misc")]
        category: String,
        /// First due date (defaults to today)
        #[arg(short, long)]
        start: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List recurring templates
    List,

    /// Materialize all due templates now
    Process,

    /// Pause a template
    Pause {
        /// Template ID
        id: String,
    },

    /// Resume a paused template
    Resume {
        /// Template ID
        id: String,
    },

    /// Edit a template
    Edit {
        /// Template ID
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long, value_enum)]
        frequency: Option<Frequency>,
        #[arg(long)]
        category: Option<String>,
        /// Next due date
        #[arg(long)]
        next: Option<String>,
    },

    /// Delete a template (generated expenses are kept)
    Delete {
        /// Template ID
        id: String,
    },
}

/// Handle a recurring expense command
pub fn handle_recurring_command(store: &mut Store, cmd: RecurringCommands) -> TrunkResult<()> {
    match cmd {
        RecurringCommands::Add {
            description,
            amount,
            frequency,
            category,
            start,
            tags,
        } => {
            let start = parse_date_or_today(start.as_deref())?;
            let mut template = RecurringExpense::new(
                description,
                parse_money(&amount)?,
                category,
                frequency,
                start,
            );
            template.tags = parse_tags(tags.as_deref());

            let template = store.add_recurring_expense(template)?;
            println!(
                "Added recurring {} ({} {}), first due {}",
                template.description, template.amount, template.frequency, template.next_due_date
            );
        }

        RecurringCommands::List => {
            println!(
                "{}",
                display::format_recurring_list(&store.data().recurring_expenses)
            );
        }

        RecurringCommands::Process => {
            let generated = store.process_recurring(today())?;
            if generated.is_empty() {
                println!("Nothing due.");
            } else {
                println!("Generated {} expense(s):", generated.len());
                for expense in &generated {
                    println!("  {} {} ({})", expense.date, expense.description, expense.amount);
                }
            }
        }

        RecurringCommands::Pause { id } => {
            let template = store.set_recurring_active(&id, false)?;
            println!("Paused {}", template.description);
        }

        RecurringCommands::Resume { id } => {
            let template = store.set_recurring_active(&id, true)?;
            println!("Resumed {}", template.description);
        }

        RecurringCommands::Edit {
            id,
            description,
            amount,
            frequency,
            category,
            next,
        } => {
            let patch = RecurringExpensePatch {
                description,
                amount: amount.as_deref().map(parse_money).transpose()?,
                frequency,
                category,
                next_due_date: next.as_deref().map(parse_date).transpose()?,
                ..Default::default()
            };
            let template = store.update_recurring_expense(&id, patch)?;
            println!("Updated recurring {}", template.description);
        }

        RecurringCommands::Delete { id } => {
            store.delete_recurring_expense(&id)?;
            println!("Deleted recurring template {}", id);
        }
    }

    Ok(())
}
