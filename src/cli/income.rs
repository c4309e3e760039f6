//! Income CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{Frequency, Income, IncomePatch, Money};
use crate::storage::Store;

use super::{parse_date, parse_date_or_today, parse_money};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income source
    Add {
        /// Source name (e.g., "Day job")
        source: String,
        /// Amount per occurrence
        amount: String,
        /// How often it arrives
        #[arg(short, long, value_enum, default_value_t = Frequency::Monthly)]
        frequency: Frequency,
        /// Next expected date (defaults to today)
        #[arg(short, long)]
        next: Option<String>,
    },

    /// List income sources with monthly equivalents
    List,

    /// Record that an income arrived
    Received {
        /// Income ID
        id: String,
        /// Date received (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an income source
    Edit {
        /// Income ID
        id: String,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long, value_enum)]
        frequency: Option<Frequency>,
        #[arg(long)]
        next: Option<String>,
    },

    /// Delete an income source
    Delete {
        /// Income ID
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(store: &mut Store, cmd: IncomeCommands) -> TrunkResult<()> {
    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            frequency,
            next,
        } => {
            let next = parse_date_or_today(next.as_deref())?;
            let income = Income::new(source, parse_money(&amount)?, frequency, next);
            let income = store.add_income(income)?;
            println!(
                "Added income {} ({} {})",
                income.source_name, income.amount, income.frequency
            );
        }

        IncomeCommands::List => {
            let income = &store.data().income;
            println!("{}", display::format_income_list(income));
            if !income.is_empty() {
                let total: Money = income.iter().map(|i| i.monthly_equivalent()).sum();
                println!("Estimated monthly income: {}", total);
            }
        }

        IncomeCommands::Received { id, date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let income = store.update_income(
                &id,
                IncomePatch {
                    last_received_date: Some(date),
                    ..Default::default()
                },
            )?;
            println!("Recorded {} received on {}", income.source_name, date);
        }

        IncomeCommands::Edit {
            id,
            source,
            amount,
            frequency,
            next,
        } => {
            let patch = IncomePatch {
                source_name: source,
                amount: amount.as_deref().map(parse_money).transpose()?,
                frequency,
                next_expected_date: next.as_deref().map(parse_date).transpose()?,
                ..Default::default()
            };
            let income = store.update_income(&id, patch)?;
            println!("Updated income {}", income.source_name);
        }

        IncomeCommands::Delete { id } => {
            store.delete_income(&id)?;
            println!("Deleted income {}", id);
        }
    }

    Ok(())
}
