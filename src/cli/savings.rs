//! Savings goal CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{SavingsGoal, SavingsGoalPatch};
use crate::storage::Store;

use super::{parse_date, parse_money};

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// List goals with progress
    List,

    /// Deposit into a goal
    Deposit {
        /// Goal ID
        id: String,
        /// Amount to add
        amount: String,
    },

    /// Edit a goal
    Edit {
        /// Goal ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

/// Handle a savings goal command
pub fn handle_savings_command(store: &mut Store, cmd: SavingsCommands) -> TrunkResult<()> {
    match cmd {
        SavingsCommands::Add {
            name,
            target,
            deadline,
        } => {
            let mut goal = SavingsGoal::new(name, parse_money(&target)?);
            goal.deadline = deadline.as_deref().map(parse_date).transpose()?;

            let goal = store.add_savings_goal(goal)?;
            println!("Added goal {} (target {})", goal.name, goal.target_amount);
        }

        SavingsCommands::List => {
            println!("{}", display::format_savings_list(&store.data().savings));
        }

        SavingsCommands::Deposit { id, amount } => {
            let goal = store.add_to_savings(&id, parse_money(&amount)?)?;
            println!(
                "Deposited into {}: {} of {} ({:.1}%)",
                goal.name,
                goal.current_amount,
                goal.target_amount,
                goal.progress_percent()
            );
            if goal.is_complete() {
                println!("Goal reached!");
            }
        }

        SavingsCommands::Edit {
            id,
            name,
            target,
            deadline,
        } => {
            let patch = SavingsGoalPatch {
                name,
                target_amount: target.as_deref().map(parse_money).transpose()?,
                deadline: deadline.as_deref().map(parse_date).transpose()?,
                ..Default::default()
            };
            let goal = store.update_savings_goal(&id, patch)?;
            println!("Updated goal {}", goal.name);
        }

        SavingsCommands::Delete { id } => {
            store.delete_savings_goal(&id)?;
            println!("Deleted goal {}", id);
        }
    }

    Ok(())
}
