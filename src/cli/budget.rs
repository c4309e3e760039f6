//! Budget CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::SettingsPatch;
use crate::reports::spending;
use crate::services::alerts;
use crate::storage::Store;

use super::{parse_money, today};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the overall monthly budget
    Set {
        /// Monthly budget amount
        amount: String,
    },

    /// Set a per-category budget limit
    SetCategory {
        /// Category name
        category: String,
        /// Limit for the category
        limit: String,
    },

    /// Remove a per-category budget limit
    RemoveCategory {
        /// Category name
        category: String,
    },

    /// Show budget usage for the current month
    Status,

    /// Check budget alerts now
    Check,
}

/// Handle a budget command
pub fn handle_budget_command(store: &mut Store, cmd: BudgetCommands) -> TrunkResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let settings = store.update_settings(SettingsPatch {
                monthly_budget: Some(parse_money(&amount)?),
                ..Default::default()
            })?;
            println!("Monthly budget set to {}", settings.monthly_budget);
        }

        BudgetCommands::SetCategory { category, limit } => {
            let limit = parse_money(&limit)?;
            let previous = store.settings().category_limit(&category);
            store.set_category_budget(category.clone(), limit)?;
            match previous {
                Some(previous) if previous != limit => {
                    println!("Budget for {} changed from {} to {}", category, previous, limit);
                }
                _ => println!("Budget for {} set to {}", category, limit),
            }
        }

        BudgetCommands::RemoveCategory { category } => {
            if store.remove_category_budget(&category)? {
                println!("Removed budget for {}", category);
            } else {
                println!("No budget was set for {}", category);
            }
        }

        BudgetCommands::Status => {
            let key = spending::month_key(today());
            let spent = spending::month_total(&store.data().expenses, &key);
            let budget = store.settings().monthly_budget;

            println!("Budget status for {}\n", key);
            if budget.is_positive() {
                println!(
                    "  Overall: {} of {} ({:.1}%)",
                    spent,
                    budget,
                    spent.percent_of(budget)
                );
            } else {
                println!("  Overall: {} spent (no budget set)", spent);
            }

            let totals = spending::category_totals(&store.data().expenses, &key);
            for cb in &store.settings().category_budgets {
                let spent = totals
                    .get(&cb.category)
                    .copied()
                    .unwrap_or_else(crate::models::Money::zero);
                println!(
                    "  {}: {} of {} ({:.1}%)",
                    cb.category,
                    spent,
                    cb.limit,
                    spent.percent_of(cb.limit)
                );
            }
        }

        BudgetCommands::Check => {
            let alerts = alerts::evaluate_alerts(&store.data().expenses, store.settings(), today());
            if alerts.is_empty() {
                println!("No budget alerts.");
            } else {
                print!("{}", display::format_alerts(&alerts));
            }
        }
    }

    Ok(())
}
