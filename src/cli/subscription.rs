//! Subscription CLI commands

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{BillingCycle, Money, Subscription, SubscriptionPatch};
use crate::storage::Store;

use super::{parse_date, parse_money, parse_tags};

/// Subscription subcommands
#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Add a subscription
    Add {
        /// Subscription name
        name: String,
        /// Amount per billing cycle
        amount: String,
        /// Next billing date (YYYY-MM-DD)
        next: String,
        /// Billing cycle
        #[arg(short = 'b', long, value_enum, default_value_t = BillingCycle::Monthly)]
        cycle: BillingCycle,
        /// Category
        #[arg(short, long, default_value = "Subscriptions")]
        category: String,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List subscriptions with monthly cost
    List,

    /// Edit a subscription
    Edit {
        /// Subscription ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        next: Option<String>,
        #[arg(long, value_enum)]
        cycle: Option<BillingCycle>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a subscription
    Delete {
        /// Subscription ID
        id: String,
    },
}

/// Handle a subscription command
pub fn handle_subscription_command(store: &mut Store, cmd: SubscriptionCommands) -> TrunkResult<()> {
    match cmd {
        SubscriptionCommands::Add {
            name,
            amount,
            next,
            cycle,
            category,
            tags,
        } => {
            let mut sub = Subscription::new(
                name,
                parse_money(&amount)?,
                cycle,
                parse_date(&next)?,
                category,
            );
            sub.tags = parse_tags(tags.as_deref());

            let sub = store.add_subscription(sub)?;
            println!(
                "Added subscription {} ({}/mo)",
                sub.name,
                sub.monthly_cost()
            );
        }

        SubscriptionCommands::List => {
            let subscriptions = &store.data().subscriptions;
            println!("{}", display::format_subscription_list(subscriptions));
            if !subscriptions.is_empty() {
                let total: Money = subscriptions.iter().map(|s| s.monthly_cost()).sum();
                println!("Total monthly cost: {}", total);
            }
        }

        SubscriptionCommands::Edit {
            id,
            name,
            amount,
            next,
            cycle,
            category,
        } => {
            let patch = SubscriptionPatch {
                name,
                amount: amount.as_deref().map(parse_money).transpose()?,
                next_billing_date: next.as_deref().map(parse_date).transpose()?,
                billing_cycle: cycle,
                category,
                ..Default::default()
            };
            let sub = store.update_subscription(&id, patch)?;
            println!("Updated subscription {}", sub.name);
        }

        SubscriptionCommands::Delete { id } => {
            store.delete_subscription(&id)?;
            println!("Deleted subscription {}", id);
        }
    }

    Ok(())
}
