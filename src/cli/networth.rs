//! Net worth CLI commands: assets, liabilities, and snapshots

use clap::Subcommand;

use crate::display;
use crate::error::TrunkResult;
use crate::models::{Asset, AssetType, Liability, LiabilityType};
use crate::storage::Store;

use super::{parse_money, today};

/// Net worth subcommands
#[derive(Subcommand)]
pub enum NetWorthCommands {
    /// Add an asset
    AddAsset {
        /// Asset name
        name: String,
        /// Current value
        value: String,
        /// Asset type
        #[arg(short = 't', long = "type", value_enum, default_value_t = AssetType::Cash)]
        asset_type: AssetType,
    },

    /// Update an asset's value
    Revalue {
        /// Asset ID
        id: String,
        /// New value
        value: String,
    },

    /// Delete an asset
    DeleteAsset {
        /// Asset ID
        id: String,
    },

    /// Add a liability
    AddLiability {
        /// Liability name
        name: String,
        /// Current balance
        balance: String,
        /// Liability type
        #[arg(short = 't', long = "type", value_enum, default_value_t = LiabilityType::Other)]
        liability_type: LiabilityType,
    },

    /// Update a liability's balance
    Rebalance {
        /// Liability ID
        id: String,
        /// New balance
        balance: String,
    },

    /// Delete a liability
    DeleteLiability {
        /// Liability ID
        id: String,
    },

    /// Show assets, liabilities, and current net worth
    Show,

    /// Record today's net worth snapshot
    Snapshot,

    /// Show the snapshot history
    History,
}

/// Handle a net worth command
pub fn handle_networth_command(store: &mut Store, cmd: NetWorthCommands) -> TrunkResult<()> {
    match cmd {
        NetWorthCommands::AddAsset {
            name,
            value,
            asset_type,
        } => {
            let asset = Asset::new(name, asset_type, parse_money(&value)?, today());
            let asset = store.add_asset(asset)?;
            println!("Added asset {} ({})", asset.name, asset.value);
        }

        NetWorthCommands::Revalue { id, value } => {
            let asset = store.revalue_asset(&id, parse_money(&value)?, today())?;
            println!("Revalued {} to {}", asset.name, asset.value);
        }

        NetWorthCommands::DeleteAsset { id } => {
            store.delete_asset(&id)?;
            println!("Deleted asset {}", id);
        }

        NetWorthCommands::AddLiability {
            name,
            balance,
            liability_type,
        } => {
            let liability = Liability::new(name, liability_type, parse_money(&balance)?, today());
            let liability = store.add_liability(liability)?;
            println!("Added liability {} ({})", liability.name, liability.balance);
        }

        NetWorthCommands::Rebalance { id, balance } => {
            let liability = store.rebalance_liability(&id, parse_money(&balance)?, today())?;
            println!("Updated {} to {}", liability.name, liability.balance);
        }

        NetWorthCommands::DeleteLiability { id } => {
            store.delete_liability(&id)?;
            println!("Deleted liability {}", id);
        }

        NetWorthCommands::Show => {
            println!(
                "{}",
                display::format_net_worth(&store.data().assets, &store.data().liabilities)
            );
        }

        NetWorthCommands::Snapshot => {
            let snapshot = store.record_net_worth_snapshot(today())?;
            println!(
                "Recorded snapshot for {}: net worth {}",
                snapshot.date, snapshot.net_worth
            );
        }

        NetWorthCommands::History => {
            println!(
                "{}",
                display::format_net_worth_history(&store.data().net_worth_history)
            );
        }
    }

    Ok(())
}
