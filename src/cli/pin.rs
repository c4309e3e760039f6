//! PIN lock CLI commands

use clap::Subcommand;

use crate::crypto;
use crate::error::{TrunkError, TrunkResult};
use crate::storage::Store;

/// PIN subcommands
#[derive(Subcommand)]
pub enum PinCommands {
    /// Enable the PIN lock
    Set {
        /// Four-digit PIN
        pin: String,
    },

    /// Disable the PIN lock
    Disable {
        /// Current PIN
        pin: String,
    },

    /// Show whether the PIN lock is enabled
    Status,
}

/// Handle a PIN command
pub fn handle_pin_command(store: &mut Store, cmd: PinCommands) -> TrunkResult<()> {
    match cmd {
        PinCommands::Set { pin } => {
            if !crypto::is_valid_pin(&pin) {
                return Err(TrunkError::Pin(
                    "PIN must be exactly four digits".to_string(),
                ));
            }
            store.set_pin_hash(crypto::hash_pin(&pin))?;
            println!("PIN lock enabled. Pass --pin on future invocations.");
        }

        PinCommands::Disable { pin } => {
            let stored = store
                .settings()
                .pin_hash
                .clone()
                .ok_or_else(|| TrunkError::Pin("No PIN is set".to_string()))?;
            if !crypto::verify_pin(&pin, &stored) {
                return Err(TrunkError::Pin("Incorrect PIN".to_string()));
            }
            store.clear_pin()?;
            println!("PIN lock disabled.");
        }

        PinCommands::Status => {
            if store.settings().pin_enabled {
                println!("PIN lock is enabled.");
            } else {
                println!("PIN lock is disabled.");
            }
        }
    }

    Ok(())
}
