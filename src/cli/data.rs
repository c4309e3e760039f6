//! Data management CLI commands: export, import, tags, backups, reset

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;

use crate::backup;
use crate::config::TrunkPaths;
use crate::error::{TrunkError, TrunkResult};
use crate::export::{csv as csv_export, json as json_export};
use crate::services::import;
use crate::storage::Store;

use super::today;

/// Data management subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Export a full JSON backup
    Export {
        /// Output path (defaults to moneytrunk-backup-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a JSON backup, replacing all current data
    Import {
        /// Path to the backup file
        file: PathBuf,
    },

    /// Export expenses as CSV
    ExportCsv {
        /// Output path
        output: PathBuf,
    },

    /// Import expenses from CSV (additive)
    ImportCsv {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Manage the shared tag list
    #[command(subcommand)]
    Tag(TagCommands),

    /// Create a timestamped backup of the data file
    Backup,

    /// List existing backups
    Backups,

    /// Erase all data and start over
    Reset {
        /// Required confirmation flag
        #[arg(long)]
        yes: bool,
    },
}

/// Tag subcommands
#[derive(Subcommand)]
pub enum TagCommands {
    /// Add a tag
    Add { tag: String },
    /// Remove a tag
    Remove { tag: String },
    /// List tags
    List,
}

/// Handle a data management command
pub fn handle_data_command(
    store: &mut Store,
    paths: &TrunkPaths,
    cmd: DataCommands,
) -> TrunkResult<()> {
    match cmd {
        DataCommands::Export { output } => {
            let path =
                output.unwrap_or_else(|| PathBuf::from(json_export::default_file_name(today())));
            json_export::export_backup(store.data(), &path)?;
            println!("Exported backup to {}", path.display());
        }

        DataCommands::Import { file } => {
            let json = fs::read_to_string(&file)
                .map_err(|e| TrunkError::Import(format!("Cannot read {}: {}", file.display(), e)))?;
            let data = import::parse_backup(&json, store.settings())?;

            // Keep a copy of the current state before it is replaced
            if paths.is_initialized() {
                backup::create_backup(paths)?;
            }

            store.replace_data(data)?;
            println!(
                "Imported backup: {} expenses, {} bills, {} subscriptions",
                store.data().expenses.len(),
                store.data().bills.len(),
                store.data().subscriptions.len()
            );
        }

        DataCommands::ExportCsv { output } => {
            csv_export::export_expenses_csv(&store.data().expenses, &output)?;
            println!(
                "Exported {} expenses to {}",
                store.data().expenses.len(),
                output.display()
            );
        }

        DataCommands::ImportCsv { file } => {
            let reader = fs::File::open(&file)
                .map_err(|e| TrunkError::Import(format!("Cannot read {}: {}", file.display(), e)))?;
            let expenses = import::import_expenses_csv(reader)?;
            let count = expenses.len();
            for expense in expenses {
                store.add_expense(expense)?;
            }
            println!("Imported {} expense(s)", count);
        }

        DataCommands::Tag(tag_cmd) => match tag_cmd {
            TagCommands::Add { tag } => {
                store.add_tag(tag.clone())?;
                println!("Added tag {}", tag);
            }
            TagCommands::Remove { tag } => {
                store.remove_tag(&tag)?;
                println!("Removed tag {}", tag);
            }
            TagCommands::List => {
                if store.data().tags.is_empty() {
                    println!("No tags defined.");
                } else {
                    for tag in &store.data().tags {
                        println!("{}", tag);
                    }
                }
            }
        },

        DataCommands::Backup => {
            let path = backup::create_backup(paths)?;
            store.set_last_backup_date(today())?;
            println!("Backup written to {}", path.display());
        }

        DataCommands::Backups => {
            let backups = backup::list_backups(paths)?;
            if backups.is_empty() {
                println!("No backups found.");
            } else {
                for path in backups {
                    println!("{}", path.display());
                }
            }
        }

        DataCommands::Reset { yes } => {
            if !yes {
                return Err(TrunkError::Validation(
                    "Refusing to erase data without --yes".to_string(),
                ));
            }
            if paths.is_initialized() {
                backup::create_backup(paths)?;
            }
            store.reset()?;
            println!("All data erased. A backup of the previous state was kept.");
        }
    }

    Ok(())
}
