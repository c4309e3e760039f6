use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use moneytrunk::cli::{
    handle_bill_command, handle_borrowed_command, handle_budget_command, handle_data_command,
    handle_expense_command, handle_income_command, handle_lent_command, handle_networth_command,
    handle_pin_command, handle_recurring_command, handle_report_command, handle_savings_command,
    handle_subscription_command,
};
use moneytrunk::config::TrunkPaths;
use moneytrunk::error::TrunkError;
use moneytrunk::models::SettingsPatch;
use moneytrunk::storage::Store;
use moneytrunk::{cli, crypto};

#[derive(Parser)]
#[command(
    name = "moneytrunk",
    version,
    about = "Personal finance tracking from the command line",
    long_about = "MoneyTrunk tracks bills, subscriptions, income, expenses, savings goals, \
                  personal loans, and net worth in a single local data file. Set \
                  MONEYTRUNK_DATA_DIR to override where that file lives."
)]
struct Cli {
    /// PIN, required when the PIN lock is enabled
    #[arg(long, global = true, env = "MONEYTRUNK_PIN")]
    pin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bill management commands
    #[command(subcommand)]
    Bill(cli::BillCommands),

    /// Subscription management commands
    #[command(subcommand, alias = "sub")]
    Subscription(cli::SubscriptionCommands),

    /// Income source commands
    #[command(subcommand)]
    Income(cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(cli::ExpenseCommands),

    /// Recurring expense commands
    #[command(subcommand, alias = "rec")]
    Recurring(cli::RecurringCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(cli::SavingsCommands),

    /// Money you borrowed from others
    #[command(subcommand)]
    Borrowed(cli::LoanCommands),

    /// Money you lent to others
    #[command(subcommand)]
    Lent(cli::LoanCommands),

    /// Assets, liabilities, and net worth
    #[command(subcommand, alias = "nw")]
    Networth(cli::NetWorthCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(cli::BudgetCommands),

    /// Reports
    #[command(subcommand)]
    Report(cli::ReportCommands),

    /// Export, import, tags, backups, and reset
    #[command(subcommand)]
    Data(cli::DataCommands),

    /// PIN lock commands
    #[command(subcommand)]
    Pin(cli::PinCommands),

    /// Update preferences
    Settings(SettingsArgs),

    /// Show current configuration and paths
    Config,
}

#[derive(Args)]
struct SettingsArgs {
    /// Display name used in greetings
    #[arg(long)]
    name: Option<String>,

    /// Enable or disable budget alert notifications
    #[arg(long)]
    notifications: Option<bool>,

    /// Budget alert threshold as a percentage (0-100)
    #[arg(long)]
    threshold: Option<f64>,

    /// Enable or disable dark mode for UIs that honor it
    #[arg(long)]
    dark_mode: Option<bool>,

    /// Enable or disable automatic backups
    #[arg(long)]
    auto_backup: Option<bool>,
}

fn main() -> Result<()> {
    let cli_args = Cli::parse();

    let paths = TrunkPaths::new()?;
    let mut store = Store::open(&paths)?;

    // When the PIN lock is on, every command requires the right PIN
    if store.settings().pin_enabled {
        let stored = store
            .settings()
            .pin_hash
            .clone()
            .ok_or_else(|| TrunkError::Pin("PIN lock enabled but no PIN stored".to_string()))?;
        let supplied = cli_args
            .pin
            .as_deref()
            .ok_or_else(|| TrunkError::Pin("PIN required, pass --pin".to_string()))?;
        if !crypto::verify_pin(supplied, &stored) {
            return Err(TrunkError::Pin("Incorrect PIN".to_string()).into());
        }
    }

    match cli_args.command {
        Commands::Bill(cmd) => handle_bill_command(&mut store, cmd)?,
        Commands::Subscription(cmd) => handle_subscription_command(&mut store, cmd)?,
        Commands::Income(cmd) => handle_income_command(&mut store, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&mut store, cmd)?,
        Commands::Recurring(cmd) => handle_recurring_command(&mut store, cmd)?,
        Commands::Savings(cmd) => handle_savings_command(&mut store, cmd)?,
        Commands::Borrowed(cmd) => handle_borrowed_command(&mut store, cmd)?,
        Commands::Lent(cmd) => handle_lent_command(&mut store, cmd)?,
        Commands::Networth(cmd) => handle_networth_command(&mut store, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut store, cmd)?,
        Commands::Report(cmd) => handle_report_command(&mut store, cmd)?,
        Commands::Data(cmd) => handle_data_command(&mut store, &paths, cmd)?,
        Commands::Pin(cmd) => handle_pin_command(&mut store, cmd)?,

        Commands::Settings(args) => {
            let settings = store.update_settings(SettingsPatch {
                user_name: args.name,
                notifications_enabled: args.notifications,
                budget_alert_threshold: args.threshold,
                dark_mode: args.dark_mode,
                auto_backup_enabled: args.auto_backup,
                ..Default::default()
            })?;
            println!("Settings updated.");
            if !settings.user_name.is_empty() {
                println!("  Name:          {}", settings.user_name);
            }
            println!("  Notifications: {}", settings.notifications_enabled);
            println!("  Threshold:     {:.0}%", settings.budget_alert_threshold);
            println!("  Auto backup:   {}", settings.auto_backup_enabled);
        }

        Commands::Config => {
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Data file:        {}", paths.store_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
        }
    }

    Ok(())
}
