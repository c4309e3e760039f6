//! Reporting CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::display;
use crate::error::{TrunkError, TrunkResult};
use crate::reports::{spending, summary, year_over_year};
use crate::storage::Store;

use super::today;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Month overview: income, spending, bills, loans
    Summary,

    /// Spending by category for a month
    Categories {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Monthly spending trend
    Trend {
        /// How many trailing months to include
        #[arg(short, long, default_value = "6")]
        months: u32,
    },

    /// Year-over-year spending comparison
    YearOverYear {
        /// Year to compare (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn parse_month(s: &str) -> TrunkResult<String> {
    let valid = s.len() == 7
        && s.is_ascii()
        && s.as_bytes()[4] == b'-'
        && s[..4].chars().all(|c| c.is_ascii_digit())
        && s[5..].chars().all(|c| c.is_ascii_digit());
    if valid {
        Ok(s.to_string())
    } else {
        Err(TrunkError::Validation(format!(
            "Invalid month '{}', expected YYYY-MM",
            s
        )))
    }
}

/// Handle a report command
pub fn handle_report_command(store: &mut Store, cmd: ReportCommands) -> TrunkResult<()> {
    match cmd {
        ReportCommands::Summary => {
            // Bring recurring expenses up to date before summing
            store.process_recurring(today())?;
            let summary = summary::month_summary(store.data(), today());
            println!("{}", display::format_month_summary(&summary));
        }

        ReportCommands::Categories { month } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => spending::month_key(today()),
            };
            let rows = spending::category_breakdown(&store.data().expenses, &month);
            println!("{}", display::format_category_breakdown(&rows, &month));
        }

        ReportCommands::Trend { months } => {
            let trend = spending::monthly_trend(&store.data().expenses, today(), months);
            println!("{}", display::format_trend(&trend));
        }

        ReportCommands::YearOverYear { year } => {
            let year = year.unwrap_or_else(|| today().year());
            let report = year_over_year::year_over_year(&store.data().expenses, year);
            println!("{}", display::format_year_over_year(&report));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-01").unwrap(), "2024-01");
        assert!(parse_month("2024-1").is_err());
        assert!(parse_month("Jan 2024").is_err());
    }
}
