//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use mtg_core::Decimal;
use mtg_core::config::{SalaryInput, parse_annual_salary};
use mtg_core::currency::CurrencyTable;
use mtg_tui::FrameStyle;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "mtg")]
#[command(version)]
#[command(about = "We hate meetings: watch what this one is costing, second by second")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    meter: MeterArgs,
}

/// Salary and display options for the meter.
#[derive(clap::Args, Debug, Clone)]
struct MeterArgs {
    /// Members' average annual salary, in the currency's shorthand units
    /// (JPY: 10,000 yen, USD/EUR: 1,000). Defaults per currency.
    #[arg(short = 's', long, env = "MTG_ANNUAL_SALARY", value_parser = parse_annual_salary)]
    annual_salary: Option<Decimal>,

    /// Currency code (case-insensitive) [default: JPY]
    #[arg(short = 'c', long, env = "MTG_CURRENCY")]
    currency: Option<String>,

    /// Members' average hours worked per day [default: 8]
    #[arg(short = 't', long, env = "MTG_HOURS_PER_DAY")]
    hours_worked_per_day: Option<u32>,

    /// Members' average days worked per month [default: 20]
    #[arg(short = 'd', long, env = "MTG_DAYS_PER_MONTH")]
    days_worked_per_month: Option<u32>,

    /// Number of participants in the meeting [default: 1]
    #[arg(short = 'n', long, env = "MTG_PARTICIPANTS")]
    number_of_participants: Option<u32>,

    /// Seconds between refreshes
    #[arg(
        short = 'i',
        long,
        env = "MTG_INTERVAL_SECS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_secs: u64,

    /// Screen layout
    #[arg(long, env = "MTG_STYLE", value_enum, default_value_t = StyleArg::Boxed)]
    style: StyleArg,
}

impl MeterArgs {
    fn salary_input(&self) -> SalaryInput {
        SalaryInput {
            annual_salary: self.annual_salary,
            currency: self.currency.clone(),
            hours_worked_per_day: self.hours_worked_per_day,
            days_worked_per_month: self.days_worked_per_month,
            number_of_participants: self.number_of_participants,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum StyleArg {
    /// Bare cost line in the top-left corner
    Plain,
    /// Cost inside a titled border
    Boxed,
}

impl From<StyleArg> for FrameStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Plain => FrameStyle::Plain,
            StyleArg::Boxed => FrameStyle::Boxed,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List supported currencies and their conventions
    Currencies,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init();

    let table = CurrencyTable::standard();
    match cli.command {
        Some(Commands::Currencies) => commands::currencies::run(&table),
        None => commands::meter::run(&table, &cli.meter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mtg").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_leave_salary_fields_unset() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.meter.salary_input(), SalaryInput::default());
        assert_eq!(cli.meter.interval_secs, 1);
        assert_eq!(cli.meter.style, StyleArg::Boxed);
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["-s", "5.76", "-c", "usd", "-t", "7", "-d", "22", "-n", "4"]).unwrap();
        assert_eq!(
            cli.meter.salary_input(),
            SalaryInput {
                annual_salary: Some(Decimal::new(576, 2)),
                currency: Some("usd".to_string()),
                hours_worked_per_day: Some(7),
                days_worked_per_month: Some(22),
                number_of_participants: Some(4),
            }
        );
    }

    #[test]
    fn test_invalid_salary_is_a_parse_error() {
        assert!(parse(&["--annual-salary", "lots"]).is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(parse(&["--interval-secs", "0"]).is_err());
    }

    #[test]
    fn test_style_maps_to_frame_style() {
        let cli = parse(&["--style", "plain"]).unwrap();
        assert_eq!(FrameStyle::from(cli.meter.style), FrameStyle::Plain);
    }

    #[test]
    fn test_currencies_subcommand() {
        let cli = parse(&["currencies"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Currencies)));
    }
}
