//! The live meter: validate, acquire the terminal, tick until stopped.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use mtg_core::config::SalaryConfig;
use mtg_core::currency::CurrencyTable;
use mtg_core::frames::CostFrames;
use mtg_core::interrupt::{self, StopSignal};
use mtg_tui::{PeriodicRenderer, TerminalSurface};

use crate::cli::MeterArgs;

pub fn run(table: &CurrencyTable, args: &MeterArgs) -> Result<()> {
    // Configuration errors surface before the terminal is touched.
    let config =
        SalaryConfig::resolve(args.salary_input(), table).context("Invalid configuration")?;
    let profile = config.profile(table)?;

    if !io::stdout().is_terminal() {
        anyhow::bail!(
            "The meter requires a terminal on stdout.\n\
             Use `mtg currencies` for non-interactive output."
        );
    }

    tracing::info!(
        currency = config.currency(),
        annual_salary = %config.annual_salary(),
        hours_worked_per_day = config.hours_worked_per_day(),
        days_worked_per_month = config.days_worked_per_month(),
        participants = config.number_of_participants(),
        "starting meter"
    );

    let stop = StopSignal::new();
    interrupt::install(&stop).context("Failed to install signal handlers")?;

    let source = CostFrames::new(&config, profile);
    let surface = TerminalSurface::acquire(args.style.into(), title(&config))
        .context("Failed to setup terminal")?;

    let outcome = PeriodicRenderer::new(source, surface, io::stdout(), stop)
        .with_interval(Duration::from_secs(args.interval_secs))
        .run()
        .context("Meter stopped on a display error")?;

    tracing::debug!(ticks = outcome.ticks, stop_reason = ?outcome.stop_reason, "meter finished");
    Ok(())
}

fn title(config: &SalaryConfig) -> String {
    match config.number_of_participants() {
        1 => "1 participant".to_string(),
        n => format!("{n} participants"),
    }
}

#[cfg(test)]
mod tests {
    use mtg_core::config::SalaryInput;

    use super::*;

    #[test]
    fn test_title_pluralizes() {
        let table = CurrencyTable::standard();
        let one = SalaryConfig::resolve(SalaryInput::default(), &table).unwrap();
        let many = SalaryConfig::resolve(
            SalaryInput {
                number_of_participants: Some(6),
                ..SalaryInput::default()
            },
            &table,
        )
        .unwrap();

        assert_eq!(title(&one), "1 participant");
        assert_eq!(title(&many), "6 participants");
    }
}
