use std::io::{self, Write};

use anyhow::Result;
use mtg_core::currency::CurrencyTable;

pub fn run(table: &CurrencyTable) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_table(table, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn write_table(table: &CurrencyTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<6}{:>8}{:>11}{:>16}", "CODE", "RATE", "PRECISION", "DEFAULT SALARY")?;
    for (code, profile) in table.iter() {
        writeln!(
            out,
            "{:<6}{:>8}{:>11}{:>16}",
            code,
            profile.rate.to_string(),
            profile.precision,
            profile.default_annual_salary.to_string()
        )?;
    }
    Ok(())
}
