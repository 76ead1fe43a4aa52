//! Salary configuration.
//!
//! [`SalaryInput`] is what the front end collected (every field optional);
//! [`SalaryConfig`] is the validated, fully resolved form the accumulator
//! consumes. The only way to get a `SalaryConfig` is through
//! [`SalaryConfig::resolve`], so a config in hand always satisfies:
//! - the currency is in the table (stored uppercase)
//! - salary, hours, days and participants are all positive
//! - the whole-meeting annual cost in minor units fits in a [`Decimal`]

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::currency::{CurrencyProfile, CurrencyTable, DEFAULT_CURRENCY};
use crate::error::ConfigError;

pub const DEFAULT_HOURS_WORKED_PER_DAY: u32 = 8;
pub const DEFAULT_DAYS_WORKED_PER_MONTH: u32 = 20;
pub const DEFAULT_NUMBER_OF_PARTICIPANTS: u32 = 1;

/// Unvalidated salary parameters. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryInput {
    pub annual_salary: Option<Decimal>,
    pub currency: Option<String>,
    pub hours_worked_per_day: Option<u32>,
    pub days_worked_per_month: Option<u32>,
    pub number_of_participants: Option<u32>,
}

/// Validated salary parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryConfig {
    annual_salary: Decimal,
    currency: String,
    hours_worked_per_day: u32,
    days_worked_per_month: u32,
    number_of_participants: u32,
}

impl SalaryConfig {
    /// Validates `input` against `table` and fills in defaults.
    ///
    /// A missing salary resolves to the currency's default shorthand salary.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for an unsupported currency, any
    /// non-positive numeric field, or a salary too large to meter.
    pub fn resolve(input: SalaryInput, table: &CurrencyTable) -> Result<Self, ConfigError> {
        let currency = input
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
            .to_ascii_uppercase();
        let profile = table.profile(&currency)?;

        let annual_salary = input
            .annual_salary
            .unwrap_or(profile.default_annual_salary);
        if annual_salary <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveSalary {
                value: annual_salary,
            });
        }

        let hours_worked_per_day = positive(
            input.hours_worked_per_day,
            DEFAULT_HOURS_WORKED_PER_DAY,
            "hours worked per day",
        )?;
        let days_worked_per_month = positive(
            input.days_worked_per_month,
            DEFAULT_DAYS_WORKED_PER_MONTH,
            "days worked per month",
        )?;
        let number_of_participants = positive(
            input.number_of_participants,
            DEFAULT_NUMBER_OF_PARTICIPANTS,
            "number of participants",
        )?;

        annual_salary
            .checked_mul(profile.rate)
            .and_then(|annual| annual.checked_mul(Decimal::from(number_of_participants)))
            .ok_or(ConfigError::SalaryTooLarge {
                value: annual_salary,
            })?;

        Ok(Self {
            annual_salary,
            currency,
            hours_worked_per_day,
            days_worked_per_month,
            number_of_participants,
        })
    }

    /// Annual salary in shorthand units.
    pub fn annual_salary(&self) -> Decimal {
        self.annual_salary
    }

    /// Uppercase currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn hours_worked_per_day(&self) -> u32 {
        self.hours_worked_per_day
    }

    pub fn days_worked_per_month(&self) -> u32 {
        self.days_worked_per_month
    }

    pub fn number_of_participants(&self) -> u32 {
        self.number_of_participants
    }

    /// Seconds worked in a year: hours/day x days/month x 12 x 3600.
    pub fn seconds_worked_per_year(&self) -> u64 {
        u64::from(self.hours_worked_per_day) * u64::from(self.days_worked_per_month) * 12 * 3600
    }

    /// Looks up this config's currency profile.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedCurrency`] if `table` is not the one
    /// the config was resolved against and lacks the currency.
    pub fn profile<'t>(&self, table: &'t CurrencyTable) -> Result<&'t CurrencyProfile, ConfigError> {
        table.profile(&self.currency)
    }
}

fn positive(value: Option<u32>, default: u32, field: &'static str) -> Result<u32, ConfigError> {
    match value.unwrap_or(default) {
        0 => Err(ConfigError::NonPositive { field }),
        v => Ok(v),
    }
}

/// Parses a shorthand salary such as `408` or `5.76`.
///
/// # Errors
/// Returns [`ConfigError::InvalidSalary`] if the text is not a decimal number.
pub fn parse_annual_salary(input: &str) -> Result<Decimal, ConfigError> {
    Decimal::from_str(input.trim()).map_err(|err| ConfigError::InvalidSalary {
        input: input.to_string(),
        reason: err.to_string(),
    })
}
