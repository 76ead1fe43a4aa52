//! Supported currencies and their input conventions.
//!
//! Salaries are entered in a per-currency shorthand (tens of thousands of yen,
//! thousands of dollars, ...). A [`CurrencyProfile`] carries the multiplier that
//! turns the shorthand into a real annual salary, plus the number of decimal
//! places the meter displays.
//!
//! The table is built once at startup and handed to whoever needs it by
//! reference. Lookups are case-insensitive; codes are stored uppercase.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::ConfigError;

/// Currency used when none is given.
pub const DEFAULT_CURRENCY: &str = "JPY";

/// Conversion and display rules for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyProfile {
    /// Multiplier from shorthand units to real currency units.
    pub rate: Decimal,
    /// Decimal places kept when displaying a cost.
    pub precision: u32,
    /// Default annual salary, in shorthand units.
    pub default_annual_salary: Decimal,
}

/// Immutable lookup from currency code to [`CurrencyProfile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    profiles: BTreeMap<String, CurrencyProfile>,
}

impl CurrencyTable {
    /// The built-in table: JPY, USD and EUR.
    pub fn standard() -> Self {
        Self::from_profiles([
            (
                "JPY",
                CurrencyProfile {
                    rate: Decimal::from(10_000),
                    precision: 0,
                    default_annual_salary: Decimal::from(408),
                },
            ),
            (
                "USD",
                CurrencyProfile {
                    rate: Decimal::from(1_000),
                    precision: 2,
                    default_annual_salary: Decimal::from(60),
                },
            ),
            (
                "EUR",
                CurrencyProfile {
                    rate: Decimal::from(1_000),
                    precision: 2,
                    default_annual_salary: Decimal::from(50),
                },
            ),
        ])
    }

    /// Builds a table from `(code, profile)` pairs. Later duplicates win.
    pub fn from_profiles<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, CurrencyProfile)>,
    {
        let profiles = profiles
            .into_iter()
            .map(|(code, profile)| (code.to_ascii_uppercase(), profile))
            .collect();
        Self { profiles }
    }

    pub fn supports(&self, code: &str) -> bool {
        self.profiles.contains_key(&code.to_ascii_uppercase())
    }

    /// Returns the profile for `code`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedCurrency`] if the code is not in the table.
    pub fn profile(&self, code: &str) -> Result<&CurrencyProfile, ConfigError> {
        self.profiles
            .get(&code.to_ascii_uppercase())
            .ok_or_else(|| ConfigError::UnsupportedCurrency {
                code: code.to_string(),
            })
    }

    /// # Errors
    /// Returns [`ConfigError::UnsupportedCurrency`] if the code is not in the table.
    pub fn rate_of(&self, code: &str) -> Result<Decimal, ConfigError> {
        self.profile(code).map(|p| p.rate)
    }

    /// # Errors
    /// Returns [`ConfigError::UnsupportedCurrency`] if the code is not in the table.
    pub fn precision_of(&self, code: &str) -> Result<u32, ConfigError> {
        self.profile(code).map(|p| p.precision)
    }

    /// # Errors
    /// Returns [`ConfigError::UnsupportedCurrency`] if the code is not in the table.
    pub fn default_salary_of(&self, code: &str) -> Result<Decimal, ConfigError> {
        self.profile(code).map(|p| p.default_annual_salary)
    }

    /// Supported codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Iterates `(code, profile)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CurrencyProfile)> {
        self.profiles.iter().map(|(code, p)| (code.as_str(), p))
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::standard()
    }
}
