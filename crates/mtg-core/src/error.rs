//! Configuration errors.
//!
//! Everything here is detected before a cost accumulator exists, so the
//! refresh loop never starts on a bad configuration.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported currency '{code}'")]
    UnsupportedCurrency { code: String },
    #[error("{field} must be a positive integer")]
    NonPositive { field: &'static str },
    #[error("Annual salary must be positive (got {value})")]
    NonPositiveSalary { value: Decimal },
    #[error("Annual salary {value} is too large")]
    SalaryTooLarge { value: Decimal },
    #[error("Invalid annual salary '{input}': {reason}")]
    InvalidSalary { input: String, reason: String },
}
