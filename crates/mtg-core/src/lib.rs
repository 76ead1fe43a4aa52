//! Core meeting-cost library (currencies, salary config, accumulation, formatting).

pub mod accumulator;
pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod frames;
pub mod interrupt;

pub use rust_decimal::Decimal;
