pub mod currencies;
pub mod meter;
