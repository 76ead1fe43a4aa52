//! Frame sources: one formatted line per tick.

use crate::accumulator::CostAccumulator;
use crate::config::SalaryConfig;
use crate::currency::CurrencyProfile;
use crate::format::format_cost;

/// Produces the text shown on each tick.
pub trait FrameSource {
    /// Advances one tick and returns the frame for it.
    fn next_frame(&mut self) -> String;
}

impl<F: FrameSource + ?Sized> FrameSource for Box<F> {
    fn next_frame(&mut self) -> String {
        (**self).next_frame()
    }
}

/// Running meeting cost rendered as `<grouped amount> <CODE>`.
#[derive(Debug, Clone)]
pub struct CostFrames {
    accumulator: CostAccumulator,
    precision: u32,
    currency: String,
}

impl CostFrames {
    pub fn new(config: &SalaryConfig, profile: &CurrencyProfile) -> Self {
        Self {
            accumulator: CostAccumulator::new(config, profile),
            precision: profile.precision,
            currency: config.currency().to_string(),
        }
    }

    pub fn accumulator(&self) -> &CostAccumulator {
        &self.accumulator
    }
}

impl FrameSource for CostFrames {
    fn next_frame(&mut self) -> String {
        let total = self.accumulator.advance();
        format_cost(total, self.precision, &self.currency)
    }
}
