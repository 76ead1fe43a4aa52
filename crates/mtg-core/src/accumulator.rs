//! Running meeting cost.
//!
//! The per-second salary is derived once, in exact decimal arithmetic, and the
//! running total only ever grows by `salary_per_tick * participants`. Display
//! rounding happens on copies (see [`crate::format::floor`]), never on the
//! total, so sub-unit amounts keep accumulating.

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::currency::CurrencyProfile;

#[derive(Debug, Clone)]
pub struct CostAccumulator {
    salary_per_tick: Decimal,
    participants: Decimal,
    running_total: Decimal,
    ticks: u64,
}

impl CostAccumulator {
    /// Creates an accumulator at zero.
    ///
    /// `salary_per_tick = annual_salary * rate / seconds_worked_per_year`
    ///
    /// Amounts past [`Decimal::MAX`] saturate instead of overflowing.
    pub fn new(config: &SalaryConfig, profile: &CurrencyProfile) -> Self {
        let annual = config.annual_salary().saturating_mul(profile.rate);
        let salary_per_tick = annual / Decimal::from(config.seconds_worked_per_year());

        Self {
            salary_per_tick,
            participants: Decimal::from(config.number_of_participants()),
            running_total: Decimal::ZERO,
            ticks: 0,
        }
    }

    /// Adds one tick's cost and returns the new running total.
    pub fn advance(&mut self) -> Decimal {
        let increment = self.salary_per_tick.saturating_mul(self.participants);
        self.running_total = self.running_total.saturating_add(increment);
        self.ticks += 1;
        self.running_total
    }

    /// Salary of a single participant per tick.
    pub fn salary_per_tick(&self) -> Decimal {
        self.salary_per_tick
    }

    pub fn running_total(&self) -> Decimal {
        self.running_total
    }

    /// Number of `advance` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Iterator for CostAccumulator {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        Some(self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SalaryInput;
    use crate::currency::CurrencyTable;
    use crate::format::floor;

    fn accumulator(input: SalaryInput) -> CostAccumulator {
        let table = CurrencyTable::standard();
        let config = SalaryConfig::resolve(input, &table).unwrap();
        let profile = config.profile(&table).unwrap();
        CostAccumulator::new(&config, profile)
    }

    /// Shorthand JPY salary that earns exactly one yen per second at 8h x 20d.
    fn one_yen_per_second() -> Decimal {
        Decimal::from(576_000) / Decimal::from(10_000)
    }

    #[test]
    fn test_one_unit_per_tick() {
        let mut acc = accumulator(SalaryInput {
            annual_salary: Some(one_yen_per_second()),
            currency: Some("JPY".to_string()),
            ..SalaryInput::default()
        });

        assert_eq!(acc.salary_per_tick(), Decimal::ONE);
        for i in 1..=1_000u32 {
            assert_eq!(floor(acc.advance(), 0), Decimal::from(i));
        }
    }

    #[test]
    fn test_sub_unit_amounts_accumulate() {
        let mut acc = accumulator(SalaryInput {
            annual_salary: Some(one_yen_per_second() / Decimal::from(10)),
            ..SalaryInput::default()
        });

        for _ in 1..10 {
            assert_eq!(floor(acc.advance(), 0), Decimal::ZERO);
        }
        assert_eq!(floor(acc.advance(), 0), Decimal::ONE);
        assert_eq!(acc.running_total(), Decimal::ONE);
    }

    #[test]
    fn test_no_drift_over_a_long_meeting() {
        let mut acc = accumulator(SalaryInput {
            annual_salary: Some(one_yen_per_second() / Decimal::from(10)),
            ..SalaryInput::default()
        });

        // Eight hours of ticks at 0.1 per tick.
        let total = acc.by_ref().take(28_800).last().unwrap();
        assert_eq!(total, Decimal::from(2_880));
        assert_eq!(acc.ticks(), 28_800);
    }

    #[test]
    fn test_participants_multiply_the_increment() {
        let mut acc = accumulator(SalaryInput {
            annual_salary: Some(one_yen_per_second()),
            number_of_participants: Some(4),
            ..SalaryInput::default()
        });

        assert_eq!(acc.advance(), Decimal::from(4));
        assert_eq!(acc.advance(), Decimal::from(8));
    }

    #[test]
    fn test_totals_strictly_increase() {
        let mut acc = accumulator(SalaryInput {
            currency: Some("USD".to_string()),
            hours_worked_per_day: Some(7),
            days_worked_per_month: Some(22),
            number_of_participants: Some(3),
            ..SalaryInput::default()
        });

        let mut previous = acc.running_total();
        for _ in 0..500 {
            let next = acc.advance();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let table = CurrencyTable::standard();
        let config = SalaryConfig::resolve(
            SalaryInput {
                annual_salary: Some(Decimal::ONE),
                number_of_participants: Some(u32::MAX),
                ..SalaryInput::default()
            },
            &table,
        )
        .unwrap();
        let profile = CurrencyProfile {
            rate: Decimal::MAX,
            precision: 0,
            default_annual_salary: Decimal::ONE,
        };

        let mut acc = CostAccumulator::new(&config, &profile);
        assert_eq!(acc.advance(), Decimal::MAX);
        assert_eq!(acc.advance(), Decimal::MAX);
        assert_eq!(acc.ticks(), 2);
    }
}
