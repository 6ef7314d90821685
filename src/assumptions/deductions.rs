//! Basic deduction (基礎控除) and employment income deduction (給与所得控除)

use super::brackets::BracketSchedule;

/// Deduction expressed as `slope * income + intercept`; a flat amount has zero slope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDeduction {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearDeduction {
    pub const fn flat(amount: f64) -> Self {
        Self { slope: 0.0, intercept: amount }
    }

    pub const fn linear(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn apply(&self, income: f64) -> f64 {
        income * self.slope + self.intercept
    }
}

/// Income-bracketed deduction schedules, keyed on annual income
#[derive(Debug, Clone, PartialEq)]
pub struct DeductionSchedule {
    pub basic: BracketSchedule<f64>,
    pub employment_income: BracketSchedule<LinearDeduction>,
}

impl Default for DeductionSchedule {
    fn default() -> Self {
        Self {
            // Phased out above 25M JPY
            basic: BracketSchedule::new(vec![(2400.0, 48.0), (2450.0, 32.0), (2500.0, 16.0)], 0.0),
            employment_income: BracketSchedule::new(
                vec![
                    (162.5, LinearDeduction::flat(55.0)),
                    (180.0, LinearDeduction::linear(0.4, -10.0)),
                    (360.0, LinearDeduction::linear(0.3, 10.0)),
                    (660.0, LinearDeduction::linear(0.2, 44.0)),
                    (850.0, LinearDeduction::linear(0.1, 110.0)),
                ],
                LinearDeduction::flat(195.0),
            ),
        }
    }
}

impl DeductionSchedule {
    /// Basic deduction for an annual income
    pub fn basic_deduction(&self, annual_income: f64) -> f64 {
        *self.basic.lookup(annual_income)
    }

    /// Employment income deduction for an annual salary
    pub fn employment_income_deduction(&self, annual_income: f64) -> f64 {
        self.employment_income.lookup(annual_income).apply(annual_income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::{prop_assert, proptest};

    #[test]
    fn test_basic_deduction_phase_out() {
        let schedule = DeductionSchedule::default();
        assert_eq!(schedule.basic_deduction(100.0), 48.0);
        assert_eq!(schedule.basic_deduction(2400.0), 48.0);
        assert_eq!(schedule.basic_deduction(2400.5), 32.0);
        assert_eq!(schedule.basic_deduction(2450.0), 32.0);
        assert_eq!(schedule.basic_deduction(2500.0), 16.0);
        assert_eq!(schedule.basic_deduction(2500.5), 0.0);
        assert_eq!(schedule.basic_deduction(2600.0), 0.0);
    }

    #[test]
    fn test_employment_income_deduction() {
        let schedule = DeductionSchedule::default();
        assert_eq!(schedule.employment_income_deduction(100.0), 55.0);
        assert_eq!(schedule.employment_income_deduction(162.5), 55.0);
        assert_abs_diff_eq!(schedule.employment_income_deduction(170.0), 58.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.employment_income_deduction(300.0), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.employment_income_deduction(500.0), 144.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.employment_income_deduction(800.0), 190.0, epsilon = 1e-9);
        assert_eq!(schedule.employment_income_deduction(850.5), 195.0);
        assert_eq!(schedule.employment_income_deduction(5000.0), 195.0);
    }

    #[test]
    fn test_employment_income_deduction_joins_at_boundaries() {
        let schedule = DeductionSchedule::default();
        // 180 and 360 step by 2 in the published formulas
        for upper in [162.5, 660.0, 850.0] {
            let below = schedule.employment_income_deduction(upper);
            let above = schedule.employment_income_deduction(upper + 1e-6);
            assert_abs_diff_eq!(below, above, epsilon = 1e-4);
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_basic_deduction_non_increasing(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
            let schedule = DeductionSchedule::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(schedule.basic_deduction(lo) >= schedule.basic_deduction(hi));
        }

        #[test]
        fn prop_basic_deduction_zero_above_2500(income in 2500.001f64..1.0e6) {
            let schedule = DeductionSchedule::default();
            prop_assert!(schedule.basic_deduction(income) == 0.0);
        }
    }
}
