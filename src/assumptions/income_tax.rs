//! National income tax rate schedule (所得税の速算表)

use super::brackets::BracketSchedule;
use crate::rounding::round_to;

/// Marginal rate and quick-calculation subtraction for one band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBand {
    pub rate_percent: f64,
    pub subtraction: f64,
}

impl TaxBand {
    const fn new(rate_percent: f64, subtraction: f64) -> Self {
        Self { rate_percent, subtraction }
    }
}

/// Progressive national income tax schedule keyed on taxable income
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeTaxSchedule {
    pub bands: BracketSchedule<TaxBand>,
}

impl Default for IncomeTaxSchedule {
    fn default() -> Self {
        Self {
            bands: BracketSchedule::new(
                vec![
                    (194.9, TaxBand::new(5.0, 0.0)),
                    (329.9, TaxBand::new(10.0, 9.75)),
                    (694.9, TaxBand::new(20.0, 42.75)),
                    (899.9, TaxBand::new(23.0, 63.6)),
                    (1799.9, TaxBand::new(33.0, 153.6)),
                    (3999.9, TaxBand::new(40.0, 279.6)),
                ],
                TaxBand::new(45.0, 479.6),
            ),
        }
    }
}

impl IncomeTaxSchedule {
    /// National income tax before the reconstruction surtax.
    ///
    /// Taxable income is rounded to one decimal before the band lookup. This
    /// is separate from the truncation applied when taxable income is derived.
    pub fn national_tax(&self, taxable_income: f64) -> f64 {
        let taxable = round_to(taxable_income, 1);
        let band = self.bands.lookup(taxable);
        taxable * band.rate_percent / 100.0 - band.subtraction
    }
}
