//! Deductions, taxable income, national income tax and resident tax

mod income;
mod resident;

pub use income::{combined_income_tax, reconstruction_surtax, taxable_income};
pub use resident::resident_tax;

use serde::Serialize;

use crate::assumptions::Assumptions;

/// Tax computation for one annual income, amounts in 10,000 JPY
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBreakdown {
    pub basic_deduction: f64,
    pub employment_deduction: f64,
    pub total_deductions: f64,
    pub taxable_income: f64,
    /// National income tax before the surtax
    pub national_tax: f64,
    pub reconstruction_surtax: f64,
    /// National tax plus surtax, truncated to 100 JPY
    pub combined_income_tax: f64,
    pub resident_tax: f64,
}

impl TaxBreakdown {
    /// Amount added by the surtax once the combined figure is truncated
    pub fn surtax_paid(&self) -> f64 {
        self.combined_income_tax - self.national_tax
    }
}

/// Compute taxes for a salary, given the insurance premiums already withheld
pub fn compute_taxes(assumptions: &Assumptions, annual_income: f64, premiums_paid: f64) -> TaxBreakdown {
    let basic_deduction = assumptions.deductions.basic_deduction(annual_income);
    let employment_deduction = assumptions.deductions.employment_income_deduction(annual_income);
    let total_deductions = premiums_paid + basic_deduction + employment_deduction;

    let taxable = taxable_income(annual_income, total_deductions);
    let national_tax = assumptions.income_tax.national_tax(taxable);
    let surtax = reconstruction_surtax(national_tax, assumptions.rates.reconstruction_surtax);

    TaxBreakdown {
        basic_deduction,
        employment_deduction,
        total_deductions,
        taxable_income: taxable,
        national_tax,
        reconstruction_surtax: surtax,
        combined_income_tax: combined_income_tax(national_tax, surtax),
        resident_tax: resident_tax(taxable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compute_taxes_at_500() {
        let assumptions = Assumptions::default();
        // Premiums at 500 with nursing care: 28.4868 + 45.018 + 3.0
        let taxes = compute_taxes(&assumptions, 500.0, 76.5048);
        assert_eq!(taxes.basic_deduction, 48.0);
        assert_abs_diff_eq!(taxes.employment_deduction, 144.0, epsilon = 1e-9);
        assert_abs_diff_eq!(taxes.taxable_income, 231.4, epsilon = 1e-9);
        assert_abs_diff_eq!(taxes.national_tax, 13.39, epsilon = 1e-9);
        assert_abs_diff_eq!(taxes.combined_income_tax, 13.67, epsilon = 1e-9);
        assert_abs_diff_eq!(taxes.surtax_paid(), 0.28, epsilon = 1e-9);
        assert_abs_diff_eq!(taxes.resident_tax, 24.14, epsilon = 1e-9);
    }

    #[test]
    fn test_low_income_has_no_income_tax() {
        let assumptions = Assumptions::default();
        let taxes = compute_taxes(&assumptions, 100.0, 16.3764);
        assert_eq!(taxes.taxable_income, 0.0);
        assert_eq!(taxes.national_tax, 0.0);
        assert_eq!(taxes.combined_income_tax, 0.0);
        // Per-capita levy still applies under the approximation
        assert_abs_diff_eq!(taxes.resident_tax, 1.0, epsilon = 1e-12);
    }
}
