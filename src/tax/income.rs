//! Taxable income and national income tax with the reconstruction surtax

use crate::rounding::truncate_to;

/// Taxable income after deductions, truncated to 0.1 (1,000 JPY).
/// Zero when deductions meet or exceed income.
pub fn taxable_income(annual_income: f64, total_deductions: f64) -> f64 {
    if annual_income <= total_deductions {
        return 0.0;
    }
    truncate_to(annual_income - total_deductions, 1)
}

/// Reconstruction surtax on national income tax
pub fn reconstruction_surtax(national_tax: f64, rate: f64) -> f64 {
    national_tax * rate
}

/// National tax plus surtax, truncated to 0.01 (100 JPY) after summing
pub fn combined_income_tax(national_tax: f64, surtax: f64) -> f64 {
    truncate_to(national_tax + surtax, 2)
}
