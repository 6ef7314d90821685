//! Resident tax (住民税) approximation
//!
//! A flat 10% income levy on taxable income plus a fixed per-capita levy. The
//! taxable base is lifted by the 50,000 JPY gap between the national and
//! municipal basic deductions. Municipal variation is ignored.

const INCOME_LEVY_RATE: f64 = 0.1;
const BASIC_DEDUCTION_GAP: f64 = 5.0;
const PER_CAPITA_LEVY: f64 = 0.5;

/// Annual resident tax in 10,000 JPY
pub fn resident_tax(taxable_income: f64) -> f64 {
    (taxable_income + BASIC_DEDUCTION_GAP) * INCOME_LEVY_RATE + PER_CAPITA_LEVY
}
