//! Unemployment insurance premium (雇用保険料)
//!
//! The premium is withheld per paycheck and rounded to the yen each month,
//! so the annual amount is twelve rounded monthly deductions.

const YEN_PER_UNIT: f64 = 10_000.0;
const MONTHS: f64 = 12.0;

/// Annual unemployment insurance premium in 10,000 JPY for an annual income
/// in 10,000 JPY and the employee rate as a fraction.
pub fn unemployment_premium(annual_income: f64, rate: f64) -> f64 {
    let monthly_yen = (annual_income / MONTHS * YEN_PER_UNIT).round_ties_even();
    let premium_yen = (monthly_yen * rate).round_ties_even();
    premium_yen * MONTHS / YEN_PER_UNIT
}
