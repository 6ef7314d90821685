//! Per-sample results

use serde::Serialize;

use super::output::{plain_number, plain_number_opt};
use crate::premiums::AnnualPremiums;
use crate::tax::TaxBreakdown;

/// Full calculation for one annual income, amounts in 10,000 JPY
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleBreakdown {
    pub income: f64,
    pub premiums: AnnualPremiums,
    pub taxes: TaxBreakdown,
    /// Income after premiums and taxes, rounded to 4 decimals
    pub take_home: f64,
    /// Everything withheld: income minus take-home
    pub total_burden: f64,
    /// Total burden as a percentage of income, rounded to 1 decimal
    pub effective_rate: f64,
}

/// One output row. Field order is the column order of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeRow {
    #[serde(with = "plain_number")]
    pub income: f64,
    #[serde(with = "plain_number")]
    pub health_premium: f64,
    #[serde(with = "plain_number")]
    pub pension_premium: f64,
    #[serde(with = "plain_number")]
    pub social_insurance: f64,
    #[serde(with = "plain_number")]
    pub unemployment_premium: f64,
    #[serde(with = "plain_number")]
    pub basic_deduction: f64,
    #[serde(with = "plain_number")]
    pub employment_deduction: f64,
    #[serde(with = "plain_number")]
    pub taxable_income: f64,
    #[serde(with = "plain_number")]
    pub national_tax: f64,
    #[serde(with = "plain_number")]
    pub surtax: f64,
    #[serde(with = "plain_number")]
    pub resident_tax: f64,
    #[serde(with = "plain_number")]
    pub take_home: f64,
    #[serde(with = "plain_number")]
    pub total_burden: f64,
    #[serde(with = "plain_number")]
    pub effective_rate: f64,
    /// Burden added per unit of extra income since the previous sample, in
    /// percent. Empty when the previous sample had the same income.
    #[serde(with = "plain_number_opt")]
    pub marginal_rate: Option<f64>,
}

impl IncomeRow {
    pub fn new(breakdown: &SampleBreakdown, marginal_rate: Option<f64>) -> Self {
        let premiums = &breakdown.premiums;
        let taxes = &breakdown.taxes;
        Self {
            income: breakdown.income,
            health_premium: premiums.health,
            pension_premium: premiums.pension,
            social_insurance: premiums.social_insurance(),
            unemployment_premium: premiums.unemployment,
            basic_deduction: taxes.basic_deduction,
            employment_deduction: taxes.employment_deduction,
            taxable_income: taxes.taxable_income,
            national_tax: taxes.national_tax,
            surtax: taxes.surtax_paid(),
            resident_tax: taxes.resident_tax,
            take_home: breakdown.take_home,
            total_burden: breakdown.total_burden,
            effective_rate: breakdown.effective_rate,
            marginal_rate,
        }
    }
}
