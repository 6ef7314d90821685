//! Health insurance and employees' pension premiums
//!
//! Both premiums follow the same steps: resolve the grade for monthly pay,
//! take the standardized monthly amount for that grade, apply the rate and
//! split the cost between employer and employee.

use serde::{Deserialize, Serialize};

use crate::assumptions::{Assumptions, GradeTable};
use crate::rounding::round_to;

/// Who bears the premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostShare {
    /// Employer and employee pay half each
    Split,
    /// One party bears both halves, e.g. an owner-director paying through their own company
    SoleBearer,
}

impl CostShare {
    pub fn from_owner(owner: bool) -> Self {
        if owner {
            CostShare::SoleBearer
        } else {
            CostShare::Split
        }
    }

    fn divisor(self) -> f64 {
        match self {
            CostShare::Split => 2.0,
            CostShare::SoleBearer => 1.0,
        }
    }
}

/// Monthly premium in 10,000 JPY for a grade table and a rate in percent,
/// rounded to 4 decimals
pub fn standard_premium(
    table: &GradeTable,
    rate_percent: f64,
    monthly_compensation: f64,
    share: CostShare,
) -> f64 {
    let grade = table.grade(monthly_compensation);
    let standard_amount = table.standard_monthly_amount(grade);
    round_to(standard_amount * rate_percent / 100.0 / share.divisor(), 4)
}

/// Monthly health insurance premium, including nursing care for ages 40-64
pub fn health_insurance_premium(
    assumptions: &Assumptions,
    monthly_compensation: f64,
    nursing_care: bool,
    share: CostShare,
) -> f64 {
    standard_premium(
        &assumptions.health_grades,
        assumptions.rates.health_rate(nursing_care),
        monthly_compensation,
        share,
    )
}

/// Monthly employees' pension premium
pub fn pension_premium(assumptions: &Assumptions, monthly_compensation: f64, share: CostShare) -> f64 {
    standard_premium(
        &assumptions.pension_grades,
        assumptions.rates.pension,
        monthly_compensation,
        share,
    )
}
