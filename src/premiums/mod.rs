//! Social and labour insurance premiums withheld from salary

mod social_insurance;
mod unemployment;

pub use social_insurance::{health_insurance_premium, pension_premium, standard_premium, CostShare};
pub use unemployment::unemployment_premium;

use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;

/// Enrollment and age-band switches for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceFlags {
    /// Aged 40-64, so health insurance carries the nursing-care addition
    #[serde(default = "default_true")]
    pub nursing_care: bool,

    /// Enrolled in employees' health insurance and pension
    #[serde(default = "default_true")]
    pub social_insurance: bool,

    /// Enrolled in unemployment insurance
    #[serde(default = "default_true")]
    pub employment_insurance: bool,

    /// Bears both employer and employee halves of social insurance
    #[serde(default)]
    pub owner: bool,
}

fn default_true() -> bool { true }

impl Default for InsuranceFlags {
    fn default() -> Self {
        Self {
            nursing_care: true,
            social_insurance: true,
            employment_insurance: true,
            owner: false,
        }
    }
}

/// Annual premiums in 10,000 JPY
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AnnualPremiums {
    pub health: f64,
    pub pension: f64,
    pub unemployment: f64,
}

impl AnnualPremiums {
    /// Health insurance plus pension
    pub fn social_insurance(&self) -> f64 {
        self.health + self.pension
    }

    /// All premiums, deductible in full from income
    pub fn total(&self) -> f64 {
        self.health + self.pension + self.unemployment
    }
}

/// Annual premiums for an annual income. Health and pension are monthly
/// premiums on a twelfth of annual income, times twelve.
pub fn annual_premiums(
    assumptions: &Assumptions,
    annual_income: f64,
    flags: &InsuranceFlags,
) -> AnnualPremiums {
    let monthly = annual_income / 12.0;
    let share = CostShare::from_owner(flags.owner);

    let (health, pension) = if flags.social_insurance {
        (
            health_insurance_premium(assumptions, monthly, flags.nursing_care, share) * 12.0,
            pension_premium(assumptions, monthly, share) * 12.0,
        )
    } else {
        (0.0, 0.0)
    };

    let unemployment = if flags.employment_insurance {
        unemployment_premium(annual_income, assumptions.rates.unemployment)
    } else {
        0.0
    };

    AnnualPremiums {
        health,
        pension,
        unemployment,
    }
}
