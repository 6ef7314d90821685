//! Tables and rates driving the take-home calculation

pub mod brackets;
mod deductions;
mod grades;
mod income_tax;
mod rates;

pub use brackets::{Band, BracketSchedule};
pub use deductions::{DeductionSchedule, LinearDeduction};
pub use grades::GradeTable;
pub use income_tax::{IncomeTaxSchedule, TaxBand};
pub use rates::{
    PremiumRates, EMPLOYEES_PENSION_RATE, HEALTH_INSURANCE_RATE,
    HEALTH_INSURANCE_RATE_WITH_NURSING_CARE, RECONSTRUCTION_SURTAX_RATE,
    UNEMPLOYMENT_INSURANCE_RATE,
};

/// All assumptions for one run
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub health_grades: GradeTable,
    pub pension_grades: GradeTable,
    pub rates: PremiumRates,
    pub deductions: DeductionSchedule,
    pub income_tax: IncomeTaxSchedule,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            health_grades: GradeTable::health_insurance(),
            pension_grades: GradeTable::employees_pension(),
            rates: PremiumRates::default(),
            deductions: DeductionSchedule::default(),
            income_tax: IncomeTaxSchedule::default(),
        }
    }
}

impl Assumptions {
    /// Default assumptions with one or both grade tables replaced
    pub fn with_grade_tables(health: Option<GradeTable>, pension: Option<GradeTable>) -> Self {
        let mut assumptions = Self::default();
        if let Some(table) = health {
            assumptions.health_grades = table;
        }
        if let Some(table) = pension {
            assumptions.pension_grades = table;
        }
        assumptions
    }
}
