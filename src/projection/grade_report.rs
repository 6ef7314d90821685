//! Monthly compensation report: grades, standardized amounts and monthly premiums

use rayon::prelude::*;
use serde::Serialize;

use super::output::plain_number;
use crate::assumptions::Assumptions;
use crate::premiums::{health_insurance_premium, pension_premium, CostShare, InsuranceFlags};
use crate::rounding::round_to;

/// Grades and monthly premiums for one monthly compensation, in 10,000 JPY
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeReportRow {
    #[serde(with = "plain_number")]
    pub monthly_compensation: f64,
    pub health_grade: i64,
    #[serde(with = "plain_number")]
    pub health_standard_amount: f64,
    pub pension_grade: i64,
    #[serde(with = "plain_number")]
    pub pension_standard_amount: f64,
    #[serde(with = "plain_number")]
    pub health_premium: f64,
    #[serde(with = "plain_number")]
    pub pension_premium: f64,
    #[serde(with = "plain_number")]
    pub total_premium: f64,
}

pub fn grade_report_row(
    assumptions: &Assumptions,
    monthly_compensation: f64,
    flags: &InsuranceFlags,
) -> GradeReportRow {
    let share = CostShare::from_owner(flags.owner);
    let health_grade = assumptions.health_grades.grade(monthly_compensation);
    let pension_grade = assumptions.pension_grades.grade(monthly_compensation);
    let health_premium =
        health_insurance_premium(assumptions, monthly_compensation, flags.nursing_care, share);
    let pension_premium = pension_premium(assumptions, monthly_compensation, share);

    GradeReportRow {
        monthly_compensation,
        health_grade,
        health_standard_amount: assumptions.health_grades.standard_monthly_amount(health_grade),
        pension_grade,
        pension_standard_amount: assumptions.pension_grades.standard_monthly_amount(pension_grade),
        health_premium,
        pension_premium,
        total_premium: round_to(health_premium + pension_premium, 4),
    }
}

/// Report rows for monthly compensation from `from_tenths / 10` to
/// `to_tenths / 10` inclusive, in steps of 0.1. Rows are computed in
/// parallel and returned in ascending order.
pub fn grade_report(
    assumptions: &Assumptions,
    flags: &InsuranceFlags,
    from_tenths: u32,
    to_tenths: u32,
) -> Vec<GradeReportRow> {
    (from_tenths..=to_tenths)
        .into_par_iter()
        .map(|tenths| grade_report_row(assumptions, tenths as f64 / 10.0, flags))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_report_row_at_30() {
        let row = grade_report_row(&Assumptions::default(), 30.0, &InsuranceFlags::default());
        assert_eq!(row.health_grade, 22);
        assert_eq!(row.pension_grade, 19);
        assert_eq!(row.health_standard_amount, 30.0);
        assert_eq!(row.pension_standard_amount, 30.0);
        assert_abs_diff_eq!(row.total_premium, 4.482, epsilon = 1e-12);
    }

    #[test]
    fn test_report_is_ordered_and_complete() {
        let rows = grade_report(&Assumptions::default(), &InsuranceFlags::default(), 10, 1500);
        assert_eq!(rows.len(), 1491);
        assert_eq!(rows[0].monthly_compensation, 1.0);
        assert_eq!(rows.last().unwrap().monthly_compensation, 150.0);
        assert!(rows.windows(2).all(|w| w[0].monthly_compensation < w[1].monthly_compensation));
        assert!(rows.windows(2).all(|w| w[0].health_grade <= w[1].health_grade));
        assert_eq!(rows.last().unwrap().health_grade, 50);
        assert_eq!(rows.last().unwrap().pension_grade, 32);
    }
}
