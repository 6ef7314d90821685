//! Standard monthly remuneration grade tables (標準報酬月額)
//!
//! Health insurance and employees' pension both convert actual monthly pay
//! into a grade, and the grade into a standardized monthly amount that is
//! used in place of actual pay when computing premiums.

use std::io::Read;

use serde::Deserialize;

use super::brackets::{clamped_entry, exclusive_rank};
use crate::error::{Result, TakehomeError};

/// Grade thresholds and standardized amounts for one insurance scheme
///
/// Both sequences are stored in 1,000 JPY. Monthly compensation passed in by
/// callers is in 10,000 JPY and is scaled by 10 before comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeTable {
    /// Exclusive upper bound of each grade except the last
    thresholds: Vec<u32>,
    /// Standardized monthly amount per grade
    standard_amounts: Vec<u32>,
}

/// One row of a grade table CSV
#[derive(Debug, Deserialize)]
struct GradeRow {
    standard_amount: u32,
    upper_threshold: Option<u32>,
}

impl GradeTable {
    /// Build a table, checking that there is one more grade than thresholds
    /// and that both sequences ascend.
    pub fn new(thresholds: Vec<u32>, standard_amounts: Vec<u32>) -> Result<Self> {
        if standard_amounts.len() != thresholds.len() + 1 {
            return Err(TakehomeError::InvalidTable(format!(
                "{} thresholds need {} standard amounts, got {}",
                thresholds.len(),
                thresholds.len() + 1,
                standard_amounts.len()
            )));
        }
        if !thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(TakehomeError::InvalidTable(
                "thresholds must be strictly ascending".into(),
            ));
        }
        if !standard_amounts.windows(2).all(|w| w[0] <= w[1]) {
            return Err(TakehomeError::InvalidTable(
                "standard amounts must be ascending".into(),
            ));
        }
        Ok(Self {
            thresholds,
            standard_amounts,
        })
    }

    /// Load from CSV with `standard_amount,upper_threshold` columns, one row
    /// per grade in ascending order. Only the last row leaves the threshold
    /// empty.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let rows = rdr
            .deserialize::<GradeRow>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let Some((last, body)) = rows.split_last() else {
            return Err(TakehomeError::InvalidTable("grade table is empty".into()));
        };
        if last.upper_threshold.is_some() {
            return Err(TakehomeError::InvalidTable(
                "top grade must not have an upper threshold".into(),
            ));
        }

        let mut thresholds = Vec::with_capacity(body.len());
        for (i, row) in body.iter().enumerate() {
            let threshold = row.upper_threshold.ok_or_else(|| {
                TakehomeError::InvalidTable(format!("grade {} is missing its threshold", i + 1))
            })?;
            thresholds.push(threshold);
        }
        let amounts = rows.iter().map(|r| r.standard_amount).collect();
        Self::new(thresholds, amounts)
    }

    /// Health insurance table, grades 1-50
    pub fn health_insurance() -> Self {
        Self {
            thresholds: vec![
                63, 73, 83, 93, 101, 107, 114, 122, 130, 138, //
                146, 155, 165, 175, 185, 195, 210, 230, 250, 270, //
                290, 310, 330, 350, 370, 395, 425, 455, 485, 515, //
                545, 575, 605, 635, 665, 695, 730, 770, 810, 855, //
                905, 955, 1005, 1055, 1115, 1175, 1235, 1295, 1355,
            ],
            standard_amounts: vec![
                58, 68, 78, 88, 98, 105, 110, 118, 126, 134, //
                142, 150, 160, 170, 180, 190, 200, 220, 240, 260, //
                280, 300, 320, 340, 360, 380, 410, 440, 470, 500, //
                530, 560, 590, 620, 650, 680, 710, 750, 790, 830, //
                880, 930, 980, 1030, 1090, 1150, 1210, 1270, 1330, 1390,
            ],
        }
    }

    /// Employees' pension table, grades 1-32
    pub fn employees_pension() -> Self {
        Self {
            thresholds: vec![
                93, 101, 107, 114, 122, 130, 138, 146, 155, 165, //
                175, 185, 195, 210, 230, 250, 270, 290, 310, 330, //
                350, 370, 395, 425, 455, 485, 515, 545, 575, 605, //
                635,
            ],
            standard_amounts: vec![
                88, 98, 105, 110, 118, 126, 134, 142, 150, 160, //
                170, 180, 190, 200, 220, 240, 260, 280, 300, 320, //
                340, 360, 380, 410, 440, 470, 500, 530, 560, 590, //
                620, 650,
            ],
        }
    }

    /// Grade for a monthly compensation in 10,000 JPY
    pub fn grade(&self, monthly_compensation: f64) -> i64 {
        exclusive_rank(monthly_compensation * 10.0, &self.thresholds) as i64
    }

    /// Standardized monthly amount in 10,000 JPY for a grade.
    /// Grades at or below zero give 0, grades past the top clamp to it.
    pub fn standard_monthly_amount(&self, grade: i64) -> f64 {
        clamped_entry(grade, &self.standard_amounts)
            .map(|amount| amount as f64 / 10.0)
            .unwrap_or(0.0)
    }

    /// Highest grade in the table
    pub fn max_grade(&self) -> i64 {
        self.standard_amounts.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    #[test]
    fn test_table_shapes() {
        let health = GradeTable::health_insurance();
        let pension = GradeTable::employees_pension();
        assert_eq!(health.max_grade(), 50);
        assert_eq!(pension.max_grade(), 32);
        // Built-in tables satisfy the same checks as loaded ones
        assert!(GradeTable::new(health.thresholds.clone(), health.standard_amounts.clone()).is_ok());
        assert!(GradeTable::new(pension.thresholds.clone(), pension.standard_amounts.clone()).is_ok());
    }

    #[test]
    fn test_monthly_30_grades() {
        let health = GradeTable::health_insurance();
        let pension = GradeTable::employees_pension();

        // 300 (1,000 JPY) sits between thresholds 290 and 310
        assert_eq!(health.grade(30.0), 22);
        assert_eq!(health.standard_monthly_amount(22), 30.0);
        assert_eq!(pension.grade(30.0), 19);
        assert_eq!(pension.standard_monthly_amount(19), 30.0);
    }

    #[test]
    fn test_grade_extremes() {
        let health = GradeTable::health_insurance();
        let pension = GradeTable::employees_pension();

        assert_eq!(health.grade(0.0), 1);
        assert_eq!(health.grade(6.0), 1);
        assert_eq!(health.grade(135.5), 50);
        assert_eq!(health.grade(200.0), 50);
        assert_eq!(pension.grade(9.0), 1);
        assert_eq!(pension.grade(63.5), 32);
        assert_eq!(pension.grade(200.0), 32);
    }

    #[test]
    fn test_exact_threshold_moves_to_next_grade() {
        let health = GradeTable::health_insurance();
        // 21.0 -> 210, equal to the 17th threshold
        assert_eq!(health.grade(20.9), 17);
        assert_eq!(health.grade(21.0), 18);
    }

    #[test]
    fn test_standard_amount_clamping() {
        let health = GradeTable::health_insurance();
        assert_eq!(health.standard_monthly_amount(-1), 0.0);
        assert_eq!(health.standard_monthly_amount(0), 0.0);
        assert_eq!(health.standard_monthly_amount(1), 5.8);
        assert_eq!(health.standard_monthly_amount(50), 139.0);
        assert_eq!(health.standard_monthly_amount(99), 139.0);

        let pension = GradeTable::employees_pension();
        assert_eq!(pension.standard_monthly_amount(1), 8.8);
        assert_eq!(pension.standard_monthly_amount(32), 65.0);
        assert_eq!(pension.standard_monthly_amount(40), 65.0);
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert!(GradeTable::new(vec![10, 20], vec![5, 15]).is_err());
        assert!(GradeTable::new(vec![20, 10], vec![5, 15, 25]).is_err());
        assert!(GradeTable::new(vec![10, 20], vec![25, 15, 5]).is_err());
        assert!(GradeTable::new(vec![], vec![5]).is_ok());
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "standard_amount,upper_threshold\n58,63\n68,73\n78,\n";
        let table = GradeTable::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(table.max_grade(), 3);
        assert_eq!(table.grade(6.2), 1);
        assert_eq!(table.grade(7.0), 2);
        assert_eq!(table.grade(100.0), 3);
        assert_eq!(table.standard_monthly_amount(3), 7.8);
    }

    #[test]
    fn test_from_csv_reader_rejects_missing_thresholds() {
        let open_top = "standard_amount,upper_threshold\n58,63\n68,73\n";
        assert!(GradeTable::from_csv_reader(open_top.as_bytes()).is_err());

        let gap = "standard_amount,upper_threshold\n58,\n68,73\n78,\n";
        assert!(GradeTable::from_csv_reader(gap.as_bytes()).is_err());

        let empty = "standard_amount,upper_threshold\n";
        assert!(GradeTable::from_csv_reader(empty.as_bytes()).is_err());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_grade_is_monotonic(a in 0.0f64..200.0, b in 0.0f64..200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for table in [GradeTable::health_insurance(), GradeTable::employees_pension()] {
                prop_assert!(table.grade(lo) <= table.grade(hi));
                prop_assert!(table.grade(hi) >= 1);
                prop_assert!(table.grade(hi) <= table.max_grade());
            }
        }

        #[test]
        fn prop_standard_amount_is_monotonic(a in -10i64..80, b in -10i64..80) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for table in [GradeTable::health_insurance(), GradeTable::employees_pension()] {
                prop_assert!(table.standard_monthly_amount(lo) <= table.standard_monthly_amount(hi));
            }
        }
    }
}
