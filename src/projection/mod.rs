//! Annual income sweep and its outputs

mod config;
mod engine;
mod grade_report;
mod output;
mod rows;

pub use config::{RunConfig, StepBand, StepSchedule, SweepRange};
pub use engine::{marginal_rate, IncomeSamples, PreviousSample, SweepEngine, SweepSummary};
pub use grade_report::{grade_report, grade_report_row, GradeReportRow};
pub use output::RowWriter;
pub use rows::{IncomeRow, SampleBreakdown};

// Re-exported for configuration callers
pub use crate::premiums::InsuranceFlags;

/// Default output file of the sweep binary
pub const DEFAULT_OUTPUT_PATH: &str = "result.txt";
