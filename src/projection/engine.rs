//! Sweep engine: computes every income sample and threads the previous
//! sample through the sweep for the marginal rate

use std::io::Write;

use log::{info, trace};

use super::config::{RunConfig, StepSchedule};
use super::output::RowWriter;
use super::rows::{IncomeRow, SampleBreakdown};
use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::premiums::annual_premiums;
use crate::rounding::round_to;
use crate::tax::compute_taxes;

/// Income and burden of the sample before the current one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousSample {
    pub income: f64,
    pub total_burden: f64,
}

impl PreviousSample {
    /// State before the first sample: same income as the first sample, no
    /// burden. The first row therefore has no marginal rate.
    pub fn initial(start: f64) -> Self {
        Self {
            income: start,
            total_burden: 0.0,
        }
    }
}

/// Discrete marginal burden rate in percent between two samples, or `None`
/// when the income did not change
pub fn marginal_rate(previous: &PreviousSample, income: f64, total_burden: f64) -> Option<f64> {
    if income == previous.income {
        return None;
    }
    Some((total_burden - previous.total_burden) / (income - previous.income) * 100.0)
}

/// Ascending annual incomes from `start` up to and including `end`
#[derive(Debug, Clone)]
pub struct IncomeSamples {
    next: f64,
    end: f64,
    steps: StepSchedule,
}

impl IncomeSamples {
    pub fn new(start: f64, end: f64, steps: StepSchedule) -> Self {
        Self {
            next: start,
            end,
            steps,
        }
    }
}

impl Iterator for IncomeSamples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.end {
            return None;
        }
        let current = self.next;
        self.next += self.steps.step_at(current);
        Some(current)
    }
}

/// Summary of a completed sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSummary {
    pub rows: usize,
    pub last: Option<IncomeRow>,
}

/// Take-home sweep over annual income
pub struct SweepEngine {
    assumptions: Assumptions,
    config: RunConfig,
}

impl SweepEngine {
    /// The rates in `config` replace those in `assumptions`
    pub fn new(mut assumptions: Assumptions, config: RunConfig) -> Self {
        assumptions.rates = config.rates;
        Self { assumptions, config }
    }

    /// Premiums, taxes and take-home for one annual income
    pub fn breakdown(&self, income: f64) -> SampleBreakdown {
        let premiums = annual_premiums(&self.assumptions, income, &self.config.flags);
        let taxes = compute_taxes(&self.assumptions, income, premiums.total());

        let take_home = round_to(
            income
                - premiums.health
                - premiums.pension
                - premiums.unemployment
                - taxes.combined_income_tax
                - taxes.resident_tax,
            4,
        );
        let total_burden = income - take_home;

        SampleBreakdown {
            income,
            premiums,
            taxes,
            take_home,
            total_burden,
            effective_rate: round_to(total_burden / income * 100.0, 1),
        }
    }

    /// Output row for one income given the previous sample, and the state to
    /// pass to the next sample
    pub fn step(&self, previous: PreviousSample, income: f64) -> (IncomeRow, PreviousSample) {
        let breakdown = self.breakdown(income);
        let marginal = marginal_rate(&previous, income, breakdown.total_burden);
        let row = IncomeRow::new(&breakdown, marginal);
        trace!(
            "income={} take_home={} burden={} marginal={:?}",
            row.income,
            row.take_home,
            row.total_burden,
            row.marginal_rate
        );
        let next = PreviousSample {
            income,
            total_burden: breakdown.total_burden,
        };
        (row, next)
    }

    pub fn samples(&self) -> IncomeSamples {
        IncomeSamples::new(
            self.config.range.start,
            self.config.range.end,
            self.config.steps.clone(),
        )
    }

    /// Compute every row of the sweep in memory
    pub fn run(&self) -> Vec<IncomeRow> {
        let initial = PreviousSample::initial(self.config.range.start);
        let (rows, _) = self
            .samples()
            .fold((Vec::new(), initial), |(mut rows, previous), income| {
                let (row, next) = self.step(previous, income);
                rows.push(row);
                (rows, next)
            });
        rows
    }

    /// Stream every row of the sweep to `writer`, stopping at the first
    /// write failure
    pub fn run_into<W: Write>(&self, writer: &mut RowWriter<W>) -> Result<SweepSummary> {
        info!(
            "Sweeping annual income {} to {} ({:?})",
            self.config.range.start, self.config.range.end, self.config.flags
        );

        let initial = PreviousSample::initial(self.config.range.start);
        let (summary, _) = self.samples().try_fold(
            (SweepSummary { rows: 0, last: None }, initial),
            |(summary, previous), income| -> Result<_> {
                let (row, next) = self.step(previous, income);
                writer.write_row(&row)?;
                let summary = SweepSummary {
                    rows: summary.rows + 1,
                    last: Some(row),
                };
                Ok((summary, next))
            },
        )?;

        if let Some(last) = &summary.last {
            info!(
                "Wrote {} rows; at income {} take-home is {} ({}% burden)",
                summary.rows, last.income, last.take_home, last.effective_rate
            );
        }
        Ok(summary)
    }
}
