//! Run configuration: insurance flags, sweep range and step schedule

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::PremiumRates;
use crate::error::{Result, TakehomeError};
use crate::premiums::InsuranceFlags;

/// Step applied while income is below `below`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepBand {
    pub below: f64,
    pub step: f64,
}

/// Variable step between income samples, fine at low incomes and coarse above
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSchedule {
    #[serde(default = "default_step_bands")]
    pub bands: Vec<StepBand>,

    /// Step once income is past every band
    #[serde(default = "default_final_step")]
    pub final_step: f64,
}

fn default_step_bands() -> Vec<StepBand> {
    vec![
        StepBand { below: 300.0, step: 0.5 },
        StepBand { below: 1200.0, step: 1.0 },
        StepBand { below: 2400.0, step: 1.0 },
        StepBand { below: 2600.0, step: 0.5 },
    ]
}

fn default_final_step() -> f64 { 5.0 }

impl Default for StepSchedule {
    fn default() -> Self {
        Self {
            bands: default_step_bands(),
            final_step: default_final_step(),
        }
    }
}

impl StepSchedule {
    /// Step to the sample after `income`
    pub fn step_at(&self, income: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| income < band.below)
            .map(|band| band.step)
            .unwrap_or(self.final_step)
    }

    fn validate(&self) -> Result<()> {
        let steps = self.bands.iter().map(|b| b.step).chain(std::iter::once(self.final_step));
        for step in steps {
            if !(step > 0.0) {
                return Err(TakehomeError::InvalidConfig(format!(
                    "income step must be positive, got {}",
                    step
                )));
            }
        }
        if !self.bands.windows(2).all(|w| w[0].below < w[1].below) {
            return Err(TakehomeError::InvalidConfig(
                "step bands must be in ascending order".into(),
            ));
        }
        Ok(())
    }
}

/// Annual income bounds of the sweep, in 10,000 JPY. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    #[serde(default = "default_start")]
    pub start: f64,

    #[serde(default = "default_end")]
    pub end: f64,
}

fn default_start() -> f64 { 100.0 }
fn default_end() -> f64 { 10_000.0 }

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

/// Everything that varies between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub flags: InsuranceFlags,

    #[serde(default)]
    pub range: SweepRange,

    #[serde(default)]
    pub steps: StepSchedule,

    #[serde(default)]
    pub rates: PremiumRates,
}

impl RunConfig {
    /// Parse JSON configuration. Missing fields take their defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        debug!("Loaded run configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Reject configurations whose sweep would never terminate
    pub fn validate(&self) -> Result<()> {
        if self.range.end < self.range.start {
            return Err(TakehomeError::InvalidConfig(format!(
                "sweep end {} is below start {}",
                self.range.end, self.range.start
            )));
        }
        self.steps.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step_schedule() {
        let steps = StepSchedule::default();
        assert_eq!(steps.step_at(100.0), 0.5);
        assert_eq!(steps.step_at(299.5), 0.5);
        assert_eq!(steps.step_at(300.0), 1.0);
        assert_eq!(steps.step_at(1199.0), 1.0);
        assert_eq!(steps.step_at(1200.0), 1.0);
        assert_eq!(steps.step_at(2399.0), 1.0);
        assert_eq!(steps.step_at(2400.0), 0.5);
        assert_eq!(steps.step_at(2599.5), 0.5);
        assert_eq!(steps.step_at(2600.0), 5.0);
        assert_eq!(steps.step_at(9995.0), 5.0);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = RunConfig::from_json_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "flags": { "nursing_care": false, "owner": true },
            "range": { "end": 2000 }
        }"#;
        let config = RunConfig::from_json_reader(json.as_bytes()).unwrap();
        assert!(!config.flags.nursing_care);
        assert!(config.flags.owner);
        assert!(config.flags.social_insurance);
        assert_eq!(config.range.start, 100.0);
        assert_eq!(config.range.end, 2000.0);
        assert_eq!(config.steps, StepSchedule::default());
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let json = r#"{ "steps": { "final_step": 0 } }"#;
        let err = RunConfig::from_json_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, TakehomeError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let json = r#"{ "range": { "start": 500, "end": 100 } }"#;
        assert!(RunConfig::from_json_reader(json.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = RunConfig::from_json_reader("{ flags: ".as_bytes()).unwrap_err();
        assert!(matches!(err, TakehomeError::Config(_)));
    }
}
