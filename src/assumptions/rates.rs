//! Premium and surtax rates

use serde::{Deserialize, Serialize};

/// Health insurance rate in percent, under 40 or 65 and over
pub const HEALTH_INSURANCE_RATE: f64 = 9.98;

/// Health insurance rate in percent including the nursing-care addition (ages 40-64)
pub const HEALTH_INSURANCE_RATE_WITH_NURSING_CARE: f64 = 11.58;

/// Employees' pension rate in percent
pub const EMPLOYEES_PENSION_RATE: f64 = 18.3;

/// Employee share of unemployment insurance, as a fraction of monthly pay
pub const UNEMPLOYMENT_INSURANCE_RATE: f64 = 0.006;

/// Reconstruction special income tax, as a fraction of national income tax
pub const RECONSTRUCTION_SURTAX_RATE: f64 = 0.021;

/// Rates applied on top of the grade tables and tax schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumRates {
    /// Health insurance, percent of standardized amount
    #[serde(default = "default_health")]
    pub health: f64,

    /// Health insurance with nursing care, percent of standardized amount
    #[serde(default = "default_health_with_nursing_care")]
    pub health_with_nursing_care: f64,

    /// Employees' pension, percent of standardized amount
    #[serde(default = "default_pension")]
    pub pension: f64,

    /// Unemployment insurance, fraction of monthly pay
    #[serde(default = "default_unemployment")]
    pub unemployment: f64,

    /// Reconstruction surtax, fraction of national income tax
    #[serde(default = "default_surtax")]
    pub reconstruction_surtax: f64,
}

fn default_health() -> f64 { HEALTH_INSURANCE_RATE }
fn default_health_with_nursing_care() -> f64 { HEALTH_INSURANCE_RATE_WITH_NURSING_CARE }
fn default_pension() -> f64 { EMPLOYEES_PENSION_RATE }
fn default_unemployment() -> f64 { UNEMPLOYMENT_INSURANCE_RATE }
fn default_surtax() -> f64 { RECONSTRUCTION_SURTAX_RATE }

impl Default for PremiumRates {
    fn default() -> Self {
        Self {
            health: HEALTH_INSURANCE_RATE,
            health_with_nursing_care: HEALTH_INSURANCE_RATE_WITH_NURSING_CARE,
            pension: EMPLOYEES_PENSION_RATE,
            unemployment: UNEMPLOYMENT_INSURANCE_RATE,
            reconstruction_surtax: RECONSTRUCTION_SURTAX_RATE,
        }
    }
}

impl PremiumRates {
    /// Health insurance rate in percent for the nursing-care age band or not
    pub fn health_rate(&self, nursing_care: bool) -> f64 {
        if nursing_care {
            self.health_with_nursing_care
        } else {
            self.health
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_rate_selection() {
        let rates = PremiumRates::default();
        assert_eq!(rates.health_rate(true), 11.58);
        assert_eq!(rates.health_rate(false), 9.98);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rates: PremiumRates = serde_json::from_str(r#"{"pension": 18.0}"#).unwrap();
        assert_eq!(rates.pension, 18.0);
        assert_eq!(rates.health, HEALTH_INSURANCE_RATE);
        assert_eq!(rates.reconstruction_surtax, RECONSTRUCTION_SURTAX_RATE);
    }
}
