//! Take-home pay model for salaried income in Japan
//!
//! This library provides:
//! - Social-insurance grade tables and premium calculation (health, pension)
//! - Unemployment-insurance premiums with per-paycheck rounding
//! - Basic and employment-income deductions
//! - Taxable income, national income tax and the reconstruction surtax
//! - An annual-income sweep producing effective and marginal burden rates
//!
//! All currency amounts are in units of 10,000 JPY unless noted otherwise.

pub mod assumptions;
pub mod error;
pub mod premiums;
pub mod projection;
pub mod rounding;
pub mod tax;

// Re-export commonly used types
pub use assumptions::{Assumptions, BracketSchedule, GradeTable, PremiumRates};
pub use error::{Result, TakehomeError};
pub use projection::{IncomeRow, InsuranceFlags, RowWriter, RunConfig, SweepEngine};
