//! Scenario worksheets: the two sides of a take-home comparison.
//!
//! [`W2Scenario`] prices an hourly W-2 employee (payroll withholding,
//! income taxes, employer benefits); [`ContractorScenario`] prices the
//! same worker as a 1099 contractor (SE tax, QBI, deductible costs, city
//! business tax). Both consume the same [`TaxTables`](crate::tables::TaxTables)
//! handle and produce one flat result record per run.

pub mod contractor;
pub mod w2;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::calculations::income_tax::IncomeTaxError;
use crate::tables::TablesError;

pub use contractor::{ContractorInput, ContractorResult, ContractorScenario};
pub use w2::{W2Result, W2Scenario};

pub(crate) const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Errors shared by the scenario calculators.
///
/// Negative money inputs are rejected rather than clamped; a zero rate or
/// zero hours is a legitimate query and computes normally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("hourly rate must not be negative, got {0}")]
    NegativeRate(Decimal),

    #[error("annual hours must not be negative, got {0}")]
    NegativeHours(Decimal),

    #[error("health insurance cost must not be negative, got {0}")]
    NegativeHealthInsurance(Decimal),

    #[error("business expenses must not be negative, got {0}")]
    NegativeBusinessExpenses(Decimal),

    #[error("invalid tax tables: {0}")]
    Tables(#[from] TablesError),

    #[error("income tax calculation failed: {0}")]
    IncomeTax(#[from] IncomeTaxError),
}
