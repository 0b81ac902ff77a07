//! Deterministic take-home pay engine comparing W-2 employment against
//! 1099 contracting in Los Angeles, California, for tax year 2025.
//!
//! Every calculator is a pure function of its inputs and the injected
//! [`tables::TaxTables`]; money math is exact [`rust_decimal::Decimal`]
//! with half-up rounding to cents at each worksheet line.

pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{
    BenefitBuilder, BreakevenInput, BreakevenSolver, ComparisonRow, ContractorInput,
    ContractorResult, ContractorScenario, ScenarioError, W2Result, W2Scenario, comparison_rows,
};
pub use models::*;
pub use tables::{TablesError, TaxTables};
