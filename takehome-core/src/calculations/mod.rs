//! Calculation modules for the W-2 versus 1099 comparison.
//!
//! Each scenario is a worksheet: a pure function of its inputs and the
//! [`TaxTables`](crate::tables::TaxTables), computed line by line the way
//! the underlying forms lay them out. [`comparison`] flattens two results
//! into renderer-ready rows and [`breakeven`] inverts the contractor
//! worksheet by bisection.

pub mod benefits;
pub mod breakeven;
pub mod common;
pub mod comparison;
pub mod income_tax;
pub mod scenarios;

pub use benefits::{BenefitBuilder, apply_override, benefits_value};
pub use breakeven::{BreakevenInput, BreakevenSolver};
pub use comparison::{ComparisonRow, comparison_rows};
pub use income_tax::{FederalIncomeTax, IncomeTaxError, StateIncomeTax};
pub use scenarios::{
    ContractorInput, ContractorResult, ContractorScenario, ScenarioError, W2Result, W2Scenario,
};
