//! Income tax functions over bracket schedules.
//!
//! Two encodings are in play, matching how the two jurisdictions publish
//! their 2025 figures:
//!
//! - **Federal** schedules carry only upper limits and rates, so
//!   [`FederalIncomeTax`] integrates bracket by bracket: each slice of
//!   taxable income between two limits is taxed at that bracket's rate.
//! - **State** schedules (California) publish a precomputed `base_tax` per
//!   row, so [`StateIncomeTax`] finds the single row covering the income
//!   and evaluates `base + rate × (income − row minimum)`.
//!
//! Both return zero for zero or negative taxable income and round the final
//! amount to cents.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::income_tax::{FederalIncomeTax, StateIncomeTax};
//! use takehome_core::models::FilingStatus;
//! use takehome_core::tables::TaxTables;
//!
//! let tables = TaxTables::los_angeles_2025();
//!
//! let federal = FederalIncomeTax::new(tables.federal_brackets(FilingStatus::Single));
//! assert_eq!(federal.calculate(dec!(50000.00)), Ok(dec!(5914.00)));
//!
//! let state = StateIncomeTax::new(tables.state_brackets(FilingStatus::Single));
//! assert_eq!(state.calculate(dec!(50000.00)), Ok(dec!(1534.89)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::{FederalBracket, StateBracket};

/// Errors that can occur while evaluating a bracket schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    /// No tax brackets were provided.
    #[error("no tax brackets provided")]
    NoBrackets,

    /// No bracket covers the given taxable income (the schedule has a
    /// bounded tail below the income).
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// Progressive federal income tax over a marginal-rate schedule.
pub struct FederalIncomeTax<'a> {
    brackets: &'a [FederalBracket],
}

impl<'a> FederalIncomeTax<'a> {
    pub fn new(brackets: &'a [FederalBracket]) -> Self {
        Self { brackets }
    }

    /// Tax on `taxable_income`, accumulated bracket by bracket.
    pub fn calculate(&self, taxable_income: Decimal) -> Result<Decimal, IncomeTaxError> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        if self.brackets.is_empty() {
            return Err(IncomeTaxError::NoBrackets);
        }

        let mut tax = Decimal::ZERO;
        let mut previous_limit = Decimal::ZERO;

        for bracket in self.brackets {
            let upper = match bracket.max_income {
                Some(limit) => taxable_income.min(limit),
                None => taxable_income,
            };

            let segment = upper - previous_limit;
            if segment > Decimal::ZERO {
                tax += segment * bracket.tax_rate;
            }

            match bracket.max_income {
                Some(limit) if taxable_income > limit => previous_limit = limit,
                _ => return Ok(round_half_up(tax)),
            }
        }

        Err(IncomeTaxError::NoMatchingBracket(taxable_income))
    }
}

/// State income tax over a base-plus-marginal schedule.
pub struct StateIncomeTax<'a> {
    brackets: &'a [StateBracket],
}

impl<'a> StateIncomeTax<'a> {
    pub fn new(brackets: &'a [StateBracket]) -> Self {
        Self { brackets }
    }

    /// Tax on `taxable_income` from the single row covering it. Row ranges
    /// are half-open `(min, max]`, so income exactly at a boundary prices
    /// in the lower row.
    pub fn calculate(&self, taxable_income: Decimal) -> Result<Decimal, IncomeTaxError> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        if self.brackets.is_empty() {
            return Err(IncomeTaxError::NoBrackets);
        }

        let bracket = self
            .brackets
            .iter()
            .find(|b| {
                taxable_income > b.min_income
                    && (b.max_income.is_none()
                        || taxable_income <= b.max_income.unwrap_or(Decimal::MAX))
            })
            .ok_or(IncomeTaxError::NoMatchingBracket(taxable_income))?;

        let marginal_income = taxable_income - bracket.min_income;
        let tax = bracket.base_tax + (marginal_income * bracket.tax_rate);

        Ok(round_half_up(tax))
    }
}
