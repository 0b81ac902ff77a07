//! Break-even contract rate search.
//!
//! Answers the headline question in reverse: given a target net (usually
//! the W-2 net including benefits), what 1099 hourly rate produces the
//! same take-home under the same hours and deductions?
//!
//! Contractor net is monotone non-decreasing in the hourly rate, so the
//! solver bisects the rate interval rather than inverting the tax
//! formulas. Eighty halvings of the `[0, 500]` search range shrink the
//! bracket far below a cent, which keeps the re-computed net within a
//! dollar of the target whenever the target is reachable at all.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::breakeven::{BreakevenInput, BreakevenSolver};
//! use takehome_core::calculations::scenarios::{ContractorInput, ContractorScenario};
//! use takehome_core::models::{BusinessTaxClass, FilingStatus};
//! use takehome_core::tables::TaxTables;
//!
//! let tables = TaxTables::los_angeles_2025();
//! let input = BreakevenInput {
//!     target_net: dec!(95644.78),
//!     annual_hours: dec!(2080),
//!     filing_status: FilingStatus::Single,
//!     health_insurance_cost: Decimal::ZERO,
//!     business_expenses: Decimal::ZERO,
//!     business_tax_class: BusinessTaxClass::Exempt,
//!     specified_service_trade: true,
//! };
//!
//! let rate = BreakevenSolver::new(&tables).solve(&input).unwrap();
//! let check = ContractorScenario::new(&tables)
//!     .calculate(&ContractorInput {
//!         hourly_rate: rate,
//!         annual_hours: input.annual_hours,
//!         filing_status: input.filing_status,
//!         health_insurance_cost: input.health_insurance_cost,
//!         business_expenses: input.business_expenses,
//!         business_tax_class: input.business_tax_class,
//!         specified_service_trade: input.specified_service_trade,
//!     })
//!     .unwrap();
//!
//! assert!((check.net_income - input.target_net).abs() < Decimal::ONE);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::scenarios::{ContractorInput, ContractorScenario, ScenarioError};
use crate::models::{BusinessTaxClass, FilingStatus};
use crate::tables::TaxTables;

/// Lowest hourly rate the search considers.
const RATE_LOWER_BOUND: Decimal = dec!(0);
/// Highest hourly rate the search considers.
const RATE_UPPER_BOUND: Decimal = dec!(500);
/// Number of interval halvings. Eighty shrink a 500-wide bracket to well
/// under a trillionth of a cent.
const BISECTION_ITERATIONS: u32 = 80;

/// Inputs to the break-even search: the contractor worksheet inputs with
/// the hourly rate replaced by the net to hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenInput {
    /// Annual net take-home the contract rate must match.
    pub target_net: Decimal,
    pub annual_hours: Decimal,
    pub filing_status: FilingStatus,
    pub health_insurance_cost: Decimal,
    pub business_expenses: Decimal,
    pub business_tax_class: BusinessTaxClass,
    pub specified_service_trade: bool,
}

/// Bisection solver for the break-even contract rate.
#[derive(Debug, Clone)]
pub struct BreakevenSolver<'a> {
    tables: &'a TaxTables,
}

impl<'a> BreakevenSolver<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Finds the lowest hourly rate whose contractor net meets the target.
    ///
    /// The returned rate is the raw bisection midpoint; rounding it to
    /// cents is the caller's display concern and would reintroduce up to
    /// half a cent of rate error into any round-trip check.
    ///
    /// When the target is unreachable inside the search range the bound
    /// itself comes back (a rate pinned at 0 or 500) and a warning is
    /// logged, since neither bound answers the question the caller asked.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] if the tables fail validation or the
    /// hours, health insurance cost, or business expenses are negative.
    pub fn solve(&self, input: &BreakevenInput) -> Result<Decimal, ScenarioError> {
        let scenario = ContractorScenario::new(self.tables);
        let mut low = RATE_LOWER_BOUND;
        let mut high = RATE_UPPER_BOUND;

        for _ in 0..BISECTION_ITERATIONS {
            let mid = (low + high) / Decimal::TWO;
            let result = scenario.calculate(&self.contractor_input(input, mid))?;
            if result.net_income >= input.target_net {
                high = mid;
            } else {
                low = mid;
            }
        }

        if high == RATE_UPPER_BOUND {
            warn!(
                target_net = %input.target_net,
                upper_bound = %RATE_UPPER_BOUND,
                "target net is not reachable below the rate search upper bound"
            );
        } else if low == RATE_LOWER_BOUND {
            warn!(
                target_net = %input.target_net,
                "target net is already met at a zero rate"
            );
        }

        Ok((low + high) / Decimal::TWO)
    }

    fn contractor_input(&self, input: &BreakevenInput, hourly_rate: Decimal) -> ContractorInput {
        ContractorInput {
            hourly_rate,
            annual_hours: input.annual_hours,
            filing_status: input.filing_status,
            health_insurance_cost: input.health_insurance_cost,
            business_expenses: input.business_expenses,
            business_tax_class: input.business_tax_class,
            specified_service_trade: input.specified_service_trade,
        }
    }
}
