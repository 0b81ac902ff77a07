//! Comparison session: the full input state of one W-2 versus 1099
//! comparison, with the derived results recomputed on demand.
//!
//! Defaults describe the typical question the tool exists to answer: a
//! single filer weighing a $67/h staff offer against a $75/h contract at
//! full-time hours, average individual benefits, no extra contractor
//! costs, and a multimedia business classification.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use takehome_core::calculations::{apply_override, comparison_rows};
use takehome_core::models::{
    BenefitItem, BenefitMode, BenefitOverride, BusinessTaxClass, CoverageType, FilingStatus,
};
use takehome_core::{
    BenefitBuilder, BreakevenInput, BreakevenSolver, ComparisonRow, ContractorInput,
    ContractorResult, ContractorScenario, ScenarioError, TaxTables, W2Result, W2Scenario,
};

const DEFAULT_W2_RATE: Decimal = dec!(67);
const DEFAULT_CONTRACT_RATE: Decimal = dec!(75);
const DEFAULT_ANNUAL_HOURS: Decimal = dec!(2080);

/// Everything the comparison depends on, in one mutable bundle.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    pub tables: TaxTables,
    pub filing_status: FilingStatus,
    pub w2_hourly_rate: Decimal,
    pub contract_hourly_rate: Decimal,
    pub annual_hours: Decimal,
    pub benefit_mode: BenefitMode,
    pub coverage_type: CoverageType,
    /// The user-editable benefit list consulted in [`BenefitMode::Custom`].
    pub custom_benefits: Vec<BenefitItem>,
    pub health_insurance_cost: Decimal,
    pub business_expenses: Decimal,
    pub business_tax_class: BusinessTaxClass,
    pub specified_service_trade: bool,
}

/// One recomputation of the session: both scenarios, the break-even rate,
/// and the renderer-ready rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonOutcome {
    pub w2: W2Result,
    pub contractor: ContractorResult,
    pub breakeven_rate: Decimal,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonSession {
    pub fn new(tables: TaxTables) -> Self {
        let custom_benefits = BenefitBuilder::from_tables(&tables).build(
            CoverageType::Individual,
            DEFAULT_W2_RATE,
            DEFAULT_ANNUAL_HOURS,
        );
        Self {
            tables,
            filing_status: FilingStatus::Single,
            w2_hourly_rate: DEFAULT_W2_RATE,
            contract_hourly_rate: DEFAULT_CONTRACT_RATE,
            annual_hours: DEFAULT_ANNUAL_HOURS,
            benefit_mode: BenefitMode::Averages,
            coverage_type: CoverageType::Individual,
            custom_benefits,
            health_insurance_cost: Decimal::ZERO,
            business_expenses: Decimal::ZERO,
            business_tax_class: BusinessTaxClass::Multimedia,
            specified_service_trade: true,
        }
    }

    /// The benefit list the W-2 scenario should price right now.
    pub fn active_benefits(&self) -> Vec<BenefitItem> {
        BenefitBuilder::from_tables(&self.tables).active_items(
            self.benefit_mode,
            self.coverage_type,
            &self.custom_benefits,
            self.w2_hourly_rate,
            self.annual_hours,
        )
    }

    /// Applies one override to the custom list. Returns `false` when the
    /// key does not name a seeded benefit.
    pub fn apply_benefit_override(&mut self, key: &str, patch: &BenefitOverride) -> bool {
        apply_override(&mut self.custom_benefits, key, patch)
    }

    /// Rebuilds the custom list from the current coverage, rate, and
    /// hours, discarding any overrides.
    pub fn reset_custom_benefits(&mut self) {
        self.custom_benefits = BenefitBuilder::from_tables(&self.tables).build(
            self.coverage_type,
            self.w2_hourly_rate,
            self.annual_hours,
        );
    }

    /// Runs both scenarios, solves for the break-even contract rate
    /// against the W-2 net, and builds the comparison rows.
    pub fn recompute(&self) -> Result<ComparisonOutcome, ScenarioError> {
        debug!(
            w2_rate = %self.w2_hourly_rate,
            contract_rate = %self.contract_hourly_rate,
            hours = %self.annual_hours,
            "recomputing comparison"
        );

        let benefits = self.active_benefits();
        let w2 = W2Scenario::new(&self.tables).calculate(
            self.w2_hourly_rate,
            self.annual_hours,
            self.filing_status,
            &benefits,
        )?;
        let contractor = ContractorScenario::new(&self.tables).calculate(&ContractorInput {
            hourly_rate: self.contract_hourly_rate,
            annual_hours: self.annual_hours,
            filing_status: self.filing_status,
            health_insurance_cost: self.health_insurance_cost,
            business_expenses: self.business_expenses,
            business_tax_class: self.business_tax_class,
            specified_service_trade: self.specified_service_trade,
        })?;
        let breakeven_rate = BreakevenSolver::new(&self.tables).solve(&BreakevenInput {
            target_net: w2.net_pay,
            annual_hours: self.annual_hours,
            filing_status: self.filing_status,
            health_insurance_cost: self.health_insurance_cost,
            business_expenses: self.business_expenses,
            business_tax_class: self.business_tax_class,
            specified_service_trade: self.specified_service_trade,
        })?;
        let rows = comparison_rows(&w2, &contractor);

        Ok(ComparisonOutcome {
            w2,
            contractor,
            breakeven_rate,
            rows,
        })
    }
}
