use anyhow::Result;
use clap::{ArgAction, Args};
use rust_decimal::Decimal;

use takehome_core::TaxTables;
use takehome_core::models::{
    BenefitMode, BenefitOverride, BusinessTaxClass, CoverageType, FilingStatus,
};

use crate::output::{OutputFormat, csv_out, json, table};
use crate::session::ComparisonSession;
use crate::utils;

/// Arguments for the full side-by-side comparison.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// W-2 hourly wage.
    #[arg(long = "w2-rate", default_value = "67", value_parser = utils::parse_decimal)]
    pub w2_rate: Decimal,

    /// 1099 hourly contract rate.
    #[arg(long = "contract-rate", default_value = "75", value_parser = utils::parse_decimal)]
    pub contract_rate: Decimal,

    /// Hours worked per year, for both scenarios.
    #[arg(long, default_value = "2080", value_parser = utils::parse_decimal)]
    pub hours: Decimal,

    /// Filing status: single or mfj.
    #[arg(long, default_value = "single", value_parser = utils::parse_filing_status)]
    pub filing: FilingStatus,

    /// Benefit valuation mode: off, averages, or custom.
    #[arg(long = "benefits", default_value = "averages", value_parser = utils::parse_benefit_mode)]
    pub benefit_mode: BenefitMode,

    /// Coverage tier for benefit valuation: individual or family.
    #[arg(long, default_value = "individual", value_parser = utils::parse_coverage_type)]
    pub coverage: CoverageType,

    /// Benefit override (KEY=on|off, KEY.amount=N, or KEY.days=N).
    /// Implies --benefits custom. Repeatable.
    #[arg(long = "benefit", value_parser = utils::parse_benefit_override)]
    pub benefit_overrides: Vec<(String, BenefitOverride)>,

    /// Annual self-paid health insurance premium for the contractor.
    #[arg(long = "health-insurance", default_value = "0", value_parser = utils::parse_decimal)]
    pub health_insurance: Decimal,

    /// Annual deductible business expenses for the contractor.
    #[arg(long = "business-expenses", default_value = "0", value_parser = utils::parse_decimal)]
    pub business_expenses: Decimal,

    /// LA business tax classification: multimedia, professions, or exempt.
    #[arg(long = "tax-class", default_value = "multimedia", value_parser = utils::parse_business_tax_class)]
    pub tax_class: BusinessTaxClass,

    /// Whether the contract work is a specified service trade for the QBI phase-out.
    #[arg(long = "service-trade", default_value_t = true, action = ArgAction::Set)]
    pub service_trade: bool,
}

pub fn run(args: &CompareArgs, format: OutputFormat, tables: &TaxTables) -> Result<()> {
    let mut session = ComparisonSession::new(tables.clone());
    session.w2_hourly_rate = args.w2_rate;
    session.contract_hourly_rate = args.contract_rate;
    session.annual_hours = args.hours;
    session.filing_status = args.filing;
    session.benefit_mode = args.benefit_mode;
    session.coverage_type = args.coverage;
    session.health_insurance_cost = args.health_insurance;
    session.business_expenses = args.business_expenses;
    session.business_tax_class = args.tax_class;
    session.specified_service_trade = args.service_trade;
    session.reset_custom_benefits();
    super::apply_benefit_overrides(&mut session, &args.benefit_overrides)?;

    let outcome = session.recompute()?;

    match format {
        OutputFormat::Table => table::print_outcome(&outcome),
        OutputFormat::Json => json::print(&outcome)?,
        OutputFormat::Csv => csv_out::print_comparison(&outcome.rows)?,
    }
    Ok(())
}
