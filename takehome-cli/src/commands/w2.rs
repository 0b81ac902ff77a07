use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use takehome_core::models::{BenefitMode, BenefitOverride, CoverageType, FilingStatus};
use takehome_core::{TaxTables, W2Scenario};

use crate::output::{OutputFormat, csv_out, json, table};
use crate::session::ComparisonSession;
use crate::utils;

/// Arguments for the W-2 employee scenario.
#[derive(Debug, Args)]
pub struct W2Args {
    /// Hourly wage.
    #[arg(long, default_value = "67", value_parser = utils::parse_decimal)]
    pub rate: Decimal,

    /// Hours worked per year.
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
}

pub fn run(args: &W2Args, format: OutputFormat, tables: &TaxTables) -> Result<()> {
    let mut session = ComparisonSession::new(tables.clone());
    session.w2_hourly_rate = args.rate;
    session.annual_hours = args.hours;
    session.filing_status = args.filing;
    session.benefit_mode = args.benefit_mode;
    session.coverage_type = args.coverage;
    session.reset_custom_benefits();
    super::apply_benefit_overrides(&mut session, &args.benefit_overrides)?;

    let benefits = session.active_benefits();
    let result =
        W2Scenario::new(tables).calculate(args.rate, args.hours, args.filing, &benefits)?;

    match format {
        OutputFormat::Table => table::print_w2(&result, &benefits),
        OutputFormat::Json => json::print(&result)?,
        OutputFormat::Csv => csv_out::print_fields(&result)?,
    }
    Ok(())
}
