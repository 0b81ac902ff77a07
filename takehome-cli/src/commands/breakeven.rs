use anyhow::Result;
use clap::{ArgAction, Args};
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;

use takehome_core::models::{BusinessTaxClass, FilingStatus};
use takehome_core::{BreakevenInput, BreakevenSolver, TaxTables};

use crate::output::{OutputFormat, csv_out, json};
use crate::utils;

/// Arguments for the break-even rate search.
#[derive(Debug, Args)]
pub struct BreakevenArgs {
    /// Annual net take-home the contract rate must match.
    #[arg(long = "target-net", value_parser = utils::parse_decimal)]
    pub target_net: Decimal,

    /// Hours billed per year.
    #[arg(long, default_value = "2080", value_parser = utils::parse_decimal)]
    pub hours: Decimal,

    /// Filing status: single or mfj.
    #[arg(long, default_value = "single", value_parser = utils::parse_filing_status)]
    pub filing: FilingStatus,

    /// Annual self-paid health insurance premium.
    #[arg(long = "health-insurance", default_value = "0", value_parser = utils::parse_decimal)]
    pub health_insurance: Decimal,

    /// Annual deductible business expenses.
    #[arg(long = "business-expenses", default_value = "0", value_parser = utils::parse_decimal)]
    pub business_expenses: Decimal,

    /// LA business tax classification: multimedia, professions, or exempt.
    #[arg(long = "tax-class", default_value = "multimedia", value_parser = utils::parse_business_tax_class)]
    pub tax_class: BusinessTaxClass,

    /// Whether the work is a specified service trade for the QBI phase-out.
    #[arg(long = "service-trade", default_value_t = true, action = ArgAction::Set)]
    pub service_trade: bool,
}

#[derive(Debug, Serialize)]
struct BreakevenReport {
    target_net: Decimal,
    breakeven_rate: Decimal,
}

pub fn run(args: &BreakevenArgs, format: OutputFormat, tables: &TaxTables) -> Result<()> {
    let breakeven_rate = BreakevenSolver::new(tables).solve(&BreakevenInput {
        target_net: args.target_net,
        annual_hours: args.hours,
        filing_status: args.filing,
        health_insurance_cost: args.health_insurance,
        business_expenses: args.business_expenses,
        business_tax_class: args.tax_class,
        specified_service_trade: args.service_trade,
    })?;
    let report = BreakevenReport {
        target_net: args.target_net,
        breakeven_rate,
    };

    match format {
        OutputFormat::Table => {
            let rate = format!("{}/hr", utils::format_currency(breakeven_rate));
            println!(
                "{} {}",
                "Break-even contract rate:".bold(),
                rate.green().bold()
            );
        }
        OutputFormat::Json => json::print(&report)?,
        OutputFormat::Csv => csv_out::print_fields(&report)?,
    }
    Ok(())
}
