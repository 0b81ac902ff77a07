use anyhow::Result;
use clap::{ArgAction, Args};
use rust_decimal::Decimal;

use takehome_core::models::{BusinessTaxClass, FilingStatus};
use takehome_core::{ContractorInput, ContractorScenario, TaxTables};

use crate::output::{OutputFormat, csv_out, json, table};
use crate::utils;

/// Arguments for the 1099 contractor scenario.
#[derive(Debug, Args)]
pub struct ContractorArgs {
    /// Hourly contract rate.
    #[arg(long, default_value = "75", value_parser = utils::parse_decimal)]
    pub rate: Decimal,

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

impl ContractorArgs {
    pub(crate) fn to_input(&self) -> ContractorInput {
        ContractorInput {
            hourly_rate: self.rate,
            annual_hours: self.hours,
            filing_status: self.filing,
            health_insurance_cost: self.health_insurance,
            business_expenses: self.business_expenses,
            business_tax_class: self.tax_class,
            specified_service_trade: self.service_trade,
        }
    }
}

pub fn run(args: &ContractorArgs, format: OutputFormat, tables: &TaxTables) -> Result<()> {
    let result = ContractorScenario::new(tables).calculate(&args.to_input())?;

    match format {
        OutputFormat::Table => table::print_contractor(&result),
        OutputFormat::Json => json::print(&result)?,
        OutputFormat::Csv => csv_out::print_fields(&result)?,
    }
    Ok(())
}
