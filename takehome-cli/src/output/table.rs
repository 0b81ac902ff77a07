//! Table output for a terminal, built with `tabled`.
//!
//! Cells carry no ANSI styling so column widths stay honest; color is
//! reserved for the summary lines printed after a table.

use colored::Colorize;
use rust_decimal::Decimal;
use tabled::{Table, builder::Builder};

use takehome_core::models::BenefitItem;
use takehome_core::{ContractorResult, W2Result};

use crate::session::ComparisonOutcome;
use crate::utils::{format_currency, format_percent};

fn money_row(builder: &mut Builder, label: &str, value: Decimal) {
    builder.push_record([label.to_owned(), format_currency(value)]);
}

/// Prints the W-2 worksheet and, when any benefits are in play, the
/// priced benefit list below it.
pub fn print_w2(result: &W2Result, benefits: &[BenefitItem]) {
    let mut builder = Builder::default();
    builder.push_record(["Line", "Annual"]);
    money_row(&mut builder, "Gross Pay", result.gross_pay);
    money_row(&mut builder, "Federal Income Tax", result.federal_tax);
    money_row(&mut builder, "CA State Income Tax", result.state_tax);
    money_row(&mut builder, "Social Security", result.social_security_tax);
    money_row(&mut builder, "Medicare", result.medicare_tax);
    money_row(
        &mut builder,
        "Additional Medicare",
        result.additional_medicare_tax,
    );
    money_row(&mut builder, "CA SDI", result.sdi_tax);
    money_row(&mut builder, "Total Tax", result.total_tax);
    money_row(&mut builder, "Benefits Value", result.benefits_value);
    money_row(&mut builder, "Net Take-Home", result.net_pay);
    builder.push_record([
        "Effective Tax Rate".to_owned(),
        format_percent(result.effective_tax_rate),
    ]);
    money_row(&mut builder, "Monthly Take-Home", result.monthly_net);
    println!("{}", Table::from(builder));

    if !benefits.is_empty() {
        println!();
        let mut builder = Builder::default();
        builder.push_record(["Benefit", "Annual Value"]);
        for item in benefits {
            let label = if item.enabled {
                item.label.clone()
            } else {
                format!("{} (disabled)", item.label)
            };
            builder.push_record([label, format_currency(item.amount)]);
        }
        println!("{}", Table::from(builder));
    }
}

/// Prints the contractor worksheet line by line.
pub fn print_contractor(result: &ContractorResult) {
    let mut builder = Builder::default();
    builder.push_record(["Line", "Annual"]);
    money_row(&mut builder, "Gross Revenue", result.gross_revenue);
    money_row(&mut builder, "Federal Income Tax", result.federal_tax);
    money_row(&mut builder, "CA State Income Tax", result.state_tax);
    money_row(
        &mut builder,
        "SE Social Security",
        result.se_social_security_tax,
    );
    money_row(&mut builder, "SE Medicare", result.se_medicare_tax);
    money_row(
        &mut builder,
        "SE Additional Medicare",
        result.se_additional_medicare_tax,
    );
    money_row(&mut builder, "SE Tax Total", result.se_tax_total);
    money_row(&mut builder, "SE Tax Deduction", result.se_tax_deduction);
    money_row(
        &mut builder,
        "Health Insurance",
        result.health_insurance_deduction,
    );
    money_row(
        &mut builder,
        "Business Expenses",
        result.business_expense_deduction,
    );
    money_row(&mut builder, "QBI Deduction", result.qbi_deduction);
    money_row(
        &mut builder,
        "LA City Business Tax",
        result.local_business_tax,
    );
    money_row(&mut builder, "Total Tax", result.total_tax);
    money_row(&mut builder, "Net Take-Home", result.net_income);
    builder.push_record([
        "Effective Tax Rate".to_owned(),
        format_percent(result.effective_tax_rate),
    ]);
    money_row(&mut builder, "Monthly Take-Home", result.monthly_net);
    println!("{}", Table::from(builder));
}

/// Prints the side-by-side comparison with the break-even verdict below.
pub fn print_outcome(outcome: &ComparisonOutcome) {
    let mut builder = Builder::default();
    builder.push_record(["Item", "W-2", "1099"]);
    for row in &outcome.rows {
        let (w2, contractor) = if row.is_percent {
            (
                format_percent(row.w2_value),
                format_percent(row.contractor_value),
            )
        } else {
            (
                format_currency(row.w2_value),
                format_currency(row.contractor_value),
            )
        };
        builder.push_record([row.label.clone(), w2, contractor]);
    }
    println!("{}", Table::from(builder));

    println!();
    let rate = format!("{}/hr", format_currency(outcome.breakeven_rate));
    println!(
        "{} {}",
        "Break-even contract rate:".bold(),
        rate.green().bold()
    );

    let delta = outcome.contractor.net_income - outcome.w2.net_pay;
    if delta > Decimal::ZERO {
        println!(
            "The 1099 offer nets {} more per year.",
            format_currency(delta).green()
        );
    } else if delta < Decimal::ZERO {
        println!(
            "The W-2 offer nets {} more per year.",
            format_currency(-delta).green()
        );
    } else {
        println!("Both offers net the same take-home.");
    }
}
