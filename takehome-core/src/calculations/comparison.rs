//! Side-by-side comparison rows.
//!
//! Flattens a [`W2Result`] and a [`ContractorResult`] into the row list a
//! renderer prints: one label per line item, a value per column, and
//! display flags instead of renderer-specific styling. Taxes and costs
//! come out negated so a column sums visually toward its net line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::max;
use crate::calculations::scenarios::{ContractorResult, W2Result};

/// One line of the W-2 versus 1099 comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub w2_value: Decimal,
    pub contractor_value: Decimal,
    /// The row a renderer should emphasize (the annual net line).
    pub is_highlight: bool,
    /// Value is money leaving the column; rendered negative.
    pub is_deduction: bool,
    /// Value is untaxed money entering the column.
    pub is_addition: bool,
    /// Values are percentages, not dollar amounts.
    pub is_percent: bool,
}

fn row(label: &str, w2_value: Decimal, contractor_value: Decimal) -> ComparisonRow {
    ComparisonRow {
        label: label.to_owned(),
        w2_value,
        contractor_value,
        is_highlight: false,
        is_deduction: false,
        is_addition: false,
        is_percent: false,
    }
}

/// Builds the thirteen comparison rows from the two scenario results.
///
/// Lines that exist on only one side report zero on the other, so every
/// renderer sees a rectangular table.
pub fn comparison_rows(w2: &W2Result, contractor: &ContractorResult) -> Vec<ComparisonRow> {
    let w2_fica = w2.social_security_tax + w2.medicare_tax + w2.additional_medicare_tax;

    vec![
        row("Gross Annual", w2.gross_pay, contractor.gross_revenue),
        ComparisonRow {
            is_deduction: true,
            ..row(
                "Federal Income Tax",
                -w2.federal_tax,
                -contractor.federal_tax,
            )
        },
        ComparisonRow {
            is_deduction: true,
            ..row("CA State Income Tax", -w2.state_tax, -contractor.state_tax)
        },
        ComparisonRow {
            is_deduction: true,
            ..row("FICA / SE Tax", -w2_fica, -contractor.se_tax_total)
        },
        ComparisonRow {
            is_deduction: true,
            ..row("CA SDI", -w2.sdi_tax, Decimal::ZERO)
        },
        ComparisonRow {
            is_deduction: true,
            ..row(
                "LA City Business Tax",
                Decimal::ZERO,
                -contractor.local_business_tax,
            )
        },
        ComparisonRow {
            is_deduction: true,
            ..row(
                "Health Ins. Cost",
                Decimal::ZERO,
                -contractor.health_insurance_deduction,
            )
        },
        ComparisonRow {
            is_deduction: true,
            ..row(
                "Business Expenses",
                Decimal::ZERO,
                -contractor.business_expense_deduction,
            )
        },
        ComparisonRow {
            is_addition: true,
            ..row(
                "QBI Deduction (tax savings)",
                Decimal::ZERO,
                max(contractor.qbi_deduction, Decimal::ZERO),
            )
        },
        ComparisonRow {
            is_addition: true,
            ..row("W-2 Benefits Value", w2.benefits_value, Decimal::ZERO)
        },
        ComparisonRow {
            is_highlight: true,
            ..row("Net Take-Home", w2.net_pay, contractor.net_income)
        },
        ComparisonRow {
            is_percent: true,
            ..row(
                "Effective Tax Rate",
                w2.effective_tax_rate,
                contractor.effective_tax_rate,
            )
        },
        row("Monthly Take-Home", w2.monthly_net, contractor.monthly_net),
    ]
}
