//! W-2 employee take-home worksheet.
//!
//! Prices the employee side of the comparison: payroll taxes withheld from
//! wages, income taxes after the standard deduction, and the annual value
//! of employer benefits.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross pay: hourly rate × annual hours |
//! | 2    | Social security tax: 6.2% of gross, capped at the wage base |
//! | 3    | Medicare tax: 1.45% of gross, uncapped |
//! | 4    | Additional Medicare tax: 0.9% of gross above the status threshold |
//! | 5    | CA SDI: 1.2% of gross, uncapped |
//! | 6    | Federal tax on max(0, gross − federal standard deduction) |
//! | 7    | State tax on max(0, gross − state standard deduction) |
//! | 8    | Benefits value: sum of the enabled benefit items |
//! | 9    | Net take-home: gross − total tax + benefits value |
//!
//! Benefits are valued as untaxed compensation on top of net pay; they do
//! not reduce taxable wages.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::scenarios::W2Scenario;
//! use takehome_core::models::FilingStatus;
//! use takehome_core::tables::TaxTables;
//!
//! let tables = TaxTables::los_angeles_2025();
//! let worksheet = W2Scenario::new(&tables);
//!
//! let result = worksheet
//!     .calculate(dec!(67.00), dec!(2080), FilingStatus::Single, &[])
//!     .unwrap();
//!
//! assert_eq!(result.gross_pay, dec!(139360.00));
//! assert_eq!(result.social_security_tax, dec!(8640.32));
//! assert_eq!(result.sdi_tax, dec!(1672.32));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::benefits::benefits_value;
use crate::calculations::common::{max, round_half_up};
use crate::calculations::income_tax::{FederalIncomeTax, StateIncomeTax};
use crate::calculations::scenarios::{MONTHS_PER_YEAR, ScenarioError};
use crate::models::{BenefitItem, FilingStatus};
use crate::tables::TaxTables;

/// Result of the W-2 worksheet. Every tax line is kept individually so a
/// caller can render the full breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct W2Result {
    /// Annual gross wages: hourly rate × annual hours.
    pub gross_pay: Decimal,
    /// Federal income tax after the standard deduction.
    pub federal_tax: Decimal,
    /// California income tax after the state standard deduction.
    pub state_tax: Decimal,
    /// Employee-side social security tax (capped at the wage base).
    pub social_security_tax: Decimal,
    /// Employee-side Medicare tax.
    pub medicare_tax: Decimal,
    /// Additional Medicare surtax above the filing-status threshold.
    pub additional_medicare_tax: Decimal,
    /// California SDI withholding.
    pub sdi_tax: Decimal,
    /// Sum of all five tax lines.
    pub total_tax: Decimal,
    /// Annual value of the enabled employer benefits.
    pub benefits_value: Decimal,
    /// Gross minus taxes plus benefits value.
    pub net_pay: Decimal,
    /// Total tax as a percentage of gross (0 when gross is 0).
    pub effective_tax_rate: Decimal,
    /// Net take-home divided across twelve months.
    pub monthly_net: Decimal,
}

/// Calculator for the W-2 employee worksheet.
#[derive(Debug, Clone)]
pub struct W2Scenario<'a> {
    tables: &'a TaxTables,
}

impl<'a> W2Scenario<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Runs the full worksheet.
    ///
    /// `benefits` is the caller's priced item list (see
    /// [`BenefitBuilder`](crate::calculations::benefits::BenefitBuilder));
    /// only enabled items count toward the benefits value.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] if the tables fail validation or if the
    /// rate or hours are negative. Zero rate or hours computes a
    /// zero-income result.
    pub fn calculate(
        &self,
        hourly_rate: Decimal,
        annual_hours: Decimal,
        filing_status: FilingStatus,
        benefits: &[BenefitItem],
    ) -> Result<W2Result, ScenarioError> {
        self.tables.validate()?;
        if hourly_rate < Decimal::ZERO {
            return Err(ScenarioError::NegativeRate(hourly_rate));
        }
        if annual_hours < Decimal::ZERO {
            return Err(ScenarioError::NegativeHours(annual_hours));
        }

        // Step 1: gross wages
        let gross_pay = self.gross_pay(hourly_rate, annual_hours);

        // Steps 2-5: payroll withholding
        let social_security_tax = self.social_security_tax(gross_pay);
        let medicare_tax = self.medicare_tax(gross_pay);
        let additional_medicare_tax = self.additional_medicare_tax(gross_pay, filing_status);
        let sdi_tax = self.sdi_tax(gross_pay);

        // Steps 6-7: income taxes on wages less the standard deductions
        let federal_taxable = max(
            gross_pay - self.tables.federal_standard_deduction(filing_status),
            Decimal::ZERO,
        );
        let federal_tax = FederalIncomeTax::new(self.tables.federal_brackets(filing_status))
            .calculate(federal_taxable)?;

        let state_taxable = max(
            gross_pay - self.tables.state_standard_deduction(filing_status),
            Decimal::ZERO,
        );
        let state_tax =
            StateIncomeTax::new(self.tables.state_brackets(filing_status)).calculate(state_taxable)?;

        // Steps 8-9: totals
        let total_tax = round_half_up(
            federal_tax
                + state_tax
                + social_security_tax
                + medicare_tax
                + additional_medicare_tax
                + sdi_tax,
        );
        let benefits_value = benefits_value(benefits);
        let net_pay = round_half_up(gross_pay - total_tax + benefits_value);
        let effective_tax_rate = self.effective_tax_rate(total_tax, gross_pay);
        let monthly_net = round_half_up(net_pay / MONTHS_PER_YEAR);

        Ok(W2Result {
            gross_pay,
            federal_tax,
            state_tax,
            social_security_tax,
            medicare_tax,
            additional_medicare_tax,
            sdi_tax,
            total_tax,
            benefits_value,
            net_pay,
            effective_tax_rate,
            monthly_net,
        })
    }

    fn gross_pay(&self, hourly_rate: Decimal, annual_hours: Decimal) -> Decimal {
        round_half_up(hourly_rate * annual_hours)
    }

    /// Social security applies only up to the annual wage base.
    fn social_security_tax(&self, gross_pay: Decimal) -> Decimal {
        let taxable = gross_pay.min(self.tables.payroll.ss_wage_base);
        round_half_up(taxable * self.tables.payroll.ss_rate_employee)
    }

    fn medicare_tax(&self, gross_pay: Decimal) -> Decimal {
        round_half_up(gross_pay * self.tables.payroll.medicare_rate_employee)
    }

    /// The 0.9% surtax applies to wages above the filing-status threshold.
    fn additional_medicare_tax(&self, gross_pay: Decimal, filing_status: FilingStatus) -> Decimal {
        let threshold = self.tables.payroll.additional_medicare_threshold(filing_status);
        let excess = max(gross_pay - threshold, Decimal::ZERO);
        round_half_up(excess * self.tables.payroll.additional_medicare_rate)
    }

    fn sdi_tax(&self, gross_pay: Decimal) -> Decimal {
        round_half_up(gross_pay * self.tables.payroll.sdi_rate)
    }

    fn effective_tax_rate(&self, total_tax: Decimal, gross_pay: Decimal) -> Decimal {
        if gross_pay <= Decimal::ZERO {
            warn!(
                gross_pay = %gross_pay,
                "gross pay is zero; reporting a zero effective tax rate"
            );
            return Decimal::ZERO;
        }
        round_half_up(total_tax / gross_pay * Decimal::ONE_HUNDRED)
    }
}
