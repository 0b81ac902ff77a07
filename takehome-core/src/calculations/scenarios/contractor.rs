//! 1099 contractor take-home worksheet.
//!
//! Prices the self-employed side of the comparison: SECA tax on net
//! earnings, the above-the-line deductions that shrink AGI, the §199A
//! qualified business income deduction, and the Los Angeles gross-receipts
//! tax.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross revenue: hourly rate × annual hours |
//! | 2    | SE tax base: 92.35% of gross revenue |
//! | 3    | SE social security: 12.4% of the base, capped at the wage base |
//! | 4    | SE Medicare: 2.9% of the base, plus 0.9% above the status threshold |
//! | 5    | AGI: gross − half the SE tax − health insurance − business expenses |
//! | 6    | QBI deduction: 20% of qualified income, phased out for specified service trades |
//! | 7    | Federal tax on max(0, AGI − standard deduction − QBI deduction) |
//! | 8    | State tax on max(0, AGI − state standard deduction); California allows no QBI deduction |
//! | 9    | City business tax: classification rate × gross once gross exceeds the exemption |
//! | 10   | Net income: gross − total tax − health insurance − business expenses |
//!
//! Qualified business income excludes business expenses and the SE tax
//! deduction but not the health insurance deduction, matching Form 8995's
//! treatment of a sole proprietor with no other income.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::scenarios::{ContractorInput, ContractorScenario};
//! use takehome_core::models::{BusinessTaxClass, FilingStatus};
//! use takehome_core::tables::TaxTables;
//!
//! let tables = TaxTables::los_angeles_2025();
//! let worksheet = ContractorScenario::new(&tables);
//!
//! let result = worksheet
//!     .calculate(&ContractorInput {
//!         hourly_rate: dec!(75.00),
//!         annual_hours: dec!(2080),
//!         filing_status: FilingStatus::Single,
//!         health_insurance_cost: Decimal::ZERO,
//!         business_expenses: Decimal::ZERO,
//!         business_tax_class: BusinessTaxClass::Exempt,
//!         specified_service_trade: true,
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.gross_revenue, dec!(156000.00));
//! assert_eq!(result.se_tax_total, dec!(22042.09));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::income_tax::{FederalIncomeTax, StateIncomeTax};
use crate::calculations::scenarios::{MONTHS_PER_YEAR, ScenarioError};
use crate::models::{BusinessTaxClass, FilingStatus};
use crate::tables::TaxTables;

/// Inputs to the contractor worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorInput {
    pub hourly_rate: Decimal,
    pub annual_hours: Decimal,
    pub filing_status: FilingStatus,
    /// Annual self-paid health insurance premium, deductible above the line.
    pub health_insurance_cost: Decimal,
    /// Annual deductible business expenses.
    pub business_expenses: Decimal,
    /// Los Angeles business tax classification for the gross-receipts tax.
    pub business_tax_class: BusinessTaxClass,
    /// Whether the work is a specified service trade or business, which
    /// phases the QBI deduction out at higher incomes.
    pub specified_service_trade: bool,
}

/// Result of the contractor worksheet, one field per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorResult {
    /// Annual gross revenue: hourly rate × annual hours.
    pub gross_revenue: Decimal,
    /// Federal income tax after the standard and QBI deductions.
    pub federal_tax: Decimal,
    /// California income tax; the state allows no QBI deduction.
    pub state_tax: Decimal,
    /// Social security portion of SE tax (capped at the wage base).
    pub se_social_security_tax: Decimal,
    /// Medicare portion of SE tax.
    pub se_medicare_tax: Decimal,
    /// Additional Medicare surtax on SE earnings above the threshold.
    pub se_additional_medicare_tax: Decimal,
    /// Sum of the three SE tax lines.
    pub se_tax_total: Decimal,
    /// Half the SE tax, deducted when computing AGI.
    pub se_tax_deduction: Decimal,
    /// Health insurance premium deducted above the line.
    pub health_insurance_deduction: Decimal,
    /// Business expenses deducted from gross.
    pub business_expense_deduction: Decimal,
    /// §199A deduction actually allowed after any phase-out.
    pub qbi_deduction: Decimal,
    /// Los Angeles gross-receipts business tax.
    pub local_business_tax: Decimal,
    /// Federal + state + SE + city business tax.
    pub total_tax: Decimal,
    /// Gross minus taxes, health insurance, and business expenses.
    pub net_income: Decimal,
    /// Taxes plus health insurance and expenses as a percentage of gross
    /// (0 when gross is 0).
    pub effective_tax_rate: Decimal,
    /// Net income divided across twelve months.
    pub monthly_net: Decimal,
}

/// Calculator for the 1099 contractor worksheet.
#[derive(Debug, Clone)]
pub struct ContractorScenario<'a> {
    tables: &'a TaxTables,
}

impl<'a> ContractorScenario<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Runs the full worksheet.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] if the tables fail validation or if the
    /// rate, hours, health insurance cost, or business expenses are
    /// negative. Zero gross is tolerated; the fixed costs still come out
    /// of net, so the result can be negative.
    pub fn calculate(&self, input: &ContractorInput) -> Result<ContractorResult, ScenarioError> {
        self.tables.validate()?;
        if input.hourly_rate < Decimal::ZERO {
            return Err(ScenarioError::NegativeRate(input.hourly_rate));
        }
        if input.annual_hours < Decimal::ZERO {
            return Err(ScenarioError::NegativeHours(input.annual_hours));
        }
        if input.health_insurance_cost < Decimal::ZERO {
            return Err(ScenarioError::NegativeHealthInsurance(
                input.health_insurance_cost,
            ));
        }
        if input.business_expenses < Decimal::ZERO {
            return Err(ScenarioError::NegativeBusinessExpenses(
                input.business_expenses,
            ));
        }

        // Steps 1-4: gross receipts and SE tax
        let gross_revenue = self.gross_revenue(input.hourly_rate, input.annual_hours);
        let se_tax_base = self.se_tax_base(gross_revenue);
        let se_social_security_tax = self.se_social_security_tax(se_tax_base);
        let se_medicare_tax = self.se_medicare_tax(se_tax_base);
        let se_additional_medicare_tax =
            self.se_additional_medicare_tax(se_tax_base, input.filing_status);
        let se_tax_total =
            round_half_up(se_social_security_tax + se_medicare_tax + se_additional_medicare_tax);
        let se_tax_deduction = round_half_up(se_tax_total / Decimal::TWO);

        // Step 5: AGI after the above-the-line deductions. Costs can exceed
        // gross, so AGI is allowed to go negative; the taxable-income floors
        // below take care of it.
        let health_insurance_deduction = round_half_up(input.health_insurance_cost);
        let business_expense_deduction = round_half_up(input.business_expenses);
        let adjusted_gross_income = round_half_up(
            gross_revenue - se_tax_deduction - health_insurance_deduction
                - business_expense_deduction,
        );

        // Step 6: QBI on qualified income, which excludes the health
        // insurance deduction
        let qbi_base = max(
            gross_revenue - business_expense_deduction - se_tax_deduction,
            Decimal::ZERO,
        );
        let qbi_deduction = self.qbi_deduction(
            qbi_base,
            adjusted_gross_income,
            input.filing_status,
            input.specified_service_trade,
        );

        // Steps 7-8: income taxes
        let federal_taxable = max(
            adjusted_gross_income
                - self.tables.federal_standard_deduction(input.filing_status)
                - qbi_deduction,
            Decimal::ZERO,
        );
        let federal_tax = FederalIncomeTax::new(self.tables.federal_brackets(input.filing_status))
            .calculate(federal_taxable)?;

        let state_taxable = max(
            adjusted_gross_income - self.tables.state_standard_deduction(input.filing_status),
            Decimal::ZERO,
        );
        let state_tax = StateIncomeTax::new(self.tables.state_brackets(input.filing_status))
            .calculate(state_taxable)?;

        // Steps 9-10: city tax and totals
        let local_business_tax = self.local_business_tax(gross_revenue, input.business_tax_class);
        let total_tax = round_half_up(federal_tax + state_tax + se_tax_total + local_business_tax);
        let net_income = round_half_up(
            gross_revenue - total_tax - health_insurance_deduction - business_expense_deduction,
        );
        let effective_tax_rate = self.effective_tax_rate(
            total_tax,
            health_insurance_deduction,
            business_expense_deduction,
            gross_revenue,
        );
        let monthly_net = round_half_up(net_income / MONTHS_PER_YEAR);

        Ok(ContractorResult {
            gross_revenue,
            federal_tax,
            state_tax,
            se_social_security_tax,
            se_medicare_tax,
            se_additional_medicare_tax,
            se_tax_total,
            se_tax_deduction,
            health_insurance_deduction,
            business_expense_deduction,
            qbi_deduction,
            local_business_tax,
            total_tax,
            net_income,
            effective_tax_rate,
            monthly_net,
        })
    }

    fn gross_revenue(&self, hourly_rate: Decimal, annual_hours: Decimal) -> Decimal {
        round_half_up(hourly_rate * annual_hours)
    }

    /// Net earnings from self-employment: gross less the employer-equivalent
    /// portion, per Schedule SE line 4a.
    fn se_tax_base(&self, gross_revenue: Decimal) -> Decimal {
        round_half_up(gross_revenue * self.tables.payroll.se_earnings_factor)
    }

    fn se_social_security_tax(&self, se_tax_base: Decimal) -> Decimal {
        let taxable = se_tax_base.min(self.tables.payroll.ss_wage_base);
        round_half_up(taxable * self.tables.payroll.ss_rate_self_employed)
    }

    fn se_medicare_tax(&self, se_tax_base: Decimal) -> Decimal {
        round_half_up(se_tax_base * self.tables.payroll.medicare_rate_self_employed)
    }

    fn se_additional_medicare_tax(
        &self,
        se_tax_base: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let threshold = self.tables.payroll.additional_medicare_threshold(filing_status);
        let excess = max(se_tax_base - threshold, Decimal::ZERO);
        round_half_up(excess * self.tables.payroll.additional_medicare_rate)
    }

    /// §199A deduction: 20% of qualified business income, linearly phased
    /// out over the AGI band for specified service trades.
    fn qbi_deduction(
        &self,
        qbi_base: Decimal,
        adjusted_gross_income: Decimal,
        filing_status: FilingStatus,
        specified_service_trade: bool,
    ) -> Decimal {
        if qbi_base <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let full = round_half_up(qbi_base * self.tables.qbi.deduction_rate);
        if !specified_service_trade {
            return full;
        }

        let start = self.tables.qbi.phase_out_start(filing_status);
        let range = self.tables.qbi.phase_out_range(filing_status);
        if adjusted_gross_income <= start {
            full
        } else if adjusted_gross_income >= start + range {
            Decimal::ZERO
        } else {
            let reduction = (adjusted_gross_income - start) / range;
            round_half_up(full * (Decimal::ONE - reduction))
        }
    }

    /// Gross-receipts tax for the classification; receipts at or below the
    /// small-business exemption owe nothing.
    fn local_business_tax(&self, gross_revenue: Decimal, class: BusinessTaxClass) -> Decimal {
        let Some(rate) = self.tables.local_business_tax.rate(class) else {
            return Decimal::ZERO;
        };
        if gross_revenue <= self.tables.local_business_tax.exemption_threshold {
            return Decimal::ZERO;
        }
        round_half_up(gross_revenue * rate)
    }

    fn effective_tax_rate(
        &self,
        total_tax: Decimal,
        health_insurance_deduction: Decimal,
        business_expense_deduction: Decimal,
        gross_revenue: Decimal,
    ) -> Decimal {
        if gross_revenue <= Decimal::ZERO {
            warn!(
                gross_revenue = %gross_revenue,
                "gross revenue is zero; reporting a zero effective tax rate"
            );
            return Decimal::ZERO;
        }
        let burden = total_tax + health_insurance_deduction + business_expense_deduction;
        round_half_up(burden / gross_revenue * Decimal::ONE_HUNDRED)
    }
}
