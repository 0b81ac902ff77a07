//! Jurisdiction configuration: every rate, threshold, schedule, and benefit
//! default the calculators need, gathered behind one injectable handle.
//!
//! [`TaxTables::los_angeles_2025`] builds the handle from the compiled-in
//! 2025 data in [`year_2025`]; tests build reduced tables by hand. The data
//! is owned, so a caller can also patch a copy (say, a different SDI rate)
//! and recompute.

pub mod year_2025;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    BenefitDefinition, BracketError, BusinessTaxClass, FederalBracket, FilingStatus, StateBracket,
};

/// Errors produced by [`TaxTables::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TablesError {
    #[error("invalid {table} schedule: {source}")]
    InvalidSchedule {
        table: &'static str,
        source: BracketError,
    },

    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: Decimal },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: Decimal },
}

fn check_rate(name: &'static str, value: Decimal) -> Result<(), TablesError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(TablesError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: Decimal) -> Result<(), TablesError> {
    if value <= Decimal::ZERO {
        return Err(TablesError::NotPositive { name, value });
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: Decimal) -> Result<(), TablesError> {
    if value < Decimal::ZERO {
        return Err(TablesError::Negative { name, value });
    }
    Ok(())
}

/// FICA, SECA, and state disability parameters for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTaxConfig {
    /// Maximum earnings subject to social security tax. $176,100 for 2025.
    pub ss_wage_base: Decimal,
    /// Employee-side social security rate (6.2%).
    pub ss_rate_employee: Decimal,
    /// Combined self-employed social security rate (12.4%).
    pub ss_rate_self_employed: Decimal,
    /// Employee-side Medicare rate (1.45%).
    pub medicare_rate_employee: Decimal,
    /// Combined self-employed Medicare rate (2.9%).
    pub medicare_rate_self_employed: Decimal,
    /// Additional Medicare surtax rate above the status threshold (0.9%).
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold_single: Decimal,
    pub additional_medicare_threshold_mfj: Decimal,
    /// Portion of gross self-employment receipts subject to SE tax (92.35%).
    pub se_earnings_factor: Decimal,
    /// California SDI rate, uncapped since 2024 (1.2%).
    pub sdi_rate: Decimal,
}

impl PayrollTaxConfig {
    pub fn additional_medicare_threshold(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.additional_medicare_threshold_single,
            FilingStatus::MarriedFilingJointly => self.additional_medicare_threshold_mfj,
        }
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        check_positive("ss_wage_base", self.ss_wage_base)?;
        check_rate("ss_rate_employee", self.ss_rate_employee)?;
        check_rate("ss_rate_self_employed", self.ss_rate_self_employed)?;
        check_rate("medicare_rate_employee", self.medicare_rate_employee)?;
        check_rate("medicare_rate_self_employed", self.medicare_rate_self_employed)?;
        check_rate("additional_medicare_rate", self.additional_medicare_rate)?;
        check_non_negative(
            "additional_medicare_threshold_single",
            self.additional_medicare_threshold_single,
        )?;
        check_non_negative(
            "additional_medicare_threshold_mfj",
            self.additional_medicare_threshold_mfj,
        )?;
        if self.se_earnings_factor <= Decimal::ZERO || self.se_earnings_factor > Decimal::ONE {
            return Err(TablesError::InvalidRate {
                name: "se_earnings_factor",
                value: self.se_earnings_factor,
            });
        }
        check_rate("sdi_rate", self.sdi_rate)?;
        Ok(())
    }
}

/// Qualified business income deduction parameters (IRC §199A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QbiConfig {
    /// Deduction as a fraction of qualified business income (20%).
    pub deduction_rate: Decimal,
    pub phase_out_start_single: Decimal,
    pub phase_out_start_mfj: Decimal,
    pub phase_out_range_single: Decimal,
    pub phase_out_range_mfj: Decimal,
}

impl QbiConfig {
    /// AGI at which the specified-service phase-out begins.
    pub fn phase_out_start(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.phase_out_start_single,
            FilingStatus::MarriedFilingJointly => self.phase_out_start_mfj,
        }
    }

    /// Width of the linear phase-out band.
    pub fn phase_out_range(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.phase_out_range_single,
            FilingStatus::MarriedFilingJointly => self.phase_out_range_mfj,
        }
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        check_rate("qbi_deduction_rate", self.deduction_rate)?;
        check_non_negative("qbi_phase_out_start_single", self.phase_out_start_single)?;
        check_non_negative("qbi_phase_out_start_mfj", self.phase_out_start_mfj)?;
        check_positive("qbi_phase_out_range_single", self.phase_out_range_single)?;
        check_positive("qbi_phase_out_range_mfj", self.phase_out_range_mfj)?;
        Ok(())
    }
}

/// Los Angeles gross-receipts tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBusinessTaxConfig {
    pub multimedia_rate: Decimal,
    pub professions_rate: Decimal,
    /// Gross receipts at or below this owe no city business tax.
    pub exemption_threshold: Decimal,
}

impl LocalBusinessTaxConfig {
    /// Rate for a classification; `None` when the business is exempt.
    pub fn rate(&self, class: BusinessTaxClass) -> Option<Decimal> {
        match class {
            BusinessTaxClass::Multimedia => Some(self.multimedia_rate),
            BusinessTaxClass::Professions => Some(self.professions_rate),
            BusinessTaxClass::Exempt => None,
        }
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        check_rate("la_business_tax_multimedia_rate", self.multimedia_rate)?;
        check_rate("la_business_tax_professions_rate", self.professions_rate)?;
        check_non_negative("la_business_tax_exemption_threshold", self.exemption_threshold)?;
        Ok(())
    }
}

/// Every table and parameter the calculators read, for one tax year and
/// one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    pub tax_year: i32,
    pub federal_brackets_single: Vec<FederalBracket>,
    pub federal_brackets_mfj: Vec<FederalBracket>,
    pub state_brackets_single: Vec<StateBracket>,
    pub state_brackets_mfj: Vec<StateBracket>,
    pub federal_standard_deduction_single: Decimal,
    pub federal_standard_deduction_mfj: Decimal,
    pub state_standard_deduction_single: Decimal,
    pub state_standard_deduction_mfj: Decimal,
    pub payroll: PayrollTaxConfig,
    pub qbi: QbiConfig,
    pub local_business_tax: LocalBusinessTaxConfig,
    pub benefit_defaults: Vec<BenefitDefinition>,
    /// Hours in a full-time year; benefit scaling divides by this.
    pub full_time_hours: Decimal,
    /// Hours in a paid day off.
    pub workday_hours: Decimal,
}

impl TaxTables {
    /// The compiled-in 2025 tables for Los Angeles, California.
    pub fn los_angeles_2025() -> Self {
        Self {
            tax_year: year_2025::TAX_YEAR,
            federal_brackets_single: year_2025::FEDERAL_BRACKETS_SINGLE.to_vec(),
            federal_brackets_mfj: year_2025::FEDERAL_BRACKETS_MFJ.to_vec(),
            state_brackets_single: year_2025::CA_BRACKETS_SINGLE.to_vec(),
            state_brackets_mfj: year_2025::CA_BRACKETS_MFJ.to_vec(),
            federal_standard_deduction_single: year_2025::FEDERAL_STANDARD_DEDUCTION_SINGLE,
            federal_standard_deduction_mfj: year_2025::FEDERAL_STANDARD_DEDUCTION_MFJ,
            state_standard_deduction_single: year_2025::CA_STANDARD_DEDUCTION_SINGLE,
            state_standard_deduction_mfj: year_2025::CA_STANDARD_DEDUCTION_MFJ,
            payroll: PayrollTaxConfig {
                ss_wage_base: year_2025::SS_WAGE_BASE,
                ss_rate_employee: year_2025::SS_RATE_EMPLOYEE,
                ss_rate_self_employed: year_2025::SS_RATE_SELF_EMPLOYED,
                medicare_rate_employee: year_2025::MEDICARE_RATE_EMPLOYEE,
                medicare_rate_self_employed: year_2025::MEDICARE_RATE_SELF_EMPLOYED,
                additional_medicare_rate: year_2025::ADDITIONAL_MEDICARE_RATE,
                additional_medicare_threshold_single:
                    year_2025::ADDITIONAL_MEDICARE_THRESHOLD_SINGLE,
                additional_medicare_threshold_mfj: year_2025::ADDITIONAL_MEDICARE_THRESHOLD_MFJ,
                se_earnings_factor: year_2025::SE_EARNINGS_FACTOR,
                sdi_rate: year_2025::CA_SDI_RATE,
            },
            qbi: QbiConfig {
                deduction_rate: year_2025::QBI_DEDUCTION_RATE,
                phase_out_start_single: year_2025::QBI_PHASE_OUT_START_SINGLE,
                phase_out_start_mfj: year_2025::QBI_PHASE_OUT_START_MFJ,
                phase_out_range_single: year_2025::QBI_PHASE_OUT_RANGE_SINGLE,
                phase_out_range_mfj: year_2025::QBI_PHASE_OUT_RANGE_MFJ,
            },
            local_business_tax: LocalBusinessTaxConfig {
                multimedia_rate: year_2025::LA_BUSINESS_TAX_MULTIMEDIA_RATE,
                professions_rate: year_2025::LA_BUSINESS_TAX_PROFESSIONS_RATE,
                exemption_threshold: year_2025::LA_BUSINESS_TAX_EXEMPTION_THRESHOLD,
            },
            benefit_defaults: year_2025::BENEFIT_DEFAULTS.to_vec(),
            full_time_hours: year_2025::FULL_TIME_HOURS,
            workday_hours: year_2025::WORKDAY_HOURS,
        }
    }

    pub fn federal_brackets(&self, status: FilingStatus) -> &[FederalBracket] {
        match status {
            FilingStatus::Single => &self.federal_brackets_single,
            FilingStatus::MarriedFilingJointly => &self.federal_brackets_mfj,
        }
    }

    pub fn state_brackets(&self, status: FilingStatus) -> &[StateBracket] {
        match status {
            FilingStatus::Single => &self.state_brackets_single,
            FilingStatus::MarriedFilingJointly => &self.state_brackets_mfj,
        }
    }

    pub fn federal_standard_deduction(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.federal_standard_deduction_single,
            FilingStatus::MarriedFilingJointly => self.federal_standard_deduction_mfj,
        }
    }

    pub fn state_standard_deduction(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.state_standard_deduction_single,
            FilingStatus::MarriedFilingJointly => self.state_standard_deduction_mfj,
        }
    }

    /// Validates every schedule and parameter.
    ///
    /// Bracket schedules are checked structurally (ordering, contiguity,
    /// unbounded tails) and state base-tax amounts are recomputed from the
    /// marginal rates rather than trusted, so a transcription error in one
    /// row is caught here instead of surfacing as a wrong estimate.
    pub fn validate(&self) -> Result<(), TablesError> {
        let schedule = |table, result: Result<(), BracketError>| {
            result.map_err(|source| TablesError::InvalidSchedule { table, source })
        };
        schedule(
            "federal single",
            FederalBracket::validate_schedule(&self.federal_brackets_single),
        )?;
        schedule(
            "federal mfj",
            FederalBracket::validate_schedule(&self.federal_brackets_mfj),
        )?;
        schedule(
            "state single",
            StateBracket::validate_schedule(&self.state_brackets_single),
        )?;
        schedule(
            "state mfj",
            StateBracket::validate_schedule(&self.state_brackets_mfj),
        )?;

        self.payroll.validate()?;
        self.qbi.validate()?;
        self.local_business_tax.validate()?;

        check_non_negative(
            "federal_standard_deduction_single",
            self.federal_standard_deduction_single,
        )?;
        check_non_negative(
            "federal_standard_deduction_mfj",
            self.federal_standard_deduction_mfj,
        )?;
        check_non_negative(
            "state_standard_deduction_single",
            self.state_standard_deduction_single,
        )?;
        check_non_negative(
            "state_standard_deduction_mfj",
            self.state_standard_deduction_mfj,
        )?;
        check_positive("full_time_hours", self.full_time_hours)?;
        check_positive("workday_hours", self.workday_hours)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // TaxTables::validate tests
    // =========================================================================

    #[test]
    fn test_los_angeles_2025_passes_validation() {
        assert_eq!(TaxTables::los_angeles_2025().validate(), Ok(()));
    }

    #[test]
    fn test_validate_catches_corrupted_state_base_tax() {
        let mut tables = TaxTables::los_angeles_2025();
        tables.state_brackets_single[6].base_tax += dec!(50);

        let result = tables.validate();
        assert!(matches!(
            result,
            Err(TablesError::InvalidSchedule {
                table: "state single",
                source: BracketError::BaseTaxMismatch { index: 6, .. },
            })
        ));
    }

    #[test]
    fn test_validate_catches_gap_in_state_schedule() {
        let mut tables = TaxTables::los_angeles_2025();
        tables.state_brackets_mfj[3].min_income += dec!(1);

        let result = tables.validate();
        assert!(matches!(
            result,
            Err(TablesError::InvalidSchedule {
                table: "state mfj",
                source: BracketError::RangeGap { index: 3, .. },
            })
        ));
    }

    #[test]
    fn test_validate_catches_out_of_range_payroll_rate() {
        let mut tables = TaxTables::los_angeles_2025();
        tables.payroll.sdi_rate = dec!(1.2);

        assert_eq!(
            tables.validate(),
            Err(TablesError::InvalidRate {
                name: "sdi_rate",
                value: dec!(1.2),
            })
        );
    }

    #[test]
    fn test_validate_catches_zero_full_time_hours() {
        let mut tables = TaxTables::los_angeles_2025();
        tables.full_time_hours = Decimal::ZERO;

        assert_eq!(
            tables.validate(),
            Err(TablesError::NotPositive {
                name: "full_time_hours",
                value: Decimal::ZERO,
            })
        );
    }

    // =========================================================================
    // Accessor tests
    // =========================================================================

    #[test]
    fn test_accessors_branch_on_filing_status() {
        let tables = TaxTables::los_angeles_2025();

        assert_eq!(
            tables.federal_standard_deduction(FilingStatus::Single),
            dec!(15750)
        );
        assert_eq!(
            tables.federal_standard_deduction(FilingStatus::MarriedFilingJointly),
            dec!(31500)
        );
        assert_eq!(
            tables.state_standard_deduction(FilingStatus::Single),
            dec!(5706)
        );
        assert_eq!(
            tables.state_standard_deduction(FilingStatus::MarriedFilingJointly),
            dec!(11412)
        );

        assert_eq!(tables.federal_brackets(FilingStatus::Single).len(), 7);
        assert_eq!(
            tables.federal_brackets(FilingStatus::MarriedFilingJointly)[0].max_income,
            Some(dec!(23850))
        );
        assert_eq!(tables.state_brackets(FilingStatus::Single).len(), 10);
        assert_eq!(
            tables.state_brackets(FilingStatus::MarriedFilingJointly)[1].base_tax,
            dec!(221.58)
        );
    }

    #[test]
    fn test_payroll_threshold_branches_on_filing_status() {
        let payroll = TaxTables::los_angeles_2025().payroll;
        assert_eq!(
            payroll.additional_medicare_threshold(FilingStatus::Single),
            dec!(200000)
        );
        assert_eq!(
            payroll.additional_medicare_threshold(FilingStatus::MarriedFilingJointly),
            dec!(250000)
        );
    }

    #[test]
    fn test_business_tax_rate_by_class() {
        let config = TaxTables::los_angeles_2025().local_business_tax;
        assert_eq!(
            config.rate(BusinessTaxClass::Multimedia),
            Some(dec!(0.00101))
        );
        assert_eq!(
            config.rate(BusinessTaxClass::Professions),
            Some(dec!(0.00425))
        );
        assert_eq!(config.rate(BusinessTaxClass::Exempt), None);
    }

    #[test]
    fn test_qbi_parameters_branch_on_filing_status() {
        let qbi = TaxTables::los_angeles_2025().qbi;
        assert_eq!(qbi.phase_out_start(FilingStatus::Single), dec!(191950));
        assert_eq!(
            qbi.phase_out_start(FilingStatus::MarriedFilingJointly),
            dec!(383900)
        );
        assert_eq!(qbi.phase_out_range(FilingStatus::Single), dec!(50000));
        assert_eq!(
            qbi.phase_out_range(FilingStatus::MarriedFilingJointly),
            dec!(100000)
        );
    }
}
