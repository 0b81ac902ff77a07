//! Tax year 2025 reference data for a Los Angeles, California worker.
//!
//! Federal amounts follow the IRS inflation adjustments for 2025; the
//! California schedules are the FTB's inflation-indexed 2025 figures; the
//! city rates are the LAMC gross-receipts classes. Everything is annual
//! dollars unless a name says otherwise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{BenefitDefinition, BenefitValuation, FederalBracket, StateBracket};

pub const TAX_YEAR: i32 = 2025;

// -------------------------------------------------------------------------
// Payroll taxes (FICA / SECA / CA SDI)
// -------------------------------------------------------------------------

pub const SS_WAGE_BASE: Decimal = dec!(176100);
pub const SS_RATE_EMPLOYEE: Decimal = dec!(0.062);
pub const SS_RATE_SELF_EMPLOYED: Decimal = dec!(0.124);
pub const MEDICARE_RATE_EMPLOYEE: Decimal = dec!(0.0145);
pub const MEDICARE_RATE_SELF_EMPLOYED: Decimal = dec!(0.029);
pub const ADDITIONAL_MEDICARE_RATE: Decimal = dec!(0.009);
pub const ADDITIONAL_MEDICARE_THRESHOLD_SINGLE: Decimal = dec!(200000);
pub const ADDITIONAL_MEDICARE_THRESHOLD_MFJ: Decimal = dec!(250000);
/// Net-earnings factor applied to gross receipts before SE tax (92.35%).
pub const SE_EARNINGS_FACTOR: Decimal = dec!(0.9235);
/// California SDI lost its wage cap in 2024; the rate applies to all wages.
pub const CA_SDI_RATE: Decimal = dec!(0.012);

// -------------------------------------------------------------------------
// Standard deductions
// -------------------------------------------------------------------------

pub const FEDERAL_STANDARD_DEDUCTION_SINGLE: Decimal = dec!(15750);
pub const FEDERAL_STANDARD_DEDUCTION_MFJ: Decimal = dec!(31500);
pub const CA_STANDARD_DEDUCTION_SINGLE: Decimal = dec!(5706);
pub const CA_STANDARD_DEDUCTION_MFJ: Decimal = dec!(11412);

// -------------------------------------------------------------------------
// Qualified business income deduction (IRC §199A)
// -------------------------------------------------------------------------

pub const QBI_DEDUCTION_RATE: Decimal = dec!(0.20);
pub const QBI_PHASE_OUT_START_SINGLE: Decimal = dec!(191950);
pub const QBI_PHASE_OUT_START_MFJ: Decimal = dec!(383900);
pub const QBI_PHASE_OUT_RANGE_SINGLE: Decimal = dec!(50000);
pub const QBI_PHASE_OUT_RANGE_MFJ: Decimal = dec!(100000);

// -------------------------------------------------------------------------
// Los Angeles business tax (gross receipts)
// -------------------------------------------------------------------------

pub const LA_BUSINESS_TAX_MULTIMEDIA_RATE: Decimal = dec!(0.00101);
pub const LA_BUSINESS_TAX_PROFESSIONS_RATE: Decimal = dec!(0.00425);
/// Small-business exemption: gross receipts at or below this owe no city tax.
pub const LA_BUSINESS_TAX_EXEMPTION_THRESHOLD: Decimal = dec!(100000);

// -------------------------------------------------------------------------
// Work schedule
// -------------------------------------------------------------------------

pub const FULL_TIME_HOURS: Decimal = dec!(2080);
pub const WORKDAY_HOURS: Decimal = dec!(8);

// -------------------------------------------------------------------------
// Income tax schedules
// -------------------------------------------------------------------------

pub const FEDERAL_BRACKETS_SINGLE: [FederalBracket; 7] = [
    FederalBracket {
        max_income: Some(dec!(11925)),
        tax_rate: dec!(0.10),
    },
    FederalBracket {
        max_income: Some(dec!(48475)),
        tax_rate: dec!(0.12),
    },
    FederalBracket {
        max_income: Some(dec!(103350)),
        tax_rate: dec!(0.22),
    },
    FederalBracket {
        max_income: Some(dec!(197300)),
        tax_rate: dec!(0.24),
    },
    FederalBracket {
        max_income: Some(dec!(250525)),
        tax_rate: dec!(0.32),
    },
    FederalBracket {
        max_income: Some(dec!(626350)),
        tax_rate: dec!(0.35),
    },
    FederalBracket {
        max_income: None,
        tax_rate: dec!(0.37),
    },
];

pub const FEDERAL_BRACKETS_MFJ: [FederalBracket; 7] = [
    FederalBracket {
        max_income: Some(dec!(23850)),
        tax_rate: dec!(0.10),
    },
    FederalBracket {
        max_income: Some(dec!(96950)),
        tax_rate: dec!(0.12),
    },
    FederalBracket {
        max_income: Some(dec!(206700)),
        tax_rate: dec!(0.22),
    },
    FederalBracket {
        max_income: Some(dec!(394600)),
        tax_rate: dec!(0.24),
    },
    FederalBracket {
        max_income: Some(dec!(501050)),
        tax_rate: dec!(0.32),
    },
    FederalBracket {
        max_income: Some(dec!(751600)),
        tax_rate: dec!(0.35),
    },
    FederalBracket {
        max_income: None,
        tax_rate: dec!(0.37),
    },
];

pub const CA_BRACKETS_SINGLE: [StateBracket; 10] = [
    StateBracket {
        min_income: dec!(0),
        max_income: Some(dec!(11079)),
        base_tax: dec!(0),
        tax_rate: dec!(0.01),
    },
    StateBracket {
        min_income: dec!(11079),
        max_income: Some(dec!(26264)),
        base_tax: dec!(110.79),
        tax_rate: dec!(0.02),
    },
    StateBracket {
        min_income: dec!(26264),
        max_income: Some(dec!(41452)),
        base_tax: dec!(414.49),
        tax_rate: dec!(0.04),
    },
    StateBracket {
        min_income: dec!(41452),
        max_income: Some(dec!(57542)),
        base_tax: dec!(1022.01),
        tax_rate: dec!(0.06),
    },
    StateBracket {
        min_income: dec!(57542),
        max_income: Some(dec!(72724)),
        base_tax: dec!(1987.41),
        tax_rate: dec!(0.08),
    },
    StateBracket {
        min_income: dec!(72724),
        max_income: Some(dec!(371479)),
        base_tax: dec!(3201.97),
        tax_rate: dec!(0.093),
    },
    StateBracket {
        min_income: dec!(371479),
        max_income: Some(dec!(445771)),
        base_tax: dec!(30986.26),
        tax_rate: dec!(0.103),
    },
    StateBracket {
        min_income: dec!(445771),
        max_income: Some(dec!(742953)),
        base_tax: dec!(38638.27),
        tax_rate: dec!(0.113),
    },
    StateBracket {
        min_income: dec!(742953),
        max_income: Some(dec!(1000000)),
        base_tax: dec!(72220.84),
        tax_rate: dec!(0.123),
    },
    StateBracket {
        min_income: dec!(1000000),
        max_income: None,
        base_tax: dec!(103837.62),
        tax_rate: dec!(0.133),
    },
];

pub const CA_BRACKETS_MFJ: [StateBracket; 10] = [
    StateBracket {
        min_income: dec!(0),
        max_income: Some(dec!(22158)),
        base_tax: dec!(0),
        tax_rate: dec!(0.01),
    },
    StateBracket {
        min_income: dec!(22158),
        max_income: Some(dec!(52528)),
        base_tax: dec!(221.58),
        tax_rate: dec!(0.02),
    },
    StateBracket {
        min_income: dec!(52528),
        max_income: Some(dec!(82904)),
        base_tax: dec!(828.98),
        tax_rate: dec!(0.04),
    },
    StateBracket {
        min_income: dec!(82904),
        max_income: Some(dec!(115084)),
        base_tax: dec!(2044.02),
        tax_rate: dec!(0.06),
    },
    StateBracket {
        min_income: dec!(115084),
        max_income: Some(dec!(145448)),
        base_tax: dec!(3974.82),
        tax_rate: dec!(0.08),
    },
    StateBracket {
        min_income: dec!(145448),
        max_income: Some(dec!(742958)),
        base_tax: dec!(6403.94),
        tax_rate: dec!(0.093),
    },
    StateBracket {
        min_income: dec!(742958),
        max_income: Some(dec!(891542)),
        base_tax: dec!(61972.37),
        tax_rate: dec!(0.103),
    },
    StateBracket {
        min_income: dec!(891542),
        max_income: Some(dec!(1485906)),
        base_tax: dec!(77276.52),
        tax_rate: dec!(0.113),
    },
    StateBracket {
        min_income: dec!(1485906),
        max_income: Some(dec!(2000000)),
        base_tax: dec!(144439.65),
        tax_rate: dec!(0.123),
    },
    StateBracket {
        min_income: dec!(2000000),
        max_income: None,
        base_tax: dec!(207674.21),
        tax_rate: dec!(0.133),
    },
];

// -------------------------------------------------------------------------
// Employer benefit defaults (regional averages, annual employer cost)
// -------------------------------------------------------------------------

pub const BENEFIT_DEFAULTS: [BenefitDefinition; 8] = [
    BenefitDefinition {
        key: "health",
        label: "Health Insurance",
        valuation: BenefitValuation::FixedByCoverage {
            individual: dec!(8400),
            family: dec!(20000),
        },
    },
    BenefitDefinition {
        key: "dental",
        label: "Dental Insurance",
        valuation: BenefitValuation::FixedByCoverage {
            individual: dec!(700),
            family: dec!(1800),
        },
    },
    BenefitDefinition {
        key: "vision",
        label: "Vision Insurance",
        valuation: BenefitValuation::FixedByCoverage {
            individual: dec!(150),
            family: dec!(350),
        },
    },
    BenefitDefinition {
        key: "401k",
        label: "401(k) Match",
        valuation: BenefitValuation::PercentOfGross { rate: dec!(0.04) },
    },
    BenefitDefinition {
        key: "pto",
        label: "PTO",
        valuation: BenefitValuation::DaysOfPay {
            individual_days: 15,
            family_days: 15,
        },
    },
    BenefitDefinition {
        key: "holidays",
        label: "Paid Holidays",
        valuation: BenefitValuation::DaysOfPay {
            individual_days: 10,
            family_days: 10,
        },
    },
    BenefitDefinition {
        key: "life",
        label: "Life / Disability Ins.",
        valuation: BenefitValuation::FixedByCoverage {
            individual: dec!(1000),
            family: dec!(1000),
        },
    },
    BenefitDefinition {
        key: "hsa",
        label: "HSA / FSA",
        valuation: BenefitValuation::FixedByCoverage {
            individual: dec!(750),
            family: dec!(750),
        },
    },
];
