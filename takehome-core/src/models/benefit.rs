use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coverage tier a benefits package is priced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageType {
    Individual,
    Family,
}

impl CoverageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Family => "family",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "individual" => Some(Self::Individual),
            "family" => Some(Self::Family),
            _ => None,
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the W-2 side of a comparison values employer benefits: not at all,
/// from the regional defaults, or from a caller-maintained custom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenefitMode {
    Off,
    Averages,
    Custom,
}

impl BenefitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Averages => "averages",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "off" => Some(Self::Off),
            "averages" => Some(Self::Averages),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for BenefitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule for turning a benefit definition into an annual dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BenefitValuation {
    /// Flat annual employer cost, by coverage tier. Scaled by worked hours.
    FixedByCoverage {
        individual: Decimal,
        family: Decimal,
    },
    /// Fraction of gross pay, e.g. an employer 401(k) match.
    PercentOfGross { rate: Decimal },
    /// Paid days off valued at the worker's own rate.
    DaysOfPay {
        individual_days: u32,
        family_days: u32,
    },
}

/// Static description of one employer benefit. The priced, per-session
/// record is [`BenefitItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenefitDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub valuation: BenefitValuation,
}

impl BenefitDefinition {
    pub fn days_for(&self, coverage: CoverageType) -> Option<u32> {
        match self.valuation {
            BenefitValuation::DaysOfPay {
                individual_days,
                family_days,
            } => Some(match coverage {
                CoverageType::Individual => individual_days,
                CoverageType::Family => family_days,
            }),
            _ => None,
        }
    }
}

/// A priced benefit line owned by the caller's session. `days` is only set
/// for paid-time-off style items and drives repricing when the rate moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitItem {
    pub key: String,
    pub label: String,
    pub enabled: bool,
    pub amount: Decimal,
    pub days: Option<u32>,
}

/// Partial patch merged over a [`BenefitItem`]; absent fields keep the
/// item's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitOverride {
    pub enabled: Option<bool>,
    pub amount: Option<Decimal>,
    pub days: Option<u32>,
}

impl BenefitItem {
    pub fn apply(&mut self, patch: &BenefitOverride) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(days) = patch.days {
            self.days = Some(days);
        }
    }
}
