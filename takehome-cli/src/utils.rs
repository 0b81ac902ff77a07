//! Argument parsing and display formatting helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use takehome_core::models::{
    BenefitMode, BenefitOverride, BusinessTaxClass, CoverageType, FilingStatus,
};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

pub fn parse_filing_status(s: &str) -> Result<FilingStatus, String> {
    FilingStatus::parse(s)
        .ok_or_else(|| format!("invalid filing status '{s}' (expected 'single' or 'mfj')"))
}

pub fn parse_business_tax_class(s: &str) -> Result<BusinessTaxClass, String> {
    BusinessTaxClass::parse(s).ok_or_else(|| {
        format!("invalid business tax class '{s}' (expected 'multimedia', 'professions', or 'exempt')")
    })
}

pub fn parse_coverage_type(s: &str) -> Result<CoverageType, String> {
    CoverageType::parse(s)
        .ok_or_else(|| format!("invalid coverage type '{s}' (expected 'individual' or 'family')"))
}

pub fn parse_benefit_mode(s: &str) -> Result<BenefitMode, String> {
    BenefitMode::parse(s)
        .ok_or_else(|| format!("invalid benefit mode '{s}' (expected 'off', 'averages', or 'custom')"))
}

fn non_empty_key(key: &str) -> Result<&str, String> {
    if key.is_empty() {
        return Err("benefit key must not be empty".to_owned());
    }
    Ok(key)
}

/// Parses one `--benefit` argument into a keyed override.
///
/// Three forms are accepted: `KEY=on`/`KEY=off` toggles an item,
/// `KEY.amount=N` pins its annual value, and `KEY.days=N` changes the day
/// count of a day-valued item.
pub fn parse_benefit_override(s: &str) -> Result<(String, BenefitOverride), String> {
    let (target, value) = s.split_once('=').ok_or_else(|| {
        format!("expected KEY=on|off, KEY.amount=N, or KEY.days=N, got '{s}'")
    })?;
    let target = target.trim();
    let value = value.trim();

    match target.split_once('.') {
        None => {
            let key = non_empty_key(target)?;
            let enabled = match value {
                "on" => true,
                "off" => false,
                other => return Err(format!("expected 'on' or 'off' for '{key}', got '{other}'")),
            };
            Ok((
                key.to_owned(),
                BenefitOverride {
                    enabled: Some(enabled),
                    ..BenefitOverride::default()
                },
            ))
        }
        Some((key, "amount")) => {
            let key = non_empty_key(key)?;
            let amount = parse_decimal(value).map_err(|e| e.to_string())?;
            if amount < Decimal::ZERO {
                return Err(format!("benefit amount must be non-negative, got {amount}"));
            }
            Ok((
                key.to_owned(),
                BenefitOverride {
                    amount: Some(amount),
                    ..BenefitOverride::default()
                },
            ))
        }
        Some((key, "days")) => {
            let key = non_empty_key(key)?;
            let days: u32 = value
                .parse()
                .map_err(|_| format!("invalid day count '{value}'"))?;
            Ok((
                key.to_owned(),
                BenefitOverride {
                    days: Some(days),
                    ..BenefitOverride::default()
                },
            ))
        }
        Some((_, field)) => Err(format!(
            "unknown benefit field '{field}' (expected 'amount' or 'days')"
        )),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a dollar amount with a thousands separator, e.g. `-$1,234.56`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let grouped = group_thousands(int_part);
    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// Formats an already-scaled percentage, e.g. `31.37%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parsing tests
    // =========================================================================

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_trims_whitespace_and_treats_empty_as_zero() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn parse_enums_accept_canonical_names() {
        assert_eq!(parse_filing_status("single").unwrap(), FilingStatus::Single);
        assert_eq!(
            parse_filing_status("mfj").unwrap(),
            FilingStatus::MarriedFilingJointly
        );
        assert_eq!(
            parse_business_tax_class("professions").unwrap(),
            BusinessTaxClass::Professions
        );
        assert_eq!(
            parse_coverage_type("family").unwrap(),
            CoverageType::Family
        );
        assert_eq!(parse_benefit_mode("custom").unwrap(), BenefitMode::Custom);
    }

    #[test]
    fn parse_enums_reject_unknown_names() {
        assert!(parse_filing_status("married").is_err());
        assert!(parse_business_tax_class("retail").is_err());
        assert!(parse_coverage_type("spouse").is_err());
        assert!(parse_benefit_mode("default").is_err());
    }

    #[test]
    fn parse_benefit_override_toggles() {
        let (key, ov) = parse_benefit_override("health=off").unwrap();
        assert_eq!(key, "health");
        assert_eq!(ov.enabled, Some(false));
        assert_eq!(ov.amount, None);
        assert_eq!(ov.days, None);

        let (key, ov) = parse_benefit_override("401k=on").unwrap();
        assert_eq!(key, "401k");
        assert_eq!(ov.enabled, Some(true));
    }

    #[test]
    fn parse_benefit_override_amount_and_days() {
        let (key, ov) = parse_benefit_override("health.amount=9,000").unwrap();
        assert_eq!(key, "health");
        assert_eq!(ov.amount, Some(dec!(9000)));

        let (key, ov) = parse_benefit_override("pto.days=20").unwrap();
        assert_eq!(key, "pto");
        assert_eq!(ov.days, Some(20));
    }

    #[test]
    fn parse_benefit_override_rejects_malformed_input() {
        assert!(parse_benefit_override("health").is_err());
        assert!(parse_benefit_override("=on").is_err());
        assert!(parse_benefit_override("health=enabled").is_err());
        assert!(parse_benefit_override("health.rate=5").is_err());
        assert!(parse_benefit_override("health.amount=-100").is_err());
        assert!(parse_benefit_override("pto.days=twenty").is_err());
    }

    // =========================================================================
    // formatting tests
    // =========================================================================

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(950)), "$950.00");
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
        assert_eq!(format_currency(dec!(95644.784)), "$95,644.78");
    }

    #[test]
    fn format_currency_places_sign_before_the_dollar() {
        assert_eq!(format_currency(dec!(-987.65)), "-$987.65");
        assert_eq!(format_currency(dec!(-43715.22)), "-$43,715.22");
    }

    #[test]
    fn format_percent_pads_to_two_decimals() {
        assert_eq!(format_percent(dec!(31.37)), "31.37%");
        assert_eq!(format_percent(dec!(22.1)), "22.10%");
    }
}
