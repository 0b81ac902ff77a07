//! Employer benefit valuation.
//!
//! Turns static [`BenefitDefinition`]s into priced [`BenefitItem`]s for a
//! given coverage tier, hourly rate, and annual hours. Three valuation
//! rules exist:
//!
//! | Rule            | Annual value                                   |
//! |-----------------|------------------------------------------------|
//! | FixedByCoverage | tier cost × (hours / full-time hours)          |
//! | PercentOfGross  | rate × hourly rate × hours                     |
//! | DaysOfPay       | days × hourly rate × workday hours × scale     |
//!
//! where `scale = hours / full-time hours`. Amounts are whole dollars,
//! rounded half-up. Part-time schedules therefore shrink fixed and
//! day-based values proportionally; percent items already track hours
//! through the gross-pay product.
//!
//! A caller that lets the user edit items keeps its own `Vec<BenefitItem>`
//! and runs it through [`BenefitBuilder::reprice`] whenever rate or hours
//! change: day-based and percent-based amounts are re-derived, while fixed
//! amounts (possibly user-overridden) and `enabled` flags are preserved.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::calculations::benefits::BenefitBuilder;
//! use takehome_core::models::CoverageType;
//! use takehome_core::tables::TaxTables;
//!
//! let tables = TaxTables::los_angeles_2025();
//! let builder = BenefitBuilder::from_tables(&tables);
//! let items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));
//!
//! let pto = items.iter().find(|i| i.key == "pto").unwrap();
//! assert_eq!(pto.amount, dec!(8040)); // 15 days × $67 × 8h
//! assert_eq!(pto.days, Some(15));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_to_whole_dollar;
use crate::models::{
    BenefitDefinition, BenefitItem, BenefitMode, BenefitOverride, BenefitValuation, CoverageType,
};
use crate::tables::TaxTables;

/// Prices benefit definitions against a work schedule.
pub struct BenefitBuilder<'a> {
    definitions: &'a [BenefitDefinition],
    full_time_hours: Decimal,
    workday_hours: Decimal,
}

impl<'a> BenefitBuilder<'a> {
    pub fn new(
        definitions: &'a [BenefitDefinition],
        full_time_hours: Decimal,
        workday_hours: Decimal,
    ) -> Self {
        Self {
            definitions,
            full_time_hours,
            workday_hours,
        }
    }

    pub fn from_tables(tables: &'a TaxTables) -> Self {
        Self::new(
            &tables.benefit_defaults,
            tables.full_time_hours,
            tables.workday_hours,
        )
    }

    /// Prices every definition for the given coverage, rate, and hours.
    /// Items start enabled; day-based items record their day count so they
    /// can be repriced later.
    pub fn build(
        &self,
        coverage: CoverageType,
        hourly_rate: Decimal,
        annual_hours: Decimal,
    ) -> Vec<BenefitItem> {
        self.definitions
            .iter()
            .map(|def| {
                let (amount, days) = self.price(def, coverage, hourly_rate, annual_hours);
                BenefitItem {
                    key: def.key.to_string(),
                    label: def.label.to_string(),
                    enabled: true,
                    amount,
                    days,
                }
            })
            .collect()
    }

    /// Re-derives rate-dependent amounts on an existing item list.
    ///
    /// Day-based items recompute from the item's own `days` (which the user
    /// may have overridden); percent items recompute from the definition.
    /// Fixed amounts and `enabled` flags pass through untouched, as does
    /// any item without a matching definition.
    pub fn reprice(
        &self,
        items: &[BenefitItem],
        hourly_rate: Decimal,
        annual_hours: Decimal,
    ) -> Vec<BenefitItem> {
        let scale = self.hours_scale(annual_hours);
        items
            .iter()
            .map(|item| {
                let Some(def) = self.definitions.iter().find(|d| d.key == item.key) else {
                    warn!(key = %item.key, "benefit item has no definition; keeping amount");
                    return item.clone();
                };
                match def.valuation {
                    BenefitValuation::DaysOfPay { .. } => match item.days {
                        Some(days) => BenefitItem {
                            amount: round_to_whole_dollar(
                                Decimal::from(days) * hourly_rate * self.workday_hours * scale,
                            ),
                            ..item.clone()
                        },
                        None => item.clone(),
                    },
                    BenefitValuation::PercentOfGross { rate } => BenefitItem {
                        amount: round_to_whole_dollar(rate * hourly_rate * annual_hours),
                        ..item.clone()
                    },
                    BenefitValuation::FixedByCoverage { .. } => item.clone(),
                }
            })
            .collect()
    }

    /// The benefit list a scenario should price, per mode: `Off` values
    /// nothing, `Averages` rebuilds from the defaults, `Custom` reprices
    /// the caller's list at the current rate and hours.
    pub fn active_items(
        &self,
        mode: BenefitMode,
        coverage: CoverageType,
        custom: &[BenefitItem],
        hourly_rate: Decimal,
        annual_hours: Decimal,
    ) -> Vec<BenefitItem> {
        match mode {
            BenefitMode::Off => Vec::new(),
            BenefitMode::Averages => self.build(coverage, hourly_rate, annual_hours),
            BenefitMode::Custom => self.reprice(custom, hourly_rate, annual_hours),
        }
    }

    fn price(
        &self,
        def: &BenefitDefinition,
        coverage: CoverageType,
        hourly_rate: Decimal,
        annual_hours: Decimal,
    ) -> (Decimal, Option<u32>) {
        let scale = self.hours_scale(annual_hours);
        match def.valuation {
            BenefitValuation::DaysOfPay {
                individual_days,
                family_days,
            } => {
                let days = match coverage {
                    CoverageType::Individual => individual_days,
                    CoverageType::Family => family_days,
                };
                let amount = Decimal::from(days) * hourly_rate * self.workday_hours * scale;
                (round_to_whole_dollar(amount), Some(days))
            }
            BenefitValuation::PercentOfGross { rate } => {
                let amount = rate * hourly_rate * annual_hours;
                (round_to_whole_dollar(amount), None)
            }
            BenefitValuation::FixedByCoverage { individual, family } => {
                let cost = match coverage {
                    CoverageType::Individual => individual,
                    CoverageType::Family => family,
                };
                (round_to_whole_dollar(cost * scale), None)
            }
        }
    }

    fn hours_scale(&self, annual_hours: Decimal) -> Decimal {
        if self.full_time_hours <= Decimal::ZERO {
            warn!(
                full_time_hours = %self.full_time_hours,
                "non-positive full-time hours; scaling benefits to zero"
            );
            return Decimal::ZERO;
        }
        annual_hours / self.full_time_hours
    }
}

/// Merges a partial override into the item with the given key. Returns
/// false (and warns) when no item matches.
pub fn apply_override(items: &mut [BenefitItem], key: &str, patch: &BenefitOverride) -> bool {
    match items.iter_mut().find(|item| item.key == key) {
        Some(item) => {
            item.apply(patch);
            true
        }
        None => {
            warn!(key = %key, "benefit override targets an unknown item");
            false
        }
    }
}

/// Total annual value of the enabled items.
pub fn benefits_value(items: &[BenefitItem]) -> Decimal {
    items
        .iter()
        .filter(|item| item.enabled)
        .map(|item| item.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::tables::TaxTables;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn amount_of(items: &[BenefitItem], key: &str) -> Decimal {
        items.iter().find(|i| i.key == key).unwrap().amount
    }

    // =========================================================================
    // build tests
    // =========================================================================

    #[test]
    fn build_prices_individual_full_time_package() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);

        let items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        assert_eq!(items.len(), 8);
        assert_eq!(amount_of(&items, "health"), dec!(8400));
        assert_eq!(amount_of(&items, "dental"), dec!(700));
        assert_eq!(amount_of(&items, "vision"), dec!(150));
        // 0.04 × 67 × 2080 = 5574.40, rounded to whole dollars
        assert_eq!(amount_of(&items, "401k"), dec!(5574));
        // 15 days × 67 × 8
        assert_eq!(amount_of(&items, "pto"), dec!(8040));
        assert_eq!(amount_of(&items, "holidays"), dec!(5360));
        assert_eq!(amount_of(&items, "life"), dec!(1000));
        assert_eq!(amount_of(&items, "hsa"), dec!(750));
        assert!(items.iter().all(|i| i.enabled));
    }

    #[test]
    fn build_family_coverage_raises_fixed_costs_only() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);

        let items = builder.build(CoverageType::Family, dec!(67), dec!(2080));

        assert_eq!(amount_of(&items, "health"), dec!(20000));
        assert_eq!(amount_of(&items, "dental"), dec!(1800));
        assert_eq!(amount_of(&items, "vision"), dec!(350));
        // Day and percent items are coverage-independent in the defaults.
        assert_eq!(amount_of(&items, "pto"), dec!(8040));
        assert_eq!(amount_of(&items, "401k"), dec!(5574));
    }

    #[test]
    fn build_scales_part_time_hours() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);

        let items = builder.build(CoverageType::Individual, dec!(67), dec!(1040));

        assert_eq!(amount_of(&items, "health"), dec!(4200));
        // 15 × 67 × 8 × 0.5
        assert_eq!(amount_of(&items, "pto"), dec!(4020));
        // 0.04 × 67 × 1040 = 2787.20
        assert_eq!(amount_of(&items, "401k"), dec!(2787));
    }

    #[test]
    fn build_with_zero_hours_prices_everything_at_zero() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);

        let items = builder.build(CoverageType::Individual, dec!(67), dec!(0));

        assert!(items.iter().all(|i| i.amount == Decimal::ZERO));
    }

    #[test]
    fn build_records_days_only_for_day_based_items() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);

        let items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        let pto = items.iter().find(|i| i.key == "pto").unwrap();
        assert_eq!(pto.days, Some(15));
        let holidays = items.iter().find(|i| i.key == "holidays").unwrap();
        assert_eq!(holidays.days, Some(10));
        let health = items.iter().find(|i| i.key == "health").unwrap();
        assert_eq!(health.days, None);
    }

    // =========================================================================
    // reprice tests
    // =========================================================================

    #[test]
    fn reprice_recomputes_day_and_percent_items_at_new_rate() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        let repriced = builder.reprice(&items, dec!(80), dec!(2080));

        // 15 × 80 × 8 and 0.04 × 80 × 2080
        assert_eq!(amount_of(&repriced, "pto"), dec!(9600));
        assert_eq!(amount_of(&repriced, "401k"), dec!(6656));
    }

    #[test]
    fn reprice_preserves_fixed_amounts_and_enabled_flags() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let mut items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));
        apply_override(
            &mut items,
            "health",
            &BenefitOverride {
                amount: Some(dec!(9000)),
                ..BenefitOverride::default()
            },
        );
        apply_override(
            &mut items,
            "401k",
            &BenefitOverride {
                enabled: Some(false),
                ..BenefitOverride::default()
            },
        );

        let repriced = builder.reprice(&items, dec!(80), dec!(2080));

        // The overridden fixed amount survives a rate change.
        assert_eq!(amount_of(&repriced, "health"), dec!(9000));
        // Disabled items stay disabled but still reprice.
        let k401 = repriced.iter().find(|i| i.key == "401k").unwrap();
        assert!(!k401.enabled);
        assert_eq!(k401.amount, dec!(6656));
    }

    #[test]
    fn reprice_uses_overridden_day_counts() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let mut items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));
        apply_override(
            &mut items,
            "pto",
            &BenefitOverride {
                days: Some(20),
                ..BenefitOverride::default()
            },
        );

        let repriced = builder.reprice(&items, dec!(67), dec!(2080));

        // 20 × 67 × 8
        assert_eq!(amount_of(&repriced, "pto"), dec!(10720));
    }

    #[test]
    fn reprice_passes_unknown_items_through() {
        let _guard = init_test_tracing();
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let items = vec![BenefitItem {
            key: "commuter".to_string(),
            label: "Commuter Stipend".to_string(),
            enabled: true,
            amount: dec!(1200),
            days: None,
        }];

        let repriced = builder.reprice(&items, dec!(90), dec!(2080));

        assert_eq!(repriced, items);
    }

    // =========================================================================
    // active_items tests
    // =========================================================================

    #[test]
    fn active_items_off_mode_is_empty() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let custom = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        let items = builder.active_items(
            BenefitMode::Off,
            CoverageType::Individual,
            &custom,
            dec!(67),
            dec!(2080),
        );

        assert!(items.is_empty());
    }

    #[test]
    fn active_items_averages_ignores_custom_list() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let mut custom = builder.build(CoverageType::Individual, dec!(67), dec!(2080));
        apply_override(
            &mut custom,
            "health",
            &BenefitOverride {
                amount: Some(dec!(99999)),
                ..BenefitOverride::default()
            },
        );

        let items = builder.active_items(
            BenefitMode::Averages,
            CoverageType::Individual,
            &custom,
            dec!(67),
            dec!(2080),
        );

        assert_eq!(amount_of(&items, "health"), dec!(8400));
    }

    #[test]
    fn active_items_custom_reprices_the_callers_list() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let custom = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        let items = builder.active_items(
            BenefitMode::Custom,
            CoverageType::Individual,
            &custom,
            dec!(75),
            dec!(2080),
        );

        // 15 × 75 × 8
        assert_eq!(amount_of(&items, "pto"), dec!(9000));
        // Fixed costs untouched by the rate change.
        assert_eq!(amount_of(&items, "health"), dec!(8400));
    }

    // =========================================================================
    // apply_override / benefits_value tests
    // =========================================================================

    #[test]
    fn apply_override_reports_unknown_keys() {
        let _guard = init_test_tracing();
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let mut items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        let applied = apply_override(
            &mut items,
            "sabbatical",
            &BenefitOverride {
                enabled: Some(false),
                ..BenefitOverride::default()
            },
        );

        assert!(!applied);
        assert!(items.iter().all(|i| i.enabled));
    }

    #[test]
    fn benefits_value_sums_only_enabled_items() {
        let tables = TaxTables::los_angeles_2025();
        let builder = BenefitBuilder::from_tables(&tables);
        let mut items = builder.build(CoverageType::Individual, dec!(67), dec!(2080));

        assert_eq!(benefits_value(&items), dec!(29974));

        apply_override(
            &mut items,
            "health",
            &BenefitOverride {
                enabled: Some(false),
                ..BenefitOverride::default()
            },
        );
        assert_eq!(benefits_value(&items), dec!(21574));
    }
}
