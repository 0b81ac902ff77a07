//! End-to-end comparison flow against the compiled-in 2025 tables: both
//! scenarios, the comparison rows, and the break-even search, driven the
//! way a frontend drives the crate.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use takehome_core::{
    BenefitBuilder, BreakevenInput, BreakevenSolver, BusinessTaxClass, ContractorInput,
    ContractorScenario, CoverageType, FilingStatus, TaxTables, W2Scenario, comparison_rows,
};

fn contractor_input(hourly_rate: Decimal) -> ContractorInput {
    ContractorInput {
        hourly_rate,
        annual_hours: dec!(2080),
        filing_status: FilingStatus::Single,
        health_insurance_cost: Decimal::ZERO,
        business_expenses: Decimal::ZERO,
        business_tax_class: BusinessTaxClass::Multimedia,
        specified_service_trade: true,
    }
}

#[test]
fn test_w2_scenario_headline_figures() {
    let tables = TaxTables::los_angeles_2025();
    let benefits =
        BenefitBuilder::from_tables(&tables).build(CoverageType::Individual, dec!(67), dec!(2080));

    let result = W2Scenario::new(&tables)
        .calculate(dec!(67.00), dec!(2080), FilingStatus::Single, &benefits)
        .unwrap();

    assert_eq!(result.gross_pay, dec!(139360.00));
    assert_eq!(result.social_security_tax, dec!(8640.32));
    assert_eq!(result.medicare_tax, dec!(2020.72));
    assert_eq!(result.sdi_tax, dec!(1672.32));
    assert_eq!(result.benefits_value, dec!(29974));
    assert_eq!(result.net_pay, dec!(125618.78));
}

#[test]
fn test_contractor_scenario_headline_figures() {
    let tables = TaxTables::los_angeles_2025();

    let result = ContractorScenario::new(&tables)
        .calculate(&ContractorInput {
            business_tax_class: BusinessTaxClass::Exempt,
            ..contractor_input(dec!(75.00))
        })
        .unwrap();

    assert_eq!(result.gross_revenue, dec!(156000.00));
    assert_eq!(result.se_tax_total, dec!(22042.09));
    assert_eq!(result.net_income, dec!(107601.59));
    assert_eq!(result.monthly_net, dec!(8966.80));
}

#[test]
fn test_comparison_rows_pair_the_two_scenarios() {
    let tables = TaxTables::los_angeles_2025();
    let benefits =
        BenefitBuilder::from_tables(&tables).build(CoverageType::Individual, dec!(67), dec!(2080));
    let w2 = W2Scenario::new(&tables)
        .calculate(dec!(67.00), dec!(2080), FilingStatus::Single, &benefits)
        .unwrap();
    let contractor = ContractorScenario::new(&tables)
        .calculate(&contractor_input(dec!(75.00)))
        .unwrap();

    let rows = comparison_rows(&w2, &contractor);

    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0].label, "Gross Annual");
    assert_eq!(rows[0].w2_value, w2.gross_pay);
    assert_eq!(rows[0].contractor_value, contractor.gross_revenue);

    let net = rows.iter().find(|r| r.is_highlight).unwrap();
    assert_eq!(net.label, "Net Take-Home");
    assert_eq!(net.w2_value, w2.net_pay);
    assert_eq!(net.contractor_value, contractor.net_income);
}

#[test]
fn test_breakeven_rate_reproduces_the_w2_net() {
    let tables = TaxTables::los_angeles_2025();
    let benefits =
        BenefitBuilder::from_tables(&tables).build(CoverageType::Individual, dec!(67), dec!(2080));
    let w2 = W2Scenario::new(&tables)
        .calculate(dec!(67.00), dec!(2080), FilingStatus::Single, &benefits)
        .unwrap();

    let rate = BreakevenSolver::new(&tables)
        .solve(&BreakevenInput {
            target_net: w2.net_pay,
            annual_hours: dec!(2080),
            filing_status: FilingStatus::Single,
            health_insurance_cost: Decimal::ZERO,
            business_expenses: Decimal::ZERO,
            business_tax_class: BusinessTaxClass::Multimedia,
            specified_service_trade: true,
        })
        .unwrap();

    assert!(rate > Decimal::ZERO && rate < dec!(500));

    let check = ContractorScenario::new(&tables)
        .calculate(&contractor_input(rate))
        .unwrap();
    assert!(
        (check.net_income - w2.net_pay).abs() < Decimal::ONE,
        "contractor net {} at rate {rate} missed the W-2 net {}",
        check.net_income,
        w2.net_pay
    );
}

#[test]
fn test_full_flow_is_deterministic() {
    let run = || {
        let tables = TaxTables::los_angeles_2025();
        let benefits = BenefitBuilder::from_tables(&tables).build(
            CoverageType::Family,
            dec!(72.50),
            dec!(1900),
        );
        let w2 = W2Scenario::new(&tables)
            .calculate(dec!(72.50), dec!(1900), FilingStatus::MarriedFilingJointly, &benefits)
            .unwrap();
        let contractor = ContractorScenario::new(&tables)
            .calculate(&ContractorInput {
                annual_hours: dec!(1900),
                filing_status: FilingStatus::MarriedFilingJointly,
                health_insurance_cost: dec!(9600),
                business_expenses: dec!(1500),
                ..contractor_input(dec!(82.00))
            })
            .unwrap();
        let rate = BreakevenSolver::new(&tables)
            .solve(&BreakevenInput {
                target_net: w2.net_pay,
                annual_hours: dec!(1900),
                filing_status: FilingStatus::MarriedFilingJointly,
                health_insurance_cost: dec!(9600),
                business_expenses: dec!(1500),
                business_tax_class: BusinessTaxClass::Multimedia,
                specified_service_trade: true,
            })
            .unwrap();
        (comparison_rows(&w2, &contractor), rate)
    };

    assert_eq!(run(), run());
}
