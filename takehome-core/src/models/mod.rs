mod benefit;
mod business_tax;
mod filing_status;
mod tax_bracket;

pub use benefit::{
    BenefitDefinition, BenefitItem, BenefitMode, BenefitOverride, BenefitValuation, CoverageType,
};
pub use business_tax::BusinessTaxClass;
pub use filing_status::FilingStatus;
pub use tax_bracket::{BracketError, FederalBracket, StateBracket};
