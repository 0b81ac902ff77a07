pub mod breakeven;
pub mod compare;
pub mod contractor;
pub mod w2;

use takehome_core::models::{BenefitMode, BenefitOverride};

use crate::session::ComparisonSession;

/// Applies `--benefit` overrides to the session's custom list. Any
/// override implies custom mode, whatever `--benefits` said.
pub(crate) fn apply_benefit_overrides(
    session: &mut ComparisonSession,
    overrides: &[(String, BenefitOverride)],
) -> anyhow::Result<()> {
    if overrides.is_empty() {
        return Ok(());
    }
    session.benefit_mode = BenefitMode::Custom;
    for (key, patch) in overrides {
        if !session.apply_benefit_override(key, patch) {
            let known = session
                .custom_benefits
                .iter()
                .map(|item| item.key.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::bail!("unknown benefit '{key}' (expected one of: {known})");
        }
    }
    Ok(())
}
