use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Published state schedules round their base amounts independently, so a
/// recomputed base can drift from the printed one by up to about a dollar
/// per boundary.
const BASE_TAX_TOLERANCE: Decimal = dec!(2);

/// One row of a federal rate schedule: everything above the previous row's
/// limit and at or below `max_income` is taxed at `tax_rate`. `None` marks
/// the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalBracket {
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

/// One row of a state rate schedule covering `(min_income, max_income]`.
/// `base_tax` is the tax already owed on income up to `min_income`, so a
/// single row prices any amount inside its range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub tax_rate: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket table is empty")]
    Empty,
    #[error("bracket {index} rate {rate} is outside [0, 1]")]
    RateOutOfRange { index: usize, rate: Decimal },
    #[error("bracket {index} limit {limit} does not exceed previous limit {previous}")]
    LimitsNotIncreasing {
        index: usize,
        limit: Decimal,
        previous: Decimal,
    },
    #[error("bracket {index} rate {rate} is below previous rate {previous}")]
    RatesDecreasing {
        index: usize,
        rate: Decimal,
        previous: Decimal,
    },
    #[error("bracket {index} is unbounded but is not the last entry")]
    UnboundedBeforeTail { index: usize },
    #[error("last bracket must be unbounded")]
    BoundedTail,
    #[error("first bracket must start at zero, got {min_income}")]
    NonZeroFirstMin { min_income: Decimal },
    #[error("bracket {index} covers no income: max {max_income} is not above min {min_income}")]
    EmptyRange {
        index: usize,
        min_income: Decimal,
        max_income: Decimal,
    },
    #[error("bracket {index} starts at {actual_min} but the previous bracket ends at {expected_min}")]
    RangeGap {
        index: usize,
        expected_min: Decimal,
        actual_min: Decimal,
    },
    #[error("bracket {index} base tax {actual} does not match {expected} accumulated through earlier brackets")]
    BaseTaxMismatch {
        index: usize,
        expected: Decimal,
        actual: Decimal,
    },
}

impl FederalBracket {
    /// Checks that a federal schedule is well formed: limits strictly
    /// increasing, rates non-decreasing and within [0, 1], exactly one
    /// unbounded bracket sitting at the end.
    pub fn validate_schedule(brackets: &[Self]) -> Result<(), BracketError> {
        if brackets.is_empty() {
            return Err(BracketError::Empty);
        }

        let last = brackets.len() - 1;
        let mut previous_limit: Option<Decimal> = None;
        let mut previous_rate: Option<Decimal> = None;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(BracketError::RateOutOfRange {
                    index,
                    rate: bracket.tax_rate,
                });
            }

            match bracket.max_income {
                Some(limit) => {
                    if index == last {
                        return Err(BracketError::BoundedTail);
                    }
                    if let Some(previous) = previous_limit {
                        if limit <= previous {
                            return Err(BracketError::LimitsNotIncreasing {
                                index,
                                limit,
                                previous,
                            });
                        }
                    }
                    previous_limit = Some(limit);
                }
                None => {
                    if index != last {
                        return Err(BracketError::UnboundedBeforeTail { index });
                    }
                }
            }

            if let Some(previous) = previous_rate {
                if bracket.tax_rate < previous {
                    return Err(BracketError::RatesDecreasing {
                        index,
                        rate: bracket.tax_rate,
                        previous,
                    });
                }
            }
            previous_rate = Some(bracket.tax_rate);
        }

        Ok(())
    }
}

impl StateBracket {
    /// Checks that a state schedule is well formed: starts at zero, ranges
    /// contiguous and non-empty, one unbounded tail, rates within [0, 1],
    /// and each `base_tax` equal to the tax accumulated through the
    /// preceding brackets (within [`BASE_TAX_TOLERANCE`], since published
    /// base amounts carry the tax board's own rounding).
    pub fn validate_schedule(brackets: &[Self]) -> Result<(), BracketError> {
        if brackets.is_empty() {
            return Err(BracketError::Empty);
        }

        let first = &brackets[0];
        if first.min_income != Decimal::ZERO {
            return Err(BracketError::NonZeroFirstMin {
                min_income: first.min_income,
            });
        }

        let last = brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;
        let mut expected_base = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(BracketError::RateOutOfRange {
                    index,
                    rate: bracket.tax_rate,
                });
            }

            if bracket.min_income != expected_min {
                return Err(BracketError::RangeGap {
                    index,
                    expected_min,
                    actual_min: bracket.min_income,
                });
            }

            if (bracket.base_tax - expected_base).abs() > BASE_TAX_TOLERANCE {
                return Err(BracketError::BaseTaxMismatch {
                    index,
                    expected: expected_base,
                    actual: bracket.base_tax,
                });
            }

            match bracket.max_income {
                Some(max_income) => {
                    if index == last {
                        return Err(BracketError::BoundedTail);
                    }
                    if max_income <= bracket.min_income {
                        return Err(BracketError::EmptyRange {
                            index,
                            min_income: bracket.min_income,
                            max_income,
                        });
                    }
                    expected_min = max_income;
                    // Chain from the published base rather than the recomputed
                    // one so tolerance drift does not accumulate across rows.
                    expected_base =
                        bracket.base_tax + bracket.tax_rate * (max_income - bracket.min_income);
                }
                None => {
                    if index != last {
                        return Err(BracketError::UnboundedBeforeTail { index });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn federal(limit: Option<Decimal>, rate: Decimal) -> FederalBracket {
        FederalBracket {
            max_income: limit,
            tax_rate: rate,
        }
    }

    fn state(min: Decimal, max: Option<Decimal>, base: Decimal, rate: Decimal) -> StateBracket {
        StateBracket {
            min_income: min,
            max_income: max,
            base_tax: base,
            tax_rate: rate,
        }
    }

    // =========================================================================
    // FederalBracket::validate_schedule tests
    // =========================================================================

    #[test]
    fn test_federal_accepts_well_formed_schedule() {
        let brackets = vec![
            federal(Some(dec!(10000)), dec!(0.10)),
            federal(Some(dec!(40000)), dec!(0.12)),
            federal(None, dec!(0.22)),
        ];
        assert_eq!(FederalBracket::validate_schedule(&brackets), Ok(()));
    }

    #[test]
    fn test_federal_rejects_empty_table() {
        assert_eq!(
            FederalBracket::validate_schedule(&[]),
            Err(BracketError::Empty)
        );
    }

    #[test]
    fn test_federal_rejects_non_increasing_limits() {
        let brackets = vec![
            federal(Some(dec!(40000)), dec!(0.10)),
            federal(Some(dec!(40000)), dec!(0.12)),
            federal(None, dec!(0.22)),
        ];
        assert_eq!(
            FederalBracket::validate_schedule(&brackets),
            Err(BracketError::LimitsNotIncreasing {
                index: 1,
                limit: dec!(40000),
                previous: dec!(40000),
            })
        );
    }

    #[test]
    fn test_federal_rejects_decreasing_rates() {
        let brackets = vec![
            federal(Some(dec!(10000)), dec!(0.12)),
            federal(Some(dec!(40000)), dec!(0.10)),
            federal(None, dec!(0.22)),
        ];
        assert_eq!(
            FederalBracket::validate_schedule(&brackets),
            Err(BracketError::RatesDecreasing {
                index: 1,
                rate: dec!(0.10),
                previous: dec!(0.12),
            })
        );
    }

    #[test]
    fn test_federal_rejects_bounded_tail() {
        let brackets = vec![
            federal(Some(dec!(10000)), dec!(0.10)),
            federal(Some(dec!(40000)), dec!(0.12)),
        ];
        assert_eq!(
            FederalBracket::validate_schedule(&brackets),
            Err(BracketError::BoundedTail)
        );
    }

    #[test]
    fn test_federal_rejects_unbounded_bracket_before_tail() {
        let brackets = vec![federal(None, dec!(0.10)), federal(None, dec!(0.12))];
        assert_eq!(
            FederalBracket::validate_schedule(&brackets),
            Err(BracketError::UnboundedBeforeTail { index: 0 })
        );
    }

    #[test]
    fn test_federal_rejects_rate_above_one() {
        let brackets = vec![federal(None, dec!(1.5))];
        assert_eq!(
            FederalBracket::validate_schedule(&brackets),
            Err(BracketError::RateOutOfRange {
                index: 0,
                rate: dec!(1.5),
            })
        );
    }

    // =========================================================================
    // StateBracket::validate_schedule tests
    // =========================================================================

    #[test]
    fn test_state_accepts_well_formed_schedule() {
        let brackets = vec![
            state(dec!(0), Some(dec!(10000)), dec!(0), dec!(0.01)),
            state(dec!(10000), Some(dec!(30000)), dec!(100), dec!(0.02)),
            state(dec!(30000), None, dec!(500), dec!(0.04)),
        ];
        assert_eq!(StateBracket::validate_schedule(&brackets), Ok(()));
    }

    #[test]
    fn test_state_accepts_base_within_published_rounding_drift() {
        // Base off by a dollar, the drift real published tables show.
        let brackets = vec![
            state(dec!(0), Some(dec!(10000)), dec!(0), dec!(0.01)),
            state(dec!(10000), None, dec!(101), dec!(0.02)),
        ];
        assert_eq!(StateBracket::validate_schedule(&brackets), Ok(()));
    }

    #[test]
    fn test_state_rejects_nonzero_first_min() {
        let brackets = vec![state(dec!(100), None, dec!(0), dec!(0.01))];
        assert_eq!(
            StateBracket::validate_schedule(&brackets),
            Err(BracketError::NonZeroFirstMin {
                min_income: dec!(100),
            })
        );
    }

    #[test]
    fn test_state_rejects_range_gap() {
        let brackets = vec![
            state(dec!(0), Some(dec!(10000)), dec!(0), dec!(0.01)),
            state(dec!(10001), None, dec!(100), dec!(0.02)),
        ];
        assert_eq!(
            StateBracket::validate_schedule(&brackets),
            Err(BracketError::RangeGap {
                index: 1,
                expected_min: dec!(10000),
                actual_min: dec!(10001),
            })
        );
    }

    #[test]
    fn test_state_rejects_base_tax_far_from_accumulated() {
        let brackets = vec![
            state(dec!(0), Some(dec!(10000)), dec!(0), dec!(0.01)),
            state(dec!(10000), None, dec!(250), dec!(0.02)),
        ];
        assert_eq!(
            StateBracket::validate_schedule(&brackets),
            Err(BracketError::BaseTaxMismatch {
                index: 1,
                expected: dec!(100),
                actual: dec!(250),
            })
        );
    }

    #[test]
    fn test_state_rejects_empty_range() {
        let brackets = vec![
            state(dec!(0), Some(dec!(0)), dec!(0), dec!(0.01)),
            state(dec!(0), None, dec!(0), dec!(0.02)),
        ];
        assert_eq!(
            StateBracket::validate_schedule(&brackets),
            Err(BracketError::EmptyRange {
                index: 0,
                min_income: dec!(0),
                max_income: dec!(0),
            })
        );
    }

    #[test]
    fn test_state_rejects_bounded_tail() {
        let brackets = vec![state(dec!(0), Some(dec!(10000)), dec!(0), dec!(0.01))];
        assert_eq!(
            StateBracket::validate_schedule(&brackets),
            Err(BracketError::BoundedTail)
        );
    }
}
