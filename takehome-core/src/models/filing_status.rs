use std::fmt;

use serde::{Deserialize, Serialize};

/// Federal/California filing status. The engine only carries the two
/// statuses the 2025 schedules are loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "mfj",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "mfj" => Some(Self::MarriedFilingJointly),
            _ => None,
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for status in [FilingStatus::Single, FilingStatus::MarriedFilingJointly] {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert_eq!(FilingStatus::parse("hoh"), None);
        assert_eq!(FilingStatus::parse(""), None);
        assert_eq!(FilingStatus::parse("Single"), None);
    }
}
