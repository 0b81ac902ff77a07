use std::fmt;

use serde::{Deserialize, Serialize};

/// Los Angeles gross-receipts tax classification. Contract software work
/// usually falls under the multimedia fund class; generic consulting bills
/// at the professions-and-occupations rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessTaxClass {
    Multimedia,
    Professions,
    Exempt,
}

impl BusinessTaxClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Multimedia => "multimedia",
            Self::Professions => "professions",
            Self::Exempt => "exempt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "multimedia" => Some(Self::Multimedia),
            "professions" => Some(Self::Professions),
            "exempt" => Some(Self::Exempt),
            _ => None,
        }
    }
}

impl fmt::Display for BusinessTaxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
