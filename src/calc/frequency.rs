//! Compounding frequency for lump-sum interest calculations

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often interest is calculated and added back to principal.
///
/// This is a closed enumeration: every variant maps to a fixed number of
/// compounding periods per year, and unrecognized tags are rejected at the
/// parsing boundary rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    /// Once per year
    Annually,
    /// Twice per year
    SemiAnnually,
    /// Four times per year
    Quarterly,
    /// Twelve times per year
    Monthly,
    /// 365 times per year
    Daily,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// All variants, in increasing compounding order.
    pub fn all() -> [CompoundingFrequency; 5] {
        [
            CompoundingFrequency::Annually,
            CompoundingFrequency::SemiAnnually,
            CompoundingFrequency::Quarterly,
            CompoundingFrequency::Monthly,
            CompoundingFrequency::Daily,
        ]
    }

    /// The kebab-case tag used in serialized form and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semi-annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annually" => Ok(CompoundingFrequency::Annually),
            "semi-annually" => Ok(CompoundingFrequency::SemiAnnually),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "daily" => Ok(CompoundingFrequency::Daily),
            other => Err(CalcError::invalid_argument(format!(
                "unrecognized compounding frequency '{}'",
                other
            ))),
        }
    }
}
