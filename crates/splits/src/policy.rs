use core::str::FromStr;

use serde::{Deserialize, Serialize};

use splitledger_core::LedgerError;

/// Strategy used to distribute an expense total across members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SplitPolicy {
    /// Same share for everyone; the rounding remainder goes to the first participant.
    Equal,
    /// Each member pays a percentage of the total.
    Percentage,
    /// Each member pays an explicit amount.
    Exact,
}

impl SplitPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            SplitPolicy::Equal => "equal",
            SplitPolicy::Percentage => "percentage",
            SplitPolicy::Exact => "exact",
        }
    }
}

impl core::fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitPolicy {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(SplitPolicy::Equal),
            "percentage" => Ok(SplitPolicy::Percentage),
            "exact" => Ok(SplitPolicy::Exact),
            _ => Err(LedgerError::invalid_input("unknown policy")),
        }
    }
}

impl TryFrom<String> for SplitPolicy {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
