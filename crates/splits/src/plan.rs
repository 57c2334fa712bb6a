//! Persistable description of how an expense was split.
//!
//! Stored next to the computed splits so an edit flow can reopen the expense
//! with the policy and parameters the user actually chose, instead of guessing
//! them back from the amounts.

use serde::{Deserialize, Serialize};

use splitledger_core::{LedgerResult, MemberId, Money, Split};

use crate::calculator::{CustomSplit, calculate_splits};
use crate::policy::SplitPolicy;

/// Split policy plus the parameters it was applied with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitPlan {
    pub policy: SplitPolicy,
    pub participants: Vec<MemberId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomSplit>,
}

impl SplitPlan {
    pub fn equal(participants: Vec<MemberId>) -> Self {
        Self {
            policy: SplitPolicy::Equal,
            participants,
            custom: Vec::new(),
        }
    }

    /// Percentage plan; participants are the members listed in `shares`.
    pub fn percentage(shares: impl IntoIterator<Item = (MemberId, f64)>) -> Self {
        let custom: Vec<CustomSplit> = shares
            .into_iter()
            .map(|(member, pct)| CustomSplit::percentage(member, pct))
            .collect();
        Self::with_custom(SplitPolicy::Percentage, custom)
    }

    /// Exact plan; participants are the members listed in `shares`.
    pub fn exact(shares: impl IntoIterator<Item = (MemberId, Money)>) -> Self {
        let custom: Vec<CustomSplit> = shares
            .into_iter()
            .map(|(member, amount)| CustomSplit::amount(member, amount))
            .collect();
        Self::with_custom(SplitPolicy::Exact, custom)
    }

    /// Build a plan from an untyped policy tag, as it arrives from a form.
    pub fn from_parts(
        policy: &str,
        participants: Vec<MemberId>,
        custom: Vec<CustomSplit>,
    ) -> LedgerResult<Self> {
        Ok(Self {
            policy: policy.parse()?,
            participants,
            custom,
        })
    }

    fn with_custom(policy: SplitPolicy, custom: Vec<CustomSplit>) -> Self {
        Self {
            policy,
            participants: custom.iter().map(|c| c.member.clone()).collect(),
            custom,
        }
    }

    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// Apply the plan to an expense total.
    pub fn calculate(&self, total: Money) -> LedgerResult<Vec<Split>> {
        calculate_splits(total, &self.participants, self.policy, &self.custom)
    }
}
