//! Per-member share of a single expense.

use serde::{Deserialize, Serialize};

use crate::id::MemberId;
use crate::money::Money;
use crate::value_object::ValueObject;

/// One member's owed share of an expense.
///
/// `amount` is non-negative. The splits of one expense sum to its total; that is
/// enforced when the splits are calculated, not re-checked downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Split {
    pub member: MemberId,
    pub amount: Money,
}

impl Split {
    pub fn new(member: impl Into<MemberId>, amount: Money) -> Self {
        Self {
            member: member.into(),
            amount,
        }
    }
}

impl ValueObject for Split {}
