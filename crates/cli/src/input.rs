//! JSON documents accepted on input.

use serde::{Deserialize, Serialize};

use splitledger_balances::{Expense, Settlement};
use splitledger_core::{MemberId, Money};
use splitledger_splits::CustomSplit;

/// Input of `splitledger split`.
///
/// `policy` stays a plain string so an unknown tag is reported by the engine
/// (`invalid input: unknown policy`) rather than as a JSON shape error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRequest {
    pub total: Money,
    pub participants: Vec<MemberId>,
    pub policy: String,
    #[serde(default)]
    pub custom: Vec<CustomSplit>,
}

/// Input of `splitledger balances` and `splitledger settle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}
