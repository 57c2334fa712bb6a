//! Input records supplied by the persistence collaborator.

use serde::{Deserialize, Serialize};

use splitledger_core::{LedgerError, LedgerResult, MemberId, Money, Split, ValueObject};

/// An expense as seen by the aggregator: who paid, and who owes what.
///
/// The payer does not have to appear in `splits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub payer: MemberId,
    pub splits: Vec<Split>,
}

impl Expense {
    pub fn new(payer: impl Into<MemberId>, splits: Vec<Split>) -> Self {
        Self {
            payer: payer.into(),
            splits,
        }
    }

    /// Sum of the split amounts.
    ///
    /// This, not a separately stored total, is what the payer is credited with.
    pub fn total(&self) -> LedgerResult<Money> {
        self.splits
            .iter()
            .try_fold(Money::ZERO, |acc, s| acc.checked_add(s.amount))
            .ok_or_else(|| LedgerError::invalid_amount("expense total too large"))
    }
}

/// Money that already moved from `payer` to `payee`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settlement {
    pub payer: MemberId,
    pub payee: MemberId,
    pub amount: Money,
}

impl Settlement {
    pub fn new(payer: impl Into<MemberId>, payee: impl Into<MemberId>, amount: Money) -> Self {
        Self {
            payer: payer.into(),
            payee: payee.into(),
            amount,
        }
    }
}

impl ValueObject for Expense {}
impl ValueObject for Settlement {}
