use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use splitledger_core::{LedgerError, LedgerResult, MemberId, Money, ValueObject};

use crate::records::Settlement;

/// Signed net balance per member.
///
/// Positive = the member is owed money (net creditor); negative = the member
/// owes money (net debtor). Absent members read as zero. Iteration order is by
/// [`MemberId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceMap(BTreeMap<MemberId, Money>);

impl BalanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `member`, zero when absent.
    pub fn get(&self, member: &MemberId) -> Money {
        self.0.get(member).copied().unwrap_or(Money::ZERO)
    }

    pub fn contains(&self, member: &MemberId) -> bool {
        self.0.contains_key(member)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MemberId, Money> {
        self.0.iter()
    }

    /// Sum of all balances. Zero for any ledger built from consistent records.
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    /// Sum of the positive balances (what creditors are owed in total).
    pub fn total_owed(&self) -> Money {
        self.0.values().filter(|b| b.is_positive()).sum()
    }

    /// `true` when every balance is within `tolerance` of zero.
    pub fn is_settled(&self, tolerance: Money) -> bool {
        self.0.values().all(|b| b.is_within(tolerance))
    }

    /// New map with `settlements` applied on top of these balances.
    pub fn with_settlements(&self, settlements: &[Settlement]) -> LedgerResult<BalanceMap> {
        let mut next = self.clone();
        for settlement in settlements {
            next.apply_settlement(settlement)?;
        }
        Ok(next)
    }

    pub(crate) fn credit(&mut self, member: &MemberId, amount: Money) -> LedgerResult<()> {
        let entry = self.entry(member);
        *entry = entry.checked_add(amount).ok_or_else(|| overflow(member))?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, member: &MemberId, amount: Money) -> LedgerResult<()> {
        let entry = self.entry(member);
        *entry = entry.checked_sub(amount).ok_or_else(|| overflow(member))?;
        Ok(())
    }

    /// A payer moves toward zero from below, a payee from above.
    pub(crate) fn apply_settlement(&mut self, settlement: &Settlement) -> LedgerResult<()> {
        self.credit(&settlement.payer, settlement.amount)?;
        self.debit(&settlement.payee, settlement.amount)
    }

    fn entry(&mut self, member: &MemberId) -> &mut Money {
        self.0.entry(member.clone()).or_insert(Money::ZERO)
    }
}

fn overflow(member: &MemberId) -> LedgerError {
    LedgerError::invalid_amount(format!("balance of {member} too large"))
}

/// Collects `(member, balance)` pairs; a repeated member keeps its last balance.
impl FromIterator<(MemberId, Money)> for BalanceMap {
    fn from_iter<I: IntoIterator<Item = (MemberId, Money)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BalanceMap {
    type Item = (&'a MemberId, &'a Money);
    type IntoIter = btree_map::Iter<'a, MemberId, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl ValueObject for BalanceMap {}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(entries: &[(&str, i64)]) -> BalanceMap {
        entries
            .iter()
            .map(|(id, cents)| (MemberId::from(*id), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn missing_members_read_as_zero() {
        let map = balances(&[("u1", 500)]);
        assert_eq!(map.get(&MemberId::from("u1")), Money::from_cents(500));
        assert_eq!(map.get(&MemberId::from("nobody")), Money::ZERO);
        assert!(!map.contains(&MemberId::from("nobody")));
    }

    #[test]
    fn collecting_keeps_the_last_balance_per_member() {
        let map = balances(&[("u1", 500), ("u1", -200)]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&MemberId::from("u1")), Money::from_cents(-200));
    }

    #[test]
    fn totals() {
        let map = balances(&[("u1", 10_000), ("u2", -5_000), ("u3", -5_000)]);
        assert_eq!(map.total(), Money::ZERO);
        assert_eq!(map.total_owed(), Money::from_major(100));
    }

    #[test]
    fn with_settlements_leaves_the_original_untouched() {
        let map = balances(&[("u1", 5_000), ("u2", -5_000)]);
        let settled = map
            .with_settlements(&[Settlement::new("u2", "u1", Money::from_major(50))])
            .unwrap();

        assert!(settled.is_settled(Money::ZERO));
        assert_eq!(map.get(&MemberId::from("u1")), Money::from_major(50));
    }

    #[test]
    fn settlement_beyond_max_is_an_error() {
        let map = balances(&[("u1", 1), ("u2", -1)]);
        let result = map.with_settlements(&[Settlement::new("u1", "u2", Money::MAX)]);

        assert_eq!(
            result,
            Err(LedgerError::invalid_amount("balance of u1 too large"))
        );
    }

    #[test]
    fn is_settled_respects_tolerance() {
        let map = balances(&[("u1", 1), ("u2", -1)]);
        assert!(map.is_settled(Money::CENT));
        assert!(!map.is_settled(Money::ZERO));
    }

    #[test]
    fn serializes_as_object() {
        let map = balances(&[("u2", -5_000), ("u1", 5_000)]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "u1": "50.00", "u2": "-50.00" }));
    }
}
