use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use splitledger_balances::{BalanceMap, Settlement};
use splitledger_core::{MemberId, Money, ValueObject};

use crate::config::SimplifierConfig;

/// Suggested payment: `from` pays `amount` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

impl Transaction {
    /// The settlement that records this payment once it has been made.
    pub fn as_settlement(&self) -> Settlement {
        Settlement {
            payer: self.from.clone(),
            payee: self.to.clone(),
            amount: self.amount,
        }
    }
}

impl ValueObject for Transaction {}

/// [`simplify_debts_with`] using the default one-cent tolerance.
pub fn simplify_debts(balances: &BalanceMap) -> Vec<Transaction> {
    simplify_debts_with(balances, &SimplifierConfig::default())
}

/// Greedy largest-first matching of debtors to creditors.
///
/// Creditors and debtors are each sorted by amount, largest first (stable, so
/// equal amounts keep map order). The largest remaining debtor pays the largest
/// remaining creditor `min(owed, owing)`, and whichever side is paid off moves
/// on. Produces at most `n - 1` transactions for `n` unsettled members.
///
/// This is a heuristic, not a globally minimal solution. A map that does not
/// sum to zero is not an error; the surplus side is simply left over.
pub fn simplify_debts_with(balances: &BalanceMap, config: &SimplifierConfig) -> Vec<Transaction> {
    let tolerance = config.tolerance;

    let mut creditors: Vec<(&MemberId, Money)> = balances
        .iter()
        .filter(|(_, balance)| **balance > tolerance)
        .map(|(member, balance)| (member, *balance))
        .collect();
    let mut debtors: Vec<(&MemberId, Money)> = balances
        .iter()
        .filter(|(_, balance)| **balance < -tolerance)
        .map(|(member, balance)| (member, -*balance))
        .collect();

    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transactions = Vec::with_capacity(creditors.len().max(debtors.len()));
    let (mut c, mut d) = (0, 0);

    while c < creditors.len() && d < debtors.len() {
        let (creditor, owed) = creditors[c];
        let (debtor, owing) = debtors[d];
        let amount = owed.min(owing);

        if amount > tolerance {
            trace!(from = %debtor, to = %creditor, %amount, "suggested payment");
            transactions.push(Transaction {
                from: debtor.clone(),
                to: creditor.clone(),
                amount,
            });
        }

        creditors[c].1 -= amount;
        debtors[d].1 -= amount;

        if creditors[c].1.is_within(tolerance) {
            c += 1;
        }
        if debtors[d].1.is_within(tolerance) {
            d += 1;
        }
    }

    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transactions = transactions.len(),
        "simplified debts"
    );

    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn balances(entries: &[(&str, i64)]) -> BalanceMap {
        entries
            .iter()
            .map(|(id, major)| (MemberId::from(*id), Money::from_major(*major)))
            .collect()
    }

    fn total(transactions: &[Transaction]) -> Money {
        transactions.iter().map(|t| t.amount).sum()
    }

    fn settle(balances: &BalanceMap, transactions: &[Transaction]) -> BalanceMap {
        let settlements: Vec<Settlement> =
            transactions.iter().map(Transaction::as_settlement).collect();
        balances.with_settlements(&settlements).unwrap()
    }

    #[test]
    fn one_creditor_two_debtors() {
        let map = balances(&[("u1", 100), ("u2", -50), ("u3", -50)]);
        let txs = simplify_debts(&map);

        assert_eq!(txs.len(), 2);
        assert!(txs.iter().all(|t| t.to == MemberId::from("u1")));
        assert_eq!(total(&txs), Money::from_major(100));
    }

    #[test]
    fn one_debtor_three_creditors() {
        let map = balances(&[("u1", 50), ("u2", 70), ("u3", 30), ("u4", -150)]);
        let txs = simplify_debts(&map);

        assert_eq!(txs.len(), 3);
        assert!(txs.iter().all(|t| t.from == MemberId::from("u4")));
        assert_eq!(total(&txs), Money::from_major(150));
        // Largest creditor is paid first.
        assert_eq!(txs[0].to, MemberId::from("u2"));
        assert_eq!(txs[0].amount, Money::from_major(70));
    }

    #[test]
    fn balances_within_tolerance_need_no_payments() {
        let map: BalanceMap = [
            (MemberId::from("u1"), Money::from_cents(1)),
            (MemberId::from("u2"), Money::from_cents(-1)),
            (MemberId::from("u3"), Money::ZERO),
        ]
        .into_iter()
        .collect();

        assert!(simplify_debts(&map).is_empty());
        assert!(simplify_debts(&BalanceMap::new()).is_empty());
    }

    #[test]
    fn chains_are_collapsed() {
        // a owes b 30, b owes c 30: a can pay c directly.
        let map = balances(&[("a", -30), ("b", 0), ("c", 30)]);
        let txs = simplify_debts(&map);

        assert_eq!(
            txs,
            vec![Transaction {
                from: MemberId::from("a"),
                to: MemberId::from("c"),
                amount: Money::from_major(30),
            }]
        );
    }

    #[test]
    fn unbalanced_map_leaves_surplus_unmatched() {
        let map = balances(&[("u1", 100), ("u2", -40)]);
        let txs = simplify_debts(&map);

        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, Money::from_major(40));
    }

    #[test]
    fn wider_tolerance_drops_small_balances() {
        let map: BalanceMap = [
            (MemberId::from("u1"), Money::from_cents(5_004)),
            (MemberId::from("u2"), Money::from_cents(-5_000)),
            (MemberId::from("u3"), Money::from_cents(-4)),
        ]
        .into_iter()
        .collect();

        let config = SimplifierConfig::default().with_tolerance(Money::from_cents(5));
        let txs = simplify_debts_with(&map, &config);
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, Money::from_major(50));

        let strict = simplify_debts_with(&map, &SimplifierConfig::default());
        assert_eq!(strict.len(), 2);
    }

    #[test]
    fn negative_tolerance_is_clamped() {
        let config = SimplifierConfig::default().with_tolerance(Money::from_cents(-3));
        assert_eq!(config.tolerance, Money::ZERO);
    }

    #[test]
    fn settling_with_the_suggestions_is_final() {
        let map = balances(&[("u1", 50), ("u2", 70), ("u3", 30), ("u4", -150)]);
        let txs = simplify_debts(&map);
        let after = settle(&map, &txs);

        assert!(after.is_settled(Money::ZERO));
        assert!(simplify_debts(&after).is_empty());
    }

    /// Balanced map: `amounts` for m0..mk, plus a last member absorbing the sum.
    fn balanced_map(amounts: &[i64]) -> BalanceMap {
        let sum: i64 = amounts.iter().sum();
        amounts
            .iter()
            .copied()
            .chain(std::iter::once(-sum))
            .enumerate()
            .map(|(i, cents)| (MemberId::from(format!("m{i}").as_str()), Money::from_cents(cents)))
            .collect()
    }

    fn unsettled_count(map: &BalanceMap, tolerance: Money) -> usize {
        map.iter().filter(|(_, b)| !b.is_within(tolerance)).count()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: at most n - 1 payments, each positive and never to oneself.
        #[test]
        fn transaction_shape(amounts in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..12)) {
            let map = balanced_map(&amounts);
            let txs = simplify_debts(&map);

            let n = unsettled_count(&map, Money::CENT);
            prop_assert!(txs.len() <= n.saturating_sub(1));
            for t in &txs {
                prop_assert!(t.amount > Money::CENT);
                prop_assert_ne!(&t.from, &t.to);
                prop_assert!(map.get(&t.from).is_negative());
                prop_assert!(map.get(&t.to).is_positive());
            }
        }

        /// Property: the payments cover what creditors are owed, up to one
        /// tolerance unit per member.
        #[test]
        fn payments_cover_creditors(amounts in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..12)) {
            let map = balanced_map(&amounts);
            let paid = total(&simplify_debts(&map));
            let owed = map.total_owed();

            prop_assert!(paid <= owed);
            prop_assert!((owed - paid).cents() <= map.len() as i64);
        }

        /// Property: with whole-unit balances nothing falls inside the tolerance
        /// band, so payments match the creditors' total exactly.
        #[test]
        fn payments_match_whole_unit_balances(amounts in prop::collection::vec(-10_000i64..10_000i64, 0..12)) {
            let cents: Vec<i64> = amounts.iter().map(|a| a * 100).collect();
            let map = balanced_map(&cents);
            let txs = simplify_debts(&map);

            prop_assert_eq!(total(&txs), map.total_owed());
            prop_assert!(settle(&map, &txs).is_settled(Money::ZERO));
        }

        /// Property: one pass settles everything; a second pass finds nothing.
        #[test]
        fn simplification_is_idempotent(amounts in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..12)) {
            let map = balanced_map(&amounts);
            let txs = simplify_debts(&map);
            let after = settle(&map, &txs);

            prop_assert!(simplify_debts(&after).is_empty());
        }
    }
}
