use tracing::debug;

use splitledger_core::LedgerResult;

use crate::balance_map::BalanceMap;
use crate::records::{Expense, Settlement};

/// Fold expenses, then settlements, into per-member net balances.
///
/// - Each expense credits its payer with the sum of its splits and debits every
///   split member by their share (a payer who is also a split member ends up
///   credited only with what the others owe).
/// - Each settlement raises the payer's balance and lowers the payee's.
///
/// Every member mentioned anywhere gets an entry, even when it nets to zero.
/// Nothing is validated: unknown members and inconsistent amounts flow through.
/// The only error is [`LedgerError::InvalidAmount`] when a total or balance
/// would leave `±`[`Money::MAX`].
///
/// [`LedgerError::InvalidAmount`]: splitledger_core::LedgerError::InvalidAmount
/// [`Money::MAX`]: splitledger_core::Money::MAX
pub fn aggregate_balances(
    expenses: &[Expense],
    settlements: &[Settlement],
) -> LedgerResult<BalanceMap> {
    let mut balances = BalanceMap::new();

    for expense in expenses {
        balances.credit(&expense.payer, expense.total()?)?;
        for split in &expense.splits {
            balances.debit(&split.member, split.amount)?;
        }
    }

    for settlement in settlements {
        balances.apply_settlement(settlement)?;
    }

    debug!(
        expenses = expenses.len(),
        settlements = settlements.len(),
        members = balances.len(),
        "aggregated balances"
    );

    Ok(balances)
}
