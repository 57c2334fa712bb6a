use serde::{Deserialize, Serialize};
use tracing::debug;

use splitledger_core::{LedgerError, LedgerResult, MemberId, Money, Split};

use crate::policy::SplitPolicy;

/// Allowed distance of the percentage sum from 100.
const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Allowed distance of the exact amounts' sum from the total.
const EXACT_TOLERANCE: Money = Money::CENT;

/// Caller-supplied parameter for one member of a non-equal split.
///
/// `percentage` is read by [`SplitPolicy::Percentage`], `amount` by
/// [`SplitPolicy::Exact`]. A missing value counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSplit {
    pub member: MemberId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl CustomSplit {
    pub fn percentage(member: impl Into<MemberId>, percentage: f64) -> Self {
        Self {
            member: member.into(),
            percentage: Some(percentage),
            amount: None,
        }
    }

    pub fn amount(member: impl Into<MemberId>, amount: Money) -> Self {
        Self {
            member: member.into(),
            percentage: None,
            amount: Some(amount),
        }
    }
}

/// Distribute `total` across members according to `policy`.
///
/// `participants` drives the equal policy and must be non-empty for every
/// policy; `custom` drives the percentage and exact policies. The output is
/// deterministic for identical ordered input.
pub fn calculate_splits(
    total: Money,
    participants: &[MemberId],
    policy: SplitPolicy,
    custom: &[CustomSplit],
) -> LedgerResult<Vec<Split>> {
    if participants.is_empty() {
        return Err(LedgerError::invalid_input("no participants"));
    }
    if !total.is_positive() {
        return Err(LedgerError::invalid_input("non-positive amount"));
    }

    let splits = match policy {
        SplitPolicy::Equal => split_equal(total, participants),
        SplitPolicy::Percentage => split_percentage(total, custom)?,
        SplitPolicy::Exact => split_exact(total, custom)?,
    };

    debug!(
        %policy,
        %total,
        participants = participants.len(),
        splits = splits.len(),
        "calculated splits"
    );

    Ok(splits)
}

fn split_equal(total: Money, participants: &[MemberId]) -> Vec<Split> {
    // Both operands are positive, so integer division is the floor.
    let n = participants.len() as i64;
    let base = Money::from_cents(total.cents() / n);
    let remainder = total - Money::from_cents(base.cents() * n);

    participants
        .iter()
        .enumerate()
        .map(|(idx, member)| {
            let amount = if idx == 0 { base + remainder } else { base };
            Split::new(member.clone(), amount)
        })
        .collect()
}

fn split_percentage(total: Money, custom: &[CustomSplit]) -> LedgerResult<Vec<Split>> {
    let mut sum = 0.0_f64;
    for input in custom {
        let pct = input.percentage.unwrap_or(0.0);
        if !pct.is_finite() || pct < 0.0 {
            return Err(LedgerError::invalid_input(
                "percentages must be non-negative numbers",
            ));
        }
        sum += pct;
    }
    if (sum - 100.0).abs() > PERCENTAGE_TOLERANCE {
        return Err(LedgerError::invalid_input("percentages must sum to 100"));
    }

    // total × percentage in major units, rounded once, is already a cent count:
    // the trailing `/ 100` back to major units is the cents representation.
    let total_major = total.to_major_f64();
    Ok(custom
        .iter()
        .map(|input| {
            let pct = input.percentage.unwrap_or(0.0);
            let cents = (total_major * pct).round() as i64;
            Split::new(input.member.clone(), Money::from_cents(cents))
        })
        .collect())
}

fn split_exact(total: Money, custom: &[CustomSplit]) -> LedgerResult<Vec<Split>> {
    let splits: Vec<Split> = custom
        .iter()
        .map(|input| Split::new(input.member.clone(), input.amount.unwrap_or(Money::ZERO)))
        .collect();

    if splits.iter().any(|s| s.amount.is_negative()) {
        return Err(LedgerError::invalid_input(
            "split amounts must be non-negative",
        ));
    }

    let sum = splits
        .iter()
        .try_fold(Money::ZERO, |acc, s| acc.checked_add(s.amount))
        .ok_or_else(|| LedgerError::invalid_input("split amounts are too large"))?;
    if !(sum - total).is_within(EXACT_TOLERANCE) {
        return Err(LedgerError::invalid_input(
            "split amounts must equal total amount",
        ));
    }

    Ok(splits)
}
