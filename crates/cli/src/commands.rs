use anyhow::Context;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::info;

use splitledger_balances::{BalanceMap, aggregate_balances};
use splitledger_settlement::{Transaction, simplify_debts_with};
use splitledger_splits::SplitPlan;

use crate::config::{CliConfig, Command};
use crate::input::{Ledger, SplitRequest};

/// Output of `splitledger settle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettleReport {
    pub balances: BalanceMap,
    pub transactions: Vec<Transaction>,
}

/// Run `command` over the JSON document `input`.
pub fn run(command: &Command, input: &str, config: &CliConfig) -> anyhow::Result<JsonValue> {
    let output = match command {
        Command::Split(_) => {
            let request: SplitRequest =
                serde_json::from_str(input).context("failed to parse split request")?;
            let plan = SplitPlan::from_parts(&request.policy, request.participants, request.custom)?;
            let splits = plan.calculate(request.total)?;
            info!(policy = %plan.policy(), splits = splits.len(), "split calculated");
            serde_json::to_value(splits)?
        }
        Command::Balances(_) => {
            let ledger = parse_ledger(input)?;
            let balances = aggregate_balances(&ledger.expenses, &ledger.settlements)?;
            info!(members = balances.len(), "balances aggregated");
            serde_json::to_value(balances)?
        }
        Command::Settle(_) => {
            let ledger = parse_ledger(input)?;
            let balances = aggregate_balances(&ledger.expenses, &ledger.settlements)?;
            let transactions = simplify_debts_with(&balances, &config.simplifier);
            info!(
                members = balances.len(),
                transactions = transactions.len(),
                "settlement suggested"
            );
            serde_json::to_value(SettleReport {
                balances,
                transactions,
            })?
        }
    };

    Ok(output)
}

fn parse_ledger(input: &str) -> anyhow::Result<Ledger> {
    serde_json::from_str(input).context("failed to parse ledger")
}
