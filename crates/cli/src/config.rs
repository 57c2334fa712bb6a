//! Command-line arguments and the runtime configuration derived from them.

use clap::{Args, Parser, Subcommand};

use splitledger_core::Money;
use splitledger_settlement::SimplifierConfig;

/// Environment fallback for `--tolerance-cents`.
pub const TOLERANCE_ENV: &str = "SPLITLEDGER_SETTLE_TOLERANCE_CENTS";

#[derive(Parser, Debug)]
#[command(name = "splitledger", version)]
#[command(about = "Split expenses, aggregate balances and suggest settlements (JSON in, JSON out)")]
pub struct Cli {
    /// Balances and payments at or below this many cents count as settled.
    #[arg(
        long,
        env = TOLERANCE_ENV,
        default_value_t = 1,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub tolerance_cents: i64,

    #[command(subcommand)]
    pub command: Command,
}

/// Engine operation selected on the command line.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Split request → splits
    Split(InputArgs),
    /// Ledger → balance per member
    Balances(InputArgs),
    /// Ledger → balances plus suggested payments
    Settle(InputArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    /// JSON document to read, `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: String,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Split(_) => "split",
            Command::Balances(_) => "balances",
            Command::Settle(_) => "settle",
        }
    }

    pub fn input(&self) -> &str {
        match self {
            Command::Split(args) | Command::Balances(args) | Command::Settle(args) => &args.input,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub simplifier: SimplifierConfig,
}

impl Cli {
    pub fn config(&self) -> CliConfig {
        CliConfig {
            simplifier: SimplifierConfig::default()
                .with_tolerance(Money::from_cents(self.tolerance_cents)),
        }
    }
}
