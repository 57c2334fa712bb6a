//! `splitledger` command-line driver.
//!
//! Reads a JSON document, runs one engine operation over it and returns the
//! result as JSON. Stands in for the UI/persistence layer that normally feeds
//! the engine.

pub mod commands;
pub mod config;
pub mod input;

pub use commands::{SettleReport, run};
pub use config::{Cli, CliConfig, Command, InputArgs};
