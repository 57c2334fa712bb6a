use std::io::Read;

use anyhow::Context;
use clap::Parser;

use splitledger_cli::Cli;

fn main() -> anyhow::Result<()> {
    splitledger_observability::init();

    let cli = Cli::parse();
    let config = cli.config();
    let input = read_input(cli.command.input())?;

    tracing::debug!(
        command = cli.command.name(),
        input = cli.command.input(),
        tolerance_cents = cli.tolerance_cents,
        "running command"
    );

    let output = splitledger_cli::run(&cli.command, &input, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}
