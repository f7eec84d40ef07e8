#![allow(clippy::print_stdout)]

use clap::{CommandFactory, Parser};
use primer::features::digits;
use primer_logger::{LevelFilter, Logger};
use std::process::ExitCode;
use tracing::error;

/// Prints a whole number as big ASCII-art digits.
#[derive(Debug, Parser)]
#[command(name = "bigdigits", version, about)]
struct Cli {
    /// Digits `0`-`9` only; no sign, separators or decimal point.
    #[arg(value_name = "whole-number", allow_hyphen_values = true)]
    number: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(number) = cli.number else {
        println!("usage: {} <whole-number>", Cli::command().get_name());
        return Ok(ExitCode::FAILURE);
    };

    // stdout carries the rows only.
    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(LevelFilter::WARN)
        .stderr(true)
        .init()?;

    match digits::render(&number) {
        Ok(rows) => {
            for row in rows {
                println!("{row}");
            }
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            error!(%err, "Cannot render number");
            Ok(ExitCode::FAILURE)
        },
    }
}
