// src/cli.rs
use anyhow::Result;
use clap::Command;

use crate::{commands, core::matrix::Evaluation};

fn build_cli() -> Command {
    Command::new("eval-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Runs a scalability evaluation of the external benchmark driver across a \
             matrix of database implementations and validator counts, then renders a \
             comparative report over the collected measurements.",
        )
}

/// Parses the command line and runs the evaluation. The matrix, scenario,
/// and external command lines are source-time constants: the runner accepts
/// no flags beyond the conventional `--help` and `--version`, and any other
/// argument is rejected.
pub async fn run() -> Result<()> {
    let _matches = build_cli().get_matches();

    let eval = Evaluation::default();
    commands::eval::execute(&eval).await?;
    Ok(())
}
