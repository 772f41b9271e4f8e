// src/commands/eval.rs

use anyhow::Result;
use colored::*;

use crate::{
    core::{
        execution::{build_driver, run_configuration, run_diff},
        matrix::Evaluation,
        models::{ResultLog, RunRecord},
    },
    reporting::console::print_summary,
};

/// Executes the whole evaluation: build, the sequential configuration matrix,
/// and the final diff report. Returns the collected run records.
///
/// When the build fails, a diagnostic is printed and the empty record list is
/// returned without error: the process exits with the success code and no run
/// or diff command is ever invoked. A run that fails internally or never
/// reports an export line does not stop the matrix; its (possibly empty)
/// result path is recorded as-is and forwarded to the diff step.
pub async fn execute(eval: &Evaluation) -> Result<Vec<RunRecord>> {
    // Step 1 - build the driver, failing fast before any configuration runs.
    println!("Building ... ");
    if !build_driver(eval).await? {
        println!("{}", "Build failed, aborting.".red());
        return Ok(Vec::new());
    }
    println!("{}", "OK".green());

    // Step 2 - run the driver under each configuration, strictly one after
    // the other, echoing the accumulated summary after every run.
    let mut log = ResultLog::new();
    let mut measurements = Vec::new();
    for config in eval.configurations() {
        let result_path = run_configuration(eval, &config).await?;
        measurements.push(result_path.clone());
        log.add(RunRecord {
            scenario: eval.scenario.clone(),
            db_impl: config.db_impl.clone(),
            num_validators: config.num_validators,
            result_path,
        });
        print_summary(&log);
    }

    // Step 3 - render a report comparing the collected measurements.
    run_diff(eval, &measurements).await?;

    Ok(log.into_records())
}
