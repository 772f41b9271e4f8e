//! # Execution Module / 执行模块
//!
//! This module drives the external evaluation tool through its three steps:
//! building the driver, running it once per configuration while streaming and
//! scraping its output, and rendering the final comparative report via its
//! `diff` subcommand.
//!
//! 此模块通过三个步骤驱动外部评估工具：
//! 构建驱动程序，按配置逐个运行并流式处理和提取其输出，
//! 以及通过其 `diff` 子命令渲染最终的对比报告。

use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;
use tokio::process::Command;

use crate::core::matrix::{Configuration, Evaluation};
use crate::core::scrape::extract_result_path;
use crate::infra::command::{ScopedProcess, run_to_completion, split_command};
use crate::reporting::console;

/// Runs the build command with inherited stdio and reports whether it
/// succeeded. A command that cannot even be spawned counts as a failed
/// build rather than an error; either way the caller aborts the evaluation
/// before any configuration is attempted.
///
/// 以继承的 stdio 运行构建命令并报告其是否成功。
/// 无法派生的命令也算作构建失败而非错误；
/// 无论哪种情况，调用者都会在尝试任何配置之前中止评估。
pub async fn build_driver(eval: &Evaluation) -> Result<bool> {
    let (program, args) = split_command(&eval.build_cmd)?;
    let mut cmd = Command::new(program);
    cmd.args(args);

    match run_to_completion(cmd).await {
        Ok(status) => Ok(status.success()),
        Err(e) => {
            eprintln!(
                "{}",
                format!("Failed to start build command '{}': {}", eval.build_cmd, e).red()
            );
            Ok(false)
        }
    }
}

/// Executes one configuration: spawns the driver's `run` subcommand, echoes
/// every merged output line immediately with a timestamp, elapsed-time, and
/// configuration prefix, accumulates the raw output, and returns the
/// measurement file path scraped from it.
///
/// The driver's exit status is deliberately not checked; whatever output the
/// run produced is accepted, and a run that never reports an export line
/// yields the empty string (with a warning on stderr) without aborting the
/// matrix.
///
/// 执行一个配置：派生驱动程序的 `run` 子命令，为每条合并输出行立即加上
/// 时间戳、已用时间和配置前缀并回显，累积原始输出，
/// 并返回从中提取的测量文件路径。
///
/// 刻意不检查驱动程序的退出状态；接受运行产生的任何输出，
/// 从未报告导出行的运行返回空字符串（并在 stderr 上发出警告），
/// 而不会中止矩阵。
pub async fn run_configuration(eval: &Evaluation, config: &Configuration) -> Result<String> {
    println!(
        "{}",
        format!(
            "Running {} with {} and {} validators ..",
            eval.scenario, config.db_impl, config.num_validators
        )
        .blue()
    );

    let command_line = format!(
        "{} run --label {} --num-validators {} --db-impl {} {}",
        eval.driver_cmd,
        config.label(),
        config.num_validators,
        config.db_impl,
        eval.scenario
    );
    println!("Running {}", command_line);

    let (program, args) = split_command(&command_line)?;
    let mut cmd = Command::new(program);
    cmd.args(args);

    let start = Instant::now();
    let mut process = ScopedProcess::spawn(cmd)
        .with_context(|| format!("Failed to start driver run: {}", command_line))?;

    let mut output = String::new();
    while let Some(line) = process.next_line().await {
        console::echo_stream_line(start.elapsed(), &eval.scenario, config, &line);
        output.push_str(&line);
        output.push('\n');
    }

    // Exit status is intentionally ignored; only the output matters here.
    // 刻意忽略退出状态；这里只有输出才重要。
    process
        .wait()
        .await
        .with_context(|| format!("Failed to wait for driver run: {}", command_line))?;

    let result_path = extract_result_path(&output);
    if result_path.is_empty() {
        eprintln!(
            "{}",
            format!(
                "Warning: run {} reported no exported data file",
                config.label()
            )
            .yellow()
        );
    }
    Ok(result_path)
}

/// Invokes the driver's `diff` subcommand over the collected measurement
/// files, in collection order, with its output streamed straight to the
/// console. The path list is space-joined before shell-style splitting, so
/// empty entries collapse exactly as they would under a shell. Nothing is
/// parsed from this step.
///
/// 对收集到的测量文件按收集顺序调用驱动程序的 `diff` 子命令，
/// 其输出直接流向控制台。路径列表在 shell 风格拆分之前以空格连接，
/// 因此空条目会像在 shell 下一样消失。此步骤不解析任何内容。
pub async fn run_diff(eval: &Evaluation, measurements: &[String]) -> Result<()> {
    let command_line = format!("{} diff {}", eval.driver_cmd, measurements.join(" "));
    println!("Running {} ..", command_line);

    let (program, args) = split_command(&command_line)?;
    let mut cmd = Command::new(program);
    cmd.args(args);

    // The diff step is fire-and-forget beyond waiting for completion; the
    // driver prints the report location itself.
    // 除了等待完成外，对比步骤即发即弃；驱动程序自行打印报告位置。
    run_to_completion(cmd)
        .await
        .with_context(|| format!("Failed to run diff command: {}", command_line))?;
    Ok(())
}
