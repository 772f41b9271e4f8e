//! # Console Reporting Module / 控制台报告模块
//!
//! Formats and prints the per-line prefix applied to streamed driver output
//! and the cumulative result summary. Streamed lines are written and flushed
//! immediately so the driver's progress is visible while it runs, not only
//! at process exit.
//!
//! 格式化并打印应用于驱动输出流的逐行前缀以及累计结果摘要。
//! 流式行会被立即写入并刷新，使驱动程序的进度在运行期间可见，
//! 而不是仅在进程退出时可见。

use chrono::{DateTime, Local};
use std::io::Write;
use std::time::Duration;

use crate::core::matrix::Configuration;
use crate::core::models::ResultLog;

/// Formats an elapsed wall-clock duration as `H:MM:SS` with the hour field
/// padded to two characters.
///
/// 将已用的挂钟时间格式化为 `H:MM:SS`，小时字段填充到两个字符。
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:2}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Builds the prefixed console line for one line of driver output:
/// `<timestamp> | <elapsed> | <scenario> | <db-impl> | <validator-count> | <line>`.
///
/// 为一行驱动输出构建带前缀的控制台行：
/// `<时间戳> | <已用时间> | <场景> | <数据库实现> | <验证者数量> | <原始行>`。
pub fn format_stream_line(
    now: DateTime<Local>,
    elapsed: Duration,
    scenario: &str,
    config: &Configuration,
    line: &str,
) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        format_elapsed(elapsed),
        scenario,
        config.db_impl,
        config.num_validators,
        line
    )
}

/// Prints one prefixed driver output line and flushes stdout so the line is
/// visible immediately.
///
/// 打印一条带前缀的驱动输出行并刷新 stdout，使该行立即可见。
pub fn echo_stream_line(elapsed: Duration, scenario: &str, config: &Configuration, line: &str) {
    let mut stdout = std::io::stdout();
    // A broken console is not worth aborting the evaluation over.
    // 控制台故障不值得中止评估。
    let _ = writeln!(
        stdout,
        "{}",
        format_stream_line(Local::now(), elapsed, scenario, config, line)
    );
    let _ = stdout.flush();
}

/// Prints the cumulative run summary: the header plus every record collected
/// so far, in insertion order.
///
/// 打印累计运行摘要：表头以及到目前为止收集的所有记录，按插入顺序排列。
pub fn print_summary(log: &ResultLog) {
    println!("{}", log.render());
}
