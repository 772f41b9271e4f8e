//! # Output Scraper Module / 输出提取模块
//!
//! The external driver reports the location of its exported measurement file
//! as a plain log line. This module finds that line in the accumulated run
//! output and extracts the path token.
//!
//! 外部驱动程序以纯日志行的形式报告其导出测量文件的位置。
//! 此模块在累计的运行输出中查找该行并提取路径。

use once_cell::sync::Lazy;
use regex::Regex;

/// The line the driver emits once its raw measurement data has been written.
/// 驱动程序在其原始测量数据写入后发出的日志行。
static EXPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Raw data was exported to (.*)").expect("export line pattern is valid")
});

/// Scans the full run output for the export line and returns the reported
/// path, trimmed of surrounding whitespace. When the line occurs more than
/// once the last occurrence wins. When it never occurs the empty string is
/// returned; a missing path is not an error anywhere in the pipeline.
///
/// 在完整的运行输出中扫描导出行并返回报告的路径（去除首尾空白）。
/// 当该行出现多次时，以最后一次出现为准。当从未出现时返回空字符串；
/// 缺失的路径在整个流程中都不是错误。
pub fn extract_result_path(output: &str) -> String {
    EXPORT_LINE
        .captures_iter(output)
        .last()
        .and_then(|captures| captures.get(1))
        .map(|path| path.as_str().trim().to_string())
        .unwrap_or_default()
}
