//! # Reporting Module / 报告模块
//!
//! This module handles console output: the timestamp and elapsed-time
//! prefixing of streamed driver log lines, and the cumulative run summary.
//!
//! 此模块处理控制台输出：为驱动日志流添加时间戳和已用时间前缀，
//! 以及累计运行摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{echo_stream_line, format_elapsed, format_stream_line, print_summary};
