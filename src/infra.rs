//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the Evaluation Runner,
//! including command-line parsing and scoped process spawning with a merged
//! output stream.
//!
//! 此模块为评估运行器提供基础设施服务，
//! 包括命令行解析以及带合并输出流的受限进程派生。

pub mod command;

// Re-exports
pub use command::{ScopedProcess, run_to_completion, split_command};
