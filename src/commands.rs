//! # Commands Module / 命令模块
//!
//! Top-level commands dispatched from the CLI.
//! 从 CLI 分发的顶层命令。

pub mod eval;
