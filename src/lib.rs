//! # Evaluation Runner Library / 评估运行器库
//!
//! This library provides the core functionality for the Evaluation Runner,
//! a sequential orchestrator that drives an external benchmark driver across
//! a matrix of database implementations and validator counts.
//!
//! 此库为评估运行器提供核心功能，
//! 这是一个顺序编排器，驱动外部基准测试驱动程序
//! 在数据库实现与验证者数量的矩阵上运行。
//!
//! ## Modules / 模块
//!
//! - `core` - Evaluation matrix, run records, output scraping, and execution
//! - `infra` - Infrastructure services like process spawning and command parsing
//! - `reporting` - Console output formatting for streamed driver logs and summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 评估矩阵、运行记录、输出提取和执行
//! - `infra` - 基础设施服务，如进程派生和命令解析
//! - `reporting` - 驱动日志流和摘要的控制台输出格式化
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::execution;
pub use self::core::matrix;
pub use self::core::models;
