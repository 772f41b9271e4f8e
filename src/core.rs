//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the Evaluation Runner,
//! including the configuration matrix, run records, output scraping, and
//! the build/run/diff execution steps.
//!
//! 此模块包含评估运行器的核心功能，
//! 包括配置矩阵、运行记录、输出提取以及构建/运行/对比执行步骤。

pub mod execution;
pub mod matrix;
pub mod models;
pub mod scrape;

// Re-exports
pub use matrix::{Configuration, Evaluation};
pub use models::{ResultLog, RunRecord};
pub use scrape::extract_result_path;
