//! # Configuration Matrix Module / 配置矩阵模块
//!
//! This module defines the evaluation plan: the scenario, the matrix of
//! database implementations and validator counts, and the external command
//! lines used to build and drive the benchmark tool.
//!
//! 此模块定义评估计划：场景、数据库实现与验证者数量的矩阵，
//! 以及用于构建和驱动基准工具的外部命令行。

/// The scenario to be used for the evaluation.
/// 用于评估的场景。
pub const SCENARIO: &str = "./scenarios/eval/scalability.yml";

/// The DB implementations the driver should be evaluated with.
/// 驱动程序应评估的数据库实现。
pub const DB_IMPLS: &[&str] = &["go-file"];

/// The numbers of validators to be evaluated.
/// 要评估的验证者数量。
pub const NUM_VALIDATORS: &[u32] = &[1, 2, 4, 6, 8];

/// The command used to build the external driver before any run is attempted.
/// 在尝试任何运行之前用于构建外部驱动程序的命令。
pub const BUILD_CMD: &str = "make -j";

/// The command prefix for the external driver; `run` and `diff` subcommands
/// are appended to it.
/// 外部驱动程序的命令前缀；`run` 和 `diff` 子命令会附加在其后。
pub const DRIVER_CMD: &str = "go run ./driver/norma";

/// A single cell of the evaluation matrix: one database implementation
/// paired with one validator count. Each configuration corresponds to
/// exactly one `run` invocation of the external driver.
///
/// 评估矩阵的单个单元格：一个数据库实现与一个验证者数量的组合。
/// 每个配置对应外部驱动程序的一次 `run` 调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The database implementation identifier passed through to the driver.
    /// 传递给驱动程序的数据库实现标识符。
    pub db_impl: String,
    /// The number of validators for this run. Always positive.
    /// 此次运行的验证者数量。始终为正。
    pub num_validators: u32,
}

impl Configuration {
    /// Derives the label embedded into the driver invocation, `{db}_{count}v`.
    /// 派生嵌入驱动程序调用中的标签，`{db}_{count}v`。
    pub fn label(&self) -> String {
        format!("{}_{}v", self.db_impl, self.num_validators)
    }
}

/// The complete plan for one evaluation: the workload scenario, the ordered
/// configuration matrix, and the external command lines. The plan is
/// immutable for the duration of a run and owned by the caller, which
/// threads it through the whole control flow.
///
/// 一次评估的完整计划：工作负载场景、有序的配置矩阵以及外部命令行。
/// 计划在运行期间不可变，由调用者拥有并贯穿整个控制流。
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Path to the scenario file, passed through unmodified to the driver.
    /// 场景文件的路径，原样传递给驱动程序。
    pub scenario: String,
    /// Database implementations, in declared (outer iteration) order.
    /// 数据库实现，按声明（外层迭代）顺序。
    pub db_impls: Vec<String>,
    /// Validator counts, in declared (inner iteration) order.
    /// 验证者数量，按声明（内层迭代）顺序。
    pub num_validators: Vec<u32>,
    /// Command line used to build the driver.
    /// 用于构建驱动程序的命令行。
    pub build_cmd: String,
    /// Command line prefix used to invoke the driver's subcommands.
    /// 用于调用驱动程序子命令的命令行前缀。
    pub driver_cmd: String,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            scenario: SCENARIO.to_string(),
            db_impls: DB_IMPLS.iter().map(|s| s.to_string()).collect(),
            num_validators: NUM_VALIDATORS.to_vec(),
            build_cmd: BUILD_CMD.to_string(),
            driver_cmd: DRIVER_CMD.to_string(),
        }
    }
}

impl Evaluation {
    /// Enumerates the configuration matrix in row-major order: every database
    /// implementation in declared order, and within each, every validator
    /// count in declared order. The result always holds exactly
    /// `db_impls.len() * num_validators.len()` entries, with no shuffling
    /// and no deduplication.
    ///
    /// 按行主序枚举配置矩阵：每个数据库实现按声明顺序，
    /// 其中每个验证者数量也按声明顺序。结果始终恰好包含
    /// `db_impls.len() * num_validators.len()` 个条目，不打乱也不去重。
    pub fn configurations(&self) -> Vec<Configuration> {
        let mut configurations = Vec::with_capacity(self.db_impls.len() * self.num_validators.len());
        for db_impl in &self.db_impls {
            for &num_validators in &self.num_validators {
                configurations.push(Configuration {
                    db_impl: db_impl.clone(),
                    num_validators,
                });
            }
        }
        configurations
    }
}
