use std::fmt;

/// The header line printed ahead of the collected run records.
/// 打印在已收集运行记录之前的表头行。
pub const SUMMARY_HEADER: &str = "scenario, db, numValidators, measurements";

/// The outcome of one executed configuration: which run it was and where the
/// driver reported its exported measurement file. Created once per run and
/// never mutated afterwards. An empty `result_path` means the driver's output
/// never contained the export line; it is recorded as-is.
///
/// 一次已执行配置的结果：运行的配置以及驱动程序报告的测量文件导出位置。
/// 每次运行创建一次，之后不再修改。空的 `result_path` 表示驱动程序的
/// 输出从未包含导出行；它会原样记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// The scenario file the run was executed with.
    /// 此次运行所使用的场景文件。
    pub scenario: String,
    /// The database implementation of this run.
    /// 此次运行的数据库实现。
    pub db_impl: String,
    /// The number of validators of this run.
    /// 此次运行的验证者数量。
    pub num_validators: u32,
    /// The measurement file path scraped from the driver's output, or empty.
    /// 从驱动程序输出中提取的测量文件路径，或为空。
    pub result_path: String,
}

impl fmt::Display for RunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.scenario, self.db_impl, self.num_validators, self.result_path
        )
    }
}

/// An append-only, insertion-ordered collection of run records. After every
/// append the whole accumulated summary is reprinted to the console, so the
/// most recent console output always shows every record collected so far.
/// No deduplication and no validation of the recorded path.
///
/// 只追加、按插入顺序排列的运行记录集合。每次追加后，整个累计摘要都会
/// 重新打印到控制台，因此最新的控制台输出始终显示到目前为止收集的所有
/// 记录。不去重，也不校验记录的路径。
#[derive(Debug, Clone, Default)]
pub struct ResultLog {
    records: Vec<RunRecord>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record. The orchestrator reprints the full accumulated
    /// summary after every append.
    /// 追加一条记录。编排器在每次追加后重新打印完整的累计摘要。
    pub fn add(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Renders the summary: the header followed by every record, one line
    /// each, in insertion order. After N appends this is exactly N+1 lines.
    ///
    /// 渲染摘要：表头后跟每条记录，每条一行，按插入顺序排列。
    /// 追加 N 次后恰好为 N+1 行。
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.records.len() + 1);
        lines.push(SUMMARY_HEADER.to_string());
        for record in &self.records {
            lines.push(record.to_string());
        }
        lines.join("\n")
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the log, yielding the records in insertion order.
    /// 消耗日志，按插入顺序返回记录。
    pub fn into_records(self) -> Vec<RunRecord> {
        self.records
    }
}
