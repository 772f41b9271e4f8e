use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// Runs the binary in an empty scratch directory, where the source-time
/// build command (`make -j`) has nothing to build. The runner must report
/// the build failure, skip every run and the diff step, and still exit with
/// the success code.
///
/// 在空的临时目录中运行二进制文件，源码期构建命令（`make -j`）在那里
/// 无可构建。运行器必须报告构建失败，跳过所有运行和 diff 步骤，
/// 并仍以成功代码退出。
#[test]
fn test_build_failure_aborts_with_success_exit_code() {
    let scratch = tempfile::tempdir().expect("failed to create temp dir");

    let mut cmd = Command::cargo_bin("eval-runner").unwrap();
    cmd.current_dir(scratch.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Building"))
        .stdout(predicate::str::contains("Build failed, aborting."))
        .stdout(predicate::str::contains("Running").not());
}

/// The matrix is a source-time constant; any argument beyond the standard
/// `--help`/`--version` must be rejected.
///
/// 矩阵是源码期常量；除标准的 `--help`/`--version` 之外的任何参数
/// 都必须被拒绝。
#[test]
fn test_unexpected_arguments_are_rejected() {
    let mut cmd = Command::cargo_bin("eval-runner").unwrap();
    cmd.arg("--num-validators").arg("3");
    cmd.assert().failure();
}

#[test]
fn test_version_flag_reports_crate_version() {
    let mut cmd = Command::cargo_bin("eval-runner").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_describes_the_runner() {
    let mut cmd = Command::cargo_bin("eval-runner").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scalability evaluation"));
}
