//! # Matrix Module Unit Tests / Matrix 模块单元测试
//!
//! Tests for the configuration matrix: enumeration order, cardinality, and
//! label derivation.
//!
//! 配置矩阵的测试：枚举顺序、数量和标签派生。

use eval_runner::matrix::{Configuration, Evaluation};

fn evaluation_with(db_impls: &[&str], num_validators: &[u32]) -> Evaluation {
    Evaluation {
        db_impls: db_impls.iter().map(|s| s.to_string()).collect(),
        num_validators: num_validators.to_vec(),
        ..Evaluation::default()
    }
}

#[test]
fn test_configurations_cover_full_cartesian_product() {
    let eval = evaluation_with(&["geth", "go-file", "go-memory"], &[1, 2, 4, 6, 8]);
    let configurations = eval.configurations();
    assert_eq!(configurations.len(), 3 * 5);
}

#[test]
fn test_configurations_are_enumerated_in_row_major_order() {
    let eval = evaluation_with(&["geth", "go-file"], &[1, 2]);
    let labels: Vec<String> = eval.configurations().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["geth_1v", "geth_2v", "go-file_1v", "go-file_2v"]);
}

#[test]
fn test_configurations_have_no_repeats() {
    let eval = evaluation_with(&["geth", "go-file"], &[1, 2, 4]);
    let configurations = eval.configurations();
    for (i, a) in configurations.iter().enumerate() {
        for b in configurations.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_configurations_preserve_declared_order_not_sorted_order() {
    // Declared order is authoritative even when it is not ascending.
    // 即使不是升序，声明顺序也具有权威性。
    let eval = evaluation_with(&["zeta", "alpha"], &[8, 1]);
    let labels: Vec<String> = eval.configurations().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["zeta_8v", "zeta_1v", "alpha_8v", "alpha_1v"]);
}

#[test]
fn test_empty_axis_yields_no_configurations() {
    assert!(evaluation_with(&[], &[1, 2]).configurations().is_empty());
    assert!(evaluation_with(&["geth"], &[]).configurations().is_empty());
}

#[test]
fn test_label_embeds_db_and_validator_count() {
    let config = Configuration {
        db_impl: "go-file".to_string(),
        num_validators: 6,
    };
    assert_eq!(config.label(), "go-file_6v");
}

#[test]
fn test_default_evaluation_matches_source_time_constants() {
    let eval = Evaluation::default();
    assert_eq!(eval.scenario, "./scenarios/eval/scalability.yml");
    assert_eq!(eval.db_impls, vec!["go-file"]);
    assert_eq!(eval.num_validators, vec![1, 2, 4, 6, 8]);
    assert_eq!(eval.build_cmd, "make -j");
    assert_eq!(eval.driver_cmd, "go run ./driver/norma");
}
