//! # Reporting Module Unit Tests / Reporting 模块单元测试
//!
//! Tests for elapsed-time formatting and the prefixed stream-line layout.
//!
//! 已用时间格式化与带前缀流式行布局的测试。

use chrono::{Local, TimeZone};
use std::time::Duration;

use eval_runner::matrix::Configuration;
use eval_runner::reporting::console::{format_elapsed, format_stream_line};

#[test]
fn test_format_elapsed_at_zero() {
    assert_eq!(format_elapsed(Duration::from_secs(0)), " 0:00:00");
}

#[test]
fn test_format_elapsed_below_one_minute() {
    assert_eq!(format_elapsed(Duration::from_secs(59)), " 0:00:59");
}

#[test]
fn test_format_elapsed_rolls_over_minutes_and_hours() {
    assert_eq!(format_elapsed(Duration::from_secs(60)), " 0:01:00");
    assert_eq!(format_elapsed(Duration::from_secs(3600)), " 1:00:00");
    assert_eq!(format_elapsed(Duration::from_secs(3661)), " 1:01:01");
    assert_eq!(format_elapsed(Duration::from_secs(7322)), " 2:02:02");
}

#[test]
fn test_format_elapsed_widens_past_nine_hours() {
    assert_eq!(format_elapsed(Duration::from_secs(36000)), "10:00:00");
}

#[test]
fn test_format_elapsed_truncates_subsecond_precision() {
    assert_eq!(format_elapsed(Duration::from_millis(2999)), " 0:00:02");
}

#[test]
fn test_stream_line_layout() {
    let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap();
    let config = Configuration {
        db_impl: "go-file".to_string(),
        num_validators: 4,
    };
    let line = format_stream_line(
        now,
        Duration::from_secs(125),
        "./scenarios/eval/scalability.yml",
        &config,
        "progress: block 42",
    );
    assert_eq!(
        line,
        "2024-05-01 12:30:15.000 |  0:02:05 | ./scenarios/eval/scalability.yml | go-file | 4 | progress: block 42"
    );
}

#[test]
fn test_stream_line_keeps_raw_line_verbatim() {
    let now = Local.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let config = Configuration {
        db_impl: "geth".to_string(),
        num_validators: 1,
    };
    let raw = "Raw data was exported to /tmp/out_1.csv";
    let line = format_stream_line(now, Duration::from_secs(1), "s.yml", &config, raw);
    assert!(line.ends_with(&format!("| {}", raw)));
    assert_eq!(line.split(" | ").count(), 6);
}

#[test]
fn test_stream_line_with_empty_raw_line() {
    let now = Local.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let config = Configuration {
        db_impl: "geth".to_string(),
        num_validators: 1,
    };
    let line = format_stream_line(now, Duration::from_secs(0), "s.yml", &config, "");
    assert!(line.ends_with("| 1 | "));
}
