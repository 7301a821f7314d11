// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use std::path::Path;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_snapshot!(filters.join(","), @"off,error,warn,info,debug,trace");
}

#[test]
fn test_console_directive_targets_crate() {
    insta::assert_snapshot!(LogLevel::DEBUG.crate_directive(), @"envr_rs=debug");
    insta::assert_snapshot!(LogLevel::SILENT.crate_directive(), @"envr_rs=off");
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(ok, LogLevel::DEBUG);
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_with_file() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .maybe_with_log_file(Some("logs/envr.log".into()))
        .build();
    assert_eq!(config.console_level(), LogLevel::SILENT);
    assert_eq!(config.log_file(), Some(Path::new("logs/envr.log")));
}
