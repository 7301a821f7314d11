// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Source;

#[test]
fn test_file_source_label() {
    let source = Source::file(".env");
    assert_eq!(source.as_str(), ".env file");
    assert_eq!(source.display_name(), ".env file");
}

#[test]
fn test_parse_round_trips_known_names() {
    for source in [
        Source::General,
        Source::Account,
        Source::Addons,
        Source::Ui,
        Source::ConfigFile,
        Source::Internal,
        Source::Process,
    ] {
        assert_eq!(Source::parse(source.as_str()), source);
    }
    assert_eq!(
        Source::parse(".env.local file"),
        Source::File(".env.local file".to_string())
    );
}

#[test]
fn test_display_names() {
    let names: Vec<_> = [Source::Account, Source::Ui, Source::Addons, Source::Process]
        .iter()
        .map(|s| s.display_name().to_string())
        .collect();
    insta::assert_snapshot!(names.join(" | "), @"shared | project settings | addon | process");
}

#[test]
fn test_quiet_sources() {
    assert!(Source::General.is_quiet());
    assert!(Source::Internal.is_quiet());
    assert!(!Source::Ui.is_quiet());
    assert!(!Source::file(".env").is_quiet());
}

#[test]
fn test_serializes_as_identifier() {
    let json = serde_json::to_string(&vec![Source::Ui, Source::ConfigFile]).unwrap();
    assert_eq!(json, r#"["ui","configFile"]"#);
}
