// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{DEFAULT_ENV_FILES, load_env_files, parse_env_file};
use crate::error::{DotEnvError, EnvrError};
use crate::resolve::{EnvMap, overlay_env_files};

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn names(files: &[crate::resolve::DotEnvFile]) -> Vec<&str> {
    files.iter().map(|f| f.file_name.as_str()).collect()
}

#[test]
fn test_no_env_files() {
    let dir = project(&[]);
    let files = load_env_files(dir.path(), &[]).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_default_files_in_application_order() {
    let dir = project(&[
        (".env.development.local", "ONE=FROM_LOCAL_DEVELOPMENT_ENV\n"),
        (".env", "ONE=FROM_ENV\nTWO=FROM_ENV\n"),
        (".env.local", "ONE=FROM_LOCAL_ENV\n"),
    ]);

    let files = load_env_files(dir.path(), &[]).unwrap();
    assert_eq!(names(&files), vec![".env", ".env.local", ".env.development.local"]);
    assert_eq!(files[0].entries["TWO"], "FROM_ENV");

    let env = overlay_env_files(EnvMap::new(), &files);
    assert_eq!(env.get("ONE").unwrap().value, "FROM_LOCAL_DEVELOPMENT_ENV");
    assert_eq!(env.get("TWO").unwrap().value, "FROM_ENV");
}

#[test]
fn test_default_file_list() {
    assert_eq!(DEFAULT_ENV_FILES[0], ".env");
    assert_eq!(DEFAULT_ENV_FILES[3], ".env.development.local");
}

#[test]
fn test_empty_env_file() {
    let dir = project(&[(".env", "")]);
    let files = load_env_files(dir.path(), &[]).unwrap();
    assert_eq!(names(&files), vec![".env"]);
    assert!(files[0].entries.is_empty());
}

#[test]
fn test_explicit_files_first_listed_wins() {
    let dir = project(&[
        (".env.production", "TEST=FROM_PRODUCTION_FILE\n"),
        (".env.development", "TEST2=FROM_DEVELOPMENT_FILE\n"),
        (".env", "TEST=FROM_DEFAULT_FILE\nTEST2=FROM_DEFAULT_FILE\n"),
    ]);
    let explicit = [
        PathBuf::from(".env.production"),
        PathBuf::from(".env.development"),
        PathBuf::from(".env"),
    ];

    let files = load_env_files(dir.path(), &explicit).unwrap();
    assert_eq!(names(&files), vec![".env", ".env.development", ".env.production"]);

    let env = overlay_env_files(EnvMap::new(), &files);
    assert_eq!(env.get("TEST").unwrap().value, "FROM_PRODUCTION_FILE");
    assert_eq!(env.get("TEST2").unwrap().value, "FROM_DEVELOPMENT_FILE");
    let sources: Vec<_> = env
        .get("TEST")
        .unwrap()
        .sources
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(sources, vec![".env.production file", ".env file"]);
}

#[test]
fn test_explicit_missing_file_fails() {
    let dir = project(&[]);
    let err = load_env_files(dir.path(), &[PathBuf::from(".env.missing")]).unwrap_err();

    let EnvrError::DotEnv(inner) = &err else {
        panic!("expected env file error, got {err:?}");
    };
    assert!(matches!(**inner, DotEnvError::NotFound { .. }));
    assert!(err.to_string().contains(".env.missing"));
}

#[test]
fn test_parse_quotes_and_comments() {
    let dir = project(&[(
        ".env",
        "# comment\nPLAIN=value\nQUOTED=\"hello world\"\nexport EXPORTED=yes\n",
    )]);

    let entries = parse_env_file(&dir.path().join(".env")).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries["PLAIN"], "value");
    assert_eq!(entries["QUOTED"], "hello world");
    assert_eq!(entries["EXPORTED"], "yes");
}

#[test]
fn test_parse_error() {
    let dir = project(&[(".env", "NOT A VALID LINE\n")]);
    let err = load_env_files(dir.path(), &[]).unwrap_err();
    assert!(err.to_string().contains("failed to parse env file"));
}
