// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local env file loading.
//!
//! ```text
//! no explicit files:  .env -> .env.development -> .env.local -> .env.development.local
//!                     (missing files skipped, last file wins)
//! explicit files:     [first, second, third]  -> applied third -> second -> first
//!                     (must exist, first listed wins)
//! ```
//!
//! Files are returned in application order, ready for
//! [`overlay_env_files`](crate::resolve::overlay_env_files).

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DotEnvError, EnvrResult};
use crate::resolve::DotEnvFile;

/// Files read when no explicit list is configured, in application order.
pub const DEFAULT_ENV_FILES: [&str; 4] = [
    ".env",
    ".env.development",
    ".env.local",
    ".env.development.local",
];

/// Load env files relative to `project_dir`.
///
/// With an empty `explicit` list, the [`DEFAULT_ENV_FILES`] that exist are
/// loaded. Otherwise every listed file must exist; relative paths are
/// resolved against `project_dir`.
///
/// # Errors
///
/// Returns [`DotEnvError::NotFound`] for a missing explicit file and
/// [`DotEnvError::Parse`] for any file that cannot be read or parsed.
pub fn load_env_files(project_dir: &Path, explicit: &[PathBuf]) -> EnvrResult<Vec<DotEnvFile>> {
    if explicit.is_empty() {
        let mut files = Vec::new();
        for name in DEFAULT_ENV_FILES {
            let path = project_dir.join(name);
            if !path.is_file() {
                debug!(file = name, "env file not present, skipping");
                continue;
            }
            files.push(DotEnvFile::new(name, parse_env_file(&path)?));
        }
        return Ok(files);
    }

    explicit
        .iter()
        .rev()
        .map(|file| -> EnvrResult<DotEnvFile> {
            let path = project_dir.join(file);
            if !path.is_file() {
                return Err(DotEnvError::NotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            Ok(DotEnvFile::new(
                file.display().to_string(),
                parse_env_file(&path)?,
            ))
        })
        .collect()
}

/// Parse one env file into `key -> value`.
///
/// # Errors
///
/// Returns [`DotEnvError::Parse`] if the file cannot be read or parsed.
pub fn parse_env_file(path: &Path) -> EnvrResult<BTreeMap<String, String>> {
    let parse_error = |source| DotEnvError::Parse {
        path: path.display().to_string(),
        source,
    };

    let entries = dotenvy::from_path_iter(path)
        .map_err(parse_error)?
        .collect::<Result<BTreeMap<_, _>, _>>()
        .map_err(parse_error)?;

    debug!(path = %path.display(), count = entries.len(), "loaded env file");
    Ok(entries)
}
