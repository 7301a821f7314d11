// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment handling.
//!
//! # Architecture
//!
//! ```text
//! ProcessEnv (BTreeMap<ProcessKey, String>)
//! Sources: current_env(), ProcessEnv::from_map(), ProcessEnv::new()
//! Ops: get/contains/set/iter/to_map
//! ```
//!
//! - **Case-insensitive on Windows**, exact elsewhere
//! - **Explicitly threaded**: the reconciler writes into a `ProcessEnv`
//!   value, never into the live process
//! - **UTF-8 internal**: non-UTF-8 variables are skipped at capture

pub mod container;
mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::ProcessEnv {
    let vars = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    container::ProcessEnv::from_map(vars)
}
