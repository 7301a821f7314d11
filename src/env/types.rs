// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key type for the process environment.
//!
//! ```text
//! ProcessKey: case-insensitive on Windows (PATH == Path == path)
//!             exact on every other platform
//! ```

use std::borrow::Cow;

/// A process environment variable name.
#[derive(Debug, Clone)]
pub(super) struct ProcessKey(String);

impl ProcessKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> Cow<'_, str> {
        if cfg!(windows) {
            Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for ProcessKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for ProcessKey {}

impl PartialOrd for ProcessKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProcessKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}
