// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Picks the value variant that applies to a context or branch.
//!
//! ```text
//! canonical context:  first { context == "all" | context == ctx }
//! branch name:        first { context_parameter == branch }
//!                     else first { context == "all" | "branch-deploy" }
//! ```
//!
//! Scans run in input order; ambiguous upstream data resolves to the
//! first match.

use super::types::ValueVariant;
use crate::context::is_supported_context;

/// Select the variant for `context_or_branch`, or `None` if nothing applies.
#[must_use]
pub fn select_value<'a>(
    variants: &'a [ValueVariant],
    context_or_branch: &str,
) -> Option<&'a ValueVariant> {
    if is_supported_context(context_or_branch) {
        return variants
            .iter()
            .find(|v| v.context == "all" || v.context == context_or_branch);
    }

    variants
        .iter()
        .find(|v| v.context_parameter.as_deref() == Some(context_or_branch))
        .or_else(|| {
            variants
                .iter()
                .find(|v| v.context == "all" || v.context == "branch-deploy")
        })
}
