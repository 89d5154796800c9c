// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use thiserror::Error;

/// Failure to resolve a currency code to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("unknown currency code: {0}")]
    UnknownCode(String),

    /// Input that cannot be a code at all, e.g. `"US"` or `"U$D"`.
    #[error("malformed currency code {0:?}: expected three ASCII letters")]
    MalformedCode(String),
}
