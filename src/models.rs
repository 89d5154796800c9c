// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::error::CurrencyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl From<(&str, &str)> for Currency {
    fn from((code, name): (&str, &str)) -> Self {
        Currency {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// A well-formed ISO 4217 alphabetic code: exactly three uppercase ASCII letters.
///
/// Being well-formed says nothing about whether the code is in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Trim surrounding whitespace and upper-case ASCII letters before parsing.
    pub fn normalize(input: &str) -> Result<Self, CurrencyError> {
        let candidate = input.trim().to_ascii_uppercase();
        if is_well_formed(&candidate) {
            Ok(CurrencyCode(candidate))
        } else {
            Err(CurrencyError::MalformedCode(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_well_formed(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_well_formed(s) {
            Ok(CurrencyCode(s.to_string()))
        } else {
            Err(CurrencyError::MalformedCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
