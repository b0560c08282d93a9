// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The categories of Norwegian identifiers handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// National identity number (11 digits, two check digits).
    Personnummer,
    /// Organization number (9 digits, one check digit).
    Organisasjonsnummer,
    /// Bank account number (11 digits, one check digit).
    Kontonummer,
}

impl IdentifierKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personnummer => "personnummer",
            Self::Organisasjonsnummer => "organisasjonsnummer",
            Self::Kontonummer => "kontonummer",
        }
    }

    /// The number of digits a well-formed identifier of this kind has.
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        match self {
            Self::Personnummer | Self::Kontonummer => 11,
            Self::Organisasjonsnummer => 9,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "personnummer" | "fnr" => Ok(Self::Personnummer),
            "organisasjonsnummer" | "orgnr" => Ok(Self::Organisasjonsnummer),
            "kontonummer" => Ok(Self::Kontonummer),
            _ => Err(DomainError::UnknownIdentifierKind(s.to_string())),
        }
    }
}
