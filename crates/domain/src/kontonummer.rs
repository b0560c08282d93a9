// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::checksum::{KONTONUMMER_WEIGHTS, mod11_check_digit, parse_digits};
use crate::error::DomainError;
use crate::identifier::IdentifierKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const KIND: IdentifierKind = IdentifierKind::Kontonummer;

/// Removes the separators people type into account numbers.
///
/// Whitespace and dots are dropped; every other character is kept so that
/// the digit check still rejects it.
#[must_use]
pub fn normalize_kontonummer(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect()
}

/// A verified kontonummer.
///
/// Holds the normalized 11 digits; `1234.56.78903` and `1234 56 78903`
/// parse to the same value as `12345678903`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Kontonummer {
    digits: [u8; 11],
}

impl Kontonummer {
    /// Normalizes, parses and verifies a kontonummer.
    ///
    /// # Errors
    ///
    /// Returns an error if the normalized value is not exactly 11 ASCII
    /// digits or the check digit is undefined or wrong.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let normalized: String = normalize_kontonummer(value);
        let digits: [u8; 11] = parse_digits(&normalized).ok_or(DomainError::InvalidFormat {
            kind: KIND,
            expected_digits: KIND.digit_count(),
        })?;

        let check: u8 = mod11_check_digit(&digits[..10], &KONTONUMMER_WEIGHTS)
            .ok_or(DomainError::UndefinedCheckDigit { kind: KIND })?;
        if digits[10] != check {
            return Err(DomainError::ChecksumMismatch { kind: KIND });
        }

        Ok(Self { digits })
    }

    /// The four-digit bank register number.
    #[must_use]
    pub fn register_number(&self) -> String {
        self.to_string()[..4].to_string()
    }

    /// Display form `1234.56.78903`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let plain: String = self.to_string();
        format!("{}.{}.{}", &plain[..4], &plain[4..6], &plain[6..])
    }
}

impl std::fmt::Display for Kontonummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Kontonummer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Kontonummer {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Kontonummer> for String {
    fn from(value: Kontonummer) -> Self {
        value.to_string()
    }
}

/// Checks a kontonummer after stripping whitespace and dots.
#[must_use]
pub fn validate_kontonummer(value: &str) -> bool {
    Kontonummer::parse(value).is_ok()
}
