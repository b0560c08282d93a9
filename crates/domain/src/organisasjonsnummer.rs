// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::checksum::{ORGANISASJONSNUMMER_WEIGHTS, mod11_check_digit, parse_digits};
use crate::error::DomainError;
use crate::identifier::IdentifierKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const KIND: IdentifierKind = IdentifierKind::Organisasjonsnummer;

/// A verified organisasjonsnummer (9 digits, check digit last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Organisasjonsnummer {
    digits: [u8; 9],
}

impl Organisasjonsnummer {
    /// Parses and verifies an organisasjonsnummer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not exactly 9 ASCII digits or the
    /// check digit is undefined or wrong.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let digits: [u8; 9] = parse_digits(value).ok_or(DomainError::InvalidFormat {
            kind: KIND,
            expected_digits: KIND.digit_count(),
        })?;

        let check: u8 = mod11_check_digit(&digits[..8], &ORGANISASJONSNUMMER_WEIGHTS)
            .ok_or(DomainError::UndefinedCheckDigit { kind: KIND })?;
        if digits[8] != check {
            return Err(DomainError::ChecksumMismatch { kind: KIND });
        }

        Ok(Self { digits })
    }

    /// Display form with digits grouped in threes, e.g. `923 609 016`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let plain: String = self.to_string();
        format!("{} {} {}", &plain[..3], &plain[3..6], &plain[6..])
    }
}

impl std::fmt::Display for Organisasjonsnummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Organisasjonsnummer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Organisasjonsnummer {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Organisasjonsnummer> for String {
    fn from(value: Organisasjonsnummer) -> Self {
        value.to_string()
    }
}

/// Checks an organisasjonsnummer's format and check digit.
#[must_use]
pub fn validate_organisasjonsnummer(value: &str) -> bool {
    Organisasjonsnummer::parse(value).is_ok()
}
