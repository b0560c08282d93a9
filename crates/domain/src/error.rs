// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identifier::IdentifierKind;

/// Errors produced when constructing or interpreting an identifier.
///
/// Variants never carry the identifier itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input is not the expected number of ASCII digits.
    InvalidFormat {
        /// The identifier category.
        kind: IdentifierKind,
        /// The number of digits required.
        expected_digits: usize,
    },
    /// The payload has no valid check digit (MOD11 remainder 1).
    UndefinedCheckDigit {
        /// The identifier category.
        kind: IdentifierKind,
    },
    /// A trailing check digit does not match the computed one.
    ChecksumMismatch {
        /// The identifier category.
        kind: IdentifierKind,
    },
    /// The day, month and resolved year do not form a calendar date.
    InvalidBirthDate {
        /// The encoded day.
        day: u8,
        /// The encoded month.
        month: u8,
        /// The year after century resolution.
        year: i32,
    },
    /// The birth year cannot be encoded in a personnummer.
    BirthYearOutOfRange(i32),
    /// The individual number is not a three-digit number.
    InvalidIndividualNumber(u16),
    /// The individual number resolves to a different century than the birth year.
    CenturyMismatch {
        /// The requested birth year.
        year: i32,
        /// The requested individual number.
        individual_number: u16,
    },
    /// The identifier category name is not recognised.
    UnknownIdentifierKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat {
                kind,
                expected_digits,
            } => {
                write!(f, "Invalid {kind}: must be exactly {expected_digits} digits")
            }
            Self::UndefinedCheckDigit { kind } => {
                write!(f, "Invalid {kind}: payload has no valid check digit")
            }
            Self::ChecksumMismatch { kind } => {
                write!(f, "Invalid {kind}: check digit mismatch")
            }
            Self::InvalidBirthDate { day, month, year } => {
                write!(
                    f,
                    "Invalid birth date: {day:02}.{month:02}.{year} is not a calendar date"
                )
            }
            Self::BirthYearOutOfRange(year) => {
                write!(
                    f,
                    "Birth year {year} cannot be encoded. Must be between 1900 and 2099"
                )
            }
            Self::InvalidIndividualNumber(number) => {
                write!(
                    f,
                    "Invalid individual number: {number}. Must be between 0 and 999"
                )
            }
            Self::CenturyMismatch {
                year,
                individual_number,
            } => {
                write!(
                    f,
                    "Individual number {individual_number:03} does not resolve to birth year {year}"
                )
            }
            Self::UnknownIdentifierKind(name) => {
                write!(f, "Unknown identifier kind: '{name}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
