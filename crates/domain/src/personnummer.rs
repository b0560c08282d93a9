// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Personnummer: the Norwegian national identity number.
//!
//! Layout (zero-based digit positions):
//!
//! | digits | meaning                     |
//! |--------|-----------------------------|
//! | 0-1    | day of birth                |
//! | 2-3    | month of birth              |
//! | 4-5    | year of birth, two digits   |
//! | 6-8    | individual number           |
//! | 9      | first check digit           |
//! | 10     | second check digit          |
//!
//! The century is resolved from the individual number with a two-range
//! rule: 000-499 is the 1900s, 500-999 is the 2000s. Historic allocations
//! (1854-1899 in 500-749, 1940-1999 in 900-999) are not distinguished.

use crate::age::age_on;
use crate::checksum::{
    PERSONNUMMER_FIRST_WEIGHTS, PERSONNUMMER_SECOND_WEIGHTS, mod11_check_digit, parse_digits,
};
use crate::error::DomainError;
use crate::identifier::IdentifierKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};

const KIND: IdentifierKind = IdentifierKind::Personnummer;

/// First individual number assigned to people born in the 2000s.
const SECOND_CENTURY_START: u16 = 500;

/// Gender encoded by the last individual-number digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Even digit.
    Female,
    /// Odd digit.
    Male,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A personnummer whose format and both check digits have been verified.
///
/// The encoded birth date is not checked at construction; use
/// [`Personnummer::birth_date`] to interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Personnummer {
    digits: [u8; 11],
}

impl Personnummer {
    /// Parses and verifies a personnummer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is not exactly 11 ASCII digits
    /// - Either check digit is undefined for its payload
    /// - Either check digit does not match
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let digits: [u8; 11] = parse_digits(value).ok_or(DomainError::InvalidFormat {
            kind: KIND,
            expected_digits: KIND.digit_count(),
        })?;

        let first: u8 = mod11_check_digit(&digits[..9], &PERSONNUMMER_FIRST_WEIGHTS)
            .ok_or(DomainError::UndefinedCheckDigit { kind: KIND })?;
        if digits[9] != first {
            return Err(DomainError::ChecksumMismatch { kind: KIND });
        }

        let second: u8 = mod11_check_digit(&digits[..10], &PERSONNUMMER_SECOND_WEIGHTS)
            .ok_or(DomainError::UndefinedCheckDigit { kind: KIND })?;
        if digits[10] != second {
            return Err(DomainError::ChecksumMismatch { kind: KIND });
        }

        Ok(Self { digits })
    }

    /// Builds a valid personnummer for a birth date and individual number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The birth year is outside 1900-2099
    /// - The individual number is above 999
    /// - The individual number resolves to the other century
    /// - Either check digit would be 10
    pub fn synthesize(birth_date: Date, individual_number: u16) -> Result<Self, DomainError> {
        let year: i32 = birth_date.year();
        if !(1900..=2099).contains(&year) {
            return Err(DomainError::BirthYearOutOfRange(year));
        }
        if individual_number > 999 {
            return Err(DomainError::InvalidIndividualNumber(individual_number));
        }
        if (year >= 2000) != (individual_number >= SECOND_CENTURY_START) {
            return Err(DomainError::CenturyMismatch {
                year,
                individual_number,
            });
        }

        let day: u8 = birth_date.day();
        let month: u8 = u8::from(birth_date.month());
        let year_of_century: u8 =
            u8::try_from(year % 100).map_err(|_| DomainError::BirthYearOutOfRange(year))?;

        let mut digits: [u8; 11] = [
            day / 10,
            day % 10,
            month / 10,
            month % 10,
            year_of_century / 10,
            year_of_century % 10,
            last_digit(individual_number / 100),
            last_digit(individual_number / 10),
            last_digit(individual_number),
            0,
            0,
        ];

        digits[9] = mod11_check_digit(&digits[..9], &PERSONNUMMER_FIRST_WEIGHTS)
            .ok_or(DomainError::UndefinedCheckDigit { kind: KIND })?;
        digits[10] = mod11_check_digit(&digits[..10], &PERSONNUMMER_SECOND_WEIGHTS)
            .ok_or(DomainError::UndefinedCheckDigit { kind: KIND })?;

        Ok(Self { digits })
    }

    /// Day of month as encoded (digits 0-1).
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.digits[0] * 10 + self.digits[1]
    }

    /// Month as encoded (digits 2-3).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.digits[2] * 10 + self.digits[3]
    }

    /// Two-digit year as encoded (digits 4-5).
    #[must_use]
    pub const fn year_of_century(&self) -> u8 {
        self.digits[4] * 10 + self.digits[5]
    }

    /// Individual number (digits 6-8).
    #[must_use]
    pub const fn individual_number(&self) -> u16 {
        self.digits[6] as u16 * 100 + self.digits[7] as u16 * 10 + self.digits[8] as u16
    }

    /// Full birth year after century resolution.
    #[must_use]
    pub const fn birth_year(&self) -> i32 {
        let century: i32 = if self.individual_number() < SECOND_CENTURY_START {
            1900
        } else {
            2000
        };
        century + self.year_of_century() as i32
    }

    /// The encoded birth date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBirthDate` if the encoded day and month
    /// do not exist in the resolved year.
    pub fn birth_date(&self) -> Result<Date, DomainError> {
        let (day, month, year) = (self.day(), self.month(), self.birth_year());
        let invalid = || DomainError::InvalidBirthDate { day, month, year };

        let calendar_month: Month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(year, calendar_month, day).map_err(|_| invalid())
    }

    /// Gender encoded by the third individual-number digit.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        if self.digits[8] % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Age in whole years on `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoded birth date is not a calendar date.
    pub fn age_on(&self, today: Date) -> Result<i32, DomainError> {
        self.birth_date().map(|birth_date| age_on(birth_date, today))
    }

    /// Whether the holder is at least `min_age` years old on `today`.
    ///
    /// An impossible birth date yields `false`.
    #[must_use]
    pub fn is_at_least_age(&self, min_age: u8, today: Date) -> bool {
        self.age_on(today).is_ok_and(|age| age >= i32::from(min_age))
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn last_digit(value: u16) -> u8 {
    (value % 10) as u8
}

impl std::fmt::Display for Personnummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Personnummer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Personnummer {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Personnummer> for String {
    fn from(value: Personnummer) -> Self {
        value.to_string()
    }
}

/// Checks a personnummer's format and both check digits.
///
/// Malformed input returns `false`; this never panics.
#[must_use]
pub fn validate_personnummer(value: &str) -> bool {
    Personnummer::parse(value).is_ok()
}
