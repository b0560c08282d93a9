// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON reports printed by `tms-check`.

use serde::Serialize;
use time::Date;
use tms_domain::{Gender, Kontonummer, Organisasjonsnummer, Personnummer, normalize_kontonummer};
use tms_forms::{FieldIssue, ValidationErrors};

/// Result of checking a personnummer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonnummerReport {
    /// Whether both check digits are correct.
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meets_min_age: Option<bool>,
}

impl PersonnummerReport {
    /// Checks `value` and derives the holder's details on `today`.
    ///
    /// A number with correct check digits but an impossible birth date is
    /// reported as valid with an error, and never meets an age bound.
    #[must_use]
    pub fn new(value: &str, min_age: Option<u8>, today: Date) -> Self {
        let pnr: Personnummer = match Personnummer::parse(value) {
            Ok(pnr) => pnr,
            Err(err) => {
                return Self {
                    valid: false,
                    error: Some(err.to_string()),
                    birth_date: None,
                    gender: None,
                    age: None,
                    min_age,
                    meets_min_age: min_age.map(|_| false),
                };
            }
        };

        let meets_min_age: Option<bool> = min_age.map(|age| pnr.is_at_least_age(age, today));
        match pnr.birth_date() {
            Ok(birth_date) => Self {
                valid: true,
                error: None,
                birth_date: Some(birth_date.to_string()),
                gender: Some(pnr.gender()),
                age: Some(tms_domain::age_on(birth_date, today)),
                min_age,
                meets_min_age,
            },
            Err(err) => Self {
                valid: true,
                error: Some(err.to_string()),
                birth_date: None,
                gender: Some(pnr.gender()),
                age: None,
                min_age,
                meets_min_age,
            },
        }
    }

    /// Whether the number is valid, encodes a real date and meets the age
    /// bound when one was given.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.valid && self.error.is_none() && self.meets_min_age != Some(false)
    }
}

/// Result of checking an organisasjonsnummer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganisasjonsnummerReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Grouped display form, e.g. `923 609 016`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl OrganisasjonsnummerReport {
    #[must_use]
    pub fn new(value: &str) -> Self {
        match Organisasjonsnummer::parse(value) {
            Ok(orgnr) => Self {
                valid: true,
                error: None,
                formatted: Some(orgnr.formatted()),
            },
            Err(err) => Self {
                valid: false,
                error: Some(err.to_string()),
                formatted: None,
            },
        }
    }
}

/// Result of checking a kontonummer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KontonummerReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The input with separators removed.
    pub normalized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_number: Option<String>,
    /// Dotted display form, e.g. `1234.56.78903`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl KontonummerReport {
    #[must_use]
    pub fn new(value: &str) -> Self {
        let normalized: String = normalize_kontonummer(value);
        match Kontonummer::parse(value) {
            Ok(account) => Self {
                valid: true,
                error: None,
                normalized,
                register_number: Some(account.register_number()),
                formatted: Some(account.formatted()),
            },
            Err(err) => Self {
                valid: false,
                error: Some(err.to_string()),
                normalized,
                register_number: None,
                formatted: None,
            },
        }
    }
}

/// Result of running a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport<T> {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

impl<T> From<Result<T, ValidationErrors>> for FormReport<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(record) => Self {
                valid: true,
                record: Some(record),
                issues: Vec::new(),
            },
            Err(errors) => Self {
                valid: false,
                record: None,
                issues: errors.into_issues(),
            },
        }
    }
}
