// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the form layer.

use crate::messages;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tms_domain::{DomainError, IdentifierKind};

/// A single failed rule, located by its dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Dotted path of the field, e.g. `responsible_payer.personnummer`.
    pub path: String,
    /// Message shown next to the field.
    pub message: String,
}

impl FieldIssue {
    /// Creates a new issue.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Every issue found while validating one request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} field(s) failed validation", .issues.len())]
pub struct ValidationErrors {
    issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    /// Wraps a list of issues.
    #[must_use]
    pub const fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// All issues in the order they were found.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Consumes the error and returns its issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// Number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether there are no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Messages attached to `path`.
    #[must_use]
    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.path == path)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    /// Whether any issue is attached to `path`.
    #[must_use]
    pub fn has_issue(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

const fn label(kind: IdentifierKind) -> &'static str {
    match kind {
        IdentifierKind::Personnummer => "Personnummer",
        IdentifierKind::Organisasjonsnummer => "Organisasjonsnummer",
        IdentifierKind::Kontonummer => "Kontonummer",
    }
}

/// Translates a domain error into the message shown to the user.
///
/// Format errors name the expected length; checksum failures of any kind
/// collapse to a single "invalid" message.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> String {
    match err {
        DomainError::InvalidFormat {
            kind,
            expected_digits,
        } => format!("{} må bestå av {expected_digits} siffer", label(*kind)),
        DomainError::UndefinedCheckDigit { kind } | DomainError::ChecksumMismatch { kind } => {
            format!("Ugyldig {}", kind.as_str())
        }
        DomainError::InvalidBirthDate { .. } => String::from(messages::INVALID_BIRTH_DATE),
        DomainError::BirthYearOutOfRange(_)
        | DomainError::InvalidIndividualNumber(_)
        | DomainError::CenturyMismatch { .. } => String::from("Ugyldig personnummer"),
        DomainError::UnknownIdentifierKind(name) => {
            format!("Ukjent identifikatortype: {name}")
        }
    }
}
