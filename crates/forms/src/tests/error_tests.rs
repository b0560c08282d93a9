// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FieldIssue, IssueCollector, ValidationErrors, messages, translate_domain_error};
use tms_domain::{DomainError, IdentifierKind};

#[test]
fn test_translate_format_error() {
    let err: DomainError = DomainError::InvalidFormat {
        kind: IdentifierKind::Organisasjonsnummer,
        expected_digits: 9,
    };
    assert_eq!(
        translate_domain_error(&err),
        "Organisasjonsnummer må bestå av 9 siffer"
    );
}

#[test]
fn test_translate_checksum_errors_collapse() {
    let mismatch: DomainError = DomainError::ChecksumMismatch {
        kind: IdentifierKind::Kontonummer,
    };
    let undefined: DomainError = DomainError::UndefinedCheckDigit {
        kind: IdentifierKind::Kontonummer,
    };
    assert_eq!(translate_domain_error(&mismatch), "Ugyldig kontonummer");
    assert_eq!(
        translate_domain_error(&mismatch),
        translate_domain_error(&undefined)
    );
}

#[test]
fn test_translate_birth_date_error() {
    let err: DomainError = DomainError::InvalidBirthDate {
        day: 31,
        month: 2,
        year: 1990,
    };
    assert_eq!(translate_domain_error(&err), messages::INVALID_BIRTH_DATE);
}

#[test]
fn test_validation_errors_display() {
    let errors: ValidationErrors = ValidationErrors::new(vec![
        FieldIssue::new("first_name", messages::REQUIRED),
        FieldIssue::new("email", messages::INVALID_EMAIL),
    ]);
    assert_eq!(errors.to_string(), "2 field(s) failed validation");
    assert_eq!(errors.messages_for("email"), vec![messages::INVALID_EMAIL]);
    assert!(!errors.has_issue("phone"));
}

#[test]
fn test_collector_passes_values_through() {
    let mut issues: IssueCollector = IssueCollector::new();
    let ok: Option<u8> = issues.check("a", Ok::<u8, &str>(1));
    let failed: Option<u8> = issues.check("b", Err::<u8, &str>("nope"));

    assert_eq!(ok, Some(1));
    assert_eq!(failed, None);
    assert_eq!(issues.len(), 1);

    let errors: ValidationErrors = issues.into_result(ok).unwrap_err();
    assert_eq!(errors.issues(), &[FieldIssue::new("b", "nope")]);
}

#[test]
fn test_collector_without_issues_or_value_reports_form_issue() {
    let issues: IssueCollector = IssueCollector::new();
    let errors: ValidationErrors = issues.into_result::<u8>(None).unwrap_err();
    assert_eq!(errors.messages_for(""), vec![messages::INCOMPLETE_FORM]);
}

#[test]
fn test_validation_errors_serialize_as_issue_list() {
    let errors: ValidationErrors =
        ValidationErrors::new(vec![FieldIssue::new("city", messages::REQUIRED)]);
    let json: serde_json::Value = serde_json::to_value(&errors).unwrap();
    assert_eq!(json["issues"][0]["path"], "city");
    assert_eq!(json["issues"][0]["message"], messages::REQUIRED);
}
