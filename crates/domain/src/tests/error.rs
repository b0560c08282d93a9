// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, IdentifierKind};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidFormat {
        kind: IdentifierKind::Personnummer,
        expected_digits: 11,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid personnummer: must be exactly 11 digits"
    );

    let err: DomainError = DomainError::UndefinedCheckDigit {
        kind: IdentifierKind::Organisasjonsnummer,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid organisasjonsnummer: payload has no valid check digit"
    );

    let err: DomainError = DomainError::ChecksumMismatch {
        kind: IdentifierKind::Kontonummer,
    };
    assert_eq!(format!("{err}"), "Invalid kontonummer: check digit mismatch");

    let err: DomainError = DomainError::InvalidBirthDate {
        day: 31,
        month: 2,
        year: 1990,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid birth date: 31.02.1990 is not a calendar date"
    );

    let err: DomainError = DomainError::CenturyMismatch {
        year: 1990,
        individual_number: 42,
    };
    assert_eq!(
        format!("{err}"),
        "Individual number 042 does not resolve to birth year 1990"
    );

    let err: DomainError = DomainError::UnknownIdentifierKind(String::from("iban"));
    assert_eq!(format!("{err}"), "Unknown identifier kind: 'iban'");
}

#[test]
fn test_identifier_kind_from_str() {
    assert_eq!(
        "personnummer".parse::<IdentifierKind>(),
        Ok(IdentifierKind::Personnummer)
    );
    assert_eq!(
        "ORGNR".parse::<IdentifierKind>(),
        Ok(IdentifierKind::Organisasjonsnummer)
    );
    assert_eq!(
        "kontonummer".parse::<IdentifierKind>(),
        Ok(IdentifierKind::Kontonummer)
    );
    assert!(matches!(
        "iban".parse::<IdentifierKind>(),
        Err(DomainError::UnknownIdentifierKind(_))
    ));
}

#[test]
fn test_identifier_kind_digit_count() {
    assert_eq!(IdentifierKind::Personnummer.digit_count(), 11);
    assert_eq!(IdentifierKind::Organisasjonsnummer.digit_count(), 9);
    assert_eq!(IdentifierKind::Kontonummer.digit_count(), 11);
}
