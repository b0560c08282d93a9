// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Gender, IdentifierKind, Personnummer, validate_personnummer};
use time::{Date, macros::date};

/// Born 01.01.1990, individual number 000.
const VALID_1990: &str = "01019000083";

/// Born 16.10.2008, individual number 500.
const VALID_2008: &str = "16100850005";

#[test]
fn test_validate_personnummer_accepts_valid_numbers() {
    assert!(validate_personnummer(VALID_1990));
    assert!(validate_personnummer(VALID_2008));
    assert!(validate_personnummer("24128600058"));
    assert!(validate_personnummer("29020050088"));
}

#[test]
fn test_validate_personnummer_rejects_wrong_shape() {
    let inputs: [&str; 8] = [
        "",
        "0101900008",
        "010190000833",
        "0101900008a",
        " 01019000083",
        "01019000083 ",
        "010190 00083",
        "０1019000083",
    ];
    for input in inputs {
        assert!(!validate_personnummer(input), "accepted {input:?}");
    }
}

#[test]
fn test_flipping_any_single_digit_invalidates() {
    let original: Vec<u8> = VALID_1990.bytes().collect();

    for position in 0..original.len() {
        for replacement in b'0'..=b'9' {
            if replacement == original[position] {
                continue;
            }
            let mut mutated: Vec<u8> = original.clone();
            mutated[position] = replacement;
            let mutated: String = String::from_utf8(mutated).unwrap();
            assert!(
                !validate_personnummer(&mutated),
                "mutation at position {position} still validates: {mutated}"
            );
        }
    }
}

#[test]
fn test_parse_reports_format_error() {
    let result: Result<Personnummer, DomainError> = Personnummer::parse("123");
    assert_eq!(
        result,
        Err(DomainError::InvalidFormat {
            kind: IdentifierKind::Personnummer,
            expected_digits: 11,
        })
    );
}

#[test]
fn test_parse_reports_checksum_mismatch() {
    let result: Result<Personnummer, DomainError> = Personnummer::parse("01019000084");
    assert_eq!(
        result,
        Err(DomainError::ChecksumMismatch {
            kind: IdentifierKind::Personnummer,
        })
    );
}

#[test]
fn test_payload_without_second_check_digit_never_validates() {
    // 01.01.05 with individual number 496 has no second check digit
    for suffix in 0..100 {
        let candidate: String = format!("010105496{suffix:02}");
        assert!(!validate_personnummer(&candidate), "accepted {candidate}");
    }
}

#[test]
fn test_accessors() {
    let pnr: Personnummer = Personnummer::parse(VALID_2008).unwrap();
    assert_eq!(pnr.day(), 16);
    assert_eq!(pnr.month(), 10);
    assert_eq!(pnr.year_of_century(), 8);
    assert_eq!(pnr.individual_number(), 500);
    assert_eq!(pnr.birth_year(), 2008);
    assert_eq!(pnr.to_string(), VALID_2008);
}

#[test]
fn test_century_boundary_at_individual_number_500() {
    let last_1900s: Personnummer = Personnummer::parse("01010549902").unwrap();
    assert_eq!(last_1900s.individual_number(), 499);
    assert_eq!(last_1900s.birth_year(), 1905);

    let first_2000s: Personnummer = Personnummer::parse("01010550048").unwrap();
    assert_eq!(first_2000s.individual_number(), 500);
    assert_eq!(first_2000s.birth_year(), 2005);
}

#[test]
fn test_individual_numbers_above_900_resolve_to_2000s() {
    let first: Personnummer = Personnummer::parse("01019990016").unwrap();
    assert_eq!(first.individual_number(), 900);
    assert_eq!(first.birth_year(), 2099);

    let last: Personnummer = Personnummer::parse("01019999943").unwrap();
    assert_eq!(last.individual_number(), 999);
    assert_eq!(last.birth_year(), 2099);
    assert_eq!(
        Personnummer::synthesize(date!(2099 - 01 - 01), 999),
        Ok(last)
    );
}

#[test]
fn test_birth_date() {
    let pnr: Personnummer = Personnummer::parse(VALID_1990).unwrap();
    assert_eq!(pnr.birth_date(), Ok(date!(1990 - 01 - 01)));

    let leap_day: Personnummer = Personnummer::parse("29020050088").unwrap();
    assert_eq!(leap_day.birth_date(), Ok(date!(2000 - 02 - 29)));
}

#[test]
fn test_birth_date_rejects_impossible_date() {
    // Both check digits match, but 31.02.1990 does not exist
    let pnr: Personnummer = Personnummer::parse("31029000096").unwrap();
    assert_eq!(
        pnr.birth_date(),
        Err(DomainError::InvalidBirthDate {
            day: 31,
            month: 2,
            year: 1990,
        })
    );
}

#[test]
fn test_gender_from_third_individual_digit() {
    let female: Personnummer = Personnummer::parse(VALID_1990).unwrap();
    assert_eq!(female.gender(), Gender::Female);

    let male: Personnummer = Personnummer::parse("01010550129").unwrap();
    assert_eq!(male.individual_number(), 501);
    assert_eq!(male.gender(), Gender::Male);
}

#[test]
fn test_synthesize_matches_parsed_number() {
    let birth_date: Date = date!(2008 - 10 - 16);
    let pnr: Personnummer = Personnummer::synthesize(birth_date, 500).unwrap();
    assert_eq!(pnr, Personnummer::parse(VALID_2008).unwrap());
    assert_eq!(pnr.birth_date(), Ok(birth_date));
}

#[test]
fn test_synthesize_rejects_century_mismatch() {
    let result: Result<Personnummer, DomainError> =
        Personnummer::synthesize(date!(1990 - 01 - 01), 500);
    assert_eq!(
        result,
        Err(DomainError::CenturyMismatch {
            year: 1990,
            individual_number: 500,
        })
    );

    let result: Result<Personnummer, DomainError> =
        Personnummer::synthesize(date!(2010 - 01 - 01), 499);
    assert!(matches!(result, Err(DomainError::CenturyMismatch { .. })));
}

#[test]
fn test_synthesize_rejects_out_of_range_inputs() {
    assert_eq!(
        Personnummer::synthesize(date!(1899 - 12 - 31), 100),
        Err(DomainError::BirthYearOutOfRange(1899))
    );
    assert_eq!(
        Personnummer::synthesize(date!(2008 - 10 - 16), 1000),
        Err(DomainError::InvalidIndividualNumber(1000))
    );
}

#[test]
fn test_synthesize_reports_undefined_check_digit() {
    let result: Result<Personnummer, DomainError> =
        Personnummer::synthesize(date!(1905 - 01 - 01), 496);
    assert_eq!(
        result,
        Err(DomainError::UndefinedCheckDigit {
            kind: IdentifierKind::Personnummer,
        })
    );
}

#[test]
fn test_serde_uses_digit_string() {
    let pnr: Personnummer = Personnummer::parse(VALID_1990).unwrap();
    let json: String = serde_json::to_string(&pnr).unwrap();
    assert_eq!(json, format!("\"{VALID_1990}\""));

    let parsed: Personnummer = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, pnr);

    assert!(serde_json::from_str::<Personnummer>("\"01019000084\"").is_err());
}
