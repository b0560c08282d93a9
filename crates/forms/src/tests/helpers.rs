// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::{Date, macros::date};

use crate::{CompanyRegistrationRequest, ResponsiblePayer, StudentRegistrationRequest};

/// Born 16.10.2008; turns 18 on [`today`].
pub const STUDENT_PNR: &str = "16100850005";

/// Born 24.12.1986.
pub const ADULT_PNR: &str = "24128600058";

/// Born 01.01.2010.
pub const MINOR_PNR: &str = "01011050081";

pub fn today() -> Date {
    date!(2026 - 10 - 16)
}

pub fn create_test_student() -> StudentRegistrationRequest {
    StudentRegistrationRequest {
        first_name: String::from("Ola"),
        last_name: String::from("Nordmann"),
        personnummer: String::from(STUDENT_PNR),
        email: String::from("ola@example.no"),
        phone: String::from("912 34 567"),
        address: String::from("Storgata 1"),
        postal_code: String::from("0155"),
        city: String::from("Oslo"),
        responsible_payer: None,
    }
}

pub fn create_test_payer() -> ResponsiblePayer {
    ResponsiblePayer {
        enabled: true,
        first_name: String::from("Kari"),
        last_name: String::from("Nordmann"),
        personnummer: String::from(ADULT_PNR),
        email: String::from("kari@example.no"),
        phone: String::from("+47 98765432"),
        address: String::from("Storgata 1"),
        postal_code: String::from("0155"),
        city: String::from("Oslo"),
    }
}

pub fn create_test_student_with_payer() -> StudentRegistrationRequest {
    StudentRegistrationRequest {
        responsible_payer: Some(create_test_payer()),
        ..create_test_student()
    }
}

pub fn create_test_company() -> CompanyRegistrationRequest {
    CompanyRegistrationRequest {
        name: String::from("Trafikkskolen AS"),
        organisasjonsnummer: String::from("923609016"),
        kontonummer: String::from("1234.56.78903"),
        email: String::from("faktura@trafikkskolen.no"),
        phone: String::from("22 33 44 55"),
        address: String::from("Industriveien 4"),
        postal_code: String::from("2000"),
        city: String::from("Lillestrøm"),
        contact_person: String::from("Per Hansen"),
    }
}
