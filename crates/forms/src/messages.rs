// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-facing validation messages.

pub const REQUIRED: &str = "Feltet er påkrevd";
pub const INVALID_EMAIL: &str = "Ugyldig e-postadresse";
pub const INVALID_PHONE: &str = "Telefonnummer må bestå av 8 siffer";
pub const INVALID_POSTAL_CODE: &str = "Postnummer må bestå av 4 siffer";
pub const INVALID_BIRTH_DATE: &str = "Personnummeret inneholder en ugyldig fødselsdato";
pub const PAYER_SAME_AS_STUDENT: &str = "Ansvarlig betaler kan ikke være samme person som eleven";
pub const INCOMPLETE_FORM: &str = "Skjemaet er ufullstendig";

#[must_use]
pub fn payer_too_young(min_age: u8) -> String {
    format!("Ansvarlig betaler må være minst {min_age} år")
}

#[must_use]
pub fn student_too_young(min_age: u8) -> String {
    format!("Eleven må være minst {min_age} år")
}
