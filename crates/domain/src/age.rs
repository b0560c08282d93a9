// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::personnummer::Personnummer;
use time::Date;

/// Age in whole years on `today` for someone born on `birth_date`.
///
/// The age increases on the birthday itself. Someone born on 29 February
/// turns a year older on 1 March in non-leap years.
///
/// Returns a negative value if `birth_date` is after `today`.
#[must_use]
pub fn age_on(birth_date: Date, today: Date) -> i32 {
    let years: i32 = today.year() - birth_date.year();
    let before_birthday: bool = (u8::from(today.month()), today.day())
        < (u8::from(birth_date.month()), birth_date.day());

    if before_birthday { years - 1 } else { years }
}

/// Whether the holder of `personnummer` is at least `min_age` on `today`.
///
/// Returns `false` if the personnummer fails checksum validation or encodes
/// a date that does not exist.
#[must_use]
pub fn is_at_least_age(personnummer: &str, min_age: u8, today: Date) -> bool {
    Personnummer::parse(personnummer).is_ok_and(|pnr| pnr.is_at_least_age(min_age, today))
}
