// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Norwegian identifier types for TMS.
//!
//! Everything in this crate is pure: validators take strings, typed
//! constructors return `Result<_, DomainError>`, and age checks take
//! today's date as an argument.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod age;
mod checksum;
mod error;
mod identifier;
mod kontonummer;
mod organisasjonsnummer;
mod personnummer;

#[cfg(test)]
mod tests;

pub use age::{age_on, is_at_least_age};
pub use checksum::{
    KONTONUMMER_WEIGHTS, ORGANISASJONSNUMMER_WEIGHTS, PERSONNUMMER_FIRST_WEIGHTS,
    PERSONNUMMER_SECOND_WEIGHTS, mod11_check_digit, parse_digits,
};
pub use error::DomainError;
pub use identifier::IdentifierKind;
pub use kontonummer::{Kontonummer, normalize_kontonummer, validate_kontonummer};
pub use organisasjonsnummer::{Organisasjonsnummer, validate_organisasjonsnummer};
pub use personnummer::{Gender, Personnummer, validate_personnummer};
