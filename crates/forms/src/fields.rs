// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field rules shared by the schemas.
//!
//! Each rule takes the raw input and returns the cleaned value or the
//! message to show.

use crate::error::translate_domain_error;
use crate::messages;
use tms_domain::{Kontonummer, Organisasjonsnummer, Personnummer};

/// Maximum e-mail length (per RFC 5321).
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the part before `@`.
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

/// Country prefixes accepted in front of a Norwegian phone number.
const PHONE_PREFIXES: [&str; 2] = ["+47", "0047"];

/// Rejects blank input and returns the trimmed value.
///
/// # Errors
///
/// Returns `messages::REQUIRED` if the value is empty after trimming.
pub fn required(value: &str) -> Result<String, String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(String::from(messages::REQUIRED));
    }
    Ok(trimmed.to_string())
}

/// Trims the value and maps blank input to `None`.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Checks the basic shape of an e-mail address and lowercases it.
///
/// # Errors
///
/// Returns a message if the value is blank, too long or not shaped like
/// `local@domain.tld`.
pub fn email(value: &str) -> Result<String, String> {
    let email: String = required(value)?.to_lowercase();

    if email.len() > EMAIL_MAX_LENGTH || !is_email_shape(&email) {
        return Err(String::from(messages::INVALID_EMAIL));
    }
    Ok(email)
}

fn is_email_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LENGTH || domain.contains('@') {
        return false;
    }
    if local.chars().any(char::is_whitespace) {
        return false;
    }

    if !domain.contains('.')
        || domain.starts_with(&['.', '-'][..])
        || domain.ends_with(&['.', '-'][..])
    {
        return false;
    }
    domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Normalizes a Norwegian phone number to its 8 digits.
///
/// Spaces are ignored and a leading `+47` or `0047` is dropped.
///
/// # Errors
///
/// Returns a message if the value is blank or not 8 digits after
/// normalization.
pub fn phone(value: &str) -> Result<String, String> {
    let compact: String = required(value)?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let national: &str = PHONE_PREFIXES
        .iter()
        .find_map(|prefix| compact.strip_prefix(*prefix))
        .unwrap_or(&compact);

    if national.len() != 8 || !national.bytes().all(|b| b.is_ascii_digit()) {
        return Err(String::from(messages::INVALID_PHONE));
    }
    Ok(national.to_string())
}

/// Checks a four-digit Norwegian postal code.
///
/// # Errors
///
/// Returns a message if the value is blank or not exactly 4 digits.
pub fn postal_code(value: &str) -> Result<String, String> {
    let code: String = required(value)?;
    if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(String::from(messages::INVALID_POSTAL_CODE));
    }
    Ok(code)
}

/// Parses a personnummer field.
///
/// Surrounding whitespace is trimmed; the digits themselves must be
/// contiguous.
///
/// # Errors
///
/// Returns a message if the value is blank or fails checksum validation.
pub fn personnummer(value: &str) -> Result<Personnummer, String> {
    let trimmed: String = required(value)?;
    Personnummer::parse(&trimmed).map_err(|err| translate_domain_error(&err))
}

/// Parses an organisasjonsnummer field.
///
/// Whitespace anywhere is ignored so the grouped display form
/// (`923 609 016`) is accepted.
///
/// # Errors
///
/// Returns a message if the value is blank or fails checksum validation.
pub fn organisasjonsnummer(value: &str) -> Result<Organisasjonsnummer, String> {
    let compact: String = required(value)?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    Organisasjonsnummer::parse(&compact).map_err(|err| translate_domain_error(&err))
}

/// Parses an optional kontonummer field; blank input is `None`.
///
/// # Errors
///
/// Returns a message if a non-blank value fails checksum validation.
pub fn optional_kontonummer(value: &str) -> Result<Option<Kontonummer>, String> {
    optional(value)
        .map(|account| Kontonummer::parse(&account).map_err(|err| translate_domain_error(&err)))
        .transpose()
}
