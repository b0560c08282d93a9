// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MOD11 check digits.

/// Weights for the first personnummer check digit (digit 10).
pub const PERSONNUMMER_FIRST_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];

/// Weights for the second personnummer check digit (digit 11).
///
/// Applied to the nine payload digits followed by the first check digit.
pub const PERSONNUMMER_SECOND_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Weights for the organisasjonsnummer check digit.
pub const ORGANISASJONSNUMMER_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Weights for the kontonummer check digit.
pub const KONTONUMMER_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Parses a string of exactly `N` ASCII digits.
///
/// Returns `None` for any other length or for any non-digit character,
/// including whitespace and non-ASCII digits.
#[must_use]
pub fn parse_digits<const N: usize>(value: &str) -> Option<[u8; N]> {
    let bytes: &[u8] = value.as_bytes();
    if bytes.len() != N || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut digits: [u8; N] = [0; N];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        *slot = byte - b'0';
    }
    Some(digits)
}

/// Computes the MOD11 check digit for `digits` using `weights`.
///
/// The weighted sum is reduced modulo 11. A remainder of 0 gives check
/// digit 0, any other remainder gives `11 - remainder`. A remainder of 1
/// would require check digit 10, which does not exist, so `None` is returned
/// and the payload can never be valid.
///
/// `digits` and `weights` are paired positionally; extra entries on either
/// side are ignored.
#[must_use]
pub fn mod11_check_digit(digits: &[u8], weights: &[u32]) -> Option<u8> {
    debug_assert_eq!(digits.len(), weights.len());

    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();

    match sum % 11 {
        0 => Some(0),
        1 => None,
        remainder => u8::try_from(11 - remainder).ok(),
    }
}
