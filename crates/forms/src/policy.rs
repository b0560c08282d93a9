// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation policy configuration.

use serde::{Deserialize, Serialize};

/// Minimum age of a responsible payer unless configured otherwise.
pub const DEFAULT_PAYER_MIN_AGE: u8 = 18;

/// Business-rule bounds applied by the schemas.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Minimum age of a responsible payer on the validation date.
    pub payer_min_age: u8,
    /// Minimum age of the student, if enforced.
    pub student_min_age: Option<u8>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            payer_min_age: DEFAULT_PAYER_MIN_AGE,
            student_min_age: None,
        }
    }
}
