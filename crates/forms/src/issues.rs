// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{FieldIssue, ValidationErrors};
use crate::messages;

/// Accumulates field issues while a schema runs.
///
/// Rules are checked independently so that one request reports every
/// failing field at once.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<FieldIssue>,
}

impl IssueCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue at `path`.
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(path, message));
    }

    /// Records the error of `result` at `path`, or passes the value through.
    pub fn check<T, M>(&mut self, path: &str, result: Result<T, M>) -> Option<T>
    where
        M: Into<String>,
    {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(path, message);
                None
            }
        }
    }

    /// Whether no issue has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Finishes validation.
    ///
    /// # Errors
    ///
    /// Returns every recorded issue if any were recorded, or a single
    /// form-level issue if `value` is missing without a recorded cause.
    pub fn into_result<T>(mut self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.issues.is_empty() => Ok(value),
            Some(_) => Err(ValidationErrors::new(self.issues)),
            None => {
                if self.issues.is_empty() {
                    self.push("", messages::INCOMPLETE_FORM);
                }
                Err(ValidationErrors::new(self.issues))
            }
        }
    }
}
