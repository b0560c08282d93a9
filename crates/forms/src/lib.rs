// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form schemas for TMS registrations.
//!
//! Each schema takes a raw request (strings as typed by the user), runs
//! every field rule, and either returns a validated record with typed
//! identifiers or the full list of failures. Failures carry a dotted field
//! path and a Norwegian message for display next to the input.

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

mod company;
mod error;
pub mod fields;
mod issues;
pub mod messages;
mod policy;
mod student;

#[cfg(test)]
mod tests;

pub use company::{CompanyRegistrationRequest, ValidatedCompany, validate_company_registration};
pub use error::{FieldIssue, ValidationErrors, translate_domain_error};
pub use issues::IssueCollector;
pub use policy::{DEFAULT_PAYER_MIN_AGE, ValidationPolicy};
pub use student::{
    ResponsiblePayer, StudentRegistrationRequest, ValidatedPayer, ValidatedStudent,
    validate_student_registration,
};
