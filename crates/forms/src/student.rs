// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student registration schema.

use crate::error::{ValidationErrors, translate_domain_error};
use crate::fields;
use crate::issues::IssueCollector;
use crate::messages;
use crate::policy::ValidationPolicy;
use serde::{Deserialize, Serialize};
use time::Date;
use tms_domain::Personnummer;
use tracing::debug;

/// Path prefix for responsible payer fields.
const PAYER_PATH: &str = "responsible_payer";

/// A student registration as submitted.
///
/// Missing fields deserialize as empty strings and are reported as
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentRegistrationRequest {
    /// The student's first name.
    pub first_name: String,
    /// The student's last name.
    pub last_name: String,
    /// The student's personnummer.
    pub personnummer: String,
    /// Contact e-mail.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Four-digit postal code.
    pub postal_code: String,
    /// Postal town.
    pub city: String,
    /// The person paying for the course, if not the student.
    pub responsible_payer: Option<ResponsiblePayer>,
}

/// The responsible payer sub-form.
///
/// Its fields are only checked when `enabled` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiblePayer {
    /// Whether the student has a separate payer.
    pub enabled: bool,
    /// The payer's first name.
    pub first_name: String,
    /// The payer's last name.
    pub last_name: String,
    /// The payer's personnummer.
    pub personnummer: String,
    /// The payer's e-mail.
    pub email: String,
    /// The payer's phone number.
    pub phone: String,
    /// The payer's street address.
    pub address: String,
    /// The payer's postal code.
    pub postal_code: String,
    /// The payer's postal town.
    pub city: String,
}

/// A student registration that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedStudent {
    pub first_name: String,
    pub last_name: String,
    pub personnummer: Personnummer,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub responsible_payer: Option<ValidatedPayer>,
}

/// A responsible payer that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPayer {
    pub first_name: String,
    pub last_name: String,
    pub personnummer: Personnummer,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

/// Validates a student registration.
///
/// # Arguments
///
/// * `request` - The submitted form
/// * `policy` - Age bounds for the student and the payer
/// * `today` - The date ages are computed on
///
/// # Errors
///
/// Returns every failed rule if:
/// - A required field is blank or malformed
/// - The personnummer fails validation or encodes an impossible date
/// - The student is younger than `policy.student_min_age`
/// - An enabled responsible payer fails any of its own rules
pub fn validate_student_registration(
    request: &StudentRegistrationRequest,
    policy: &ValidationPolicy,
    today: Date,
) -> Result<ValidatedStudent, ValidationErrors> {
    let mut issues: IssueCollector = IssueCollector::new();

    let first_name: Option<String> =
        issues.check("first_name", fields::required(&request.first_name));
    let last_name: Option<String> =
        issues.check("last_name", fields::required(&request.last_name));
    let personnummer: Option<Personnummer> =
        issues.check("personnummer", fields::personnummer(&request.personnummer));

    if let Some(pnr) = personnummer {
        check_student_age(pnr, policy, today, &mut issues);
    }

    let email: Option<String> = issues.check("email", fields::email(&request.email));
    let phone: Option<String> = issues.check("phone", fields::phone(&request.phone));
    let address: Option<String> = issues.check("address", fields::required(&request.address));
    let postal_code: Option<String> =
        issues.check("postal_code", fields::postal_code(&request.postal_code));
    let city: Option<String> = issues.check("city", fields::required(&request.city));

    let responsible_payer: Option<Option<ValidatedPayer>> = match &request.responsible_payer {
        Some(payer) if payer.enabled => {
            validate_payer(payer, &request.personnummer, policy, today, &mut issues).map(Some)
        }
        _ => Some(None),
    };

    let student: Option<ValidatedStudent> = match (
        first_name,
        last_name,
        personnummer,
        email,
        phone,
        address,
        postal_code,
        city,
        responsible_payer,
    ) {
        (
            Some(first_name),
            Some(last_name),
            Some(personnummer),
            Some(email),
            Some(phone),
            Some(address),
            Some(postal_code),
            Some(city),
            Some(responsible_payer),
        ) => Some(ValidatedStudent {
            first_name,
            last_name,
            personnummer,
            email,
            phone,
            address,
            postal_code,
            city,
            responsible_payer,
        }),
        _ => None,
    };

    issues.into_result(student).inspect_err(|errors| {
        debug!(issues = errors.len(), "Student registration rejected");
    })
}

fn check_student_age(
    pnr: Personnummer,
    policy: &ValidationPolicy,
    today: Date,
    issues: &mut IssueCollector,
) {
    if let Err(err) = pnr.birth_date() {
        issues.push("personnummer", translate_domain_error(&err));
        return;
    }

    if let Some(min_age) = policy.student_min_age {
        if !pnr.is_at_least_age(min_age, today) {
            issues.push("personnummer", messages::student_too_young(min_age));
        }
    }
}

/// Validates an enabled responsible payer, recording issues under
/// `responsible_payer.*`.
///
/// The payer's personnummer is compared against the student's raw input
/// and checked against the payer age bound independently, so both issues
/// can be reported together.
fn validate_payer(
    payer: &ResponsiblePayer,
    student_personnummer: &str,
    policy: &ValidationPolicy,
    today: Date,
    issues: &mut IssueCollector,
) -> Option<ValidatedPayer> {
    let path = |field: &str| format!("{PAYER_PATH}.{field}");

    let first_name: Option<String> =
        issues.check(&path("first_name"), fields::required(&payer.first_name));
    let last_name: Option<String> =
        issues.check(&path("last_name"), fields::required(&payer.last_name));
    let personnummer: Option<Personnummer> =
        issues.check(&path("personnummer"), fields::personnummer(&payer.personnummer));

    if let Some(pnr) = personnummer {
        if pnr.to_string() == student_personnummer.trim() {
            issues.push(path("personnummer"), messages::PAYER_SAME_AS_STUDENT);
        }
        match pnr.age_on(today) {
            Ok(age) if age < i32::from(policy.payer_min_age) => {
                issues.push(
                    path("personnummer"),
                    messages::payer_too_young(policy.payer_min_age),
                );
            }
            Ok(_) => {}
            Err(err) => issues.push(path("personnummer"), translate_domain_error(&err)),
        }
    }

    let email: Option<String> = issues.check(&path("email"), fields::email(&payer.email));
    let phone: Option<String> = issues.check(&path("phone"), fields::phone(&payer.phone));
    let address: Option<String> =
        issues.check(&path("address"), fields::required(&payer.address));
    let postal_code: Option<String> =
        issues.check(&path("postal_code"), fields::postal_code(&payer.postal_code));
    let city: Option<String> = issues.check(&path("city"), fields::required(&payer.city));

    Some(ValidatedPayer {
        first_name: first_name?,
        last_name: last_name?,
        personnummer: personnummer?,
        email: email?,
        phone: phone?,
        address: address?,
        postal_code: postal_code?,
        city: city?,
    })
}
