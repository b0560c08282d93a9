// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Company (bedrift) registration schema.

use crate::error::ValidationErrors;
use crate::fields;
use crate::issues::IssueCollector;
use serde::{Deserialize, Serialize};
use tms_domain::{Kontonummer, Organisasjonsnummer};
use tracing::debug;

/// A company registration as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRegistrationRequest {
    /// Registered company name.
    pub name: String,
    /// Organization number, plain or grouped (`923 609 016`).
    pub organisasjonsnummer: String,
    /// Invoice account; may be left blank.
    pub kontonummer: String,
    /// Invoice e-mail.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Four-digit postal code.
    pub postal_code: String,
    /// Postal town.
    pub city: String,
    /// Named contact at the company; may be left blank.
    pub contact_person: String,
}

/// A company registration that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedCompany {
    pub name: String,
    pub organisasjonsnummer: Organisasjonsnummer,
    pub kontonummer: Option<Kontonummer>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub contact_person: Option<String>,
}

/// Validates a company registration.
///
/// # Errors
///
/// Returns every failed rule if a required field is blank or malformed,
/// the organisasjonsnummer fails validation, or a non-blank kontonummer
/// fails validation.
pub fn validate_company_registration(
    request: &CompanyRegistrationRequest,
) -> Result<ValidatedCompany, ValidationErrors> {
    let mut issues: IssueCollector = IssueCollector::new();

    let name: Option<String> = issues.check("name", fields::required(&request.name));
    let organisasjonsnummer: Option<Organisasjonsnummer> = issues.check(
        "organisasjonsnummer",
        fields::organisasjonsnummer(&request.organisasjonsnummer),
    );
    let kontonummer: Option<Option<Kontonummer>> = issues.check(
        "kontonummer",
        fields::optional_kontonummer(&request.kontonummer),
    );
    let email: Option<String> = issues.check("email", fields::email(&request.email));
    let phone: Option<String> = issues.check("phone", fields::phone(&request.phone));
    let address: Option<String> = issues.check("address", fields::required(&request.address));
    let postal_code: Option<String> =
        issues.check("postal_code", fields::postal_code(&request.postal_code));
    let city: Option<String> = issues.check("city", fields::required(&request.city));

    let company: Option<ValidatedCompany> = match (
        name,
        organisasjonsnummer,
        kontonummer,
        email,
        phone,
        address,
        postal_code,
        city,
    ) {
        (
            Some(name),
            Some(organisasjonsnummer),
            Some(kontonummer),
            Some(email),
            Some(phone),
            Some(address),
            Some(postal_code),
            Some(city),
        ) => Some(ValidatedCompany {
            name,
            organisasjonsnummer,
            kontonummer,
            email,
            phone,
            address,
            postal_code,
            city,
            contact_person: fields::optional(&request.contact_person),
        }),
        _ => None,
    };

    issues.into_result(company).inspect_err(|errors| {
        debug!(issues = errors.len(), "Company registration rejected");
    })
}
