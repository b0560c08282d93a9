// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod report;

use clap::{Parser, Subcommand};
use report::{FormReport, KontonummerReport, OrganisasjonsnummerReport, PersonnummerReport};
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use tms_forms::{
    CompanyRegistrationRequest, StudentRegistrationRequest, ValidatedCompany, ValidatedStudent,
    ValidationPolicy, validate_company_registration, validate_student_registration,
};
use tracing::{error, info};

/// Format accepted by `--today`.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Exit status when the input failed validation.
const EXIT_INVALID: i32 = 1;

/// Exit status when the input could not be read or parsed.
const EXIT_ERROR: i32 = 2;

/// TMS Check - validates Norwegian identifiers and registration forms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a personnummer and report the holder's birth date, gender and age
    Personnummer {
        /// The 11-digit number
        value: String,

        /// Also require the holder to be at least this old
        #[arg(long)]
        min_age: Option<u8>,

        /// Date ages are computed on (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// Check a 9-digit organisasjonsnummer
    Organisasjonsnummer {
        /// The number, without spaces
        value: String,
    },
    /// Check an 11-digit kontonummer; spaces and dots are ignored
    Kontonummer {
        /// The account number
        value: String,
    },
    /// Validate a student registration JSON file
    Student {
        /// Path to the registration JSON
        file: PathBuf,

        /// Path to a validation policy JSON; defaults apply when omitted
        #[arg(long)]
        policy: Option<PathBuf>,

        /// Date ages are computed on (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// Validate a company registration JSON file
    Company {
        /// Path to the registration JSON
        file: PathBuf,
    },
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, DATE_FORMAT).map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn resolve_today(today: Option<Date>) -> Date {
    today.unwrap_or_else(|| OffsetDateTime::now_utc().date())
}

/// Reads and deserializes a JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|err| format!("Failed to parse {}: {err}", path.display()))?;
    Ok(value)
}

fn print_report<R: Serialize>(report: &R) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Runs one command and prints its report.
///
/// Returns whether the input passed.
fn run(command: &Command) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Command::Personnummer {
            value,
            min_age,
            today,
        } => {
            info!("Checking personnummer");
            let report: PersonnummerReport =
                PersonnummerReport::new(value, *min_age, resolve_today(*today));
            print_report(&report)?;
            Ok(report.passed())
        }
        Command::Organisasjonsnummer { value } => {
            info!("Checking organisasjonsnummer");
            let report: OrganisasjonsnummerReport = OrganisasjonsnummerReport::new(value);
            print_report(&report)?;
            Ok(report.valid)
        }
        Command::Kontonummer { value } => {
            info!("Checking kontonummer");
            let report: KontonummerReport = KontonummerReport::new(value);
            print_report(&report)?;
            Ok(report.valid)
        }
        Command::Student {
            file,
            policy,
            today,
        } => {
            info!("Validating student registration from {}", file.display());
            let request: StudentRegistrationRequest = read_json(file)?;
            let policy: ValidationPolicy = match policy {
                Some(path) => read_json(path)?,
                None => ValidationPolicy::default(),
            };
            let report: FormReport<ValidatedStudent> =
                validate_student_registration(&request, &policy, resolve_today(*today)).into();
            print_report(&report)?;
            Ok(report.valid)
        }
        Command::Company { file } => {
            info!("Validating company registration from {}", file.display());
            let request: CompanyRegistrationRequest = read_json(file)?;
            let report: FormReport<ValidatedCompany> =
                validate_company_registration(&request).into();
            print_report(&report)?;
            Ok(report.valid)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout is reserved for the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args.command) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(EXIT_INVALID),
        Err(err) => {
            error!("{err}");
            std::process::exit(EXIT_ERROR);
        }
    }
}
