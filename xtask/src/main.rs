// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo and linting commands CI runs so they can be run locally
//! with the same flags:
//!
//! - `cargo xtask ci` runs lint, deny, machete, build and test in order
//! - `cargo xtask test` runs lib tests, then doc tests
//! - `cargo xtask coverage` writes an lcov report to `target/lcov.info`
//!
//! `cargo xtask fixture` prints synthetic identifiers with correct check
//! digits for use in tests and manual form testing. None of them belong to
//! real people or companies unless by coincidence.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use duct::cmd;
use time::{macros::format_description, Date};
use tms_domain::{
    mod11_check_digit, parse_digits, Personnummer, KONTONUMMER_WEIGHTS,
    ORGANISASJONSNUMMER_WEIGHTS,
};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// First payload tried when generating organisasjonsnummer fixtures.
const ORGANISASJONSNUMMER_SEED: u64 = 91_000_000;

/// First payload tried when generating kontonummer fixtures.
const KONTONUMMER_SEED: u64 = 1_234_567_000;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Check if README.md is up-to-date
    #[command(visible_alias = "cr")]
    CheckReadme,

    /// Generate code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependencies
    #[command(visible_alias = "cd")]
    Deny,

    /// Print synthetic identifiers with valid check digits
    #[command(visible_alias = "fx")]
    Fixture {
        /// Birth date of the generated personnummer (YYYY-MM-DD)
        #[arg(long, default_value = "2000-01-01", value_parser = parse_date)]
        birth_date: Date,

        /// How many of each identifier to print
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    // Check unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Lint markdown files
    #[command(visible_alias = "md")]
    LintMarkdown,

    /// Check for typos in the project
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Fix typos in the project
    #[command(visible_alias = "typos")]
    FixTypos,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Deny => deny(),
            Self::Fixture { birth_date, count } => fixture(birth_date, count),
            Self::Machete => machete(),
            Self::CheckReadme => check_readme(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::LintMarkdown => lint_markdown(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::FixTypos => fix_typos(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
        }
    }
}

/// Run CI checks (lint, build, test)
fn ci() -> Result<()> {
    lint()?;
    deny()?;
    machete()?;
    build()?;
    test()?;
    Ok(())
}

fn deny() -> Result<()> {
    run_cargo(vec!["deny", "check"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Run cargo-rdme to check if README.md is up-to-date with the library documentation
fn check_readme() -> Result<()> {
    run_cargo(vec!["rdme", "--workspace-project", "tms-domain", "--check"])
}

/// Generate code coverage report
fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint formatting, typos, clippy, and docs (and a soft fail on markdown)
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    if let Err(err) = lint_markdown() {
        tracing::warn!("known issue: markdownlint is currently noisy and can be ignored: {err}");
    }
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Lint markdown files using [markdownlint-cli2](https://github.com/DavidAnson/markdownlint-cli2)
fn lint_markdown() -> Result<()> {
    cmd!("markdownlint-cli2", "**/*.md", "!target", "!**/target").run_with_trace()?;

    Ok(())
}

/// Check for typos in the project using [typos-cli](https://github.com/crate-ci/typos/)
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Fix typos in the project
fn fix_typos() -> Result<()> {
    cmd!("typos", "-w").run_with_trace()?;
    Ok(())
}

/// Run lib tests, then doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Print synthetic personnummer, organisasjonsnummer and kontonummer values
fn fixture(birth_date: Date, count: usize) -> Result<()> {
    let individuals = if birth_date.year() < 2000 {
        0..500
    } else {
        500..1000
    };
    let personnummer: Vec<Personnummer> = individuals
        .filter_map(|individual| Personnummer::synthesize(birth_date, individual).ok())
        .take(count)
        .collect();
    if personnummer.is_empty() {
        return Err(eyre!("no personnummer can be synthesized for {birth_date}"));
    }

    println!("# personnummer ({birth_date})");
    for pnr in personnummer {
        println!("{pnr}  {}", pnr.gender());
    }

    println!("# organisasjonsnummer");
    for orgnr in (ORGANISASJONSNUMMER_SEED..)
        .filter_map(|payload| append_check_digit::<8>(payload, &ORGANISASJONSNUMMER_WEIGHTS))
        .take(count)
    {
        println!("{orgnr}");
    }

    println!("# kontonummer");
    for account in (KONTONUMMER_SEED..)
        .filter_map(|payload| append_check_digit::<10>(payload, &KONTONUMMER_WEIGHTS))
        .take(count)
    {
        println!("{account}");
    }

    Ok(())
}

/// Zero-pads `payload` to `N` digits and appends its MOD11 check digit.
///
/// Returns `None` for payloads with no valid check digit.
fn append_check_digit<const N: usize>(payload: u64, weights: &[u32]) -> Option<String> {
    let text = format!("{payload:0width$}", width = N);
    let digits: [u8; N] = parse_digits(&text)?;
    let check = mod11_check_digit(&digits, weights)?;
    Some(format!("{text}{check}"))
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use time::macros::date;
    use tms_domain::{validate_kontonummer, validate_organisasjonsnummer};

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_every_subcommand_parses() {
        for name in [
            "ci",
            "build",
            "check",
            "check-readme",
            "coverage",
            "deny",
            "fixture",
            "machete",
            "lint",
            "lint-clippy",
            "lint-docs",
            "lint-formatting",
            "lint-markdown",
            "lint-typos",
            "fix-clippy",
            "fix-formatting",
            "fix-typos",
            "test",
            "test-docs",
            "test-libs",
        ] {
            assert!(
                Args::try_parse_from(["cargo xtask", name]).is_ok(),
                "failed to parse {name}"
            );
        }
    }

    #[test]
    fn test_fixture_arguments() {
        let args: Args = Args::try_parse_from([
            "cargo xtask",
            "fixture",
            "--birth-date",
            "1990-05-17",
            "--count",
            "3",
        ])
        .expect("arguments should parse");

        match args.command {
            Command::Fixture { birth_date, count } => {
                assert_eq!(birth_date, date!(1990 - 05 - 17));
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_append_check_digit() {
        assert_eq!(
            append_check_digit::<8>(92_360_901, &ORGANISASJONSNUMMER_WEIGHTS).as_deref(),
            Some("923609016")
        );
        assert_eq!(
            append_check_digit::<10>(1_234_567_890, &KONTONUMMER_WEIGHTS).as_deref(),
            Some("12345678903")
        );
        // 9*3 + 1*2 + 8*2 = 45, remainder 1
        assert_eq!(
            append_check_digit::<8>(91_000_008, &ORGANISASJONSNUMMER_WEIGHTS),
            None
        );
    }

    #[test]
    fn test_generated_identifiers_validate() {
        let orgnrs: Vec<String> = (ORGANISASJONSNUMMER_SEED..)
            .filter_map(|payload| append_check_digit::<8>(payload, &ORGANISASJONSNUMMER_WEIGHTS))
            .take(20)
            .collect();
        assert!(orgnrs.iter().all(|orgnr| validate_organisasjonsnummer(orgnr)));

        let accounts: Vec<String> = (KONTONUMMER_SEED..)
            .filter_map(|payload| append_check_digit::<10>(payload, &KONTONUMMER_WEIGHTS))
            .take(20)
            .collect();
        assert!(accounts.iter().all(|account| validate_kontonummer(account)));
    }

    #[test]
    fn test_fixture_rejects_unsupported_birth_year() {
        assert!(fixture(date!(1850 - 01 - 01), 1).is_err());
        assert!(fixture(date!(1990 - 05 - 17), 2).is_ok());
    }
}
