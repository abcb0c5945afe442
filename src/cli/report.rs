//! Report formatting and printing utilities.
//!
//! Separate from the command logic so every printer can be pointed at a
//! custom writer in tests.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::scan::BundleReport;
use crate::update::UpdateOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    print_success_to(message, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

pub fn print_update(outcome: &UpdateOutcome) {
    print_update_to(outcome, &mut io::stdout().lock());
}

pub fn print_update_to<W: Write>(outcome: &UpdateOutcome, writer: &mut W) {
    let message = format!(
        "{} \"{}\" in {}",
        capitalize(outcome.action.as_str()),
        outcome.key,
        outcome.path.display()
    );
    print_success_to(&message, writer);
}

/// Print the outcome of `check`. Returns the number of failed bundles.
pub fn print_bundle_reports(reports: &[BundleReport], root: &Path, verbose: bool) -> usize {
    print_bundle_reports_to(reports, root, verbose, &mut io::stdout().lock())
}

pub fn print_bundle_reports_to<W: Write>(
    reports: &[BundleReport],
    root: &Path,
    verbose: bool,
    writer: &mut W,
) -> usize {
    let mut failures = 0;

    for report in reports {
        let display_path = report.path.strip_prefix(root).unwrap_or(&report.path);
        match &report.result {
            Ok(mapping) => {
                if verbose {
                    let _ = writeln!(
                        writer,
                        "  {} {} ({} {})",
                        SUCCESS_MARK.green(),
                        display_path.display(),
                        mapping.len(),
                        plural(mapping.len(), "entry", "entries")
                    );
                }
            }
            Err(err) => {
                failures += 1;
                let _ = writeln!(writer, "{}: {}", "error".bold().red(), err);
                let _ = writeln!(writer, "  {} {}", "-->".blue(), display_path.display());
            }
        }
    }

    let total = reports.len();
    let message = if failures == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - all readable",
                total,
                plural(total, "bundle", "bundles")
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} {} could not be read",
                failures,
                total,
                plural(total, "bundle", "bundles")
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", message);

    failures
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
