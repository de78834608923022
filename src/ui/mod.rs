//! Terminal output for the `git-changelog` binary.
//!
//! Everything here goes to stderr so stdout carries only the release notes.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").for_stderr().green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").for_stderr().yellow(), message);
}

/// Report a step that decided not to run.
pub fn display_skipped(step: &str, reason: &str) {
    eprintln!("{} {} skipped: {}", style("•").for_stderr().dim(), step, reason);
}

/// Display a boundary warning with yellow styling.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠").for_stderr().yellow().bold(), warning_message(warning));
}

/// Message shown for a boundary warning, without styling.
pub fn warning_message(warning: &BoundaryWarning) -> String {
    format!("Warning: {}", warning)
}
