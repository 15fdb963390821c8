//! Colored terminal output for treemetrics.
//!
//! Reports and diagrams go to stdout, failures to stderr. `colored` honours
//! NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::fmt::Display;

use colored::Colorize;

/// Top-level failure, printed by `main` before exiting with the error's code.
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Non-fatal notice, e.g. a config location that cannot be resolved.
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "warning".yellow(), msg);
}

/// A passed check, such as the diameter cross-check of `random`.
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// One `label: value` line of a metrics report.
pub fn metric(label: &str, value: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), value);
}

/// Title line above a report.
pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Indented line below a diagram, used for the tree's notations.
pub fn detail(msg: &(impl Display + ?Sized)) {
    println!("  {}", msg);
}

/// Uncolored text that may be piped on: diagrams and TOML.
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
