//! Terminal output helpers shared by the commands.
//!
//! Reports go to stdout. Advisory messages go to stderr so they survive
//! stdout being piped into another tool.

use std::fmt::Display;

use colored::{Color, Colorize};

pub fn header(title: &str) {
    println!("{}", title.bold().underline());
}

pub fn subheader(title: &str) {
    println!("{}", title.bold());
}

/// One counter line of a report, like `  Created: 3`.
pub fn stat(label: &str, value: impl Display, color: Color) {
    println!(
        "  {} {}",
        format!("{label}:").dimmed(),
        value.to_string().color(color)
    );
}

/// A note the current run materialized.
pub fn created_file(name: &str) {
    println!("  {} {}", "✓".green(), name);
}

pub fn hint(msg: &str) {
    eprintln!("{} {}", "hint:".cyan().bold(), msg.dimmed());
}

pub fn info(msg: &str) {
    eprintln!("{} {}", "info:".blue().bold(), msg);
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}
