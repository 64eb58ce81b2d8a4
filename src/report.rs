//! Console status lines.

use colored::Colorize;

/// Completed step.
pub fn ok(msg: &str) {
    println!("{} {}", "✔".green(), msg);
}

/// Something worth the operator's attention; never fatal.
pub fn warn(msg: &str) {
    println!("{} {}", "!".yellow().bold(), msg);
}
