//! Status messages on stderr. Stdout is reserved for the generated matrix.

use console::style;

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").for_stderr().green().bold(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("ℹ").for_stderr().blue().bold(), message);
}

pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        style("⚠").for_stderr().yellow().bold(),
        style(message).for_stderr().yellow()
    );
}
