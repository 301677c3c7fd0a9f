use std::io::{self, Write};

use colored::Colorize;

/// Print text to stdout verbatim
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}

/// Progress line on stderr, keeping stdout free for the document
pub fn step(message: &str) {
    eprintln!("{} {}", "→".cyan(), message);
}

/// Completion line on stderr
pub fn done(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Failure line on stderr
pub fn failed(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}
