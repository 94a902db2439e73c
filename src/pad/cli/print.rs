use colored::Colorize;
use pad::error::{PadError, Result};
use std::io::Write;

use super::setup::usage;

/// Writes the padded bytes and a newline to stdout, untouched.
pub(super) fn print_padded(padded: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(padded)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

pub(super) fn print_error(err: &PadError) {
    eprintln!("{} {}", "Error:".red(), err);
}

pub(super) fn print_usage() {
    eprintln!("{}", usage());
}

pub(super) fn print_usage_error(message: &str) {
    eprintln!("{}", message.red());
    print_usage();
}
