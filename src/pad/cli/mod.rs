//! # CLI Behavior
//!
//! This is the command-line client for the pad library. It is the only place
//! that knows about arguments, stdout/stderr and exit codes.
//!
//! ## Where the Text Comes From
//!
//! Priority order:
//!
//! 1. **Merged words**: everything after `--`, joined with single spaces
//!    - `pad -l 20 -- hello there world`
//! 2. **Explicit string**: `-s/--string`, the only way to pad an empty string
//!    - `pad -l 5 -s ""`
//! 3. **Free argument**: the last argument that is not a flag or flag value
//!    - `pad -l 10 hello`
//!
//! ## Defaults
//!
//! Flags win over `config.json`, which wins over the built-in defaults
//! (80 columns, space fill, both sides).
//!
//! ## Exit Codes
//!
//! - `0`: padded text written to stdout
//! - `1`: padding failed (allocation, overflow, no terminal for centre mode, I/O)
//! - `2`: usage error or `--help`; usage goes to stderr, nothing to stdout
//!
//! ## Module Structure
//!
//! - `commands`: Top-level flow and exit codes
//! - `setup`: Argument parsing via clap, usage text
//! - `print`: stdout/stderr output
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
