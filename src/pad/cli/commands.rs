use clap::Parser;
use pad::api::PadApi;
use pad::config::PadConfig;
use pad::sandbox;
use pad::terminal::Tty;

use super::logging;
use super::print::{print_error, print_padded, print_usage, print_usage_error};
use super::setup::Cli;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Runs the CLI and returns the process exit code.
pub fn run() -> i32 {
    if let Err(e) = sandbox::restrict() {
        print_error(&e);
        return EXIT_FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap errors already carry a usage line
            let _ = e.print();
            return EXIT_USAGE;
        }
    };

    logging::init(cli.verbose);

    if cli.help {
        print_usage();
        return EXIT_USAGE;
    }

    let config = load_config();
    let request = match cli.into_request(&config) {
        Ok(request) => request,
        Err(message) => {
            print_usage_error(&message);
            return EXIT_USAGE;
        }
    };

    let api = PadApi::new(Tty);
    match api.pad(&request).and_then(|padded| print_padded(&padded)) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_FAILURE
        }
    }
}

/// A broken config file only costs the user their defaults.
fn load_config() -> PadConfig {
    let Some(dir) = PadConfig::default_dir() else {
        tracing::debug!("no config directory for this platform");
        return PadConfig::default();
    };

    PadConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
        PadConfig::default()
    })
}
