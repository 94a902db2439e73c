use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;

/// Maps `-v` repetitions to a level. Warnings are always shown.
pub(super) fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a compact stderr subscriber. stdout is reserved for the result.
pub(super) fn init(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("pad: logging disabled: {e}");
    }
}
