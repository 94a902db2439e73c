//! # Terminal Width
//!
//! Centered padding needs the terminal's column count. The [`ColumnSource`]
//! trait keeps that lookup out of the alignment code:
//!
//! - [`Tty`]: queries the controlling terminal (production)
//! - [`FixedColumns`]: a known width, for tests and non-interactive callers
//! - [`NoTerminal`]: always unavailable
//!
//! An unavailable width is an error, never a silent default.

use crate::error::{PadError, Result};

pub trait ColumnSource {
    /// Column count, or [`PadError::TerminalUnavailable`].
    fn columns(&self) -> Result<usize>;
}

/// The controlling terminal.
///
/// On Unix this opens `/dev/tty` read-only, so it still works when stdout
/// and stderr are redirected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tty;

impl ColumnSource for Tty {
    #[cfg(unix)]
    fn columns(&self) -> Result<usize> {
        let tty = std::fs::File::open("/dev/tty")
            .map_err(|e| PadError::TerminalUnavailable(format!("/dev/tty: {e}")))?;

        let (terminal_size::Width(cols), _) = terminal_size::terminal_size_of(&tty)
            .ok_or_else(|| {
                PadError::TerminalUnavailable("could not read the size of /dev/tty".into())
            })?;

        tracing::debug!(columns = cols, "queried terminal width");
        Ok(usize::from(cols))
    }

    #[cfg(not(unix))]
    fn columns(&self) -> Result<usize> {
        let (terminal_size::Width(cols), _) = terminal_size::terminal_size().ok_or_else(|| {
            PadError::TerminalUnavailable("no terminal attached".into())
        })?;

        tracing::debug!(columns = cols, "queried terminal width");
        Ok(usize::from(cols))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColumns(pub usize);

impl ColumnSource for FixedColumns {
    fn columns(&self) -> Result<usize> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerminal;

impl ColumnSource for NoTerminal {
    fn columns(&self) -> Result<usize> {
        Err(PadError::TerminalUnavailable("no terminal".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_columns_reports_its_width() {
        assert_eq!(FixedColumns(132).columns().unwrap(), 132);
    }

    #[test]
    fn no_terminal_is_unavailable() {
        assert!(matches!(
            NoTerminal.columns(),
            Err(PadError::TerminalUnavailable(_))
        ));
    }

    #[test]
    fn sources_work_as_trait_objects() {
        let sources: Vec<Box<dyn ColumnSource>> =
            vec![Box::new(FixedColumns(80)), Box::new(NoTerminal)];
        let widths: Vec<_> = sources.iter().map(|s| s.columns().ok()).collect();
        assert_eq!(widths, vec![Some(80), None]);
    }
}
