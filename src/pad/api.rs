//! # API Facade
//!
//! The single entry point UIs use to pad text. It dispatches to
//! [`crate::align::pad`] and turns the buffer's overflow flag into an error,
//! so callers only ever see complete output or a [`PadError`].
//!
//! `PadApi<C: ColumnSource>` is generic over where the terminal width comes
//! from:
//! - Production: `PadApi<Tty>`
//! - Testing: `PadApi<FixedColumns>` or `PadApi<NoTerminal>`
//!
//! Like the rest of the library it never prints and never exits.

use crate::align;
use crate::error::{PadError, Result};
use crate::model::PadRequest;
use crate::terminal::ColumnSource;

pub struct PadApi<C: ColumnSource> {
    columns: C,
}

impl<C: ColumnSource> PadApi<C> {
    pub fn new(columns: C) -> Self {
        Self { columns }
    }

    /// Pads `request.text`, returning the finished bytes.
    ///
    /// Fails with [`PadError::Overflow`] rather than returning output the
    /// buffer could not hold.
    pub fn pad(&self, request: &PadRequest) -> Result<Vec<u8>> {
        let out = align::pad(request, &self.columns)?;

        if out.has_overflowed() {
            tracing::error!(capacity = out.capacity(), "padded output overflowed");
            return Err(PadError::Overflow {
                capacity: out.capacity(),
            });
        }

        let padded = out.finalize();
        tracing::debug!(bytes = padded.len(), "padded");
        Ok(padded.to_vec())
    }

    pub fn column_source(&self) -> &C {
        &self.columns
    }
}
