//! # Alignment Algorithms
//!
//! Each submodule writes fill and text into a caller-supplied
//! [`BoundedTextBuffer`]. They never size buffers and never check the
//! overflow flag; that is the job of [`pad`] and of the API facade.
//!
//! All four share the same pass-through rule: text that is already at least
//! as wide as the target is copied verbatim, never truncated.
//!
//! - [`left`]: fill, then text
//! - [`right`]: text, then fill
//! - [`both`]: one half-width run on each side, odd remainder dropped
//! - [`centered`]: fill offsetting the text's centre onto the terminal's centre

use crate::buffer::BoundedTextBuffer;
use crate::error::{PadError, Result};
use crate::fill::codepoint_len;
use crate::model::{Mode, PadRequest};
use crate::terminal::ColumnSource;

pub mod both;
pub mod centered;
pub mod left;
pub mod right;

/// Worst-case UTF-8 width of one fill codepoint.
pub const MAX_FILL_BYTES: usize = 4;

/// Room kept past the computed size for the buffer's terminator slot.
const SPARE_BYTES: usize = 1;

/// Codepoints of fill needed to bring `text` up to `width`, or `None` when
/// it is already wide enough.
pub(crate) fn fill_needed(text: &[u8], width: usize) -> Option<usize> {
    let slen = codepoint_len(text);
    if slen >= width {
        None
    } else {
        Some(width - slen)
    }
}

/// Byte capacity that holds `text` plus `fill_codepoints` of the widest
/// possible fill character without overflowing.
pub fn capacity_for(text: &[u8], fill_codepoints: usize) -> Result<usize> {
    fill_codepoints
        .checked_mul(MAX_FILL_BYTES)
        .and_then(|fill| fill.checked_add(text.len()))
        .and_then(|total| total.checked_add(SPARE_BYTES))
        .ok_or_else(|| {
            PadError::Allocation(format!(
                "buffer for {} text bytes and {fill_codepoints} fill codepoints overflows usize",
                text.len()
            ))
        })
}

/// Sizes a buffer for `request` and runs the matching alignment.
///
/// `columns` is only consulted for [`Mode::Centered`]; if it cannot report a
/// width the request fails before anything is allocated.
pub fn pad<C: ColumnSource + ?Sized>(
    request: &PadRequest,
    columns: &C,
) -> Result<BoundedTextBuffer> {
    let PadRequest {
        text,
        width,
        fill,
        mode,
    } = request;

    tracing::debug!(
        mode = %mode,
        width,
        text_bytes = text.len(),
        fill = %fill.escape_debug(),
        "padding request"
    );

    match mode {
        Mode::Left => {
            let mut out = BoundedTextBuffer::with_capacity(capacity_for(text, *width)?)?;
            left::run(text, *width, *fill, &mut out)?;
            Ok(out)
        }
        Mode::Right => {
            let mut out = BoundedTextBuffer::with_capacity(capacity_for(text, *width)?)?;
            right::run(text, *width, *fill, &mut out)?;
            Ok(out)
        }
        Mode::Both => {
            let mut out = BoundedTextBuffer::with_capacity(capacity_for(text, *width)?)?;
            both::run(text, *width, *fill, &mut out)?;
            Ok(out)
        }
        Mode::Centered => {
            let terminal_columns = columns.columns()?;
            let offset = centered::left_offset(terminal_columns, *width);
            let mut out = BoundedTextBuffer::with_capacity(capacity_for(text, offset)?)?;
            centered::run(text, *width, *fill, terminal_columns, &mut out)?;
            Ok(out)
        }
    }
}
