use crate::buffer::BoundedTextBuffer;
use crate::error::Result;

use super::left;

/// `⌈dividend / divisor⌉` for a non-zero divisor.
pub fn ceil_div(dividend: usize, divisor: usize) -> usize {
    dividend.div_ceil(divisor)
}

/// Codepoints of fill that put the centre of a `width`-wide span on the
/// centre of a `terminal_columns`-wide terminal. Zero when the span is wider
/// than the terminal.
pub fn left_offset(terminal_columns: usize, width: usize) -> usize {
    ceil_div(terminal_columns, 2).saturating_sub(ceil_div(width, 2))
}

/// Leading fill, then the text verbatim.
///
/// `width` only positions the text; nothing is appended after it.
pub fn run(
    text: &[u8],
    width: usize,
    fill: char,
    terminal_columns: usize,
    out: &mut BoundedTextBuffer,
) -> Result<()> {
    let offset = left_offset(terminal_columns, width);
    tracing::debug!(terminal_columns, width, offset, "centering");

    left::run(b"", offset, fill, out)?;
    out.append(text);
    Ok(())
}
