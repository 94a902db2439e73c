use crate::buffer::BoundedTextBuffer;
use crate::error::Result;
use crate::fill::FillRun;

use super::fill_needed;

/// Half the missing width on each side.
///
/// The split floors, so an odd remainder is dropped and the result is one
/// codepoint short of `width`. The same run is appended on both sides.
pub fn run(text: &[u8], width: usize, fill: char, out: &mut BoundedTextBuffer) -> Result<()> {
    let Some(count) = fill_needed(text, width) else {
        out.append(text);
        return Ok(());
    };

    let half = FillRun::build(count / 2, fill)?;
    out.append(half.as_bytes());
    out.append(text);
    out.append(half.as_bytes());
    Ok(())
}
