use crate::buffer::BoundedTextBuffer;
use crate::error::Result;
use crate::fill::FillRun;

use super::fill_needed;

/// Text first, then fill.
pub fn run(text: &[u8], width: usize, fill: char, out: &mut BoundedTextBuffer) -> Result<()> {
    let Some(count) = fill_needed(text, width) else {
        out.append(text);
        return Ok(());
    };

    let run = FillRun::build(count, fill)?;
    out.append(text);
    out.append(run.as_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::codepoint_len;

    fn right(text: &str, width: usize, fill: char) -> Vec<u8> {
        let mut out = BoundedTextBuffer::with_capacity(256).unwrap();
        run(text.as_bytes(), width, fill, &mut out).unwrap();
        out.finalize().to_vec()
    }

    #[test]
    fn pads_after_text() {
        assert_eq!(right("hi", 5, '*'), b"hi***");
    }

    #[test]
    fn wide_input_unchanged() {
        assert_eq!(right("hello", 2, '*'), b"hello");
    }

    #[test]
    fn multibyte_fill_after_multibyte_text() {
        let out = right("日本", 5, '€');
        assert_eq!(out, "日本€€€".as_bytes());
        assert_eq!(codepoint_len(&out), 5);
    }
}
