use crate::buffer::BoundedTextBuffer;
use crate::error::Result;
use crate::fill::FillRun;

use super::fill_needed;

/// Fill first, then text.
pub fn run(text: &[u8], width: usize, fill: char, out: &mut BoundedTextBuffer) -> Result<()> {
    let Some(count) = fill_needed(text, width) else {
        out.append(text);
        return Ok(());
    };

    let run = FillRun::build(count, fill)?;
    out.append(run.as_bytes());
    out.append(text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::codepoint_len;

    fn left(text: &str, width: usize, fill: char) -> Vec<u8> {
        let mut out = BoundedTextBuffer::with_capacity(256).unwrap();
        run(text.as_bytes(), width, fill, &mut out).unwrap();
        assert!(!out.has_overflowed());
        out.finalize().to_vec()
    }

    #[test]
    fn pads_before_text() {
        assert_eq!(left("hi", 5, '*'), b"***hi");
    }

    #[test]
    fn wide_input_unchanged() {
        assert_eq!(left("hello", 3, ' '), b"hello");
        assert_eq!(left("hello", 5, ' '), b"hello");
    }

    #[test]
    fn padded_output_reaches_width_and_ends_with_text() {
        for fill in ['*', 'ß', '€', '🦀'] {
            let out = left("añb", 9, fill);
            assert_eq!(codepoint_len(&out), 9);
            assert!(out.ends_with("añb".as_bytes()));
        }
    }

    #[test]
    fn empty_text_is_pure_fill() {
        assert_eq!(left("", 3, '€'), "€€€".as_bytes());
    }
}
