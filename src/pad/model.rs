use serde::{Deserialize, Serialize};

/// How fill is placed around the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fill before the text.
    Left,
    /// Fill after the text.
    Right,
    /// Equal fill on both sides, odd remainders dropped.
    #[default]
    Both,
    /// Text offset so its centre sits on the terminal's centre.
    #[serde(alias = "centre", alias = "center")]
    Centered,
}

impl Mode {
    /// Matches a user-supplied mode name.
    ///
    /// Matching is case-insensitive and by prefix, so `LEFT`, `left` and
    /// `leftmost` all select [`Mode::Left`]. Both spellings of centre are
    /// accepted. Returns `None` for anything else.
    pub fn from_arg(s: &str) -> Option<Self> {
        let starts_with = |name: &str| {
            s.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
        };

        if starts_with("left") {
            Some(Mode::Left)
        } else if starts_with("right") {
            Some(Mode::Right)
        } else if starts_with("both") {
            Some(Mode::Both)
        } else if starts_with("center") || starts_with("centre") {
            Some(Mode::Centered)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Left => "left",
            Mode::Right => "right",
            Mode::Both => "both",
            Mode::Centered => "centre",
        };
        f.write_str(name)
    }
}

/// A fully validated padding request.
///
/// `text` is raw bytes: it is expected to be UTF-8 but is never trusted to be.
/// `width` is counted in codepoints, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadRequest {
    pub text: Vec<u8>,
    pub width: usize,
    pub fill: char,
    pub mode: Mode,
}

impl PadRequest {
    pub fn new(text: impl Into<Vec<u8>>, width: usize, fill: char, mode: Mode) -> Self {
        Self {
            text: text.into(),
            width,
            fill,
            mode,
        }
    }
}
