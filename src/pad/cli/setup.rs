use clap::{ArgAction, CommandFactory, Parser};
use pad::config::PadConfig;
use pad::model::{Mode, PadRequest};
use std::ffi::OsString;

const NO_STRING: &str =
    "No string was passed. If you want to pad an empty string, please use --string";
const BAD_LENGTH: &str = "Invalid length passed to -l!";
const ZERO_LENGTH: &str = "Length should be a non-zero positive integer.";
const NO_CHAR: &str = "-c was set, but no char was given.";

#[derive(Parser, Debug)]
#[command(
    name = "pad",
    bin_name = "pad",
    disable_help_flag = true,
    disable_version_flag = true,
    override_usage = "pad [-l LENGTH] [-c CHAR] [-m MODE] STRING\n       pad [OPTIONS] -- WORDS..."
)]
#[command(about = "Pad a string to a given width", long_about = None)]
pub struct Cli {
    /// Width of the result in characters (decimal, 0x hex or 0 octal)
    #[arg(short, long, value_name = "LENGTH", value_parser = parse_length)]
    pub length: Option<usize>,

    /// Character to pad with
    #[arg(short = 'c', long = "char", value_name = "CHAR", value_parser = parse_fill)]
    pub fill: Option<char>,

    /// Where the padding goes: left, right, both or centre
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// String to pad, may be empty
    #[arg(short, long, value_name = "STRING", allow_hyphen_values = true)]
    pub string: Option<OsString>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(short, long)]
    pub help: bool,

    /// String to pad; the last one wins
    #[arg(value_name = "STRING")]
    pub standalone: Vec<OsString>,

    /// Words after `--`, joined with spaces into one string
    #[arg(last = true, value_name = "WORDS")]
    pub merged: Vec<OsString>,
}

impl Cli {
    /// Resolves flags against `config` into a request for the core.
    ///
    /// Fails with a user-facing message when there is no text to pad.
    pub fn into_request(mut self, config: &PadConfig) -> Result<PadRequest, String> {
        let mode = match self.mode.as_deref() {
            None => config.mode,
            Some(name) => Mode::from_arg(name).unwrap_or_else(|| {
                tracing::warn!(mode = name, fallback = %config.mode, "unknown mode");
                config.mode
            }),
        };

        let text = if !self.merged.is_empty() {
            join_words(self.merged)
        } else if let Some(string) = self.string {
            os_bytes(string)
        } else {
            match self.standalone.pop() {
                Some(last) if !last.is_empty() => os_bytes(last),
                _ => return Err(NO_STRING.to_string()),
            }
        };

        Ok(PadRequest::new(
            text,
            self.length.unwrap_or(config.length),
            self.fill.unwrap_or(config.fill),
            mode,
        ))
    }
}

/// Parses a length the way `strtoull(s, _, 0)` would, then rejects zero.
fn parse_length(s: &str) -> Result<usize, String> {
    let s = s.trim_start();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
    {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    let length = usize::from_str_radix(digits, radix).map_err(|_| BAD_LENGTH.to_string())?;
    if length == 0 {
        return Err(ZERO_LENGTH.to_string());
    }
    Ok(length)
}

/// The first codepoint of the value; anything after it is ignored.
fn parse_fill(s: &str) -> Result<char, String> {
    s.chars().next().ok_or_else(|| NO_CHAR.to_string())
}

fn join_words(words: Vec<OsString>) -> Vec<u8> {
    let mut joined = Vec::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            joined.push(b' ');
        }
        joined.extend(os_bytes(word));
    }
    joined
}

#[cfg(unix)]
fn os_bytes(s: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    s.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(s: OsString) -> Vec<u8> {
    s.to_string_lossy().into_owned().into_bytes()
}

/// Full usage text, including modes and version.
pub fn usage() -> String {
    let help = Cli::command().render_help();
    format!(
        "{help}\nModes are: left, right, centre or both\n{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pad").chain(args.iter().copied())).unwrap()
    }

    fn request(args: &[&str]) -> PadRequest {
        parse(args).into_request(&PadConfig::default()).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_come_from_config() {
        let req = request(&["hello"]);
        assert_eq!(req.text, b"hello");
        assert_eq!(req.width, 80);
        assert_eq!(req.fill, ' ');
        assert_eq!(req.mode, Mode::Both);

        let config = PadConfig {
            length: 12,
            fill: '-',
            mode: Mode::Right,
        };
        let req = parse(&["hello"]).into_request(&config).unwrap();
        assert_eq!((req.width, req.fill, req.mode), (12, '-', Mode::Right));
    }

    #[test]
    fn flags_override_config() {
        let config = PadConfig {
            length: 12,
            fill: '-',
            mode: Mode::Right,
        };
        let req = parse(&["-l", "5", "-c", "*", "-m", "left", "hi"])
            .into_request(&config)
            .unwrap();
        assert_eq!(req, PadRequest::new("hi", 5, '*', Mode::Left));
    }

    #[test]
    fn long_flags() {
        let req = request(&["--length", "7", "--char", "€", "--mode", "CENTRE", "x"]);
        assert_eq!(req, PadRequest::new("x", 7, '€', Mode::Centered));
    }

    #[test]
    fn last_free_argument_wins() {
        assert_eq!(request(&["one", "-l", "3", "two"]).text, b"two");
    }

    #[test]
    fn explicit_string_beats_free_arguments() {
        assert_eq!(request(&["free", "-s", "given"]).text, b"given");
    }

    #[test]
    fn explicit_string_may_be_empty() {
        assert_eq!(request(&["-s", ""]).text, b"");
    }

    #[test]
    fn merged_words_beat_everything() {
        let req = request(&["-s", "given", "free", "--", "hello", "there", "world"]);
        assert_eq!(req.text, b"hello there world");
    }

    #[test]
    fn merged_words_may_look_like_flags() {
        assert_eq!(request(&["--", "-l", "5"]).text, b"-l 5");
    }

    #[test]
    fn missing_string_is_an_error() {
        let err = parse(&["-l", "5"])
            .into_request(&PadConfig::default())
            .unwrap_err();
        assert_eq!(err, NO_STRING);

        let err = parse(&[""]).into_request(&PadConfig::default()).unwrap_err();
        assert_eq!(err, NO_STRING);
    }

    #[test]
    fn unknown_mode_falls_back_to_configured_mode() {
        assert_eq!(request(&["-m", "sideways", "x"]).mode, Mode::Both);
    }

    #[test]
    fn length_accepts_hex_and_octal() {
        assert_eq!(parse_length("42"), Ok(42));
        assert_eq!(parse_length("0x10"), Ok(16));
        assert_eq!(parse_length("010"), Ok(8));
    }

    #[test]
    fn length_rejects_garbage_and_zero() {
        assert_eq!(parse_length("abc"), Err(BAD_LENGTH.to_string()));
        assert_eq!(parse_length(""), Err(BAD_LENGTH.to_string()));
        assert_eq!(parse_length("0"), Err(ZERO_LENGTH.to_string()));
        assert_eq!(parse_length("0x0"), Err(ZERO_LENGTH.to_string()));
    }

    #[test]
    fn fill_takes_first_codepoint() {
        assert_eq!(parse_fill("€uro"), Ok('€'));
        assert_eq!(parse_fill(""), Err(NO_CHAR.to_string()));
    }

    #[test]
    fn invalid_flags_are_parse_errors() {
        let bad: &[&[&str]] = &[
            &["-l"],
            &["-l", "ten", "x"],
            &["-c", "", "x"],
            &["-m"],
            &["--frobnicate", "x"],
        ];
        for args in bad {
            let parsed = Cli::try_parse_from(std::iter::once("pad").chain(args.iter().copied()));
            assert!(parsed.is_err(), "{args:?} should not parse");
        }
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-vv", "x"]).verbose, 2);
    }

    #[test]
    fn help_flag_is_ours() {
        assert!(parse(&["-h"]).help);
    }

    #[test]
    fn usage_mentions_modes_and_version() {
        let text = usage();
        assert!(text.contains("Modes are: left, right, centre or both"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("--length"));
    }
}
