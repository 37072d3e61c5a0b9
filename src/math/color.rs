use std::str::FromStr;

use thiserror::Error;

/// Why a color string failed to parse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Input does not start with `rgb` (hex codes, named colors, etc).
    #[error("expected `rgb` prefix")]
    MissingPrefix,
    /// A required punctuation byte was missing. `rgba(...)` lands here:
    /// the alpha `a` sits where `(` must be.
    #[error("expected `{0}`")]
    Expected(char),
    /// A channel is empty, non-decimal, or overflows u32.
    #[error("invalid channel value")]
    InvalidChannel,
    /// Bytes remain after the closing `)`.
    #[error("trailing input after `)`")]
    TrailingInput,
}

/// An RGB triple parsed from strict `rgb(R, G, B)` notation.
///
/// Accepted input: case-insensitive `rgb` prefix, optional whitespace around
/// the parenthesis, commas, and values, decimal integer channels. Anything
/// else (`rgba()`, `#hex`, named colors) is rejected rather than coerced.
///
/// Channels are NOT clamped to 0-255: `rgb(300, 0, 0)` parses and keeps the
/// 300. The only way to construct a `Color` is `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(s);
        scanner.prefix()?;
        scanner.expect(b'(')?;
        let red = scanner.channel()?;
        scanner.expect(b',')?;
        let green = scanner.channel()?;
        scanner.expect(b',')?;
        let blue = scanner.channel()?;
        scanner.expect(b')')?;
        if !scanner.at_end() {
            return Err(ParseColorError::TrailingInput);
        }
        Ok(Color { red, green, blue })
    }
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn skip_ws(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    /// `rgb`, case-insensitive, anchored at the start (no leading whitespace).
    fn prefix(&mut self) -> Result<(), ParseColorError> {
        if self.bytes.len() >= 3 && self.bytes[..3].eq_ignore_ascii_case(b"rgb") {
            self.pos = 3;
            Ok(())
        } else {
            Err(ParseColorError::MissingPrefix)
        }
    }

    fn expect(&mut self, want: u8) -> Result<(), ParseColorError> {
        self.skip_ws();
        if self.bytes.get(self.pos) == Some(&want) {
            self.pos += 1;
            Ok(())
        } else {
            Err(ParseColorError::Expected(want as char))
        }
    }

    fn channel(&mut self) -> Result<u32, ParseColorError> {
        self.skip_ws();
        let mut value: u32 = 0;
        let mut seen_digit = false;
        while let Some(&b) = self.bytes.get(self.pos) {
            if !b.is_ascii_digit() {
                break;
            }
            seen_digit = true;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or(ParseColorError::InvalidChannel)?;
            self.pos += 1;
        }
        if !seen_digit {
            return Err(ParseColorError::InvalidChannel);
        }
        Ok(value)
    }

    /// The closing `)` must be the last byte, not even trailing whitespace.
    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}
