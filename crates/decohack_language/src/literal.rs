//! Decoding of the lexemes the parser gives meaning to: integers, frame
//! letters and map lump names.

use thiserror::Error;

/// Why a number lexeme is not a 32-bit integer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegerError {
    /// The lexeme has a fractional part.
    #[error("\"{0}\" is not an integer.")]
    Fraction(String),
    /// A `0x` lexeme with a non-hex digit.
    #[error("{0} could not be parsed.")]
    BadDigit(String),
    /// The value does not fit in 32 signed bits.
    #[error("Integer \"{0}\" is out of range.")]
    Magnitude(String),
}

/// Decodes a non-negative integer lexeme: decimal or `0x` hexadecimal.
///
/// # Errors
/// Fails on a fraction, a bad digit, or a value above `i32::MAX`.
pub fn parse_integer(lexeme: &str) -> Result<i32, IntegerError> {
    let value = if let Some(hex) = lexeme
        .strip_prefix("0x")
        .or_else(|| lexeme.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IntegerError::BadDigit(hex.to_string()));
        }
        u64::from_str_radix(hex, 16).ok()
    } else if lexeme.contains('.') {
        return Err(IntegerError::Fraction(lexeme.to_string()));
    } else {
        if lexeme.is_empty() || !lexeme.chars().all(|c| c.is_ascii_digit()) {
            return Err(IntegerError::BadDigit(lexeme.to_string()));
        }
        lexeme.parse::<u64>().ok()
    };

    value
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| IntegerError::Magnitude(lexeme.to_string()))
}

/// Highest frame letter.
pub const LAST_FRAME_LETTER: char = ']';

/// Decodes one frame letter: `'A'` is 0, `']'` is 28.
#[must_use]
pub fn decode_frame_letter(c: char) -> Option<i32> {
    if ('A'..=LAST_FRAME_LETTER).contains(&c) {
        // Range-checked above, so this fits.
        Some(c as i32 - 'A' as i32)
    } else {
        None
    }
}

/// Decodes a frame lexeme such as `ABC` or `A[\]`.
///
/// # Errors
/// Returns the first character outside `A` to `]`.
pub fn decode_frames(lexeme: &str) -> Result<Vec<i32>, char> {
    lexeme
        .chars()
        .map(|c| decode_frame_letter(c).ok_or(c))
        .collect()
}

/// Decodes a map lump name: `E#M#` gives `(episode, map)`, `MAP##` gives
/// `(0, map)`. Case-insensitive.
#[must_use]
pub fn parse_map_ref(lexeme: &str) -> Option<(u32, u32)> {
    let upper = lexeme.to_ascii_uppercase();
    if let Some(rest) = upper.strip_prefix("MAP") {
        if rest.len() >= 2 && rest.chars().all(|c| c.is_ascii_digit()) {
            return rest.parse().ok().map(|map| (0, map));
        }
        return None;
    }
    let rest = upper.strip_prefix('E')?;
    let (episode, map) = rest.split_once('M')?;
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if digits(episode) && digits(map) {
        Some((episode.parse().ok()?, map.parse().ok()?))
    } else {
        None
    }
}
