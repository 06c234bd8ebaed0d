//! Byte classification.
//!
//! Every byte value maps to exactly one [`ByteCategory`] through a
//! 256-entry table built at compile time. The driver looks up the current
//! byte once per token and dispatches on the result; run consumers look up
//! each following byte to decide whether the run continues.

/// Broad class of a single source byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteCategory {
    /// Control characters other than tab/CR/LF, and `0x7F`.
    Invalid,
    /// ASCII `A-Z` and `a-z`.
    Letter,
    /// ASCII `0-9`.
    Digit,
    /// Space, tab, carriage return, line feed.
    Whitespace,
    /// Printable ASCII (`0x21..=0x7E`) that is neither letter nor digit.
    Symbol,
    /// Any byte `>= 0x80`: the head (or a stray tail) of a UTF-8 sequence.
    UnicodeLead,
    /// `0x00`. Only meaningful as the sentinel one past the content.
    EndOfInput,
}

impl ByteCategory {
    /// Stable lowercase name for logs and driver output.
    pub const fn name(self) -> &'static str {
        match self {
            ByteCategory::Invalid => "invalid",
            ByteCategory::Letter => "letter",
            ByteCategory::Digit => "digit",
            ByteCategory::Whitespace => "whitespace",
            ByteCategory::Symbol => "symbol",
            ByteCategory::UnicodeLead => "unicode-lead",
            ByteCategory::EndOfInput => "end-of-input",
        }
    }
}

impl std::fmt::Display for ByteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule applied once per byte value when building [`CATEGORY_TABLE`].
const fn classify_byte(b: u8) -> ByteCategory {
    match b {
        0x00 => ByteCategory::EndOfInput,
        b'A'..=b'Z' | b'a'..=b'z' => ByteCategory::Letter,
        b'0'..=b'9' => ByteCategory::Digit,
        b' ' | b'\t' | b'\r' | b'\n' => ByteCategory::Whitespace,
        0x21..=0x7E => ByteCategory::Symbol,
        0x80..=0xFF => ByteCategory::UnicodeLead,
        _ => ByteCategory::Invalid,
    }
}

/// Category of every byte value, indexed by the byte.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CATEGORY_TABLE: [ByteCategory; 256] = {
    let mut table = [ByteCategory::Invalid; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = classify_byte(i as u8);
        i += 1;
    }
    table
};

/// Returns the category of `b`.
///
/// `0x00` always reports [`ByteCategory::EndOfInput`]; whether it is the
/// real sentinel or an interior NUL depends on the position, which only the
/// cursor knows.
#[inline]
pub fn category_of(b: u8) -> ByteCategory {
    CATEGORY_TABLE[b as usize]
}

/// Returns `true` for bytes that extend an identifier run.
#[inline]
pub fn is_letter(b: u8) -> bool {
    category_of(b) == ByteCategory::Letter
}

/// Returns `true` for ASCII decimal digits.
#[inline]
pub fn is_digit(b: u8) -> bool {
    category_of(b) == ByteCategory::Digit
}

/// Returns `true` for space, tab, carriage return and line feed.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    category_of(b) == ByteCategory::Whitespace
}

/// Returns `true` for letters or digits (the body of an alternate-base numeral).
#[inline]
pub fn is_letter_or_digit(b: u8) -> bool {
    matches!(category_of(b), ByteCategory::Letter | ByteCategory::Digit)
}
