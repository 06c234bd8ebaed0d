//! UTF-8 sequence decoding.
//!
//! Only the structure of a sequence is checked: the lead byte must announce
//! a width of 2-4 and every continuation byte must look like `10xxxxxx`.
//! Overlong three- and four-byte forms and surrogate codepoints are not
//! rejected; that level of validation belongs to a later stage.

use crate::cursor::Cursor;
use crate::lex_error::LexErrorKind;

/// Expected sequence width for each byte value. `0` marks bytes that cannot
/// start a multi-byte sequence (ASCII, stray continuations, `0xC0`/`0xC1`,
/// `0xF5..=0xFF`).
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static SEQUENCE_WIDTH: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = match i as u8 {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        i += 1;
    }
    table
};

/// Returns the total width of the sequence announced by `lead`, or `0` if
/// `lead` is not a valid lead byte.
#[inline]
pub fn sequence_width(lead: u8) -> u32 {
    u32::from(SEQUENCE_WIDTH[lead as usize])
}

/// Returns `true` if `b` has the continuation bit pattern `10xxxxxx`.
#[inline]
pub const fn is_continuation(b: u8) -> bool {
    (b & 0xC0) == 0x80
}

/// Span of one decoded codepoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Utf8Sequence {
    pub start: u32,
    pub len: u32,
}

/// Decode one multi-byte codepoint starting at the cursor.
///
/// On success the cursor sits just past the sequence. On failure the bytes
/// already examined stay consumed: an invalid lead byte consumes just
/// itself, a mismatching continuation byte is left unconsumed, and a
/// truncated sequence consumes everything up to the sentinel.
///
/// # Contract
///
/// The current byte must be `>= 0x80`.
pub fn decode_one(cursor: &mut Cursor<'_>) -> Result<Utf8Sequence, LexErrorKind> {
    let start = cursor.pos();
    let lead = cursor.current();
    debug_assert!(lead >= 0x80, "decode_one called on ASCII byte 0x{lead:02X}");

    let width = sequence_width(lead);
    cursor.advance();
    if width == 0 {
        return Err(LexErrorKind::InvalidByte);
    }

    for _ in 1..width {
        if !cursor.can_advance() {
            return Err(LexErrorKind::TruncatedSequence);
        }
        if !is_continuation(cursor.current()) {
            return Err(LexErrorKind::InvalidByte);
        }
        cursor.advance();
    }

    Ok(Utf8Sequence { start, len: width })
}

#[cfg(test)]
mod tests;
