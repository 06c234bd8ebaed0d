//! Permissive numeric literal scanning.
//!
//! The scanner finds where a numeral ends and nothing more. It never
//! rejects: `0x`, `1.`, `1e` and `0b29` are all accepted as they stand. A
//! numeral-shaped run may sit inside a string or comment body that this
//! stage cannot see, so well-formedness is judged later by a stage that
//! knows the surrounding syntax.
//!
//! # Grammar
//!
//! ```text
//! numeric   = alt_base | decimal
//! alt_base  = "0" letter (letter | digit)*
//! decimal   = digit* ("." digit*)? (("e" | "E") ("+" | "-")? digit*)?
//! ```
//!
//! `decimal` is only entered on a digit or on `.` followed by a digit, so it
//! always covers at least one digit.

use crate::classify::{is_digit, is_letter, is_letter_or_digit};
use crate::cursor::Cursor;

/// Returns `true` if a numeric literal starts at the cursor: a digit, or `.`
/// immediately followed by a digit.
#[inline]
pub fn is_numeric_start(cursor: &Cursor<'_>) -> bool {
    match cursor.current() {
        b'0'..=b'9' => true,
        b'.' => is_digit(cursor.peek()),
        _ => false,
    }
}

/// Consume the maximal numeric literal starting at the cursor.
///
/// # Contract
///
/// [`is_numeric_start`] must hold.
pub fn scan_numeric(cursor: &mut Cursor<'_>) {
    debug_assert!(
        is_numeric_start(cursor),
        "scan_numeric called on 0x{:02X} at {}",
        cursor.current(),
        cursor.pos()
    );

    if cursor.current() == b'0' && is_letter(cursor.peek()) {
        cursor.advance(); // '0'
        cursor.advance(); // base indicator
        cursor.eat_while(is_letter_or_digit);
        return;
    }

    cursor.eat_while(is_digit);

    if cursor.current() == b'.' {
        cursor.advance();
        cursor.eat_while(is_digit);
    }

    if matches!(cursor.current(), b'e' | b'E') {
        eat_exponent(cursor);
    }
}

/// Consume `e`/`E`, an optional sign, and any digits.
fn eat_exponent(cursor: &mut Cursor<'_>) {
    cursor.advance(); // 'e' or 'E'
    if matches!(cursor.current(), b'+' | b'-') {
        cursor.advance();
    }
    cursor.eat_while(is_digit);
}
