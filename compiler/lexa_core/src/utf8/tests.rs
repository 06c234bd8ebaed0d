use super::*;
use crate::SourceBuffer;

/// Decode once from the start of `source`; return the result and the cursor
/// position afterwards.
fn decode(source: &[u8]) -> (Result<Utf8Sequence, LexErrorKind>, u32) {
    let buf = SourceBuffer::new(source).expect("test source fits in u32");
    let mut cursor = buf.cursor();
    let result = decode_one(&mut cursor);
    (result, cursor.pos())
}

// === Width Table ===

#[test]
fn width_ranges() {
    for b in 0x00..=0xC1u8 {
        assert_eq!(sequence_width(b), 0, "byte 0x{b:02X}");
    }
    for b in 0xC2..=0xDFu8 {
        assert_eq!(sequence_width(b), 2, "byte 0x{b:02X}");
    }
    for b in 0xE0..=0xEFu8 {
        assert_eq!(sequence_width(b), 3, "byte 0x{b:02X}");
    }
    for b in 0xF0..=0xF4u8 {
        assert_eq!(sequence_width(b), 4, "byte 0x{b:02X}");
    }
    for b in 0xF5..=0xFFu8 {
        assert_eq!(sequence_width(b), 0, "byte 0x{b:02X}");
    }
}

#[test]
fn width_agrees_with_std_for_valid_chars() {
    for c in ['\u{80}', 'ą', '\u{7FF}', '\u{800}', '€', '\u{FFFF}', '\u{10000}', '😀'] {
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp);
        assert_eq!(
            sequence_width(encoded.as_bytes()[0]) as usize,
            c.len_utf8(),
            "char {c:?}"
        );
    }
}

#[test]
fn continuation_pattern() {
    assert!(is_continuation(0x80));
    assert!(is_continuation(0xBF));
    assert!(!is_continuation(0x7F));
    assert!(!is_continuation(0xC0));
    assert!(!is_continuation(0x00));
}

// === Successful Decodes ===

#[test]
fn two_byte_sequence() {
    let (result, pos) = decode("ą!".as_bytes());
    assert_eq!(result, Ok(Utf8Sequence { start: 0, len: 2 }));
    assert_eq!(pos, 2);
}

#[test]
fn three_byte_sequence() {
    let (result, pos) = decode("€".as_bytes());
    assert_eq!(result, Ok(Utf8Sequence { start: 0, len: 3 }));
    assert_eq!(pos, 3);
}

#[test]
fn four_byte_sequence() {
    let (result, pos) = decode("😀x".as_bytes());
    assert_eq!(result, Ok(Utf8Sequence { start: 0, len: 4 }));
    assert_eq!(pos, 4);
}

#[test]
fn decodes_only_one_codepoint() {
    let (result, pos) = decode("ąę".as_bytes());
    assert_eq!(result, Ok(Utf8Sequence { start: 0, len: 2 }));
    assert_eq!(pos, 2);
}

// === Errors ===

#[test]
fn stray_continuation_is_invalid_lead() {
    let (result, pos) = decode(&[0x80, b'a']);
    assert_eq!(result, Err(LexErrorKind::InvalidByte));
    assert_eq!(pos, 1, "only the lead byte is consumed");
}

#[test]
fn overlong_two_byte_leads_are_invalid() {
    for lead in [0xC0, 0xC1] {
        let (result, pos) = decode(&[lead, 0x80]);
        assert_eq!(result, Err(LexErrorKind::InvalidByte));
        assert_eq!(pos, 1);
    }
}

#[test]
fn out_of_range_leads_are_invalid() {
    for lead in 0xF5..=0xFFu8 {
        let (result, pos) = decode(&[lead, 0x80, 0x80, 0x80]);
        assert_eq!(result, Err(LexErrorKind::InvalidByte), "lead 0x{lead:02X}");
        assert_eq!(pos, 1);
    }
}

#[test]
fn bad_continuation_stops_before_it() {
    // E2 82 then 'x' instead of a third byte
    let (result, pos) = decode(&[0xE2, 0x82, b'x']);
    assert_eq!(result, Err(LexErrorKind::InvalidByte));
    assert_eq!(pos, 2, "lead and first continuation stay consumed");
}

#[test]
fn lead_followed_by_lead_is_invalid() {
    let (result, pos) = decode(&[0xC4, 0xC4, 0x85]);
    assert_eq!(result, Err(LexErrorKind::InvalidByte));
    assert_eq!(pos, 1);
}

#[test]
fn interior_nul_is_not_a_continuation() {
    let (result, pos) = decode(&[0xC4, 0x00, 0x85]);
    assert_eq!(result, Err(LexErrorKind::InvalidByte));
    assert_eq!(pos, 1);
}

#[test]
fn truncated_at_end_of_input() {
    let (result, pos) = decode(&[0xE2, 0x82]);
    assert_eq!(result, Err(LexErrorKind::TruncatedSequence));
    assert_eq!(pos, 2, "cursor rests on the sentinel");
}

#[test]
fn lone_lead_at_end_is_truncated() {
    let (result, pos) = decode(&[0xF0]);
    assert_eq!(result, Err(LexErrorKind::TruncatedSequence));
    assert_eq!(pos, 1);
}
