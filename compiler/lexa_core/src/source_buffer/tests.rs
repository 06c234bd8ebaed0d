use super::*;

fn buffer(source: &[u8]) -> SourceBuffer {
    SourceBuffer::new(source).expect("test source fits in u32")
}

// === Construction ===

#[test]
fn empty_source() {
    let buf = buffer(b"");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.encoding_issues().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes(), &[0]);
}

#[test]
fn ascii_source() {
    let buf = buffer(b"hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.as_sentinel_bytes(), b"hello\0");
}

#[test]
fn utf8_multibyte_source() {
    let source = "hello \u{1F600} world"; // emoji (4 bytes)
    let buf = buffer(source.as_bytes());
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn non_utf8_bytes_are_accepted() {
    let buf = buffer(&[0x80, 0xFF, b'a']);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_sentinel_bytes(), &[0x80, 0xFF, b'a', 0]);
}

#[test]
fn exactly_one_sentinel_byte() {
    for len in [0, 1, 10, 63, 64, 65, 1000] {
        let source = vec![b'x'; len];
        let buf = buffer(&source);
        assert_eq!(buf.as_sentinel_bytes().len(), len + 1);
        assert_eq!(buf.as_sentinel_bytes()[len], 0);
    }
}

#[test]
fn too_large_error_message() {
    let err = SourceError::TooLarge {
        len: 5_000_000_000,
        max: SourceBuffer::MAX_LEN,
    };
    assert_eq!(
        err.to_string(),
        "source is 5000000000 bytes; the lexer accepts at most 4294967294 bytes"
    );
}

// === BOM Detection ===

#[test]
fn detects_utf8_bom() {
    let buf = buffer(&[0xEF, 0xBB, 0xBF, b'h', b'i']);
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn utf16_bom_is_plain_bytes() {
    // Only the interior null is noted; the lexer reports 0xFF and 0xFE.
    let buf = buffer(&[0xFF, 0xFE, b'h', 0]);
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![EncodingIssueKind::InteriorNull]);
}

#[test]
fn bom_only_at_start() {
    let buf = buffer(&[b'a', 0xEF, 0xBB, 0xBF]);
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn truncated_bom_is_not_reported() {
    let buf = buffer(&[0xEF, 0xBB]);
    assert!(buf.encoding_issues().is_empty());
}

// === Interior Null Detection ===

#[test]
fn detects_multiple_interior_nulls() {
    let buf = buffer(b"\0ab\0c\0");
    let positions: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(positions, vec![0, 3, 5]);
}

#[test]
fn sentinel_is_not_an_interior_null() {
    let buf = buffer(b"abc");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn bom_and_null_both_detected() {
    let buf = buffer(b"\xEF\xBB\xBFab\0cd");
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![EncodingIssueKind::Utf8Bom, EncodingIssueKind::InteriorNull]
    );
}

#[test]
fn descriptions_are_nonempty() {
    for kind in [
        EncodingIssueKind::Utf8Bom,
        EncodingIssueKind::InteriorNull,
    ] {
        assert!(!kind.description().is_empty());
    }
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = buffer(b"hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
    assert_eq!(cursor.source_len(), 5);
}

#[test]
fn cursor_on_empty_source_is_at_sentinel() {
    let buf = buffer(b"");
    let cursor = buf.cursor();
    assert!(cursor.is_at_sentinel());
    assert!(!cursor.can_advance());
    assert!(cursor.can_advance_sentinel());
    assert_eq!(cursor.current(), 0);
}
