//! Sentinel-terminated source buffer.
//!
//! The buffer copies the caller's bytes and appends one `0x00` sentinel, so
//! the cursor can always read "the current byte" and the lexer sees end of
//! input as an ordinary byte with its own category.
//!
//! # Encoding Detection
//!
//! Construction also notes a leading UTF-8 byte order mark and every `0x00`
//! inside the content. Both are advisory [`EncodingIssue`] values: the lexer
//! still tokenizes those bytes with its normal rules, and a driver may
//! print them as warnings.

use crate::cursor::{Cursor, SENTINEL};

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00]
///  ^                ^
///  0            source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes the sentinel).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Failure to build a [`SourceBuffer`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Offsets are `u32` and the cursor must be able to step one past the
    /// sentinel, so content is capped at `u32::MAX - 1` bytes.
    #[error("source is {len} bytes; the lexer accepts at most {max} bytes")]
    TooLarge { len: usize, max: u32 },
}

/// Advisory note about the raw bytes, found while building the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Offset of the first affected byte.
    pub pos: u32,
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// `EF BB BF` as the first three bytes. The lexer folds it into the
    /// leading `UnicodeSequence` run.
    Utf8Bom,
    /// `0x00` before the sentinel. The lexer reports it as an unexpected
    /// character.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Short human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
            EncodingIssueKind::InteriorNull => "null byte inside source",
        }
    }
}

impl SourceBuffer {
    /// Largest accepted content length.
    pub const MAX_LEN: u32 = u32::MAX - 1;

    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// Copies the bytes, appends the `0x00` sentinel and records encoding
    /// issues.
    pub fn new(source: &[u8]) -> Result<Self, SourceError> {
        let source_len = match u32::try_from(source.len()) {
            Ok(len) if len <= Self::MAX_LEN => len,
            _ => {
                return Err(SourceError::TooLarge {
                    len: source.len(),
                    max: Self::MAX_LEN,
                })
            }
        };

        let mut buf = Vec::with_capacity(source.len() + 1);
        buf.extend_from_slice(source);
        buf.push(SENTINEL);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source, &mut encoding_issues);

        Ok(Self {
            buf,
            source_len,
            encoding_issues,
        })
    }

    /// Returns the source bytes (without the sentinel).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the content followed by the sentinel.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes the sentinel).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
    detect_interior_nulls(source, issues);
}

fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(SENTINEL, source) {
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}

#[cfg(test)]
mod tests;
