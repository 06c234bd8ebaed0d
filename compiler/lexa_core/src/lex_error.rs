//! Recoverable lexical errors.
//!
//! These are data, not control flow: every error is recorded in the
//! context's append-only log, the offending span becomes one `Error` token,
//! and scanning resumes on the next call. Contract violations (advancing
//! past the sentinel, calling `next_token` after `EndOfInput`) are debug
//! assertions and never appear here.

use crate::classify::ByteCategory;

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// The byte classifies as invalid (control character, DEL, interior NUL).
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// A UTF-8 lead or continuation byte is malformed.
    #[error("invalid UTF-8 byte")]
    InvalidByte,
    /// A multi-byte UTF-8 sequence is cut short by the end of input.
    #[error("truncated UTF-8 sequence")]
    TruncatedSequence,
}

/// One entry of the error log.
///
/// `category` is what the dispatcher originally classified the span as; the
/// emitted token is always `TokenKind::Error(category)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    /// Start of the offending span.
    pub offset: u32,
    /// Length of the offending span (the error token's length).
    pub len: u32,
    pub kind: LexErrorKind,
    pub category: ByteCategory,
}

impl LexError {
    pub const fn new(offset: u32, len: u32, kind: LexErrorKind, category: ByteCategory) -> Self {
        Self {
            offset,
            len,
            kind,
            category,
        }
    }

    /// Exclusive end offset of the offending span.
    pub const fn end(&self) -> u32 {
        self.offset + self.len
    }
}
