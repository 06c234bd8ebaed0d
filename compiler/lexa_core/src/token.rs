//! Token kinds and offset-addressed tokens.

use crate::classify::ByteCategory;
use crate::SourceBuffer;

/// Kind of a produced token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of ASCII letters.
    Identifier,
    /// Numeric literal span (unvalidated).
    Numeric,
    /// One printable ASCII symbol byte.
    SpecialChar,
    /// Run of space, tab, CR, LF.
    Whitespace,
    /// Run of well-formed multi-byte UTF-8 codepoints.
    UnicodeSequence,
    /// The consumed sentinel. Always last, always one byte long.
    EndOfInput,
    /// Span that triggered a lexical error. Carries the category the span
    /// was classified as before being downgraded.
    Error(ByteCategory),
}

impl TokenKind {
    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Numeric => "Numeric",
            TokenKind::SpecialChar => "SpecialChar",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::UnicodeSequence => "UnicodeSequence",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Error(_) => "Error",
        }
    }

    /// Returns `true` for [`TokenKind::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Error(_))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classified span `[offset, offset + len)` of the source buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: u32,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, offset: u32, len: u32) -> Self {
        Self { kind, offset, len }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset + self.len
    }

    /// Offsets as a `usize` range, ready for slicing.
    #[inline]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset as usize..self.end() as usize
    }

    /// Bytes covered by this token. The `EndOfInput` token covers the
    /// sentinel.
    pub fn text<'a>(&self, buf: &'a SourceBuffer) -> &'a [u8] {
        &buf.as_sentinel_bytes()[self.span()]
    }
}
