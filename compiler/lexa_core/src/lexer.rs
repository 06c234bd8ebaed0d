//! Token dispatch and error recording.
//!
//! [`LexerContext::next_token`] is the single entry point. It classifies the
//! current byte, hands the cursor to the consumer for that category, and
//! packages the consumed range into a [`Token`]. Every call before
//! `EndOfInput` consumes at least one byte, so a session always terminates.
//!
//! # Error Recovery
//!
//! Lexical errors never stop the stream. The offending span is emitted as a
//! single `TokenKind::Error(category)` token, where `category` is what the
//! span was dispatched as, and a [`LexError`] is appended to the log. The
//! next call resumes on the following byte.

use tracing::{debug, trace};

use crate::classify::{category_of, is_letter, is_whitespace, ByteCategory};
use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};
use crate::numeric::{is_numeric_start, scan_numeric};
use crate::token::{Token, TokenKind};
use crate::utf8::decode_one;
use crate::SourceBuffer;

/// State of one tokenization session: the cursor and the error log.
///
/// Owned exclusively by one caller for the lifetime of the session. The
/// buffer is borrowed immutably, so it cannot change underneath the lexer.
#[derive(Clone, Debug)]
pub struct LexerContext<'a> {
    cursor: Cursor<'a>,
    errors: Vec<LexError>,
}

impl<'a> LexerContext<'a> {
    /// Start a session at the beginning of `buf`.
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self::from_cursor(buf.cursor())
    }

    /// Start a session at the cursor's current position.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            errors: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `EndOfInput` (length 1, covering the sentinel) exactly once,
    /// as the last token. Calling this again afterwards is a contract
    /// violation.
    pub fn next_token(&mut self) -> Token {
        debug_assert!(!self.is_finished(), "next_token called after EndOfInput");

        let start = self.cursor.pos();
        let category = self.current_category();
        let kind = match category {
            ByteCategory::Whitespace => {
                self.cursor.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            ByteCategory::Letter => {
                self.cursor.eat_while(is_letter);
                TokenKind::Identifier
            }
            ByteCategory::Digit => {
                scan_numeric(&mut self.cursor);
                TokenKind::Numeric
            }
            ByteCategory::Symbol => self.symbol(),
            ByteCategory::UnicodeLead => self.unicode_run(start),
            ByteCategory::EndOfInput => {
                self.cursor.advance();
                TokenKind::EndOfInput
            }
            ByteCategory::Invalid => {
                self.cursor.advance();
                self.record_error(start, LexErrorKind::UnexpectedCharacter, category);
                TokenKind::Error(category)
            }
        };

        let token = Token::new(kind, start, self.cursor.pos() - start);
        trace!(
            kind = %token.kind,
            offset = token.offset,
            len = token.len,
            text = ?self.cursor.bytes(start, token.end()),
            "token"
        );
        token
    }

    /// Errors recorded so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the context and return its error log.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Returns `true` once `EndOfInput` has been produced.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Offset of the next byte to be consumed.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Category of the current byte, with interior NUL bytes demoted to
    /// `Invalid`. Only the sentinel position classifies as `EndOfInput`.
    fn current_category(&self) -> ByteCategory {
        match category_of(self.cursor.current()) {
            ByteCategory::EndOfInput if !self.cursor.is_at_sentinel() => ByteCategory::Invalid,
            category => category,
        }
    }

    /// A symbol is one byte, unless it is a `.` that opens a numeral.
    fn symbol(&mut self) -> TokenKind {
        if is_numeric_start(&self.cursor) {
            scan_numeric(&mut self.cursor);
            TokenKind::Numeric
        } else {
            self.cursor.advance();
            TokenKind::SpecialChar
        }
    }

    /// Consume a run of well-formed multi-byte codepoints.
    ///
    /// A malformed sequence at the head of the run becomes the error token
    /// itself. A malformed sequence after at least one good codepoint ends
    /// the run just before it, leaving it for the next call.
    fn unicode_run(&mut self, start: u32) -> TokenKind {
        let mut run_len = 0;
        loop {
            let before = self.cursor;
            match decode_one(&mut self.cursor) {
                Ok(seq) => run_len += seq.len,
                Err(_) if run_len > 0 => {
                    self.cursor = before;
                    break;
                }
                Err(kind) => {
                    self.record_error(start, kind, ByteCategory::UnicodeLead);
                    return TokenKind::Error(ByteCategory::UnicodeLead);
                }
            }
            if category_of(self.cursor.current()) != ByteCategory::UnicodeLead {
                break;
            }
        }
        debug_assert_eq!(start + run_len, self.cursor.pos());
        TokenKind::UnicodeSequence
    }

    /// Append an error covering `start..cursor.pos()`.
    fn record_error(&mut self, start: u32, kind: LexErrorKind, category: ByteCategory) {
        let error = LexError::new(start, self.cursor.pos() - start, kind, category);
        debug!(
            offset = error.offset,
            len = error.len,
            kind = %error.kind,
            category = %error.category,
            "lexical error"
        );
        self.errors.push(error);
    }
}

/// Yields every token including the final `EndOfInput`, then `None`.
impl Iterator for LexerContext<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl std::iter::FusedIterator for LexerContext<'_> {}

/// Result of tokenizing a whole buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// All tokens, ending with exactly one `EndOfInput`.
    pub tokens: Vec<Token>,
    /// The error log, in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize all of `buf` in one session.
pub fn tokenize(buf: &SourceBuffer) -> LexOutput {
    let mut ctx = LexerContext::new(buf);
    let tokens: Vec<Token> = ctx.by_ref().collect();
    LexOutput {
        tokens,
        errors: ctx.into_errors(),
    }
}
