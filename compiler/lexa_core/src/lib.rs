//! Byte-level tokenizer for the lexa pipeline.
//!
//! Converts a sentinel-terminated byte buffer into a stream of typed,
//! offset-addressed [`Token`]s. The crate has no knowledge of keywords,
//! string or comment syntax, or literal values; it only decides where
//! token boundaries fall and what broad class each span belongs to.
//!
//! # Layers
//!
//! - [`classify`]: 256-entry byte category table.
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated input and the
//!   bounds-checked read position over it.
//! - [`utf8`]: multi-byte sequence decoding.
//! - [`numeric`]: permissive numeric literal scanning.
//! - [`LexerContext`]: the dispatching driver and error log.
//!
//! ```
//! use lexa_core::{tokenize, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new(b"x = 1").unwrap_or_else(|e| panic!("{e}"));
//! let output = tokenize(&buf);
//! assert_eq!(output.tokens[0].kind, TokenKind::Identifier);
//! assert!(!output.has_errors());
//! ```

pub mod classify;
mod cursor;
mod lex_error;
mod lexer;
pub mod numeric;
mod source_buffer;
mod token;
pub mod utf8;

pub use classify::{category_of, ByteCategory};
pub use cursor::{Cursor, SENTINEL};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize, LexOutput, LexerContext};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer, SourceError};
pub use token::{Token, TokenKind};
