//! `lex` command: tokenize files and print the token stream.

use std::io::{self, Write};

use lexa_core::{LexError, LexerContext, SourceBuffer, Token, TokenKind};
use tracing::debug_span;

use super::{read_source, CommandError};

/// Options for the `lex` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Append the quoted token text to each token line.
    pub show_text: bool,
    /// Print only errors and encoding issues.
    pub errors_only: bool,
}

impl LexOptions {
    /// Apply one command-line flag. Returns `false` for unknown flags.
    pub fn apply_flag(&mut self, flag: &str) -> bool {
        match flag {
            "--text" | "-t" => self.show_text = true,
            "--errors-only" | "-e" => self.errors_only = true,
            _ => return false,
        }
        true
    }
}

/// Lex a file and print its report to stdout.
///
/// Returns whether any lexical errors were found.
pub fn lex_file(path: &str, options: &LexOptions) -> Result<bool, CommandError> {
    let bytes = read_source(path)?;
    let buf = SourceBuffer::new(&bytes).map_err(|source| CommandError::Source {
        path: path.to_owned(),
        source,
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let had_errors = write_report(&mut out, path, &buf, options)?;
    out.flush()?;
    Ok(had_errors)
}

/// Tokenize `buf` and write the report for `name` to `out`.
///
/// Returns whether any lexical errors were found.
pub fn write_report<W: Write>(
    out: &mut W,
    name: &str,
    buf: &SourceBuffer,
    options: &LexOptions,
) -> io::Result<bool> {
    let _span = debug_span!("lex", file = name, bytes = buf.len()).entered();

    let mut ctx = LexerContext::new(buf);
    let mut tokens = Vec::new();
    loop {
        let token = ctx.next_token();
        tokens.push(token);
        if token.kind == TokenKind::EndOfInput {
            break;
        }
    }

    if !options.errors_only {
        writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len())?;
        for token in &tokens {
            writeln!(out, "  {}", render_token(token, buf, options.show_text))?;
        }
    }

    let issues = buf.encoding_issues();
    if !issues.is_empty() {
        writeln!(out, "Encoding issues in '{name}':")?;
        for issue in issues {
            writeln!(
                out,
                "  warning: {} @ {}..{}",
                issue.kind.description(),
                issue.pos,
                issue.pos + issue.len
            )?;
        }
    }

    let errors = ctx.errors();
    if !errors.is_empty() {
        writeln!(out, "Errors in '{name}' ({}):", errors.len())?;
        for error in errors {
            writeln!(out, "  {}", render_error(error))?;
        }
    }

    Ok(!errors.is_empty())
}

/// One-line rendering of a token: `Kind @ start..end`, optionally followed
/// by its text.
pub fn render_token(token: &Token, buf: &SourceBuffer, show_text: bool) -> String {
    let kind = match token.kind {
        TokenKind::Error(category) => format!("Error({category})"),
        kind => kind.to_string(),
    };
    let mut line = format!("{kind} @ {}..{}", token.offset, token.end());
    if show_text && token.kind != TokenKind::EndOfInput {
        line.push(' ');
        line.push_str(&format!("{:?}", String::from_utf8_lossy(token.text(buf))));
    }
    line
}

/// One-line rendering of a lexical error.
pub fn render_error(error: &LexError) -> String {
    format!(
        "error: {} @ {}..{} (dispatched as {})",
        error.kind,
        error.offset,
        error.end(),
        error.category
    )
}
