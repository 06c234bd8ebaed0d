//! Command handlers for the lexa CLI.
//!
//! Each submodule implements one command. Shared pieces (the error type and
//! `read_source`) live here in the module root.

use std::io;

use lexa_core::SourceError;

mod demo;
mod lex;

pub use demo::{run_demo, write_demo, DEMO_CASES};
pub use lex::{lex_file, render_error, render_token, write_report, LexOptions};

/// Failure of a command before or while reporting.
///
/// Lexical errors are not in here: they are part of a successful report.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}", describe_read_error(.path, .source))]
    Read { path: String, source: io::Error },
    #[error("'{path}': {source}")]
    Source { path: String, source: SourceError },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// User-facing message for a failed file read.
fn describe_read_error(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Read a file's raw bytes. No UTF-8 validation: the lexer reports
/// malformed sequences itself.
pub fn read_source(path: &str) -> Result<Vec<u8>, CommandError> {
    std::fs::read(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })
}
