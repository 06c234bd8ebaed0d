//! `demo` command: run the built-in smoke cases.

use std::io::{self, Write};

use lexa_core::{tokenize, SourceBuffer, TokenKind};

use super::CommandError;

/// Built-in cases as `(name, input)`.
pub const DEMO_CASES: [(&str, &str); 8] = [
    ("TC-01: Basic tokenization", "int x = 10;"),
    ("TC-02: Keyword vs identifier", "if iffy"),
    ("TC-03: Operators", "a+b*c"),
    ("TC-04: String literal handling", "\"Hello\""),
    ("TC-05: Numeric edge cases", "123 0xFF"),
    ("TC-06: Unicode handling", "ąęć"),
    ("TC-07: Error handling", "@invalid"),
    ("TC-08: Whitespace and comments", "int x; // comment"),
];

/// Run every demo case and print the results to stdout.
pub fn run_demo() -> Result<(), CommandError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the demo report to `out`.
pub fn write_demo<W: Write>(out: &mut W) -> io::Result<()> {
    for (name, input) in DEMO_CASES {
        writeln!(out, "=== {name} ===")?;
        writeln!(out, "Input: \"{input}\"")?;

        let buf = SourceBuffer::new(input.as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let output = tokenize(&buf);
        for token in &output.tokens {
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            writeln!(
                out,
                "Token: Type={}, Offset={}, Length={}, Text='{}'",
                token.kind,
                token.offset,
                token.len,
                String::from_utf8_lossy(token.text(&buf))
            )?;
            if token.kind.is_error() {
                writeln!(out, "Error occurred")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
