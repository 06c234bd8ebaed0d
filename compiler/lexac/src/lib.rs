//! Driver for the lexa tokenizer.
//!
//! Owns everything around the core lexer: reading files into memory,
//! building the sentinel-terminated buffer, looping until `EndOfInput`, and
//! printing tokens and errors. The `lexa` binary is a thin argument parser
//! over [`commands`].

pub mod commands;

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

/// Build the log filter. `LEXA_LOG` takes precedence over `RUST_LOG`; both
/// use the usual directive syntax (e.g. `lexa_core=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("LEXA_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call multiple times. Does nothing when neither `LEXA_LOG` nor
/// `RUST_LOG` is set. Output goes to stderr so it never mixes with the token
/// listing on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("LEXA_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
            return;
        }

        let tree_layer = tracing_tree::HierarchicalLayer::default()
            .with_indent_amount(2)
            .with_indent_lines(true)
            .with_targets(true)
            .with_writer(std::io::stderr);

        Registry::default().with(build_filter()).with(tree_layer).init();
    });
}
