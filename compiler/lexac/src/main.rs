//! lexa CLI
//!
//! Tokenizes files and prints the token stream.

use lexac::commands::{lex_file, run_demo, LexOptions};

fn main() {
    lexac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = LexOptions::default();
            let mut paths = Vec::new();

            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    if !options.apply_flag(arg) {
                        eprintln!("error: unknown option '{arg}'");
                        eprintln!("Usage: lexa lex <file>... [--text] [--errors-only]");
                        std::process::exit(1);
                    }
                } else {
                    paths.push(arg.as_str());
                }
            }

            if paths.is_empty() {
                eprintln!("error: missing file path");
                eprintln!("Usage: lexa lex <file>... [--text] [--errors-only]");
                std::process::exit(1);
            }

            let mut failed = false;
            for path in paths {
                match lex_file(path, &options) {
                    Ok(had_errors) => failed |= had_errors,
                    Err(e) => {
                        eprintln!("error: {e}");
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        "demo" => {
            if let Err(e) = run_demo() {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lexa {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lexa byte-level tokenizer");
    println!();
    println!("Usage: lexa <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...        Tokenize files and display tokens");
    println!("  demo                 Run the built-in smoke cases");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --text, -t           Show each token's text");
    println!("  --errors-only, -e    Show only errors and encoding issues");
    println!();
    println!("Logging:");
    println!("  LEXA_LOG=<filter>    Log filter, e.g. lexa_core=trace (falls back to RUST_LOG)");
}
