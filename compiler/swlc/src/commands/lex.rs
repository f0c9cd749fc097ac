//! `swlc lex`: dump the token stream.

use std::fmt::Write;

use swl_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, ErrorLatch};
use swl_lexer::Scanner;

use super::{read_source, report};
use crate::Options;

/// Token listing and diagnostics for one source text.
#[derive(Clone, Debug)]
pub struct LexReport {
    /// One token per line.
    pub listing: String,
    pub diagnostics: Vec<Diagnostic>,
    pub status: ErrorLatch,
}

/// Scan `source` to the end, skipping past lexical errors.
pub fn lex_source(source: &str, config: DiagnosticConfig) -> LexReport {
    let mut scanner = Scanner::new(source.as_bytes());
    let mut queue = DiagnosticQueue::with_config(config);
    let mut listing = String::new();

    loop {
        match scanner.scan_token() {
            Ok(token) => {
                let _ = writeln!(listing, "{token:?}");
                if token.is_eof() {
                    break;
                }
            }
            Err(err) => {
                queue.add(err.to_diagnostic());
            }
        }
    }
    queue.extend(scanner.take_warnings());

    LexReport {
        listing,
        status: queue.first_error(),
        diagnostics: queue.flush(),
    }
}

/// Lex a file, print its tokens, and return the exit code.
pub fn lex_file(path: &str, options: &Options) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return ErrorCode::Internal.exit_code();
        }
    };

    let result = lex_source(&source, options.diagnostics.clone());
    print!("{}", result.listing);
    report(&result.diagnostics, options);
    result.status.exit_code()
}
