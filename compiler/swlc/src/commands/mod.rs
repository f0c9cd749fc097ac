//! Subcommand implementations.
//!
//! Each command has a pure core that works on source text and returns its
//! output and diagnostics, plus a thin wrapper that does the I/O and
//! returns the process exit code.

mod expr;
mod lex;

pub use expr::{compile_expressions, expr_file, ExprReport};
pub use lex::{lex_file, lex_source, LexReport};

use std::io::{IsTerminal, Read};

use swl_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use swl_diagnostic::Diagnostic;

use crate::Options;

/// Read the input named on the command line; `-` is standard input.
pub(crate) fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
            .map_err(|e| format!("error reading standard input: {e}"));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Print diagnostics to stderr.
pub(crate) fn report(diagnostics: &[Diagnostic], options: &Options) {
    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), options.color, is_tty);
    emitter.emit_all(diagnostics);
    emitter.flush();
}
