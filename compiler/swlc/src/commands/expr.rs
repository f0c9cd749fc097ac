//! `swlc expr`: evaluate one expression per line and print IFJcode23.

use swl_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, ErrorLatch};
use swl_expr::{ExprParser, Ifjcode23Emitter};
use swl_ir::{Token, TokenKind};
use swl_lexer::{LexError, Scanner};
use swl_symtab::{builtins, ScopeStack};
use tracing::debug;

use super::{read_source, report};
use crate::Options;

/// Generated code and diagnostics for one source text.
#[derive(Clone, Debug)]
pub struct ExprReport {
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
    pub status: ErrorLatch,
    /// Number of expressions evaluated.
    pub expressions: usize,
}

/// Evaluate every line of `source` as an expression in a global scope
/// holding the built-in functions.
///
/// A lexical error stops the run. Any other error is reported and the
/// next line is evaluated, but once an error is recorded the generated
/// code is incomplete.
pub fn compile_expressions(source: &str, config: DiagnosticConfig) -> ExprReport {
    let mut queue = DiagnosticQueue::with_config(config);
    let mut emitter = Ifjcode23Emitter::new();
    emitter.prolog();

    let mut scopes = ScopeStack::new();
    scopes.push();
    if let Err(err) = builtins::register(&mut scopes) {
        queue.add(Diagnostic::error(err.code()).with_message(err.to_string()));
    }

    let mut scanner = Scanner::new(source.as_bytes());
    let mut expressions = 0;

    loop {
        let first = match scanner.scan_token() {
            Ok(token) => token,
            Err(err) => {
                queue.add(err.to_diagnostic());
                break;
            }
        };
        match first.kind {
            TokenKind::Eof => break,
            TokenKind::Eol => continue,
            _ => {}
        }

        let outcome = ExprParser::new(&scopes, &mut emitter).parse(first, &mut scanner);
        expressions += 1;
        debug!(ty = %outcome.ty, ok = outcome.is_ok(), "line evaluated");
        queue.extend(outcome.diagnostics);
        emitter.clear_stack();

        match outcome.terminator {
            None => break,
            Some(token) if token.is_eof() => break,
            Some(Token {
                kind: TokenKind::Eol,
                ..
            }) => {}
            Some(token) => {
                queue.add(
                    Diagnostic::error(ErrorCode::Syntax)
                        .with_message(format!(
                            "unexpected {} after expression",
                            token.kind.display_name()
                        ))
                        .at(token.location),
                );
                if let Err(err) = skip_line(&mut scanner) {
                    queue.add(err.to_diagnostic());
                    break;
                }
            }
        }
    }
    queue.extend(scanner.take_warnings());

    ExprReport {
        code: emitter.into_string(),
        status: queue.first_error(),
        diagnostics: queue.flush(),
        expressions,
    }
}

/// Discard tokens up to and including the next line break.
fn skip_line(scanner: &mut Scanner<'_>) -> Result<(), LexError> {
    loop {
        let token = scanner.scan_token()?;
        if token.is_eof() || matches!(token.kind, TokenKind::Eol) {
            return Ok(());
        }
    }
}

/// Evaluate a file, print the generated code, and return the exit code.
pub fn expr_file(path: &str, options: &Options) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return ErrorCode::Internal.exit_code();
        }
    };

    let result = compile_expressions(&source, options.diagnostics.clone());
    if !result.status.is_set() {
        print!("{}", result.code);
    }
    report(&result.diagnostics, options);
    result.status.exit_code()
}
