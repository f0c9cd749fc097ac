//! Operator-precedence evaluator.

use swl_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use swl_ir::{Location, Token, TokenKind};
use swl_lexer::{LexError, TokenSource};
use swl_symtab::ScopeStack;
use tracing::{debug, trace};

use crate::emit::Emitter;
use crate::rules::{self, Checked, Rule, TypeError};
use crate::stack::{Expr, StackSymbol, SymbolStack};
use crate::table::{action, Action, Category};
use crate::types::ExprType;

/// Result of evaluating one expression.
#[derive(Clone, Debug)]
pub struct ExprOutcome {
    /// First error recorded while parsing, if any.
    pub status: Result<(), ErrorCode>,
    pub ty: ExprType,
    /// First token after the expression. Not consumed; `None` after a
    /// lexical error.
    pub terminator: Option<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExprOutcome {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Bottom-up evaluator for a single expression.
///
/// Reads tokens until one cannot continue the expression, type checks
/// every reduction and hands the generated code to the emitter. Once an
/// error is recorded nothing more is emitted, but parsing runs to the end
/// of the expression so the caller always gets a terminator.
pub struct ExprParser<'a, E: Emitter> {
    scopes: &'a ScopeStack,
    emitter: &'a mut E,
    stack: SymbolStack,
    diagnostics: DiagnosticQueue,
}

impl<'a, E: Emitter> ExprParser<'a, E> {
    pub fn new(scopes: &'a ScopeStack, emitter: &'a mut E) -> Self {
        ExprParser {
            scopes,
            emitter,
            stack: SymbolStack::new(),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    /// Evaluate the expression starting at `first`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(&mut self, first: Token, source: &mut impl TokenSource) -> ExprOutcome {
        self.stack = SymbolStack::new();
        self.diagnostics = DiagnosticQueue::new();

        let mut lookahead = first;
        let terminator = loop {
            let Some(cat) = self.classify(&lookahead) else {
                match source.next_token() {
                    Ok(token) => lookahead = token,
                    Err(err) => return self.lexical_failure(&err),
                }
                continue;
            };

            let top = self.stack.top_terminal();
            if top == Category::End && cat == Category::End {
                break lookahead;
            }

            let act = action(top, cat);
            trace!(?top, ?cat, ?act, token = ?lookahead.kind);
            match act {
                Action::Shift => {
                    self.stack.mark_handle();
                    self.stack.push_terminal(cat, lookahead);
                }
                Action::Equal => self.stack.push_terminal(cat, lookahead),
                Action::Reduce => {
                    self.reduce();
                    continue;
                }
                Action::Error if cat == Category::End => {
                    self.error_at_end(top, &lookahead);
                    self.stack.collapse(Expr::placeholder());
                    break lookahead;
                }
                Action::Error => {
                    self.error_before(cat, &lookahead);
                    self.stack.mark_handle();
                    self.stack.push_terminal(cat, lookahead);
                    self.stack.push_expr(Expr::placeholder());
                }
            }

            lookahead = match source.next_token() {
                Ok(token) => token,
                Err(err) => return self.lexical_failure(&err),
            };
        };

        let ty = match self.stack.result() {
            Some(expr) => expr.ty,
            None => {
                self.syntax_error("expected expression", Some(terminator.location));
                ExprType::UNDEFINED
            }
        };
        let status = self.diagnostics.first_error().result();
        debug!(%ty, ?status, "expression evaluated");
        ExprOutcome {
            status,
            ty,
            terminator: Some(terminator),
            diagnostics: self.diagnostics.flush(),
        }
    }

    /// Table category of `token`, or `None` for a line break that has to
    /// be skipped because the expression cannot end here.
    fn classify(&self, token: &Token) -> Option<Category> {
        if matches!(token.kind, TokenKind::Eol) && self.stack.expects_operand() {
            trace!("skipping line break inside expression");
            return None;
        }
        Some(Category::of(&token.kind))
    }

    fn reduce(&mut self) {
        let handle = self.stack.pop_handle();
        let expr = match rules::select(&handle) {
            Rule::Operand(token) => {
                let checked = rules::check_operand(&token, self.scopes);
                self.apply(checked, token.location)
            }
            Rule::NotNil { operand, location } => match rules::check_not_nil(operand) {
                Ok(expr) => expr,
                Err(err) => self.type_error(err, location),
            },
            Rule::Paren(inner) => inner,
            Rule::Binary {
                lhs,
                op,
                rhs,
                location,
            } => {
                let checked = rules::check_binary(lhs, op, rhs);
                self.apply(checked, location)
            }
            Rule::NoRule(no) => {
                if !no.poisoned {
                    self.syntax_error(no.message, no.location);
                }
                Expr::placeholder()
            }
        };
        trace!(handle = handle.len(), ty = %expr.ty, "reduced");
        self.stack.push_expr(expr);
    }

    /// Emit the code of a successful check, or record its error.
    fn apply(&mut self, checked: Result<Checked, TypeError>, location: Location) -> Expr {
        match checked {
            Ok(Checked { expr, code }) => {
                if !self.diagnostics.has_errors() {
                    for instr in code {
                        self.emitter.emit(instr);
                    }
                }
                expr
            }
            Err(err) => self.type_error(err, location),
        }
    }

    fn type_error(&mut self, err: TypeError, location: Location) -> Expr {
        self.diagnostics.add(
            Diagnostic::error(err.code)
                .with_message(err.message)
                .at(location),
        );
        err.fallback
    }

    fn syntax_error(&mut self, message: &str, location: Option<Location>) {
        let mut diag = Diagnostic::error(ErrorCode::Syntax).with_message(message);
        if let Some(location) = location {
            diag = diag.at(location);
        }
        self.diagnostics.add(diag);
    }

    /// The table has no entry for `incoming` after the current stack top.
    fn error_before(&mut self, incoming: Category, token: &Token) {
        let after_operand = match self.stack.top() {
            Some(StackSymbol::Expr(_)) => true,
            Some(StackSymbol::Terminal(t)) => t.cat.ends_operand(),
            None => false,
        };
        let message = match incoming {
            Category::RParen => "missing left parenthesis".to_string(),
            Category::Operand | Category::LParen if after_operand => "missing operator".to_string(),
            _ => format!("unexpected {}", token.kind.display_name()),
        };
        self.syntax_error(&message, Some(token.location));
    }

    /// The expression ended where the table has no entry for `$`.
    fn error_at_end(&mut self, top: Category, token: &Token) {
        let message = if top == Category::LParen {
            "missing right parenthesis"
        } else {
            "unexpected end of expression"
        };
        self.syntax_error(message, Some(token.location));
    }

    fn lexical_failure(&mut self, err: &LexError) -> ExprOutcome {
        debug!(%err, "lexical error inside expression");
        self.diagnostics.add(err.to_diagnostic());
        ExprOutcome {
            status: Err(ErrorCode::Lexical),
            ty: ExprType::UNDEFINED,
            terminator: None,
            diagnostics: self.diagnostics.flush(),
        }
    }
}
