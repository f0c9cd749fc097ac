//! Parse stack of the precedence evaluator.

use smallvec::SmallVec;
use swl_ir::{Location, Token};

use crate::table::Category;
use crate::types::ExprType;

/// A terminal on the stack.
#[derive(Clone, Debug)]
pub(crate) struct Terminal {
    pub cat: Category,
    /// `None` only for the bottom marker.
    pub token: Option<Token>,
    /// A handle starts right above this terminal.
    pub handle: bool,
}

impl Terminal {
    pub fn location(&self) -> Option<Location> {
        self.token.as_ref().map(|t| t.location)
    }
}

/// A reduced subexpression.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) struct Expr {
    pub ty: ExprType,
    /// The expression is the literal `0` or `0.0`, possibly parenthesized.
    pub literal_zero: bool,
    /// Stands in for input that failed to parse or type check.
    /// Checks involving it are skipped so one mistake is reported once.
    pub poisoned: bool,
}

impl Expr {
    pub fn new(ty: ExprType) -> Self {
        Expr {
            ty,
            literal_zero: false,
            poisoned: false,
        }
    }

    pub fn placeholder() -> Self {
        Expr {
            ty: ExprType::UNDEFINED,
            literal_zero: false,
            poisoned: true,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum StackSymbol {
    Terminal(Terminal),
    Expr(Expr),
}

impl StackSymbol {
    fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            StackSymbol::Terminal(t) => Some(t),
            StackSymbol::Expr(_) => None,
        }
    }
}

/// Symbols between a handle marker and the top of the stack.
/// Every rule has at most three.
pub(crate) type Handle = SmallVec<[StackSymbol; 3]>;

/// Stack of terminals and reduced expressions over a bottom `$` marker.
#[derive(Debug)]
pub(crate) struct SymbolStack {
    items: Vec<StackSymbol>,
}

impl SymbolStack {
    pub fn new() -> Self {
        SymbolStack {
            items: vec![StackSymbol::Terminal(Terminal {
                cat: Category::End,
                token: None,
                handle: false,
            })],
        }
    }

    pub fn top(&self) -> Option<&StackSymbol> {
        self.items.last()
    }

    /// Category of the topmost terminal, skipping reduced expressions.
    pub fn top_terminal(&self) -> Category {
        self.items
            .iter()
            .rev()
            .find_map(StackSymbol::as_terminal)
            .map_or(Category::End, |t| t.cat)
    }

    /// Whether the next token has to start an operand.
    pub fn expects_operand(&self) -> bool {
        match self.top() {
            Some(StackSymbol::Terminal(t)) => !t.cat.ends_operand(),
            Some(StackSymbol::Expr(_)) | None => false,
        }
    }

    pub fn push_terminal(&mut self, cat: Category, token: Token) {
        self.items.push(StackSymbol::Terminal(Terminal {
            cat,
            token: Some(token),
            handle: false,
        }));
    }

    pub fn push_expr(&mut self, expr: Expr) {
        self.items.push(StackSymbol::Expr(expr));
    }

    /// Mark a handle start after the topmost terminal.
    pub fn mark_handle(&mut self) {
        if let Some(t) = self.items.iter_mut().rev().find_map(|s| match s {
            StackSymbol::Terminal(t) => Some(t),
            StackSymbol::Expr(_) => None,
        }) {
            t.handle = true;
        }
    }

    /// Pop everything above the most recent handle marker and clear it.
    ///
    /// Without a marker the handle reaches down to the bottom `$`. A marker
    /// with nothing above it is cleared and the search goes deeper.
    pub fn pop_handle(&mut self) -> Handle {
        loop {
            let start = self
                .items
                .iter()
                .rposition(|s| matches!(s, StackSymbol::Terminal(t) if t.handle))
                .unwrap_or(0);
            if let Some(StackSymbol::Terminal(t)) = self.items.get_mut(start) {
                t.handle = false;
            }
            if start + 1 < self.items.len() || start == 0 {
                return self.items.drain(start + 1..).collect();
            }
        }
    }

    /// Replace everything above the bottom marker with `expr`.
    pub fn collapse(&mut self, expr: Expr) {
        self.items.truncate(1);
        if let Some(StackSymbol::Terminal(t)) = self.items.first_mut() {
            t.handle = false;
        }
        self.items.push(StackSymbol::Expr(expr));
    }

    /// The expression left on top of the bottom marker, if parsing finished cleanly.
    pub fn result(&self) -> Option<Expr> {
        match self.items.as_slice() {
            [_, StackSymbol::Expr(expr)] => Some(*expr),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
