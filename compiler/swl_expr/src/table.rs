//! Precedence table.

use swl_ir::{Keyword, Operator, TokenKind};

/// Terminal classes the precedence table distinguishes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// `*` `/`
    MulDiv,
    /// `+` `-`
    AddSub,
    /// `??`
    NilCoalesce,
    /// Identifiers, literals and `nil`.
    Operand,
    /// `<` `<=` `>` `>=` `==` `!=`
    Relational,
    LParen,
    RParen,
    /// Postfix `!`.
    NotNil,
    /// `$`: anything that cannot continue an expression.
    End,
}

impl Category {
    const COUNT: usize = 9;

    /// Category of a token. `Eol` maps to `End`; the evaluator decides
    /// separately whether a line break may be skipped.
    pub fn of(kind: &TokenKind) -> Category {
        match kind {
            TokenKind::Identifier(_)
            | TokenKind::Int(_)
            | TokenKind::Double(_)
            | TokenKind::Str(_)
            | TokenKind::Keyword(Keyword::Nil) => Category::Operand,
            TokenKind::Operator(op) => match op {
                Operator::Star | Operator::Slash => Category::MulDiv,
                Operator::Plus | Operator::Minus => Category::AddSub,
                Operator::NilCoalesce => Category::NilCoalesce,
                Operator::Lt
                | Operator::Le
                | Operator::Gt
                | Operator::Ge
                | Operator::Eq
                | Operator::Ne => Category::Relational,
                Operator::LParen => Category::LParen,
                Operator::RParen => Category::RParen,
                Operator::Not => Category::NotNil,
                Operator::Assign
                | Operator::Colon
                | Operator::LBrace
                | Operator::RBrace
                | Operator::Arrow
                | Operator::Comma => Category::End,
            },
            TokenKind::Eof
            | TokenKind::Eol
            | TokenKind::Underscore
            | TokenKind::Keyword(_)
            | TokenKind::DataType { .. } => Category::End,
        }
    }

    /// Binary operator classes.
    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Category::MulDiv | Category::AddSub | Category::NilCoalesce | Category::Relational
        )
    }

    /// Classes after which an operand is complete.
    #[inline]
    pub fn ends_operand(self) -> bool {
        matches!(self, Category::Operand | Category::RParen | Category::NotNil)
    }

    fn index(self) -> usize {
        match self {
            Category::MulDiv => 0,
            Category::AddSub => 1,
            Category::NilCoalesce => 2,
            Category::Operand => 3,
            Category::Relational => 4,
            Category::LParen => 5,
            Category::RParen => 6,
            Category::NotNil => 7,
            Category::End => 8,
        }
    }
}

/// What to do with the incoming terminal given the topmost stacked terminal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    /// Mark a handle start and push the terminal.
    Shift,
    /// Reduce the handle on top of the stack.
    Reduce,
    /// Push without marking (matching parentheses).
    Equal,
    Error,
}

use Action::{Equal as E, Error as X, Reduce as R, Shift as S};

/// Rows: stacked terminal. Columns: incoming terminal.
/// Order: `*/`, `+-`, `??`, operand, relational, `(`, `)`, `!`, `$`.
#[rustfmt::skip]
const TABLE: [[Action; Category::COUNT]; Category::COUNT] = [
    /* mul */ [R, R, R, S, R, S, R, S, R],
    /* add */ [S, R, R, S, R, S, R, S, R],
    /* ?? */  [S, S, S, S, R, S, R, S, R],
    /* id */  [R, R, R, X, R, X, R, R, R],
    /* rel */ [S, S, S, S, R, S, R, S, R],
    /* (  */  [S, S, S, S, S, S, E, S, X],
    /* )  */  [R, R, R, X, R, X, R, R, R],
    /* !  */  [R, R, R, X, R, X, R, R, R],
    /* $  */  [S, S, S, S, S, S, X, S, E],
];

/// Table lookup.
#[inline]
pub fn action(top: Category, incoming: Category) -> Action {
    TABLE[top.index()][incoming.index()]
}
