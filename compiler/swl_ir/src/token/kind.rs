//! Token kinds for swiftlet.

use std::fmt;

/// Reserved words.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Else,
    Func,
    If,
    Let,
    Nil,
    Return,
    Var,
    While,
}

impl Keyword {
    /// Look up a reserved word. Matching is case-sensitive.
    pub fn from_ident(ident: &[u8]) -> Option<Keyword> {
        match ident {
            b"else" => Some(Keyword::Else),
            b"func" => Some(Keyword::Func),
            b"if" => Some(Keyword::If),
            b"let" => Some(Keyword::Let),
            b"nil" => Some(Keyword::Nil),
            b"return" => Some(Keyword::Return),
            b"var" => Some(Keyword::Var),
            b"while" => Some(Keyword::While),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Else => "else",
            Keyword::Func => "func",
            Keyword::If => "if",
            Keyword::Let => "let",
            Keyword::Nil => "nil",
            Keyword::Return => "return",
            Keyword::Var => "var",
            Keyword::While => "while",
        }
    }
}

/// Built-in type names usable in annotations (`Int`, `Double?`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BaseType {
    Int,
    Double,
    String,
}

impl BaseType {
    pub fn from_ident(ident: &[u8]) -> Option<BaseType> {
        match ident {
            b"Int" => Some(BaseType::Int),
            b"Double" => Some(BaseType::Double),
            b"String" => Some(BaseType::String),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BaseType::Int => "Int",
            BaseType::Double => "Double",
            BaseType::String => "String",
        }
    }
}

/// Operators and punctuation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Lt,          // <
    Le,          // <=
    Gt,          // >
    Ge,          // >=
    Not,         // ! (postfix force-unwrap)
    Ne,          // !=
    NilCoalesce, // ??
    Assign,      // =
    Eq,          // ==
    Colon,       // :
    LBrace,      // {
    RBrace,      // }
    LParen,      // (
    RParen,      // )
    Plus,        // +
    Minus,       // -
    Arrow,       // ->
    Star,        // *
    Slash,       // /
    Comma,       // ,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Not => "!",
            Operator::Ne => "!=",
            Operator::NilCoalesce => "??",
            Operator::Assign => "=",
            Operator::Eq => "==",
            Operator::Colon => ":",
            Operator::LBrace => "{",
            Operator::RBrace => "}",
            Operator::LParen => "(",
            Operator::RParen => ")",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Arrow => "->",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Comma => ",",
        }
    }

    /// Comparison operators (`<`, `<=`, `>`, `>=`, `==`, `!=`).
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge | Operator::Eq | Operator::Ne
        )
    }
}

/// Token kinds.
///
/// Payload-carrying variants own their text; the consumer of the token
/// takes ownership.
#[derive(Clone, PartialEq)]
pub enum TokenKind {
    /// End of input. Returned repeatedly once the source is exhausted.
    Eof,
    /// A line break reached between tokens.
    Eol,
    /// Lone `_`
    Underscore,
    Identifier(String),
    Keyword(Keyword),
    Operator(Operator),
    Int(i64),
    Double(f64),
    /// String literal content with escapes decoded.
    Str(String),
    /// Type annotation: `Int`, `String?`, ...
    DataType { ty: BaseType, nilable: bool },
}

impl TokenKind {
    /// Short human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Eol => "end of line",
            TokenKind::Underscore => "`_`",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Operator(op) => op.as_str(),
            TokenKind::Int(_) => "integer literal",
            TokenKind::Double(_) => "double literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::DataType { .. } => "type name",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "Eof"),
            TokenKind::Eol => write!(f, "Eol"),
            TokenKind::Underscore => write!(f, "Underscore"),
            TokenKind::Identifier(name) => write!(f, "Ident({name})"),
            TokenKind::Keyword(kw) => write!(f, "Keyword({})", kw.as_str()),
            TokenKind::Operator(op) => write!(f, "Op({})", op.as_str()),
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Double(v) => write!(f, "Double({v})"),
            TokenKind::Str(s) => write!(f, "Str({s:?})"),
            TokenKind::DataType { ty, nilable } => {
                write!(f, "Type({}{})", ty.as_str(), if *nilable { "?" } else { "" })
            }
        }
    }
}
