//! Error codes shared by all compiler phases.
//!
//! The discriminant of each code is the exit status the driver returns.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Success (exit status 0) is not an error code; callers use
/// `Result<(), ErrorCode>` or [`crate::ErrorLatch`] to represent it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum ErrorCode {
    /// Malformed token: the scanner stopped outside a final state.
    Lexical = 1,
    /// Malformed program or expression structure.
    Syntax = 2,
    /// Call of an undefined function, or redefinition of a name.
    UndefinedFunction = 3,
    /// Wrong number or type of call parameters, or a bad return type.
    FunctionParams = 4,
    /// Use of an undefined or uninitialized variable.
    UndefinedVariable = 5,
    /// Missing or superfluous expression in a `return` statement.
    FunctionReturn = 6,
    /// Operand types do not fit the operator.
    IncompatibleTypes = 7,
    /// A type could not be inferred and was not annotated.
    MissingType = 8,
    /// Any other semantic error (division by a literal zero, ...).
    Semantic = 9,
    /// Failure inside the compiler itself.
    Internal = 99,
}

impl ErrorCode {
    /// Every code, in ascending order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::Lexical,
        ErrorCode::Syntax,
        ErrorCode::UndefinedFunction,
        ErrorCode::FunctionParams,
        ErrorCode::UndefinedVariable,
        ErrorCode::FunctionReturn,
        ErrorCode::IncompatibleTypes,
        ErrorCode::MissingType,
        ErrorCode::Semantic,
        ErrorCode::Internal,
    ];

    /// Process exit status for this code.
    #[inline]
    pub fn exit_code(self) -> i32 {
        i32::from(self as u8)
    }

    /// Look a code up by its numeric value.
    pub fn from_exit_code(code: i32) -> Option<ErrorCode> {
        ErrorCode::ALL.into_iter().find(|c| c.exit_code() == code)
    }

    /// Numeric code as text, as printed in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Lexical => "1",
            ErrorCode::Syntax => "2",
            ErrorCode::UndefinedFunction => "3",
            ErrorCode::FunctionParams => "4",
            ErrorCode::UndefinedVariable => "5",
            ErrorCode::FunctionReturn => "6",
            ErrorCode::IncompatibleTypes => "7",
            ErrorCode::MissingType => "8",
            ErrorCode::Semantic => "9",
            ErrorCode::Internal => "99",
        }
    }

    /// Short description of the error class.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::Lexical => "lexical error",
            ErrorCode::Syntax => "syntax error",
            ErrorCode::UndefinedFunction => "undefined function or redefinition",
            ErrorCode::FunctionParams => "wrong parameters or return type",
            ErrorCode::UndefinedVariable => "undefined or uninitialized variable",
            ErrorCode::FunctionReturn => "wrong return expression",
            ErrorCode::IncompatibleTypes => "incompatible operand types",
            ErrorCode::MissingType => "missing type",
            ErrorCode::Semantic => "semantic error",
            ErrorCode::Internal => "internal compiler error",
        }
    }

    pub fn is_lexical(self) -> bool {
        matches!(self, ErrorCode::Lexical)
    }

    pub fn is_syntax(self) -> bool {
        matches!(self, ErrorCode::Syntax)
    }

    /// Codes 3 through 9.
    pub fn is_semantic(self) -> bool {
        matches!(
            self,
            ErrorCode::UndefinedFunction
                | ErrorCode::FunctionParams
                | ErrorCode::UndefinedVariable
                | ErrorCode::FunctionReturn
                | ErrorCode::IncompatibleTypes
                | ErrorCode::MissingType
                | ErrorCode::Semantic
        )
    }

    pub fn is_internal(self) -> bool {
        matches!(self, ErrorCode::Internal)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
