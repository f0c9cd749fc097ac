//! Symbol table errors.

use swl_diagnostic::ErrorCode;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum SymtabError {
    #[error("item not found")]
    ItemNotFound,
    #[error("item already stored")]
    AlreadyStored,
    #[error("item is not a function")]
    ItemNotFunction,
    #[error("item is a function")]
    ItemIsFunction,
    #[error("parameter not found")]
    ParamNotFound,
    #[error("scope stack is empty")]
    NotInitialized,
    #[error("no free slot along the probe sequence")]
    CapacityExhausted,
}

impl SymtabError {
    /// Exit code used when a caller surfaces this error as a diagnostic.
    pub fn code(self) -> ErrorCode {
        match self {
            SymtabError::ItemNotFound => ErrorCode::UndefinedVariable,
            SymtabError::AlreadyStored => ErrorCode::UndefinedFunction,
            SymtabError::ItemNotFunction
            | SymtabError::ItemIsFunction
            | SymtabError::ParamNotFound => ErrorCode::Semantic,
            SymtabError::NotInitialized | SymtabError::CapacityExhausted => ErrorCode::Internal,
        }
    }
}
