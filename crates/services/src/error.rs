//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::PagingError;

/// Errors emitted by `QuizEngine`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("no questions available for quiz")]
    EmptyBank,
    #[error(transparent)]
    Paging(#[from] PagingError),
}
