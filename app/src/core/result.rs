//! # Tagged API Result
//!
//! Outcome of a request that reached the server.

/// Either the decoded success payload or the decoded error payload.
///
/// There is no third state. Transport and decoding problems are
/// reported one level up as [`AppError`](crate::core::AppError), so a value of
/// this type always means "the server answered".
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ApiResult<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> ApiResult<T, E> {
    pub fn is_success(&self) -> bool {
        match self {
            ApiResult::Success(_) => true,
            ApiResult::Failure(_) => false,
        }
    }
}
