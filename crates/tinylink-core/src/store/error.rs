//! Typed outcomes of store operations.

use thiserror::Error;

/// Store operation failures. All are recoverable values returned to the
/// caller, which decides how each is surfaced (status code, message, prompt).
/// The store never terminates the process or logs on a failed operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No record under the requested code.
    #[error("not found")]
    NotFound,
    /// Requester does not own the record it tried to change.
    #[error("unauthorized")]
    Unauthorized,
    /// An account with this email already exists.
    #[error("email is already in use")]
    DuplicateEmail,
    /// Minting could not find an unused identifier within the attempt bound.
    #[error("no unused identifier after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}
