//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong password or unknown email. One message for both, so the error
    /// cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that is already registered.
    #[error("User with this email already exists")]
    DuplicateEmail,
}
