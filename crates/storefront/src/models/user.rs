//! User account model.

use serde::Serialize;

use papershop_core::UserId;

/// A user in the in-memory directory.
///
/// The password is stored and compared as a plain value: this is a demo
/// account list, not a credential store, and real authentication is
/// explicitly out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Registry-assigned id.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Unique key for login and duplicate detection (case-sensitive).
    pub email: String,
    /// Plain-value password.
    #[serde(skip_serializing)]
    pub password: String,
}
