//! Authentication service.
//!
//! An in-memory user directory plus the session pointer, forming a state
//! machine over {anonymous, authenticated}. Credentials are plain values by
//! design; there is no hashing, no email-format validation, and no password
//! policy — all explicitly out of scope for the demo.

mod error;

pub use error::AuthError;

use papershop_core::UserId;

use crate::models::{Session, User};

/// Authentication service: user directory and current session.
#[derive(Debug)]
pub struct AuthService {
    users: Vec<User>,
    session: Session,
    next_id: i64,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::with_demo_user()
    }
}

impl AuthService {
    /// Create a service seeded with the demo account
    /// (`user@example.com` / `password123`).
    #[must_use]
    pub fn with_demo_user() -> Self {
        let mut service = Self::empty();
        service.append_user(
            "demo_user".to_string(),
            "user@example.com".to_string(),
            "password123".to_string(),
        );
        service
    }

    /// Create a service with no users.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            users: Vec::new(),
            session: Session::anonymous(),
            next_id: 1,
        }
    }

    // =========================================================================
    // State machine transitions
    // =========================================================================

    /// Log in with email and password (both compared exactly).
    ///
    /// On success the session becomes authenticated as the matching user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no user matches both
    /// fields; the session stays anonymous.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        self.session.sign_in(user.id);
        tracing::info!(user = %user.username, "login");
        Ok(user)
    }

    /// Create an account and log it in (signup implies login).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::DuplicateEmail`] if any existing user has this
    /// email (case-sensitive exact match); the directory and session are
    /// left unchanged.
    pub fn signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.users.iter().any(|user| user.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let id = self.append_user(
            username.to_string(),
            email.to_string(),
            password.to_string(),
        );
        self.session.sign_in(id);
        tracing::info!(user = %username, "signup");

        // The user was just appended, so the lookup cannot miss.
        self.user(id).cloned().ok_or(AuthError::InvalidCredentials)
    }

    /// Log out unconditionally, clearing the session.
    pub fn logout(&mut self) {
        self.session.sign_out();
        tracing::info!("logout");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.user_id().and_then(|id| self.user(id))
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn append_user(&mut self, username: String, email: String, password: String) -> UserId {
        let id = UserId::new(self.next_id);
        self.next_id += 1;
        self.users.push(User {
            id,
            username,
            email,
            password,
        });
        id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_demo_login() {
        let mut auth = AuthService::with_demo_user();

        let user = auth.login("user@example.com", "password123").unwrap();
        assert_eq!(user.username, "demo_user");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_login_wrong_password_stays_anonymous() {
        let mut auth = AuthService::with_demo_user();

        let err = auth.login("user@example.com", "nope").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_login_unknown_email_same_error() {
        let mut auth = AuthService::with_demo_user();

        let err = auth.login("ghost@example.com", "password123").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let mut auth = AuthService::with_demo_user();

        assert!(auth.login("User@Example.com", "password123").is_err());
    }

    #[test]
    fn test_signup_implies_login() {
        let mut auth = AuthService::with_demo_user();

        let user = auth.signup("alice", "alice@example.com", "pw").unwrap();
        assert_eq!(user.username, "alice");
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user().unwrap().email, "alice@example.com");
    }

    #[test]
    fn test_signup_duplicate_email_rejected() {
        let mut auth = AuthService::empty();

        auth.signup("a", "dup@x.com", "pw").unwrap();
        auth.logout();

        let err = auth.signup("b", "dup@x.com", "pw2").unwrap_err();
        assert_eq!(err, AuthError::DuplicateEmail);
        assert_eq!(auth.user_count(), 1);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut auth = AuthService::with_demo_user();
        auth.login("user@example.com", "password123").unwrap();

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());

        // Unconditional: a second logout is fine.
        auth.logout();
        assert!(!auth.is_authenticated());
    }
}
