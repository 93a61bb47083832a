//! Session state: at most one authenticated user process-wide.

use papershop_core::UserId;

/// The current session: empty, or a reference to exactly one registry user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<UserId>,
}

impl Session {
    /// An anonymous session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { current: None }
    }

    /// Transition to authenticated as `user_id`.
    pub const fn sign_in(&mut self, user_id: UserId) {
        self.current = Some(user_id);
    }

    /// Transition to anonymous unconditionally.
    pub const fn sign_out(&mut self) {
        self.current = None;
    }

    /// The signed-in user's id, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.current
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
