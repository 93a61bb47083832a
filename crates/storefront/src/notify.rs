//! Transient user-feedback notifications.
//!
//! Operations push success/error/info messages here; entries auto-dismiss
//! roughly 3 seconds after they were pushed. The channel is purely
//! observational — nothing reads decisions back out of it.

use std::time::{Duration, Instant};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Stable lowercase label for display adapters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity of the message.
    pub kind: NotificationKind,
    /// User-facing text.
    pub message: String,
    pushed_at: Instant,
}

impl Notification {
    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.pushed_at) >= ttl
    }
}

/// How long a notification stays visible.
const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Collects notifications and drops them once they expire.
#[derive(Debug)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Create a center with the standard 3-second dismissal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            ttl: DISMISS_AFTER,
        }
    }

    /// Push a message of the given kind.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(kind = kind.as_str(), message = %message, "notification");
        self.entries.push(Notification {
            kind,
            message,
            pushed_at: Instant::now(),
        });
    }

    /// Push a success message.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    /// Push an error message.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    /// Push an info message.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message);
    }

    /// Drop entries whose dismissal time has passed.
    pub fn sweep(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries.retain(|entry| !entry.expired(now, ttl));
    }

    /// The currently visible notifications, oldest first.
    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.entries
    }

    /// Drop everything regardless of age.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
