//! Page navigation.
//!
//! Exactly one page is active at a time. `navigate_to` is the only
//! transition and is unconditional, with one exception: entering the
//! profile page while anonymous lands on the auth page instead. The
//! checkout gate is a precondition checked by the caller of navigation
//! (see the app dispatcher), not by the primitive itself.

use serde::{Deserialize, Serialize};

/// The screens of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Cart,
    Checkout,
    Auth,
    Profile,
    Confirmation,
}

impl Page {
    /// Stable lowercase identifier (the element-id key the UI layer uses).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Auth => "auth",
            Self::Profile => "profile",
            Self::Confirmation => "confirmation",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Page::Home,
        }
    }
}

impl Navigator {
    /// Start on the home page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Page::Home,
        }
    }

    /// Transition to `page` and return the page actually entered.
    ///
    /// The profile page requires a session; anonymous visitors are
    /// redirected to auth.
    pub const fn navigate_to(&mut self, page: Page, authenticated: bool) -> Page {
        let effective = match page {
            Page::Profile if !authenticated => Page::Auth,
            other => other,
        };
        self.current = effective;
        effective
    }

    /// The active page.
    #[must_use]
    pub const fn current(&self) -> Page {
        self.current
    }
}
