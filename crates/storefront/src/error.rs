//! Unified error handling for storefront operations.
//!
//! Every error is handled at the operation boundary: the dispatcher maps it
//! to a notification (and, for form operations, an inline field message)
//! and the state is left unchanged. Nothing propagates as an unhandled
//! fault and nothing is retried automatically.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::checkout::PaymentError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog load failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart operation failed.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout field validation failed.
    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),
}

impl AppError {
    /// The message shown to the user for this error.
    ///
    /// Auth and payment errors already carry user-facing text; catalog and
    /// cart internals are summarized instead of exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Catalog(_) => "Failed to load products. Please try again.".to_string(),
            Self::Cart(CartError::UnknownProduct(_)) => {
                "That product is not available".to_string()
            }
            Self::Cart(CartError::ZeroQuantity) => "Quantity must be at least 1".to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Payment(err) => err.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
