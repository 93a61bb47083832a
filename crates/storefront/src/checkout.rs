//! Checkout finalization: fake payment validation and order synthesis.
//!
//! Validation is syntactic only (no Luhn, no real processor) and order ids
//! are random tokens. Both sit behind [`CheckoutGateway`] so genuine logic
//! could be swapped in without touching the dispatcher.

use chrono::{Days, NaiveDate, Utc};
use rand::seq::IndexedRandom;
use regex::Regex;
use thiserror::Error;

/// Checkout form fields, pre-validated for presence by the UI layer.
///
/// Implements `Debug` manually to redact the card number and CVV.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentFields {
    /// Cardholder name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Shipping address.
    pub address: String,
    /// Card number; may carry the UI's grouping spaces.
    pub card_number: String,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    /// Card verification value.
    pub cvv: String,
}

impl std::fmt::Debug for PaymentFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentFields")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("card_number", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

/// Field-level validation failures, reported first-failure-first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// Card number shorter than 13 digits.
    #[error("Invalid card number")]
    CardNumber,

    /// Expiry does not match `MM/YY`.
    #[error("Invalid expiry date format (MM/YY)")]
    Expiry,

    /// CVV is not exactly 3 characters.
    #[error("Invalid CVV")]
    Cvv,
}

/// A finalized order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Synthesized order identifier (`ORD-XXXXXXXXX`).
    pub order_id: String,
    /// Estimated delivery date, 7 days after submission.
    pub delivery_date: NaiveDate,
}

impl OrderConfirmation {
    /// Delivery date in en-US long form, e.g. "March 5, 2026".
    #[must_use]
    pub fn formatted_delivery_date(&self) -> String {
        self.delivery_date.format("%B %-d, %Y").to_string()
    }
}

/// Seam between the dispatcher and payment/order logic.
pub trait CheckoutGateway {
    /// Validate the payment fields, reporting the first failing check.
    ///
    /// # Errors
    ///
    /// Returns the [`PaymentError`] for the first field that fails.
    fn validate_payment(&self, fields: &PaymentFields) -> Result<(), PaymentError>;

    /// Synthesize the identifier for the next order.
    fn next_order_id(&mut self) -> String;

    /// The delivery date quoted at submission time.
    fn delivery_date(&self) -> NaiveDate {
        Utc::now().date_naive() + Days::new(DELIVERY_LEAD_DAYS)
    }
}

/// Days between order submission and the quoted delivery date.
const DELIVERY_LEAD_DAYS: u64 = 7;

/// Minimum digits in an acceptable card number.
const MIN_CARD_DIGITS: usize = 13;

/// Characters drawn for the random part of an order id.
const ORDER_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random part of an order id.
const ORDER_ID_LEN: usize = 9;

/// The demo gateway: syntactic checks and random order tokens.
#[derive(Debug)]
pub struct FakeGateway {
    expiry_pattern: Regex,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGateway {
    /// Create the gateway.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expiry_pattern: Regex::new(r"^\d{2}/\d{2}$").expect("expiry pattern is valid"),
        }
    }
}

impl CheckoutGateway for FakeGateway {
    fn validate_payment(&self, fields: &PaymentFields) -> Result<(), PaymentError> {
        // The UI formats card input into space-separated groups; count
        // the digits, not the grouping.
        let card_len = fields
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .count();
        if card_len < MIN_CARD_DIGITS {
            return Err(PaymentError::CardNumber);
        }

        if !self.expiry_pattern.is_match(&fields.expiry) {
            return Err(PaymentError::Expiry);
        }

        // Length check only; any three characters pass.
        if fields.cvv.chars().count() != 3 {
            return Err(PaymentError::Cvv);
        }

        Ok(())
    }

    fn next_order_id(&mut self) -> String {
        let mut rng = rand::rng();
        let token: String = (0..ORDER_ID_LEN)
            .map(|_| {
                let byte = ORDER_ID_ALPHABET.choose(&mut rng).copied().unwrap_or(b'0');
                char::from(byte)
            })
            .collect();
        format!("ORD-{token}")
    }
}
