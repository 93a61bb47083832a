//! Papershop Core - Shared types library.
//!
//! This crate provides common types used across all Papershop components:
//! - `storefront` - The storefront demo application
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   product record as the remote catalog delivers it

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
