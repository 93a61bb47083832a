//! Core types for Papershop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod product;

pub use id::*;
pub use money::{Price, PriceError};
pub use product::{Product, Rating};
