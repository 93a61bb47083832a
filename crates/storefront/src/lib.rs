//! Papershop Storefront library.
//!
//! The storefront demo core as a library: a single mutable [`state::StoreState`]
//! driven by the [`app::Command`] stream, projected through [`render`] into a
//! swappable [`render::RenderSink`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod nav;
pub mod notify;
pub mod render;
pub mod services;
pub mod state;
