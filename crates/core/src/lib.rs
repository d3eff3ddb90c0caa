//! Tidemark Core - Shared commerce types library.
//!
//! This crate provides the common types used across all Tidemark components:
//! - `storefront` - Server-rendered multi-tenant storefront
//! - `cli` - Command-line tools for store dataset management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, money formatting, products, variants, collections
//! - [`cart`] - Cart line items and cart-to-catalog resolution

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;
