//! Core types for Tidemark.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod collection;
pub mod id;
pub mod money;
pub mod product;

pub use collection::Collection;
pub use id::*;
pub use money::{CurrencyCode, Locale, MoneyError, MoneyFormat, format_money};
pub use product::{Price, Product, ProductMetadata, Variant, VariantOption};
