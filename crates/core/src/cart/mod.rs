//! Cart line items and cart-to-catalog resolution.

pub mod line;

pub use line::{CartLineItem, ResolvedCartLine, cart_subtotal, resolve_cart_lines};
