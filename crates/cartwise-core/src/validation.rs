//! # Validation Module
//!
//! Input checks run by [`Cart::add_item`](crate::cart::Cart::add_item)
//! before the cart is touched.
//!
//! ## Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. category present         → NullData { field: "category" }          │
//! │  2. title present, non-blank → NullData { field: "title" }             │
//! │  3. price > 0                → InvalidPrice                            │
//! │  4. quantity >= 1            → InvalidQuantity                         │
//! │                                                                         │
//! │  First failure wins; later checks do not run.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::catalog::{Category, Product};
use crate::error::{CoreError, CoreResult};

/// Validates that a product may enter a cart.
///
/// Returns the product's category on success; the cart keeps it on the
/// line it creates.
///
/// ```rust
/// use cartwise_core::catalog::{Category, Product};
/// use cartwise_core::money::Money;
/// use cartwise_core::validation::validate_product;
///
/// let tech = Category::root("technology");
/// assert!(validate_product(&Product::new("macbook", Money::from_cents(100), &tech)).is_ok());
/// assert!(validate_product(&Product::uncategorized("macbook", Money::from_cents(100))).is_err());
/// ```
pub fn validate_product(product: &Product) -> CoreResult<&Arc<Category>> {
    let category = product
        .category()
        .ok_or(CoreError::NullData { field: "category" })?;

    if product.title().trim().is_empty() {
        return Err(CoreError::NullData { field: "title" });
    }

    if !product.price().is_positive() {
        return Err(CoreError::InvalidPrice {
            title: product.title().to_string(),
            price: product.price(),
        });
    }

    Ok(category)
}

/// Validates a quantity being added to the cart.
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity < 1 {
        return Err(CoreError::InvalidQuantity { quantity });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
