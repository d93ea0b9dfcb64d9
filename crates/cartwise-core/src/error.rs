//! # Error Types
//!
//! Domain-specific error types for cartwise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartwise-core errors (this file)                                      │
//! │  └── CoreError        - Cart input validation failures                 │
//! │                                                                         │
//! │  cartwise-cli errors (separate crate)                                  │
//! │  └── ConfigError      - Environment configuration failures             │
//! │                                                                         │
//! │  Flow: CoreError / ConfigError → anyhow (main) → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, price, quantity)
//! 3. Errors are enum variants, never String
//! 4. A failed operation never leaves the cart half-mutated

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while putting products into a cart.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// ```text
/// add_item(product, qty)
///      │
///      ├── no category?      → NullData { field: "category" }
///      ├── no title?         → NullData { field: "title" }
///      ├── price <= 0?       → InvalidPrice
///      ├── qty < 1?          → InvalidQuantity
///      ├── totals overflow?  → Overflow
///      │
///      └── OK → line inserted / quantity incremented
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required piece of data is absent.
    ///
    /// ## When This Occurs
    /// - Product staged without a category
    /// - Product with an empty or blank title
    #[error("{field} is missing")]
    NullData { field: &'static str },

    /// Product price is zero or negative.
    #[error("Price of '{title}' must be positive, got {price}")]
    InvalidPrice { title: String, price: Money },

    /// Quantity is below one.
    #[error("Quantity must be at least 1, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The resulting quantity or amount no longer fits in an `i64`.
    #[error("Adding '{title}' overflows the cart totals")]
    Overflow { title: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
