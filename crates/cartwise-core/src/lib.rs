//! # cartwise-core: Pure Pricing Engine for Cartwise
//!
//! This crate is the **heart** of Cartwise. It holds the cart, the discount
//! rules and the delivery formula as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cartwise Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cartwise-cli                                 │   │
//! │  │    config ──► sample catalog ──► pipeline ──► print report     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cartwise-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐  │   │
//! │  │   │ catalog  │  │ discount │  │   cart   │  │   delivery   │  │   │
//! │  │   │ Category │  │ Campaign │  │   Cart   │  │  Calculator  │  │   │
//! │  │   │ Product  │  │  Coupon  │  │ CartLine │  │    report    │  │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money and DiscountRate with integer arithmetic
//! - [`catalog`] - Category hierarchy and products
//! - [`discount`] - Campaigns and coupons
//! - [`cart`] - Cart and its pricing pipeline
//! - [`delivery`] - Delivery cost calculator
//! - [`report`] - Cart report
//! - [`validation`] - Input checks for the cart
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cartwise_core::{Campaign, Cart, Category, Coupon, DiscountRate, Money, Product};
//!
//! let tech = Category::root("technology");
//! let laptop = Product::new("macbook", Money::from_major_minor(5_000, 0), &tech);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&laptop, 2).unwrap();
//!
//! cart.apply_discounts(&[Campaign::rate(&tech, DiscountRate::from_percentage(10.0), 1)]);
//! assert_eq!(cart.total_after_discounts(), Money::from_major_minor(9_000, 0));
//!
//! cart.apply_coupon(&Coupon::amount(Money::from_major_minor(1, 0), Money::from_major_minor(100, 0)));
//! assert_eq!(cart.total_after_discounts(), Money::from_major_minor(8_900, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod discount;
pub mod error;
pub mod money;
pub mod report;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Category, CategoryId, Product, ProductId};
pub use delivery::{DeliveryCostCalculator, FIXED_DELIVERY_COST};
pub use discount::{Campaign, Coupon, Discount};
pub use error::{CoreError, CoreResult};
pub use money::{DiscountRate, Money};
pub use report::CartReport;
