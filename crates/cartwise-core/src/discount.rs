//! # Discount Rules
//!
//! Two independent families of promotions:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Campaign (category-scoped)          Coupon (cart-wide)                │
//! │  ─────────────────────────────       ─────────────────────────────     │
//! │  Amount { amount }                   Amount { amount }                  │
//! │  Rate   { rate }                     Rate   { rate }                    │
//! │                                                                         │
//! │  eligible: units in category         eligible: cart total              │
//! │            > min_quantity                      > min_purchase           │
//! │  base:     price of category         base:     cart total               │
//! │  stacking: best one only             stacking: additive                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both implement [`Discount`], which turns a base amount into the amount
//! taken off.

use std::sync::Arc;

use crate::catalog::Category;
use crate::money::{DiscountRate, Money};

/// A rule that computes how much to take off a base amount.
pub trait Discount {
    /// Discount granted against `base`. Flat rules ignore `base`.
    fn discount_for(&self, base: Money) -> Money;
}

// =============================================================================
// Campaign
// =============================================================================

/// Category-scoped promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Campaign {
    /// Flat amount off once the category threshold is passed.
    Amount {
        category: Arc<Category>,
        amount: Money,
        min_quantity: i64,
    },
    /// Percentage of the category's price once the threshold is passed.
    Rate {
        category: Arc<Category>,
        rate: DiscountRate,
        min_quantity: i64,
    },
}

impl Campaign {
    pub fn amount(category: &Arc<Category>, amount: Money, min_quantity: i64) -> Self {
        Campaign::Amount {
            category: Arc::clone(category),
            amount,
            min_quantity,
        }
    }

    pub fn rate(category: &Arc<Category>, rate: DiscountRate, min_quantity: i64) -> Self {
        Campaign::Rate {
            category: Arc::clone(category),
            rate,
            min_quantity,
        }
    }

    /// The category this campaign targets.
    pub fn category(&self) -> &Arc<Category> {
        match self {
            Campaign::Amount { category, .. } | Campaign::Rate { category, .. } => category,
        }
    }

    pub fn min_quantity(&self) -> i64 {
        match self {
            Campaign::Amount { min_quantity, .. } | Campaign::Rate { min_quantity, .. } => {
                *min_quantity
            }
        }
    }

    /// Strictly more units than the threshold are required.
    pub fn is_applicable(&self, units_in_category: u64) -> bool {
        // u64 → i128 so a negative threshold compares correctly
        units_in_category as i128 > self.min_quantity() as i128
    }
}

impl Discount for Campaign {
    fn discount_for(&self, category_price: Money) -> Money {
        match self {
            Campaign::Amount { amount, .. } => *amount,
            Campaign::Rate { rate, .. } => category_price.percentage(*rate),
        }
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// Cart-wide promotion gated on the purchase amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupon {
    Amount { min_purchase: Money, amount: Money },
    Rate { min_purchase: Money, rate: DiscountRate },
}

impl Coupon {
    pub fn amount(min_purchase: Money, amount: Money) -> Self {
        Coupon::Amount {
            min_purchase,
            amount,
        }
    }

    pub fn rate(min_purchase: Money, rate: DiscountRate) -> Self {
        Coupon::Rate { min_purchase, rate }
    }

    pub fn min_purchase(&self) -> Money {
        match self {
            Coupon::Amount { min_purchase, .. } | Coupon::Rate { min_purchase, .. } => {
                *min_purchase
            }
        }
    }

    /// The purchase amount must strictly exceed the minimum.
    pub fn is_applicable(&self, purchase: Money) -> bool {
        purchase > self.min_purchase()
    }
}

impl Discount for Coupon {
    fn discount_for(&self, total: Money) -> Money {
        match self {
            Coupon::Amount { amount, .. } => *amount,
            Coupon::Rate { rate, .. } => total.percentage(*rate),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
