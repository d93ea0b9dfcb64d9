//! # Delivery Cost
//!
//! Shipping is priced from the cart's composition, not its value:
//!
//! ```text
//! cost = cost_per_delivery × distinct categories
//!      + cost_per_product  × distinct products
//!      + 2.99 fixed
//! ```
//!
//! Distinct categories are counted by identity: two category nodes that share
//! a title still count twice. An empty cart ships for free, see
//! [`Cart::delivery_cost`](crate::cart::Cart::delivery_cost).

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;

/// Flat part of every non-empty delivery.
pub const FIXED_DELIVERY_COST: Money = Money::from_cents(299);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCostCalculator {
    cost_per_delivery: Money,
    cost_per_product: Money,
}

impl DeliveryCostCalculator {
    pub const fn new(cost_per_delivery: Money, cost_per_product: Money) -> Self {
        DeliveryCostCalculator {
            cost_per_delivery,
            cost_per_product,
        }
    }

    pub fn cost_per_delivery(&self) -> Money {
        self.cost_per_delivery
    }

    pub fn cost_per_product(&self) -> Money {
        self.cost_per_product
    }

    /// Applies the formula as-is, including the fixed cost.
    pub fn calculate_for(&self, cart: &Cart) -> Money {
        self.cost_per_delivery * cart.distinct_category_count()
            + self.cost_per_product * cart.distinct_product_count()
            + FIXED_DELIVERY_COST
    }
}

/// 1.00 per delivery and 1.00 per product.
impl Default for DeliveryCostCalculator {
    fn default() -> Self {
        DeliveryCostCalculator::new(Money::from_cents(100), Money::from_cents(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    #[test]
    fn test_single_product() {
        let fruit = Category::root("Fruit");
        let apple = Product::new("Apple", Money::from_cents(1000), &fruit);

        let mut cart = Cart::new();
        cart.add_item(&apple, 1).unwrap();

        let calculator = DeliveryCostCalculator::new(Money::from_cents(100), Money::from_cents(100));
        assert_eq!(calculator.calculate_for(&cart), Money::from_cents(499));
    }

    #[test]
    fn test_counts_categories_by_identity() {
        // Same title, different nodes.
        let tech = Category::root("technology");
        let food = Category::root("technology");
        let laptop = Product::new("macbook", Money::from_cents(100), &tech);
        let phone = Product::new("iphone", Money::from_cents(100), &tech);
        let fish = Product::new("tuna", Money::from_cents(100), &food);

        let mut cart = Cart::new();
        cart.add_item(&laptop, 1).unwrap();
        cart.add_item(&phone, 4).unwrap();
        cart.add_item(&fish, 9).unwrap();

        let calculator = DeliveryCostCalculator::new(Money::from_cents(500), Money::from_cents(200));
        // 2 categories × 5.00 + 3 products × 2.00 + 2.99
        assert_eq!(calculator.calculate_for(&cart), Money::from_cents(1899));
    }

    #[test]
    fn test_formula_on_empty_cart_is_fixed_cost() {
        let cart = Cart::new();
        assert_eq!(
            DeliveryCostCalculator::default().calculate_for(&cart),
            FIXED_DELIVERY_COST
        );
    }
}
