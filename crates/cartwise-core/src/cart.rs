//! # Cart
//!
//! The shopping cart and its pricing pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Pricing Pipeline                            │
//! │                                                                         │
//! │  add_item ──────────► lines[product] += qty                             │
//! │      │                total_after_discounts = raw total                 │
//! │      ▼                                                                  │
//! │  apply_discounts ───► tally units per ancestor title                    │
//! │      │                keep best applicable campaign (never lowered)     │
//! │      │                total_after_discounts = raw - campaign_discount   │
//! │      ▼                                                                  │
//! │  apply_coupon ──────► if total_after_discounts > min_purchase:          │
//! │      │                    coupon_discount += d; total -= d              │
//! │      ▼                                                                  │
//! │  delivery_cost ─────► 0 if empty, else calculator formula               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle Contract
//! - `campaign_discount` only ever rises. A later `apply_discounts` call
//!   competes against the value stored by earlier calls.
//! - `coupon_discount` accumulates across every applied coupon and is never
//!   reset.
//! - `add_item` resets `total_after_discounts` to the raw total. Discounts
//!   and coupons applied before that are dropped from the cached total (but
//!   not from the stored discount fields) until they are applied again.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::catalog::{Category, CategoryId, Product, ProductId};
use crate::delivery::DeliveryCostCalculator;
use crate::discount::{Campaign, Coupon, Discount};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_product, validate_quantity};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    category: Arc<Category>,
    quantity: i64,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The category checked when the line was added.
    pub fn category(&self) -> &Arc<Category> {
        &self.category
    }

    /// Always at least 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }

    fn category_id(&self) -> CategoryId {
        self.category.id()
    }

    fn ancestor_titles(&self) -> Vec<&str> {
        self.category.ancestor_titles()
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product identity (adding the same product again
///   increases quantity)
/// - Every quantity is >= 1
/// - Every product in a line passed [`validate_product`]
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    total_after_discounts: Money,
    campaign_discount: Money,
    coupon_discount: Money,
    applied_campaign: Option<Campaign>,
    delivery: DeliveryCostCalculator,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart with the default delivery calculator.
    pub fn new() -> Self {
        Cart::with_delivery(DeliveryCostCalculator::default())
    }

    /// Creates an empty cart that prices shipping with `delivery`.
    pub fn with_delivery(delivery: DeliveryCostCalculator) -> Self {
        Cart {
            lines: Vec::new(),
            total_after_discounts: Money::zero(),
            campaign_discount: Money::zero(),
            coupon_discount: Money::zero(),
            applied_campaign: None,
            delivery,
            created_at: Utc::now(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product to the cart or increases its quantity if already present.
    ///
    /// ## Errors
    /// See [`CoreError`]; on error the cart is left untouched. The new
    /// quantity, line total and cart total are all computed before anything
    /// is written, so an overflow is reported as [`CoreError::Overflow`].
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        let category = validate_product(product)?;
        validate_quantity(quantity)?;

        let overflow = || CoreError::Overflow {
            title: product.title().to_string(),
        };
        let position = self.lines.iter().position(|l| l.product.id() == product.id());
        let new_quantity = position
            .map_or(0, |i| self.lines[i].quantity)
            .checked_add(quantity)
            .ok_or_else(overflow)?;
        let new_line_total = product
            .price()
            .checked_mul(new_quantity)
            .ok_or_else(overflow)?;
        let new_total = self
            .lines
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != position)
            .try_fold(new_line_total, |acc, (_, line)| acc.checked_add(line.line_total()))
            .ok_or_else(overflow)?;

        match position {
            Some(i) => self.lines[i].quantity = new_quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                category: Arc::clone(category),
                quantity,
            }),
        }

        self.total_after_discounts = new_total;
        debug!(
            product = product.title(),
            quantity,
            total = %self.total_after_discounts,
            "item added"
        );
        Ok(())
    }

    /// Applies the single best applicable campaign.
    ///
    /// A campaign is applicable when the number of units whose category (or
    /// an ancestor) carries the campaign's category title is strictly above
    /// its `min_quantity`. Among applicable campaigns, and the maximum kept
    /// from earlier calls, the largest discount wins; on a tie the first one
    /// seen is kept. An empty slice changes nothing but the cached total.
    pub fn apply_discounts(&mut self, campaigns: &[Campaign]) {
        let occurrences = self.category_occurrences();

        for campaign in campaigns {
            let title = campaign.category().title();
            let applicable = occurrences
                .get(title)
                .is_some_and(|&units| campaign.is_applicable(units));
            if !applicable {
                trace!(category = title, "campaign not applicable");
                continue;
            }

            let discount = campaign.discount_for(self.price_of_category(title));
            if self.campaign_discount < discount {
                self.campaign_discount = discount;
                self.applied_campaign = Some(campaign.clone());
            }
        }

        self.total_after_discounts = self.total_price() - self.campaign_discount;
        debug!(
            campaigns = campaigns.len(),
            campaign_discount = %self.campaign_discount,
            total = %self.total_after_discounts,
            "campaigns applied"
        );
    }

    /// Applies a coupon against the current post-discount total.
    ///
    /// Coupons stack: each applicable one adds to `coupon_discount`. An
    /// inapplicable coupon is a silent no-op.
    pub fn apply_coupon(&mut self, coupon: &Coupon) {
        if !coupon.is_applicable(self.total_after_discounts) {
            debug!(
                min_purchase = %coupon.min_purchase(),
                total = %self.total_after_discounts,
                "coupon not applicable"
            );
            return;
        }

        let discount = coupon.discount_for(self.total_after_discounts);
        self.coupon_discount += discount;
        self.total_after_discounts -= discount;
        debug!(
            discount = %discount,
            coupon_discount = %self.coupon_discount,
            total = %self.total_after_discounts,
            "coupon applied"
        );
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity held for `product_id`, if the product is in the cart.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.product.id() == product_id)
            .map(|l| l.quantity)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Raw total, ignoring every discount.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn total_after_discounts(&self) -> Money {
        self.total_after_discounts
    }

    pub fn campaign_discount(&self) -> Money {
        self.campaign_discount
    }

    pub fn coupon_discount(&self) -> Money {
        self.coupon_discount
    }

    /// Campaign plus coupon discount.
    pub fn total_discount(&self) -> Money {
        self.campaign_discount + self.coupon_discount
    }

    /// The campaign that produced the current `campaign_discount`.
    pub fn applied_campaign(&self) -> Option<&Campaign> {
        self.applied_campaign.as_ref()
    }

    pub fn delivery(&self) -> &DeliveryCostCalculator {
        &self.delivery
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Shipping cost. Zero for an empty cart, skipping the fixed cost.
    pub fn delivery_cost(&self) -> Money {
        if self.is_empty() {
            return Money::zero();
        }
        self.delivery.calculate_for(self)
    }

    /// Number of distinct category nodes referenced by the lines.
    pub fn distinct_category_count(&self) -> usize {
        self.lines
            .iter()
            .map(CartLine::category_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of distinct products.
    pub fn distinct_product_count(&self) -> usize {
        self.lines.len()
    }

    /// Units per category title: every unit of a product counts once for its
    /// own category title and once for each ancestor title.
    pub fn category_occurrences(&self) -> HashMap<String, u64> {
        let mut occurrences: HashMap<String, u64> = HashMap::new();
        for line in &self.lines {
            for title in line.ancestor_titles() {
                *occurrences.entry(title.to_string()).or_default() += line.quantity as u64;
            }
        }
        trace!(?occurrences, "category occurrences");
        occurrences
    }

    /// Raw total of the lines whose category is titled `title` or sits below
    /// a category with that title.
    pub fn price_of_category(&self, title: &str) -> Money {
        self.lines
            .iter()
            .filter(|l| l.product.belongs_to(title))
            .map(CartLine::line_total)
            .sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
