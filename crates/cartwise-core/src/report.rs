//! # Cart Report
//!
//! Human-readable (and JSON) summary of a priced cart.
//!
//! ```text
//! -> Category: Fruit
//!      -> Product: Apple
//!      -> Quantity: 15
//!      -> Unit Price: 10.00
//!
//! ----> Total Price: 12800.00
//! ----> Total Discount: 1415.00
//! ----> Total Amount: 11385.00
//! ----> Delivery Cost: 7.99
//! ```
//!
//! Building a report is pure; printing it is the caller's job.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::CategoryId;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartReport {
    pub categories: Vec<CategorySection>,
    pub total_price: Money,
    pub total_discount: Money,
    pub total_amount: Money,
    pub delivery_cost: Money,
    pub generated_at: DateTime<Utc>,
}

/// Products grouped under the category node they were filed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    pub category_id: CategoryId,
    pub title: String,
    pub lines: Vec<ReportLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub title: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl CartReport {
    /// Serialises the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Cart> for CartReport {
    /// Sections follow the order in which each category first appears.
    fn from(cart: &Cart) -> Self {
        let mut categories: Vec<CategorySection> = Vec::new();

        for line in cart.lines() {
            let product = line.product();
            let category = line.category();
            let report_line = ReportLine {
                title: product.title().to_string(),
                quantity: line.quantity(),
                unit_price: product.price(),
            };

            match categories.iter_mut().find(|s| s.category_id == category.id()) {
                Some(section) => section.lines.push(report_line),
                None => categories.push(CategorySection {
                    category_id: category.id(),
                    title: category.title().to_string(),
                    lines: vec![report_line],
                }),
            }
        }

        CartReport {
            categories,
            total_price: cart.total_price(),
            total_discount: cart.total_discount(),
            total_amount: cart.total_after_discounts(),
            delivery_cost: cart.delivery_cost(),
            generated_at: Utc::now(),
        }
    }
}

impl fmt::Display for CartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.categories {
            writeln!(f, "-> Category: {}", section.title)?;
            writeln!(f)?;
            for line in &section.lines {
                writeln!(f, "     -> Product: {}", line.title)?;
                writeln!(f, "     -> Quantity: {}", line.quantity)?;
                writeln!(f, "     -> Unit Price: {}", line.unit_price)?;
                writeln!(f)?;
            }
        }
        writeln!(f, "----> Total Price: {}", self.total_price)?;
        writeln!(f, "----> Total Discount: {}", self.total_discount)?;
        writeln!(f, "----> Total Amount: {}", self.total_amount)?;
        write!(f, "----> Delivery Cost: {}", self.delivery_cost)
    }
}
