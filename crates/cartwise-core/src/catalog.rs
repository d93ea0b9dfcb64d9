//! # Catalog Types
//!
//! Categories and products that carts are filled with.
//!
//! ## Category Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Technology            Food                                            │
//! │      ▲                   ▲                                              │
//! │      │ parent            │ parent                                       │
//! │   Laptop               Fruit ◄──── Apple, Banana                        │
//! │      ▲                                                                  │
//! │      └──── MacBook                                                      │
//! │                                                                         │
//! │  Fruit.ancestor_titles() = ["Fruit", "Food"]                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Children hold an `Arc` to their parent. A parent must already exist when
//! a child is created, so the chain always ends at a root.
//!
//! ## Dual-Key Identity Pattern
//! - `id`: UUID v4 - used for identity (distinct categories, cart lines)
//! - `title`: human-readable - used for campaign matching

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Identity of a category node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Creates a new random category ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a product. Cart lines are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A node in the category tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    title: String,
    parent: Option<Arc<Category>>,
}

impl Category {
    /// Creates a top-level category.
    pub fn root(title: impl Into<String>) -> Arc<Self> {
        Arc::new(Category {
            id: CategoryId::new(),
            title: title.into(),
            parent: None,
        })
    }

    /// Creates a category nested under `parent`.
    pub fn child_of(parent: &Arc<Category>, title: impl Into<String>) -> Arc<Self> {
        Arc::new(Category {
            id: CategoryId::new(),
            title: title.into(),
            parent: Some(Arc::clone(parent)),
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parent(&self) -> Option<&Arc<Category>> {
        self.parent.as_ref()
    }

    /// Walks from this category up to the root, inclusive.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Own title followed by every ancestor title, root last.
    ///
    /// ```rust
    /// use cartwise_core::catalog::Category;
    ///
    /// let food = Category::root("Food");
    /// let fruit = Category::child_of(&food, "Fruit");
    /// assert_eq!(fruit.ancestor_titles(), vec!["Fruit", "Food"]);
    /// ```
    pub fn ancestor_titles(&self) -> Vec<&str> {
        self.ancestors().map(Category::title).collect()
    }

    /// Whether `title` names this category or one of its ancestors.
    ///
    /// Matching is by title, so two distinct categories sharing a title are
    /// indistinguishable here.
    pub fn is_within(&self, title: &str) -> bool {
        self.ancestors().any(|c| c.title == title)
    }
}

/// Iterator over a category and its parents. See [`Category::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a Category>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Category;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A priced item. Immutable once constructed.
///
/// A product may be staged without a category (e.g. while a catalog import is
/// still being categorised); such a product is rejected by
/// [`Cart::add_item`](crate::cart::Cart::add_item).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Money,
    category: Option<Arc<Category>>,
}

impl Product {
    /// Creates a categorised product.
    pub fn new(title: impl Into<String>, price: Money, category: &Arc<Category>) -> Self {
        Product {
            id: ProductId::new(),
            title: title.into(),
            price,
            category: Some(Arc::clone(category)),
        }
    }

    /// Creates a product that has no category yet.
    pub fn uncategorized(title: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId::new(),
            title: title.into(),
            price,
            category: None,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Option<&Arc<Category>> {
        self.category.as_ref()
    }

    /// Whether this product sits in the category titled `title` or in any of
    /// its subcategories. Uncategorised products belong nowhere.
    pub fn belongs_to(&self, title: &str) -> bool {
        self.category.as_deref().is_some_and(|c| c.is_within(title))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
