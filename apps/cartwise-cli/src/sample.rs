//! Sample store used by the CLI: a small two-tree catalog, a basket, and the
//! promotions that run against it.

use std::sync::Arc;

use cartwise_core::{
    Campaign, Cart, Category, CoreResult, Coupon, DeliveryCostCalculator, DiscountRate, Money,
    Product,
};

/// Everything the pipeline needs in one place.
pub struct SampleStore {
    pub cart: Cart,
    pub campaigns: Vec<Campaign>,
    pub coupons: Vec<Coupon>,
}

/// Technology > Laptop and Food > Fruit, three products.
pub fn build(delivery: DeliveryCostCalculator) -> CoreResult<SampleStore> {
    let technology = Category::root("Technology");
    let laptop = Category::child_of(&technology, "Laptop");
    let food = Category::root("Food");
    let fruit = Category::child_of(&food, "Fruit");

    let apple = Product::new("Apple", Money::from_major_minor(10, 0), &fruit);
    let banana = Product::new("Banana", Money::from_major_minor(15, 0), &fruit);
    let macbook = Product::new("MacBook", Money::from_major_minor(12_500, 0), &laptop);

    let mut cart = Cart::with_delivery(delivery);
    cart.add_item(&apple, 15)?;
    cart.add_item(&banana, 10)?;
    cart.add_item(&macbook, 1)?;

    Ok(SampleStore {
        cart,
        campaigns: campaigns(&technology, &fruit),
        coupons: vec![
            Coupon::rate(
                Money::from_major_minor(1_000, 0),
                DiscountRate::from_percentage(10.0),
            ),
            Coupon::amount(
                Money::from_major_minor(100_000, 0),
                Money::from_major_minor(1_000, 0),
            ),
        ],
    })
}

fn campaigns(technology: &Arc<Category>, fruit: &Arc<Category>) -> Vec<Campaign> {
    vec![
        Campaign::rate(technology, DiscountRate::from_percentage(20.0), 3),
        Campaign::rate(fruit, DiscountRate::from_percentage(50.0), 5),
        Campaign::amount(fruit, Money::from_major_minor(5, 0), 5),
    ]
}
