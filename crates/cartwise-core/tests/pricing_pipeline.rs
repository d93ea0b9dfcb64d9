//! End-to-end run of the pricing pipeline over a mixed catalog.

use cartwise_core::{
    Campaign, Cart, CartReport, Category, Coupon, DiscountRate, Money, Product,
};

fn major(amount: i64) -> Money {
    Money::from_major_minor(amount, 0)
}

#[test]
fn sample_store_pipeline() {
    let technology = Category::root("Technology");
    let laptop = Category::child_of(&technology, "Laptop");
    let food = Category::root("Food");
    let fruit = Category::child_of(&food, "Fruit");

    let apple = Product::new("Apple", major(10), &fruit);
    let banana = Product::new("Banana", major(15), &fruit);
    let macbook = Product::new("MacBook", major(12_500), &laptop);

    let mut cart = Cart::new();
    cart.add_item(&apple, 15).unwrap();
    cart.add_item(&banana, 10).unwrap();
    cart.add_item(&macbook, 1).unwrap();
    assert_eq!(cart.total_price(), major(12_800));

    let half_off_fruit = Campaign::rate(&fruit, DiscountRate::from_percentage(50.0), 5);
    cart.apply_discounts(&[
        // one Technology unit, needs more than three
        Campaign::rate(&technology, DiscountRate::from_percentage(20.0), 3),
        half_off_fruit.clone(),
        Campaign::amount(&fruit, major(5), 5),
    ]);
    assert_eq!(cart.campaign_discount(), major(150));
    assert_eq!(cart.applied_campaign(), Some(&half_off_fruit));
    assert_eq!(cart.total_after_discounts(), major(12_650));

    cart.apply_coupon(&Coupon::rate(major(1_000), DiscountRate::from_percentage(10.0)));
    cart.apply_coupon(&Coupon::amount(major(100_000), major(1_000)));
    assert_eq!(cart.coupon_discount(), major(1_265));
    assert_eq!(cart.total_after_discounts(), major(11_385));

    // Fruit + Laptop, three products
    assert_eq!(cart.delivery_cost(), Money::from_cents(799));

    let report = CartReport::from(&cart);
    assert_eq!(report.categories.len(), 2);
    assert_eq!(report.total_discount, major(1_415));
    assert_eq!(report.total_amount, major(11_385));
}

#[test]
fn same_titled_categories_share_campaigns() {
    // Two distinct nodes both titled "technology".
    let technology = Category::root("technology");
    let lookalike = Category::root("technology");

    let mut cart = Cart::new();
    cart.add_item(&Product::new("macbook", major(1_000), &technology), 1)
        .unwrap();
    cart.add_item(&Product::new("tuna", major(10), &lookalike), 9)
        .unwrap();

    assert_eq!(cart.category_occurrences().get("technology"), Some(&10));
    assert_eq!(cart.distinct_category_count(), 2);

    cart.apply_discounts(&[Campaign::rate(&technology, DiscountRate::from_percentage(10.0), 9)]);
    assert_eq!(cart.campaign_discount(), major(109));
}
