/// Storefront scenarios exercised through the public API.
use velo_commerce::prelude::*;

fn sample_product(id: &str) -> Product {
    Catalog::sample()
        .product(&ProductId::new(id))
        .cloned()
        .unwrap()
}

#[test]
fn repeated_adds_make_one_line() {
    let helmet = sample_product("1");
    let mut cart = Cart::new();
    for _ in 0..5 {
        cart.add_to_cart(&helmet);
    }

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 5);
    assert_eq!(cart.total_price(), Money::from_cents(24999 * 5));
}

#[test]
fn non_positive_update_matches_remove() {
    let gloves = sample_product("3");
    let tool = sample_product("4");

    let mut removed = Cart::new();
    removed.add_to_cart(&gloves);
    removed.add_to_cart(&tool);
    removed.remove_from_cart(&gloves.id);

    for quantity in [0, -1] {
        let mut updated = Cart::new();
        updated.add_to_cart(&gloves);
        updated.add_to_cart(&tool);
        updated.update_quantity(&gloves.id, quantity);
        assert_eq!(updated, removed);
    }
}

#[test]
fn empty_and_cleared_carts_total_zero() {
    let mut cart = Cart::new();
    assert!(cart.total_price().is_zero());

    cart.add_to_cart(&sample_product("2"));
    cart.clear_cart();
    assert!(cart.total_price().is_zero());
    assert!(cart.is_empty());
}

#[test]
fn free_shipping_order_pricing() {
    let mut cart = Cart::new();
    cart.add_to_cart(&sample_product("1"));
    cart.add_quantity(&sample_product("3"), 2);

    let pricing = cart.pricing(&PricingPolicy::default());
    assert_eq!(pricing.subtotal.display(), "$369.97");
    assert!(pricing.is_free_shipping());
    assert_eq!(pricing.shipping_label(), "FREE");
    assert_eq!(pricing.tax.display(), "$29.60");
    assert_eq!(pricing.grand_total.display(), "$399.57");
    assert_eq!(pricing.amount_to_free_shipping(), None);
}

#[test]
fn small_order_pays_flat_shipping() {
    let pricing = PricingPolicy::default().price(Money::from_cents(4000));
    assert_eq!(pricing.shipping.display(), "$9.99");
    assert_eq!(pricing.tax.display(), "$3.20");
    assert_eq!(pricing.grand_total.display(), "$53.19");
    assert_eq!(pricing.amount_to_free_shipping(), Some(Money::from_cents(3500)));
}

#[test]
fn helmets_sorted_by_price() {
    let catalog = Catalog::sample();
    let filter = QueryFilter::new()
        .with_category("helmets")
        .with_price_range(Money::zero(), Money::from_cents(50_000))
        .with_sort(SortOption::PriceLow);

    let names: Vec<_> = catalog.query(&filter).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Urban Commuter Helmet", "Aero Pro Carbon Helmet"]);
}

#[test]
fn query_is_deterministic() {
    let catalog = Catalog::sample();
    for sort in SortOption::ALL {
        let filter = QueryFilter::new().with_sort(sort);
        assert_eq!(catalog.query(&filter), catalog.query(&filter));
    }
}

#[test]
fn newest_is_a_stable_partition() {
    let catalog = Catalog::sample();
    let listed = catalog.query(&QueryFilter::new().with_sort(SortOption::Newest));

    let (new, rest): (Vec<&Product>, Vec<&Product>) =
        catalog.products().iter().partition(|p| p.is_new);
    let expected: Vec<&Product> = new.into_iter().chain(rest).collect();
    assert_eq!(listed, expected);
}

#[test]
fn inverted_price_range_is_empty() {
    let filter = QueryFilter::new().with_price_range(Money::from_cents(10_000), Money::from_cents(5_000));
    assert!(Catalog::sample().query(&filter).is_empty());
}

#[test]
fn checkout_runs_to_completion() {
    let session = StorefrontSession::new(Catalog::sample());
    session.add_product_by_id(&ProductId::new("1")).unwrap();
    session.add_quantity_by_id(&ProductId::new("3"), 2).unwrap();

    let mut flow = session.begin_checkout().unwrap();
    assert_eq!(session.back_checkout(&mut flow), Transition::Unchanged(CheckoutStep::Shipping));

    flow.set_shipping_address(Address {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        email: "jane@example.com".to_string(),
        street: "456 Oak Ave".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip: "97201".to_string(),
    });
    session.advance_checkout(&mut flow);
    flow.set_payment_method(PaymentMethod::Upi);
    session.advance_checkout(&mut flow);
    assert_eq!(flow.step(), CheckoutStep::Review);

    let receipt = match session.advance_checkout(&mut flow) {
        Transition::Completed(receipt) => receipt,
        other => panic!("expected completion, got {:?}", other),
    };

    assert!(session.cart().is_empty());
    assert_eq!(flow.step(), CheckoutStep::Completed);
    assert_eq!(receipt.item_count(), 3);
    assert_eq!(receipt.pricing.grand_total.display(), "$399.57");
    assert_eq!(receipt.payment_method, PaymentMethod::Upi);
    assert_eq!(receipt.confirmation_email(), Some("jane@example.com"));
}

#[test]
fn emptied_cart_ends_checkout() {
    let session = StorefrontSession::new(Catalog::sample());
    session.add_product_by_id(&ProductId::new("6")).unwrap();

    let mut flow = session.begin_checkout().unwrap();
    session.advance_checkout(&mut flow);
    session.cart().remove_from_cart(&ProductId::new("6"));

    assert_eq!(session.advance_checkout(&mut flow), Transition::ReturnToCart);
    assert!(flow.is_aborted());
}

#[test]
fn shared_cart_counts_every_concurrent_add() {
    let session = StorefrontSession::new(Catalog::sample());
    let lights = sample_product("2");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let cart = session.cart().clone();
            let lights = &lights;
            scope.spawn(move || {
                for _ in 0..100 {
                    cart.add_to_cart(lights);
                }
            });
        }
    });

    assert_eq!(session.cart().item_count(), 400);
    assert_eq!(session.pricing().subtotal, Money::from_cents(12999 * 400));
}
