use super::*;

fn item(cart_id: i64, total_price: f64) -> CartItem {
    CartItem {
        cart_id,
        product_id: 1,
        quantity: 1,
        total_price,
    }
}

// =============================================================
// Quantity validation
// =============================================================

#[test]
fn quantity_below_one_is_rejected_locally() {
    assert!(!valid_quantity(0));
    assert!(!valid_quantity(-3));
}

#[test]
fn positive_quantities_are_accepted() {
    assert!(valid_quantity(1));
    assert!(valid_quantity(99));
}

// =============================================================
// Totals
// =============================================================

#[test]
fn empty_cart_totals_zero() {
    assert_eq!(cart_total(&[]), 0.0);
}

#[test]
fn total_sums_item_prices() {
    let items = [item(1, 9.99), item(2, 20.01), item(3, 5.0)];
    assert!((cart_total(&items) - 35.0).abs() < f64::EPSILON);
}
