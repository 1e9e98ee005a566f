use super::*;

// =============================================================
// validate_product
// =============================================================

#[test]
fn accepts_a_complete_form() {
    let product = validate_product("Mug", "12.50", "Ceramic mug", "Kitchen").expect("valid");
    assert_eq!(product.name, "Mug");
    assert_eq!(product.price, 12.5);
    assert_eq!(product.category.name, "Kitchen");
}

#[test]
fn trims_whitespace_from_fields() {
    let product = validate_product("  Mug  ", " 3 ", " desc ", " Kitchen ").expect("valid");
    assert_eq!(product.name, "Mug");
    assert_eq!(product.description, "desc");
}

#[test]
fn rejects_missing_fields() {
    assert!(validate_product("", "1", "d", "c").is_err());
    assert!(validate_product("n", "", "d", "c").is_err());
    assert!(validate_product("n", "1", "   ", "c").is_err());
    assert!(validate_product("n", "1", "d", "").is_err());
}

#[test]
fn rejects_non_numeric_price() {
    assert_eq!(
        validate_product("n", "free", "d", "c").unwrap_err(),
        "Price must be a positive number."
    );
}

#[test]
fn rejects_non_positive_price() {
    assert!(validate_product("n", "0", "d", "c").is_err());
    assert!(validate_product("n", "-4.2", "d", "c").is_err());
}

#[test]
fn rejects_non_finite_price() {
    assert!(validate_product("n", "inf", "d", "c").is_err());
    assert!(validate_product("n", "NaN", "d", "c").is_err());
}
