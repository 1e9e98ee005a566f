use super::*;

fn user(role: Role) -> User {
    User {
        user_id: 1,
        full_name: "Gate Tester".to_owned(),
        email: "gate@shop.example".to_owned(),
        role,
        address: None,
        phone_number: None,
    }
}

// =============================================================
// route_access policy table
// =============================================================

#[test]
fn storefront_routes_are_public() {
    assert_eq!(route_access("/"), Access::Public);
    assert_eq!(route_access("/login"), Access::Public);
    assert_eq!(route_access("/register"), Access::Public);
    assert_eq!(route_access("/product"), Access::Public);
    assert_eq!(route_access("/product/42"), Access::Public);
}

#[test]
fn admin_routes_require_admin_role() {
    assert_eq!(route_access("/addProduct"), Access::Role(Role::Admin));
    assert_eq!(route_access("/manageProducts"), Access::Role(Role::Admin));
    assert_eq!(route_access("/manageOrders"), Access::Role(Role::Admin));
}

#[test]
fn account_routes_require_authentication() {
    for path in ["/cart", "/orders", "/orders/9", "/payment/3", "/profile"] {
        assert_eq!(route_access(path), Access::Authenticated, "{path}");
    }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn public_routes_never_redirect() {
    assert_eq!(evaluate(Access::Public, true, None), GateDecision::Allow);
    assert_eq!(evaluate(Access::Public, false, None), GateDecision::Allow);
}

#[test]
fn protected_routes_wait_while_hydrating() {
    assert_eq!(evaluate(Access::Authenticated, true, None), GateDecision::Wait);
    assert_eq!(evaluate(Access::Role(Role::Admin), true, None), GateDecision::Wait);
}

#[test]
fn anonymous_visitor_goes_to_login() {
    assert_eq!(evaluate(Access::Authenticated, false, None), GateDecision::ToLogin);
    assert_eq!(evaluate(Access::Role(Role::Admin), false, None), GateDecision::ToLogin);
}

#[test]
fn plain_user_on_admin_route_goes_home() {
    let u = user(Role::User);
    assert_eq!(
        evaluate(Access::Role(Role::Admin), false, Some(&u)),
        GateDecision::ToHome
    );
}

#[test]
fn admin_passes_admin_gate() {
    let u = user(Role::Admin);
    assert_eq!(evaluate(Access::Role(Role::Admin), false, Some(&u)), GateDecision::Allow);
}

#[test]
fn any_user_passes_authenticated_gate() {
    assert_eq!(
        evaluate(Access::Authenticated, false, Some(&user(Role::User))),
        GateDecision::Allow
    );
    assert_eq!(
        evaluate(Access::Authenticated, false, Some(&user(Role::Admin))),
        GateDecision::Allow
    );
}
