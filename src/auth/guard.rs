//! View gate: per-route access policy and redirect logic.
//!
//! One declarative table maps every route to its required access level;
//! pages consult it through [`use_gate`] instead of hand-rolling role
//! checks. While the session is still hydrating the gate waits — deciding
//! early would bounce a valid session to the login page. Role-gated pages
//! must hold their protected fetches until the gate allows.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::Session;
use crate::net::types::{Role, User};

/// Access required to render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

/// Route → required access. The single source of truth for authorization
/// on the client side; the backend enforces its own.
pub fn route_access(path: &str) -> Access {
    match path {
        "/" | "/login" | "/register" | "/product" => Access::Public,
        "/addProduct" | "/manageProducts" | "/manageOrders" => Access::Role(Role::Admin),
        p if p.starts_with("/product/") => Access::Public,
        _ => Access::Authenticated,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still hydrating; render a neutral waiting state.
    Wait,
    Allow,
    ToLogin,
    ToHome,
}

/// Pure gate decision for a route's access level against session state.
pub fn evaluate(access: Access, loading: bool, user: Option<&User>) -> GateDecision {
    if access == Access::Public {
        return GateDecision::Allow;
    }
    if loading {
        return GateDecision::Wait;
    }
    match (access, user) {
        (_, None) => GateDecision::ToLogin,
        (Access::Role(required), Some(user)) if user.role != required => GateDecision::ToHome,
        _ => GateDecision::Allow,
    }
}

/// Wire the gate to the session and the router. Re-evaluates on every
/// session change, so logging out on an open protected page redirects
/// away. Returns an `allowed` signal pages must check before issuing
/// protected fetches.
pub fn use_gate(access: Access) -> Signal<bool> {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| evaluate(access, session.loading(), session.user().as_ref()));

    Effect::new(move || match decision.get() {
        GateDecision::ToLogin => navigate("/login", NavigateOptions::default()),
        GateDecision::ToHome => navigate("/", NavigateOptions::default()),
        GateDecision::Wait | GateDecision::Allow => {}
    });

    Signal::derive(move || decision.get() == GateDecision::Allow)
}
