//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::session::Session;
use crate::pages::{
    add_product::AddProductPage, cart::CartPage, home::HomePage, login::LoginPage,
    manage_orders::ManageOrdersPage, manage_products::ManageProductsPage,
    order_details::OrderDetailsPage, orders::OrderHistoryPage, payment::PaymentPage,
    product_details::ProductDetailsPage, products::ProductListPage, profile::ProfilePage,
    register::RegisterPage,
};

/// Root application component.
///
/// Owns the single [`Session`] instance, kicks off token resolution, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);
    session.init();

    view! {
        <Stylesheet id="app" href="/style.css"/>
        <Title text="EShoppingZone"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>

                <Route path=StaticSegment("product") view=ProductListPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailsPage/>
                <Route path=StaticSegment("addProduct") view=AddProductPage/>
                <Route path=StaticSegment("manageProducts") view=ManageProductsPage/>
                <Route path=StaticSegment("manageOrders") view=ManageOrdersPage/>

                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("orders") view=OrderHistoryPage/>
                <Route path=(StaticSegment("orders"), ParamSegment("id")) view=OrderDetailsPage/>
                <Route path=(StaticSegment("payment"), ParamSegment("orderId")) view=PaymentPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
