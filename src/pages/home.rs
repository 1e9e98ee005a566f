//! Landing page with role-aware navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::Session;
use crate::components::layout::{LoadingText, PageShell};
use crate::net::types::Role;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate(
            "/",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <PageShell>
            <Show when=move || !session.loading() fallback=LoadingText>
                <h1 class="page__title">"Welcome to EShoppingZone"</h1>
                {move || match session.user() {
                    None => view! {
                        <nav class="home-nav">
                            <a class="btn btn--primary" href="/product">"Browse Products"</a>
                            <a class="btn" href="/login">"Login"</a>
                            <a class="btn" href="/register">"Register"</a>
                        </nav>
                    }
                    .into_any(),
                    Some(user) if user.role == Role::User => view! {
                        <nav class="home-nav">
                            <a class="btn btn--primary" href="/product">"Browse Products"</a>
                            <a class="btn" href="/cart">"My Cart"</a>
                            <a class="btn" href="/orders">"My Orders"</a>
                            <a class="btn" href="/profile">"Profile"</a>
                            <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </nav>
                    }
                    .into_any(),
                    Some(_) => view! {
                        <nav class="home-nav">
                            <a class="btn btn--primary" href="/addProduct">"Add Product"</a>
                            <a class="btn" href="/manageProducts">"Manage Products"</a>
                            <a class="btn" href="/manageOrders">"Manage Orders"</a>
                            <a class="btn" href="/profile">"Profile"</a>
                            <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </nav>
                    }
                    .into_any(),
                }}
            </Show>
        </PageShell>
    }
}
