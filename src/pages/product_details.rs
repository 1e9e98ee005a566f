//! Single product view with add-to-cart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::session::Session;
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api::{self, ApiError};
use crate::net::types::CartAdd;

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let params = use_params_map();

    let error = RwSignal::new(String::new());
    let adding = RwSignal::new(false);

    let product = LocalResource::new(move || {
        let id = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
        async move {
            match id {
                Some(id) => api::fetch_product(id).await,
                None => Err(ApiError::with_status(400, "invalid product id")),
            }
        }
    });

    let add_to_cart = Callback::new(move |product_id: i64| {
        let navigate = navigate.clone();
        let Some(user) = session.user() else {
            navigate("/login", NavigateOptions::default());
            return;
        };
        if adding.get() {
            return;
        }
        adding.set(true);
        spawn_local(async move {
            let item = CartAdd {
                user_id: user.user_id,
                product_id,
                quantity: 1,
            };
            match api::add_to_cart(&item).await {
                Ok(_) => navigate("/cart", NavigateOptions::default()),
                Err(err) => error.set(err.to_string()),
            }
            adding.set(false);
        });
    });

    view! {
        <PageShell>
            <ErrorText message=error.into()/>
            <Suspense fallback=LoadingText>
                {move || {
                    product.get().map(|result| match result {
                        Ok(product) => {
                            let id = product.product_id;
                            view! {
                                <div class="card card--narrow">
                                    <h1 class="card__title">{product.name}</h1>
                                    <p class="card__price">{format!("${:.2}", product.price)}</p>
                                    <p class="muted">{product.description.unwrap_or_default()}</p>
                                    <p class="muted">
                                        {product
                                            .category
                                            .map(|c| format!("Category: {}", c.name))
                                            .unwrap_or_default()}
                                    </p>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || adding.get()
                                        on:click=move |_| add_to_cart.run(id)
                                    >
                                        {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                        Err(_) => view! { <p class="status status--error">"Failed to load product"</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </PageShell>
    }
}
