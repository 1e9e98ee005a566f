//! Cart page: quantity updates, item removal, clear, checkout.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::{Access, use_gate};
use crate::auth::session::Session;
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api;
use crate::net::types::CartItem;

/// Quantities below one are rejected locally; no request is issued.
pub(crate) fn valid_quantity(quantity: i64) -> bool {
    quantity >= 1
}

pub(crate) fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.total_price).sum()
}

#[component]
pub fn CartPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let allowed = use_gate(Access::Authenticated);

    let items = RwSignal::new(Vec::<CartItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if !allowed.get() {
            return;
        }
        let Some(user) = session.user() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_cart(user.user_id).await {
                Ok(list) => items.set(list),
                Err(err) => {
                    log::error!("failed to load cart: {err}");
                    error.set("Failed to load cart".to_owned());
                }
            }
            loading.set(false);
        });
    });

    let update_quantity = move |cart_id: i64, quantity: i64| {
        if !valid_quantity(quantity) {
            return;
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return;
        };
        spawn_local(async move {
            match api::update_cart_item(cart_id, quantity).await {
                Ok(updated) => items.update(|list| {
                    if let Some(item) = list.iter_mut().find(|item| item.cart_id == cart_id) {
                        *item = updated;
                    }
                }),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let remove_item = move |cart_id: i64| {
        spawn_local(async move {
            match api::remove_cart_item(cart_id).await {
                Ok(()) => items.update(|list| list.retain(|item| item.cart_id != cart_id)),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let clear_cart = move |_| {
        let Some(user) = session.user() else {
            return;
        };
        spawn_local(async move {
            match api::clear_cart(user.user_id).await {
                Ok(()) => items.set(Vec::new()),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let place_order = Callback::new(move |()| {
        let navigate = navigate.clone();
        let Some(user) = session.user() else {
            return;
        };
        spawn_local(async move {
            match api::place_order(user.user_id).await {
                Ok(order) => navigate(
                    &format!("/payment/{}", order.order_id),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(err) => error.set(err.to_string()),
            }
        });
    });

    view! {
        <PageShell>
            <h2 class="page__title">"Your Cart"</h2>
            <ErrorText message=error.into()/>
            <Show when=move || !loading.get() fallback=LoadingText>
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted">"Your cart is empty"</p> }
                >
                    <div class="stack">
                        <For
                            each=move || items.get()
                            key=|item| item.cart_id
                            children=move |item: CartItem| {
                                let cart_id = item.cart_id;
                                view! {
                                    <div class="card">
                                        <p class="muted">{format!("Product ID: {}", item.product_id)}</p>
                                        <p class="card__price">{format!("${:.2}", item.total_price)}</p>
                                        <label class="form__label">
                                            "Quantity"
                                            <input
                                                class="form__input form__input--small"
                                                type="number"
                                                min="1"
                                                prop:value=item.quantity.to_string()
                                                on:change=move |ev| {
                                                    if let Ok(quantity) = event_target_value(&ev).parse::<i64>() {
                                                        update_quantity(cart_id, quantity);
                                                    }
                                                }
                                            />
                                        </label>
                                        <button class="btn btn--danger" on:click=move |_| remove_item(cart_id)>
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            }
                        />
                        <p class="card__price">
                            {move || items.with(|list| format!("Total: ${:.2}", cart_total(list)))}
                        </p>
                        <div class="row">
                            <button class="btn" on:click=clear_cart>"Clear Cart"</button>
                            <button class="btn btn--primary" on:click=move |_| place_order.run(())>
                                "Checkout"
                            </button>
                        </div>
                    </div>
                </Show>
            </Show>
        </PageShell>
    }
}
