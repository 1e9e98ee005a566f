//! Single order view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::auth::guard::{Access, use_gate};
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api;
use crate::net::types::Order;

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let allowed = use_gate(Access::Authenticated);
    let params = use_params_map();

    let order = RwSignal::new(None::<Order>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if !allowed.get() {
            return;
        }
        let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()) else {
            error.set("Invalid order id".to_owned());
            loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(found) => order.set(Some(found)),
                Err(err) => {
                    log::error!("failed to load order {id}: {err}");
                    error.set("Failed to load order".to_owned());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <PageShell>
            <h2 class="page__title">"Order Details"</h2>
            <ErrorText message=error.into()/>
            <Show when=move || !loading.get() fallback=LoadingText>
                {move || {
                    order.get().map(|order| {
                        view! {
                            <div class="card card--narrow">
                                <h3 class="card__title">{format!("Order #{}", order.order_id)}</h3>
                                <p class="muted">{order.order_date.unwrap_or_default()}</p>
                                <p class="card__price">{format!("Total: ${:.2}", order.total_amount)}</p>
                                <p class="muted">
                                    {order
                                        .quantity
                                        .map(|q| format!("Quantity: {q}"))
                                        .unwrap_or_default()}
                                </p>
                                <p class="muted">
                                    {format!(
                                        "Status: {}",
                                        order.order_status.map(|s| s.as_str()).unwrap_or("UNKNOWN")
                                    )}
                                </p>
                                <a class="btn" href="/orders">"Back to Orders"</a>
                            </div>
                        }
                    })
                }}
            </Show>
        </PageShell>
    }
}
