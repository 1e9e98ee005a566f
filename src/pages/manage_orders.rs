//! Admin: order listing with status updates.
//!
//! The order service is the flaky one in this deployment, so the listing
//! fetch retries briefly on 503 before giving up; every other failure is
//! terminal on the first response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::guard::{Access, use_gate};
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api;
use crate::net::retry::{RetryPolicy, with_retry};
use crate::net::types::{Order, OrderStatus, Role};

#[component]
pub fn ManageOrdersPage() -> impl IntoView {
    let allowed = use_gate(Access::Role(Role::Admin));

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        if !allowed.get() {
            return;
        }
        spawn_local(async move {
            match with_retry(RetryPolicy::default(), api::fetch_all_orders).await {
                Ok(list) => orders.set(list),
                Err(err) if err.is_service_unavailable() => error.set(
                    "Service unavailable: the order service is currently down. Please try again later."
                        .to_owned(),
                ),
                Err(err) => {
                    log::error!("failed to load orders: {err}");
                    error.set(format!("Failed to load orders: {err}"));
                }
            }
            loading.set(false);
        });
    });

    let update_status = move |order_id: i64, status: OrderStatus| {
        notice.set(String::new());
        spawn_local(async move {
            match api::update_order_status(order_id, status).await {
                Ok(()) => {
                    orders.update(|list| {
                        if let Some(order) = list.iter_mut().find(|o| o.order_id == order_id) {
                            order.order_status = Some(status);
                        }
                    });
                    notice.set("Order status updated successfully".to_owned());
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <PageShell>
            <h1 class="page__title">"Manage Orders"</h1>
            <ErrorText message=error.into()/>
            <Show when=move || !notice.get().is_empty()>
                <p class="status status--ok">{move || notice.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=LoadingText>
                <Show
                    when=move || !orders.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted">"No orders found."</p> }
                >
                    <div class="grid">
                        <For
                            each=move || orders.get()
                            key=|order| order.order_id
                            children=move |order: Order| {
                                let order_id = order.order_id;
                                let current = order.order_status;
                                view! {
                                    <div class="card">
                                        <h2 class="card__title">{format!("Order ID: {order_id}")}</h2>
                                        <p class="muted">{format!("User ID: {}", order.user_id)}</p>
                                        <p class="muted">{order.order_date.clone().unwrap_or_default()}</p>
                                        <p class="card__price">{format!("${:.2}", order.total_amount)}</p>
                                        <p class="muted">
                                            {format!(
                                                "Status: {}",
                                                current.map(|s| s.as_str()).unwrap_or("UNKNOWN")
                                            )}
                                        </p>
                                        <select
                                            class="form__input"
                                            on:change=move |ev| {
                                                let picked = event_target_value(&ev);
                                                if let Some(status) = OrderStatus::ALL
                                                    .into_iter()
                                                    .find(|s| s.as_str() == picked)
                                                {
                                                    update_status(order_id, status);
                                                }
                                            }
                                        >
                                            {OrderStatus::ALL
                                                .map(|status| {
                                                    view! {
                                                        <option
                                                            value=status.as_str()
                                                            selected=current == Some(status)
                                                        >
                                                            {status.as_str()}
                                                        </option>
                                                    }
                                                })
                                                .to_vec()}
                                        </select>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </PageShell>
    }
}
