//! Order history for the signed-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::guard::{Access, use_gate};
use crate::auth::session::Session;
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api;
use crate::net::types::Order;

#[component]
pub fn OrderHistoryPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let allowed = use_gate(Access::Authenticated);

    let orders = RwSignal::new(Vec::<Order>::new());
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
            match api::fetch_user_orders(user.user_id).await {
                Ok(list) => orders.set(list),
                Err(err) => {
                    log::error!("failed to load orders: {err}");
                    error.set("Failed to load orders".to_owned());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <PageShell>
            <h2 class="page__title">"My Orders"</h2>
            <ErrorText message=error.into()/>
            <Show when=move || !loading.get() fallback=LoadingText>
                <Show
                    when=move || !orders.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted">"No orders yet."</p> }
                >
                    <div class="grid">
                        <For
                            each=move || orders.get()
                            key=|order| order.order_id
                            children=|order: Order| {
                                let href = format!("/orders/{}", order.order_id);
                                view! {
                                    <div class="card">
                                        <h3 class="card__title">{format!("Order #{}", order.order_id)}</h3>
                                        <p class="muted">{order.order_date.unwrap_or_default()}</p>
                                        <p class="card__price">{format!("${:.2}", order.total_amount)}</p>
                                        <p class="muted">
                                            {order.order_status.map(|s| s.as_str()).unwrap_or("UNKNOWN")}
                                        </p>
                                        <a class="btn btn--primary" href=href>"View Details"</a>
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
