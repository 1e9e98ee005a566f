//! Payment page for a freshly placed order.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::guard::{Access, use_gate};
use crate::auth::session::Session;
use crate::components::layout::{ErrorText, PageShell};
use crate::net::api;
use crate::net::types::PaymentRequest;

const METHODS: [(&str, &str); 3] = [
    ("CREDIT_CARD", "Credit Card"),
    ("DEBIT_CARD", "Debit Card"),
    ("UPI", "UPI"),
];

#[component]
pub fn PaymentPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let allowed = use_gate(Access::Authenticated);
    let params = use_params_map();

    let order_id = Memo::new(move |_| {
        params
            .read()
            .get("orderId")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let method = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let pay = Callback::new(move |()| {
        let navigate = navigate.clone();
        if pending.get() {
            return;
        }
        if method.with(String::is_empty) {
            error.set("Please select a payment method".to_owned());
            return;
        }
        let (Some(user), Some(order_id)) = (session.user(), order_id.get()) else {
            return;
        };
        error.set(String::new());
        pending.set(true);
        spawn_local(async move {
            let req = PaymentRequest {
                payment_method: method.get_untracked(),
                payment_status: "COMPLETED".to_owned(),
            };
            match api::pay(user.user_id, order_id, &req).await {
                Ok(()) => navigate(
                    "/orders",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(err) => error.set(err.to_string()),
            }
            pending.set(false);
        });
    });

    view! {
        <PageShell>
            <Show
                when=move || allowed.get()
                fallback=|| view! { <p class="status status--loading">"Loading..."</p> }
            >
                {move || {
                    if let Some(id) = order_id.get() {
                        view! {
                            <div class="card card--narrow">
                                <h2 class="page__title">{format!("Payment for Order #{id}")}</h2>
                                <ErrorText message=error.into()/>
                                <label class="form__label">
                                    "Payment Method"
                                    <select
                                        class="form__input"
                                        on:change=move |ev| method.set(event_target_value(&ev))
                                    >
                                        <option value="">"Select a method"</option>
                                        {METHODS
                                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                                            .to_vec()}
                                    </select>
                                </label>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || pending.get()
                                    on:click=move |_| pay.run(())
                                >
                                    {move || if pending.get() { "Paying..." } else { "Pay Now" }}
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="card card--narrow">
                                <p class="status status--error">
                                    "Invalid order ID. Please try checking out again."
                                </p>
                                <a class="btn btn--primary" href="/cart">"Back to Cart"</a>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </PageShell>
    }
}
