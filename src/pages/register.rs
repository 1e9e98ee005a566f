//! Account registration form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::{ErrorText, PageShell};
use crate::net::api;
use crate::net::types::{RegisterRequest, Role};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let address = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        error.set(String::new());
        pending.set(true);
        let req = RegisterRequest {
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
            address: address.get(),
            phone_number: phone_number.get(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&req).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(err) => error.set(err.to_string()),
            }
            pending.set(false);
        });
    };

    view! {
        <PageShell>
            <div class="card card--narrow">
                <h2 class="page__title">"Create an Account"</h2>
                <ErrorText message=error.into()/>
                <form class="form" on:submit=submit>
                    <label class="form__label">
                        "Full Name"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter name"
                            required
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email Address"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="Enter email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Role"
                        <select
                            class="form__input"
                            on:change=move |ev| {
                                role.set(if event_target_value(&ev) == "ADMIN" {
                                    Role::Admin
                                } else {
                                    Role::User
                                });
                            }
                        >
                            <option value="USER" selected=move || role.get() == Role::User>"User"</option>
                            <option value="ADMIN" selected=move || role.get() == Role::Admin>"Admin"</option>
                        </select>
                    </label>
                    <label class="form__label">
                        "Address"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter address"
                            required
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Phone Number"
                        <input
                            class="form__input"
                            type="tel"
                            required
                            prop:value=move || phone_number.get()
                            on:input=move |ev| phone_number.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="muted">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </PageShell>
    }
}
