//! Login form. Delegates token handling to the session store and
//! redirects home once the triggered login fully resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::Session;
use crate::components::layout::{ErrorText, PageShell};
use crate::net::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let attempted = RwSignal::new(false);

    // Redirect only after the login we triggered has hydrated a user.
    Effect::new(move || {
        if attempted.get() && !session.loading() && session.user().is_some() {
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        error.set(String::new());
        pending.set(true);
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            match api::login(email, password).await {
                Ok(token) => {
                    session.login(token);
                    attempted.set(true);
                }
                Err(err) => error.set(err.to_string()),
            }
            pending.set(false);
        });
    };

    view! {
        <PageShell>
            <div class="card card--narrow">
                <h2 class="page__title">"Welcome Back"</h2>
                <ErrorText message=error.into()/>
                <form class="form" on:submit=submit>
                    <label class="form__label">
                        "Email Address"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="you@example.com"
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
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Logging In..." } else { "Log In" }}
                    </button>
                </form>
                <p class="muted">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </PageShell>
    }
}
