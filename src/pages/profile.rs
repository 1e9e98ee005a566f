//! Profile view/update/delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::{Access, use_gate};
use crate::auth::session::Session;
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api;
use crate::net::types::ProfileUpdate;
use crate::util::dialog::confirm;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let allowed = use_gate(Access::Authenticated);

    let full_name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        if !allowed.get() {
            return;
        }
        // The session already merged claims into the user; the fetch picks
        // up any profile fields edited since hydration.
        let claim_email = session.user().map(|u| u.email).unwrap_or_default();
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(profile) => {
                    full_name.set(profile.full_name.unwrap_or_default());
                    address.set(profile.address.unwrap_or_default());
                    phone_number.set(profile.phone_number.unwrap_or_default());
                    email.set(profile.email.unwrap_or(claim_email));
                }
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    });

    let update = move |_| {
        notice.set(String::new());
        error.set(String::new());
        let req = ProfileUpdate {
            full_name: full_name.get(),
            address: address.get(),
            phone_number: phone_number.get(),
        };
        spawn_local(async move {
            match api::update_profile(&req).await {
                Ok(profile) => {
                    full_name.set(profile.full_name.unwrap_or_default());
                    address.set(profile.address.unwrap_or_default());
                    phone_number.set(profile.phone_number.unwrap_or_default());
                    notice.set("Profile updated successfully!".to_owned());
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let delete = Callback::new(move |()| {
        if !confirm("Are you sure you want to delete your profile?") {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_profile().await {
                Ok(()) => {
                    session.logout();
                    navigate(
                        "/",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    });

    view! {
        <PageShell>
            <h2 class="page__title">"Your Profile"</h2>
            <ErrorText message=error.into()/>
            <Show when=move || !notice.get().is_empty()>
                <p class="status status--ok">{move || notice.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=LoadingText>
                <div class="card card--narrow">
                    <p class="muted">{move || format!("Email: {}", email.get())}</p>
                    <label class="form__label">
                        "Full Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Address"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Phone Number"
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| phone_number.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="row">
                        <button class="btn btn--primary" on:click=update>"Update Profile"</button>
                        <button class="btn btn--danger" on:click=move |_| delete.run(())>
                            "Delete Profile"
                        </button>
                    </div>
                </div>
            </Show>
        </PageShell>
    }
}
